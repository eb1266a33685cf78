#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CsgOp {
    Union,
    Intersection,
    Difference,
}

// Decides whether a given intersection should survive the boolean combination, given whether
// it's a hit on the left child (hit_left) and whether the ray is currently inside either child.
pub fn intersection_allowed(op: CsgOp, hit_left: bool, inside_left: bool, inside_right: bool) -> bool {
    match op {
        CsgOp::Union => (hit_left && !inside_right) || (!hit_left && !inside_left),
        CsgOp::Intersection => (hit_left && inside_right) || (!hit_left && inside_left),
        CsgOp::Difference => (hit_left && !inside_right) || (!hit_left && inside_left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csg_operation_rule_evaluation() {
        let test_data = vec![
            (CsgOp::Union, true, true, true, false),
            (CsgOp::Union, true, true, false, true),
            (CsgOp::Union, true, false, true, false),
            (CsgOp::Union, true, false, false, true),
            (CsgOp::Union, false, true, true, false),
            (CsgOp::Union, false, true, false, false),
            (CsgOp::Union, false, false, true, true),
            (CsgOp::Union, false, false, false, true),
            (CsgOp::Intersection, true, true, true, true),
            (CsgOp::Intersection, true, true, false, false),
            (CsgOp::Intersection, true, false, true, true),
            (CsgOp::Intersection, true, false, false, false),
            (CsgOp::Intersection, false, true, true, true),
            (CsgOp::Intersection, false, true, false, true),
            (CsgOp::Intersection, false, false, true, false),
            (CsgOp::Intersection, false, false, false, false),
            (CsgOp::Difference, true, true, true, false),
            (CsgOp::Difference, true, true, false, true),
            (CsgOp::Difference, true, false, true, false),
            (CsgOp::Difference, true, false, false, true),
            (CsgOp::Difference, false, true, true, true),
            (CsgOp::Difference, false, true, false, true),
            (CsgOp::Difference, false, false, true, false),
            (CsgOp::Difference, false, false, false, false),
        ];
        for (op, hit_left, inside_left, inside_right, expected) in test_data {
            assert_eq!(
                intersection_allowed(op, hit_left, inside_left, inside_right),
                expected,
                "op {:?}, hit_left {}, inside_left {}, inside_right {}",
                op,
                hit_left,
                inside_left,
                inside_right
            );
        }
    }
}
