use crate::shape::ShapeId;
use std::cmp::Ordering::Equal;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub distance: f32,
    pub object: ShapeId,
    pub u: f32,
    pub v: f32,
}

impl Intersection {
    pub fn new(distance: f32, object: ShapeId) -> Intersection {
        Intersection {
            distance,
            object,
            u: 0.,
            v: 0.,
        }
    }
    pub fn new_with_uv(distance: f32, object: ShapeId, u: f32, v: f32) -> Intersection {
        Intersection {
            distance,
            object,
            u,
            v,
        }
    }
    // returns a reference to the intersection with the lowest non-negative distance (or None if all are negative)
    pub fn hit(intersections: &[Intersection]) -> Option<&Intersection> {
        intersections
            .iter()
            .filter(|i| i.distance >= 0.0)
            .min_by(|i1, i2| i1.distance.partial_cmp(&i2.distance).unwrap_or(Equal))
    }
}
