// Shapes live in a flat arena (see World) and refer to each other by index instead of by
// shared-ownership pointer. Geometry is a closed set of kinds dispatched through one match per
// operation, rather than a `dyn Shape` trait object per kind.
pub mod csg;
pub mod primitives;

use crate::bounding_box::BoundingBox;
use crate::intersection::Intersection;
use crate::material::Material;
use crate::matrix::{identity_4x4, Matrix};
use crate::ray::Ray;
use crate::tuple::Tuple;
use csg::CsgOp;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

#[derive(Clone, Debug)]
pub struct Shape {
    pub transform: Matrix,
    pub inv_transform: Matrix,
    pub material: Material,
    pub casts_shadow: bool,
    pub parent: Option<ShapeId>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug)]
pub enum Geometry {
    Sphere,
    Plane,
    Cube,
    Cylinder {
        minimum: f32,
        maximum: f32,
        closed: bool,
    },
    Cone {
        minimum: f32,
        maximum: f32,
        closed: bool,
    },
    Triangle {
        p1: Tuple,
        p2: Tuple,
        p3: Tuple,
        e1: Tuple,
        e2: Tuple,
        normal: Tuple,
    },
    SmoothTriangle {
        p1: Tuple,
        p2: Tuple,
        p3: Tuple,
        e1: Tuple,
        e2: Tuple,
        n1: Tuple,
        n2: Tuple,
        n3: Tuple,
    },
    Group {
        children: Vec<ShapeId>,
    },
    Csg {
        op: CsgOp,
        left: ShapeId,
        right: ShapeId,
    },
    #[cfg(test)]
    Test,
}

impl Geometry {
    pub fn triangle(p1: Tuple, p2: Tuple, p3: Tuple) -> Geometry {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let normal = e2.cross(e1).norm();
        Geometry::Triangle {
            p1,
            p2,
            p3,
            e1,
            e2,
            normal,
        }
    }

    pub fn smooth_triangle(p1: Tuple, p2: Tuple, p3: Tuple, n1: Tuple, n2: Tuple, n3: Tuple) -> Geometry {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        Geometry::SmoothTriangle {
            p1,
            p2,
            p3,
            e1,
            e2,
            n1,
            n2,
            n3,
        }
    }
}

impl Shape {
    pub fn new(geometry: Geometry) -> Shape {
        Shape {
            transform: identity_4x4(),
            inv_transform: identity_4x4(),
            material: Material::default(),
            casts_shadow: true,
            parent: None,
            geometry,
        }
    }

    pub fn set_transform(&mut self, transform: Matrix) {
        self.inv_transform = transform.inverse();
        self.transform = transform;
    }

    pub fn is_group_or_csg(&self) -> bool {
        matches!(self.geometry, Geometry::Group { .. } | Geometry::Csg { .. })
    }

    // Intersections against this shape's own local-space geometry. Group and Csg have no local
    // geometry of their own; World::intersect_shape recurses into their children instead of
    // calling this.
    pub fn local_intersect(&self, id: ShapeId, local_ray: Ray) -> Vec<Intersection> {
        match &self.geometry {
            Geometry::Sphere => primitives::sphere_intersect(local_ray)
                .into_iter()
                .map(|t| Intersection::new(t, id))
                .collect(),
            Geometry::Plane => primitives::plane_intersect(local_ray)
                .into_iter()
                .map(|t| Intersection::new(t, id))
                .collect(),
            Geometry::Cube => primitives::cube_intersect(local_ray)
                .into_iter()
                .map(|t| Intersection::new(t, id))
                .collect(),
            Geometry::Cylinder {
                minimum,
                maximum,
                closed,
            } => primitives::cylinder_intersect(local_ray, *minimum, *maximum, *closed)
                .into_iter()
                .map(|t| Intersection::new(t, id))
                .collect(),
            Geometry::Cone {
                minimum,
                maximum,
                closed,
            } => primitives::cone_intersect(local_ray, *minimum, *maximum, *closed)
                .into_iter()
                .map(|t| Intersection::new(t, id))
                .collect(),
            Geometry::Triangle { p1, e1, e2, .. } => {
                primitives::triangle_intersect(local_ray, *p1, *e1, *e2)
                    .map(|(t, u, v)| vec![Intersection::new_with_uv(t, id, u, v)])
                    .unwrap_or_default()
            }
            Geometry::SmoothTriangle { p1, e1, e2, .. } => {
                primitives::triangle_intersect(local_ray, *p1, *e1, *e2)
                    .map(|(t, u, v)| vec![Intersection::new_with_uv(t, id, u, v)])
                    .unwrap_or_default()
            }
            Geometry::Group { .. } | Geometry::Csg { .. } => {
                unreachable!("groups and CSG shapes are intersected by recursing through World")
            }
            #[cfg(test)]
            Geometry::Test => vec![],
        }
    }

    pub fn local_normal_at(&self, local_point: Tuple, hit: &Intersection) -> Tuple {
        match &self.geometry {
            Geometry::Sphere => primitives::sphere_normal(local_point),
            Geometry::Plane => primitives::plane_normal(local_point),
            Geometry::Cube => primitives::cube_normal(local_point),
            Geometry::Cylinder { minimum, maximum, .. } => {
                primitives::cylinder_normal(local_point, *minimum, *maximum)
            }
            Geometry::Cone { minimum, maximum, .. } => {
                primitives::cone_normal(local_point, *minimum, *maximum)
            }
            Geometry::Triangle { normal, .. } => *normal,
            Geometry::SmoothTriangle { n1, n2, n3, .. } => {
                primitives::smooth_triangle_normal(*n1, *n2, *n3, hit.u, hit.v)
            }
            Geometry::Group { .. } | Geometry::Csg { .. } => {
                unreachable!("normals are undefined on groups and CSG shapes")
            }
            #[cfg(test)]
            Geometry::Test => vector!(local_point.x * 2.0, local_point.y * 3.0, local_point.z * 4.0),
        }
    }

    // Local-space bounding box; used by callers that want a cheap reject before testing a
    // primitive's exact intersection math. Not used to build an acceleration structure.
    pub fn local_bounds(&self) -> BoundingBox {
        match &self.geometry {
            Geometry::Sphere => BoundingBox::with_bounds(point!(-1, -1, -1), point!(1, 1, 1)),
            Geometry::Plane => BoundingBox::with_bounds(
                point!(f32::NEG_INFINITY, 0, f32::NEG_INFINITY),
                point!(f32::INFINITY, 0, f32::INFINITY),
            ),
            Geometry::Cube => BoundingBox::with_bounds(point!(-1, -1, -1), point!(1, 1, 1)),
            Geometry::Cylinder { minimum, maximum, .. } => {
                BoundingBox::with_bounds(point!(-1, *minimum, -1), point!(1, *maximum, 1))
            }
            Geometry::Cone { minimum, maximum, .. } => {
                let limit = minimum.abs().max(maximum.abs());
                BoundingBox::with_bounds(point!(-limit, *minimum, -limit), point!(limit, *maximum, limit))
            }
            Geometry::Triangle { p1, p2, p3, .. } | Geometry::SmoothTriangle { p1, p2, p3, .. } => {
                let mut b = BoundingBox::empty();
                b.add_point(*p1);
                b.add_point(*p2);
                b.add_point(*p3);
                b
            }
            Geometry::Group { .. } | Geometry::Csg { .. } => BoundingBox::empty(),
            #[cfg(test)]
            Geometry::Test => BoundingBox::with_bounds(point!(-1, -1, -1), point!(1, 1, 1)),
        }
    }
}
