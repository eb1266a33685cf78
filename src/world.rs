use crate::color::Color;
use crate::constants::{black, REFRACTIVE_VACUUM};
use crate::intersection::Intersection;
use crate::light::{phong_lighting, PointLight};
use crate::material::Material;
use crate::ray::Ray;
use crate::shape::csg::{intersection_allowed, CsgOp};
use crate::shape::{Geometry, Shape, ShapeId};
use crate::transformations::scaling;
use crate::tuple::Tuple;
use linked_hash_set::LinkedHashSet;
use log::trace;
use std::cmp::Ordering::Equal;

const SELF_INTERSECTION_AVOIDANCE_EPSILON: f32 = f32::EPSILON * 10000.0;

// Shapes live in a flat arena owned by World; Group/Csg shapes never hold geometry of their own,
// only child ids, so intersecting them means recursing back into World rather than Shape.
pub struct World {
    arena: Vec<Shape>,
    pub roots: Vec<ShapeId>,
    pub lights: Vec<PointLight>,
}

impl World {
    pub fn new() -> World {
        World {
            arena: vec![],
            roots: vec![],
            lights: vec![],
        }
    }

    pub fn get(&self, id: ShapeId) -> &Shape {
        &self.arena[id.0]
    }

    pub fn get_mut(&mut self, id: ShapeId) -> &mut Shape {
        &mut self.arena[id.0]
    }

    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = self.insert_shape(shape);
        self.roots.push(id);
        id
    }

    // inserts a shape into the arena without registering it as a root, so it can be attached
    // under a group or CSG shape instead
    pub fn insert_shape(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.arena.len());
        self.arena.push(shape);
        id
    }

    pub fn promote_to_root(&mut self, id: ShapeId) {
        self.roots.push(id);
    }

    pub fn add_child(&mut self, parent: ShapeId, child: ShapeId) {
        self.arena[child.0].parent = Some(parent);
        match &mut self.arena[parent.0].geometry {
            Geometry::Group { children } => children.push(child),
            _ => panic!("add_child called on a non-group shape"),
        }
    }

    pub fn make_csg(&mut self, op: CsgOp, left: ShapeId, right: ShapeId) -> ShapeId {
        let id = self.insert_shape(Shape::new(Geometry::Csg { op, left, right }));
        self.arena[left.0].parent = Some(id);
        self.arena[right.0].parent = Some(id);
        id
    }

    fn is_descendant_of(&self, id: ShapeId, ancestor: ShapeId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.arena[c.0].parent;
        }
        false
    }

    // walks up the parent chain applying each ancestor's inverse transform, bringing a
    // world-space point down into a shape's local space
    pub fn world_to_object(&self, id: ShapeId, point: Tuple) -> Tuple {
        let shape = &self.arena[id.0];
        let point = match shape.parent {
            Some(p) => self.world_to_object(p, point),
            None => point,
        };
        &shape.inv_transform * &point
    }

    // inverse walk: carries a local normal back out to world space one ancestor at a time
    pub fn normal_to_world(&self, id: ShapeId, local_normal: Tuple) -> Tuple {
        let shape = &self.arena[id.0];
        let mut normal = &shape.inv_transform.transpose() * &local_normal;
        normal.w = 0.0;
        normal = normal.norm();
        match shape.parent {
            Some(p) => self.normal_to_world(p, normal),
            None => normal,
        }
    }

    pub fn normal_at(&self, id: ShapeId, world_point: Tuple, hit: &Intersection) -> Tuple {
        let local_point = self.world_to_object(id, world_point);
        let local_normal = self.arena[id.0].local_normal_at(local_point, hit);
        self.normal_to_world(id, local_normal)
    }

    fn intersect_shape(&self, id: ShapeId, world_ray: Ray) -> Vec<Intersection> {
        let shape = &self.arena[id.0];
        let local_ray = world_ray.transform(&shape.inv_transform);
        match &shape.geometry {
            Geometry::Group { children } => {
                let mut xs: Vec<Intersection> = children
                    .iter()
                    .flat_map(|&c| self.intersect_shape(c, local_ray))
                    .collect();
                xs.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Equal));
                xs
            }
            Geometry::Csg { op, left, right } => {
                let mut xs: Vec<Intersection> = self.intersect_shape(*left, local_ray);
                xs.extend(self.intersect_shape(*right, local_ray));
                xs.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Equal));
                self.filter_csg_intersections(*op, *left, xs)
            }
            _ => shape.local_intersect(id, local_ray),
        }
    }

    fn filter_csg_intersections(&self, op: CsgOp, left: ShapeId, xs: Vec<Intersection>) -> Vec<Intersection> {
        let mut inside_left = false;
        let mut inside_right = false;
        let mut result = vec![];
        for i in xs {
            let hit_left = self.is_descendant_of(i.object, left);
            if intersection_allowed(op, hit_left, inside_left, inside_right) {
                result.push(i);
            }
            if hit_left {
                inside_left = !inside_left;
            } else {
                inside_right = !inside_right;
            }
        }
        result
    }

    pub fn intersect(&self, ray: Ray) -> Vec<Intersection> {
        let mut xs: Vec<Intersection> = self
            .roots
            .iter()
            .flat_map(|&id| self.intersect_shape(id, ray))
            .collect();
        xs.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Equal));
        xs
    }

    // only shapes with casts_shadow == true occlude a light
    pub fn is_shadowed(&self, point: Tuple, light: &PointLight) -> bool {
        let vector_to_light = light.position - point;
        let distance = vector_to_light.magnitude();
        let direction = vector_to_light.norm();
        let ray = Ray::new(point, direction);

        self.intersect(ray)
            .iter()
            .filter(|i| self.arena[i.object.0].casts_shadow)
            .any(|i| i.distance >= 0.0 && i.distance < distance)
    }

    pub fn shade_hit(&self, comps: &PrecomputedValues, remaining_depth: i16) -> Color {
        let shape = &self.arena[comps.object.0];
        let surface = self
            .lights
            .iter()
            .map(|light| {
                let in_shadow = self.is_shadowed(comps.over_point, light);
                phong_lighting(
                    &shape.material,
                    &shape.inv_transform,
                    light,
                    comps.over_point,
                    comps.eye_vector,
                    comps.surface_normal,
                    in_shadow,
                )
            })
            .fold(black(), |acc, c| acc + c);

        let reflected = self.reflected_color(comps, remaining_depth);
        let refracted = self.refracted_color(comps, remaining_depth);

        let material = &shape.material;
        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = schlick_reflectance(comps);
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    pub fn color_at(&self, ray: Ray, remaining_depth: i16) -> Color {
        let xs = self.intersect(ray);
        match Intersection::hit(&xs) {
            None => black(),
            Some(hit) => {
                let comps = self.precompute_values(ray, *hit, &xs);
                self.shade_hit(&comps, remaining_depth)
            }
        }
    }

    pub fn reflected_color(&self, comps: &PrecomputedValues, remaining_depth: i16) -> Color {
        if remaining_depth <= 0 {
            return black();
        }
        let reflective = self.arena[comps.object.0].material.reflective;
        if reflective == 0.0 {
            return black();
        }
        let reflect_ray = Ray::new(comps.over_point, comps.reflection_vector);
        self.color_at(reflect_ray, remaining_depth - 1) * reflective
    }

    pub fn refracted_color(&self, comps: &PrecomputedValues, remaining_depth: i16) -> Color {
        if remaining_depth <= 0 {
            return black();
        }
        let material = &self.arena[comps.object.0].material;
        if material.transparency == 0.0 {
            return black();
        }

        let angles = comps.refracted_angle_values();
        if angles.is_total_internal_reflection {
            return black();
        }

        let cos_t = (1.0 - angles.sin2).sqrt();
        let direction =
            comps.surface_normal * (angles.n_ratio * angles.cos_incoming - cos_t) - comps.eye_vector * angles.n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);

        self.color_at(refract_ray, remaining_depth - 1) * material.transparency
    }

    pub fn precompute_values(&self, r: Ray, hit: Intersection, all_intersections: &[Intersection]) -> PrecomputedValues {
        let point = r.position(hit.distance);
        let eye_vector = -r.direction;
        let mut surface_normal = self.normal_at(hit.object, point, &hit);
        let mut inside = false;
        if surface_normal.dot(eye_vector) < 0.0 {
            inside = true;
            surface_normal = -surface_normal;
        }
        let reflection_vector = Ray::reflect(r.direction, surface_normal);
        let over_point = point + surface_normal * SELF_INTERSECTION_AVOIDANCE_EPSILON;
        let under_point = point - surface_normal * SELF_INTERSECTION_AVOIDANCE_EPSILON;

        let (n1, n2) = self.compute_refractive_indices(hit, all_intersections);

        trace!("precomputed hit at distance {}", hit.distance);

        PrecomputedValues {
            distance: hit.distance,
            object: hit.object,
            point,
            eye_vector,
            reflection_vector,
            surface_normal,
            inside,
            over_point,
            under_point,
            n1,
            n2,
        }
    }

    // walks the sorted intersection list up to the hit, tracking which refractive shapes the
    // ray is currently inside of
    fn compute_refractive_indices(&self, hit: Intersection, xs: &[Intersection]) -> (f32, f32) {
        let mut containers: LinkedHashSet<ShapeId> = LinkedHashSet::new();
        let mut n1 = REFRACTIVE_VACUUM;
        let mut n2 = REFRACTIVE_VACUUM;

        for i in xs {
            let is_hit = i.distance == hit.distance && i.object == hit.object;
            if is_hit {
                n1 = containers
                    .back()
                    .map(|id| self.arena[id.0].material.refractive_index)
                    .unwrap_or(REFRACTIVE_VACUUM);
            }

            if containers.contains(&i.object) {
                containers.remove(&i.object);
            } else {
                containers.insert(i.object);
            }

            if is_hit {
                n2 = containers
                    .back()
                    .map(|id| self.arena[id.0].material.refractive_index)
                    .unwrap_or(REFRACTIVE_VACUUM);
                break;
            }
        }
        (n1, n2)
    }
}

impl Default for World {
    fn default() -> Self {
        let mut world = World::new();

        let mut outer = Shape::new(Geometry::Sphere);
        outer.material = Material::builder()
            .color(color!(0.8, 1.0, 0.6))
            .diffuse(0.7)
            .specular(0.2)
            .build();
        world.add_shape(outer);

        let mut inner = Shape::new(Geometry::Sphere);
        inner.set_transform(scaling(0.5, 0.5, 0.5));
        world.add_shape(inner);

        world
            .lights
            .push(PointLight::new(point!(-10, 10, -10), crate::constants::white()));

        world
    }
}

pub struct PrecomputedValues {
    pub distance: f32,
    pub object: ShapeId,
    pub point: Tuple,
    pub eye_vector: Tuple,
    pub reflection_vector: Tuple,
    pub surface_normal: Tuple,
    pub inside: bool,
    pub over_point: Tuple,
    pub under_point: Tuple,
    pub n1: f32,
    pub n2: f32,
}

pub struct RefractedAngleValues {
    pub n_ratio: f32,
    pub cos_incoming: f32,
    pub sin2: f32,
    pub is_total_internal_reflection: bool,
}

impl PrecomputedValues {
    pub fn refracted_angle_values(&self) -> RefractedAngleValues {
        let n_ratio = self.n1 / self.n2;
        let cos_incoming = self.eye_vector.dot(self.surface_normal);
        let sin2 = n_ratio.powi(2) * (1.0 - cos_incoming.powi(2));
        RefractedAngleValues {
            n_ratio,
            cos_incoming,
            sin2,
            is_total_internal_reflection: sin2 > 1.0,
        }
    }
}

// Schlick approximation to the Fresnel equations: how much light reflects vs. refracts.
pub fn schlick_reflectance(comps: &PrecomputedValues) -> f32 {
    let angles = comps.refracted_angle_values();
    if angles.is_total_internal_reflection {
        return 1.0;
    }

    let cos = if comps.n1 > comps.n2 {
        (1.0 - angles.sin2).sqrt()
    } else {
        angles.cos_incoming
    };

    let r0 = ((comps.n1 - comps.n2) / (comps.n1 + comps.n2)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos).powi(5)
}
