use ray_tracer_core::camera::Camera;
use ray_tracer_core::constants::{white, REFRACTIVE_GLASS};
use ray_tracer_core::light::PointLight;
use ray_tracer_core::material::Material;
use ray_tracer_core::pattern::{Pattern, PatternKind};
use ray_tracer_core::shape::csg::CsgOp;
use ray_tracer_core::shape::{Geometry, Shape, ShapeId};
use ray_tracer_core::transformations::scaling;
use ray_tracer_core::transformations::shearing;
use ray_tracer_core::transformations::translation;
use ray_tracer_core::transformations::view_transform;
use ray_tracer_core::transformations::{rotation_x, rotation_z};
use ray_tracer_core::world::World;
use ray_tracer_core::{color, point, vector};
use std::f32::consts::PI;

// To render larger, be sure to use an optimized (release) build and give it several seconds to finish
const CANVAS_WIDTH: u32 = 1000;
const CANVAS_HEIGHT: u32 = 500;
// const CANVAS_WIDTH: u32 = 200;
// const CANVAS_HEIGHT: u32 = 100;

fn metal() -> Material {
    let mut m = Material::default();
    m.specular = 0.9;
    m.shininess = 200.0;
    m.reflective = 0.7;
    m
}

fn main() {
    let mut world = World::new();

    let mut stripes = Pattern::new(PatternKind::Striped(color!(1., 0.2, 0.4), color!(0.1, 0.1, 0.1)));
    stripes.inv_transform = (&scaling(0.3, 0.3, 0.3) * &rotation_z(3. * PI / 4.)).inverse();

    let mut floor_noise = Pattern::new(PatternKind::GradientPerlinNoise(color!(0.1, 1., 0.5), color!(0.9, 0.2, 0.6), 1.0));
    floor_noise.inv_transform = (&scaling(0.05, 1., 0.05) * &translation(-5., 1., 0.5)).inverse();
    let mut room_material = Material::default();
    room_material.color = color!(1, 0.9, 0.9);
    room_material.pattern = Some(floor_noise);
    room_material.specular = 0.;
    room_material.reflective = 0.5;

    // The floor is a plane
    let mut floor = Shape::new(Geometry::Plane);
    floor.set_transform(scaling(10., 0.1, 10.));
    floor.material = room_material;
    world.add_shape(floor);

    // The smaller green sphere on the right is scaled in half
    let mut right_sphere_material = Material::default();
    right_sphere_material.color = color!(0.5, 1, 0.1);
    right_sphere_material.pattern = Some(stripes.clone());
    right_sphere_material.diffuse = 0.7;
    right_sphere_material.specular = 0.3;
    let mut metal_rings = metal();
    let mut ring_pattern = Pattern::new(PatternKind::Ring(color!(1, 1, 0) / 2., white() / 2.));
    ring_pattern.inv_transform = scaling(0.1, 0.1, 0.1).inverse();
    metal_rings.pattern = Some(ring_pattern);
    let mut right = Shape::new(Geometry::Sphere);
    right.set_transform(&shearing(0., 1., 0., 0., 0., 1.) * &(&translation(1.5, 0.5, -0.5) * &scaling(0.5, 0.5, 0.5)));
    right.material = metal_rings;
    world.add_shape(right);

    // The smallest sphere is scaled by a third before being translated
    let mut left_sphere_material = Material::default();
    let mut stripes2 = stripes;
    // much darker since it will also be reflective
    if let PatternKind::Striped(a, b) = &mut stripes2.kind {
        *a = *a / 4.;
        *b = *b / 4.;
    }
    left_sphere_material.pattern = Some(stripes2);
    left_sphere_material.diffuse = 0.7;
    left_sphere_material.specular = 1.;
    left_sphere_material.reflective = 0.8;
    left_sphere_material.shininess = 300.;
    let mut left = Shape::new(Geometry::Sphere);
    left.set_transform(&translation(-1.5, 0.33, -0.75) * &scaling(0.33, 0.33, 0.33));
    left.material = left_sphere_material;
    world.add_shape(left);

    let cylinder = get_cylinder(&mut world);
    world.promote_to_root(cylinder);

    let mut cone = Shape::new(Geometry::Cone {
        minimum: 0.,
        maximum: 1.5,
        closed: false,
    });
    let mut cone_material = Material::default();
    cone_material.reflective = 0.5;
    cone_material.color = color!(0.6, 0.3, 0.1);
    cone_material.shininess = 10.;
    cone_material.specular = 0.8;
    cone.material = cone_material;
    cone.set_transform(&translation(-3.5, 0., 4.) * &scaling(0.33, 1.8, 0.33));
    world.add_shape(cone);

    let csg = get_csg(&mut world);
    world.promote_to_root(csg);

    // The light source is white, shining from above and to the left
    world.lights.push(PointLight::new(point!(-10, 10, -10), white()));

    let camera = Camera::new(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        PI / 3.,
        view_transform(point!(0, 1.5, -5), point!(0, 1, 0), vector!(0, 1, 0)),
    );

    let canvas = camera.render(world, ray_tracer_core::constants::DEFAULT_RAY_RECURSION_DEPTH);
    println!("{}", canvas.to_ppm());
}

fn get_clear_sphere(world: &mut World) -> ShapeId {
    let mut middle_sphere_material = Material::default();
    middle_sphere_material.color = color!(0, 0, 0);
    middle_sphere_material.specular = 1.;
    middle_sphere_material.shininess = 300.;
    middle_sphere_material.transparency = 1.;
    middle_sphere_material.refractive_index = REFRACTIVE_GLASS;
    middle_sphere_material.reflective = 1.;

    let mut sphere = Shape::new(Geometry::Sphere);
    sphere.set_transform(translation(-0.5, 1., 0.5));
    sphere.material = middle_sphere_material;
    sphere.casts_shadow = false;
    world.insert_shape(sphere)
}

fn get_cylinder(world: &mut World) -> ShapeId {
    let mut c = Shape::new(Geometry::Cylinder {
        minimum: 0.,
        maximum: 1.5,
        closed: false,
    });
    let mut m = Material::default();
    m.reflective = 1.;
    m.color = color!(0.5, 0.5, 0.5);
    m.shininess = 300.;
    m.specular = 0.8;
    c.material = m;
    c.set_transform(&translation(3.7, 0., 4.) * &scaling(0.33, 1.8, 0.33));
    world.insert_shape(c)
}

fn get_csg(world: &mut World) -> ShapeId {
    let s1 = get_clear_sphere(world);
    world.get_mut(s1).set_transform(translation(0., 1., 0.));

    let mut s2 = Shape::new(Geometry::Cylinder {
        minimum: 0.,
        maximum: 1.5,
        closed: false,
    });
    s2.set_transform(scaling(0.2, 2.0, 0.2));
    s2.casts_shadow = false;
    let s2 = world.insert_shape(s2);

    let csg = world.make_csg(CsgOp::Difference, s1, s2);
    world.get_mut(csg).set_transform(translation(0., 0., 2.));
    csg
}
