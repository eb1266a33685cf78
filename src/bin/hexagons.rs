use ray_tracer_core::camera::Camera;
use ray_tracer_core::constants::{white, DEFAULT_RAY_RECURSION_DEPTH, REFRACTIVE_GLASS};
use ray_tracer_core::light::PointLight;
use ray_tracer_core::material::Material;
use ray_tracer_core::pattern::{Pattern, PatternKind};
use ray_tracer_core::shape::{Geometry, Shape, ShapeId};
use ray_tracer_core::transformations::rotation_x;
use ray_tracer_core::transformations::rotation_y;
use ray_tracer_core::transformations::rotation_z;
use ray_tracer_core::transformations::scaling;
use ray_tracer_core::transformations::translation;
use ray_tracer_core::transformations::view_transform;
use ray_tracer_core::world::World;
use ray_tracer_core::{color, point, vector};
use std::f32::consts::PI;

// To render larger, be sure to use an optimized (release) build and give it several minutes to finish
const CANVAS_WIDTH: u32 = 1000;
const CANVAS_HEIGHT: u32 = 500;
// const CANVAS_WIDTH: u32 = 100;
// const CANVAS_HEIGHT: u32 = 50;

fn glass() -> Material {
    let mut m = Material::default();
    m.color = color!(0, 0, 0);
    m.specular = 1.0;
    m.shininess = 300.0;
    m.transparency = 1.0;
    m.reflective = 1.0;
    m.refractive_index = REFRACTIVE_GLASS;
    m
}

fn main() {
    let mut world = World::new();

    let mut floor = Shape::new(Geometry::Plane);
    floor.set_transform(&translation(0.0, 0.0, 5.0) * &rotation_x(PI / 2.0));
    let checkers = Pattern::new(PatternKind::Checkers(color!(0.773, 0.847, 0.427), color!(0.149, 0.110, 0.082)));
    floor.material.pattern = Some(checkers);
    world.add_shape(floor);

    let hex_material = glass();
    let hex_root = hexagon(&mut world, &hex_material);
    world.get_mut(hex_root).set_transform(&translation(0.0, 0.75, 0.0) * &rotation_x(PI / 2.0));

    world.lights.push(PointLight::new(point!(-10, 10, -10), white()));

    let camera = Camera::new(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        PI / 3.0,
        view_transform(point!(0, 1.5, -5), point!(0, 1, 0), vector!(0, 1, 0)),
    );

    let canvas = camera.render(world, DEFAULT_RAY_RECURSION_DEPTH);
    println!("{}", canvas.to_ppm());
}

fn hexagon_corner(world: &mut World, m: &Material) -> ShapeId {
    let mut corner = Shape::new(Geometry::Sphere);
    corner.set_transform(&translation(0.0, 0.0, -1.0) * &scaling(0.25, 0.25, 0.25));
    corner.material = m.clone();
    world.insert_shape(corner)
}

fn hexagon_edge(world: &mut World, m: &Material) -> ShapeId {
    let mut edge = Shape::new(Geometry::Cylinder {
        minimum: 0.0,
        maximum: 1.0,
        closed: false,
    });
    edge.set_transform(
        &translation(0.0, 0.0, -1.0) * &(&rotation_y(-PI / 6.0) * &(&rotation_z(-PI / 2.0) * &scaling(0.25, 1.0, 0.25))),
    );
    edge.material = m.clone();
    world.insert_shape(edge)
}

fn hexagon_side(world: &mut World, m: &Material) -> ShapeId {
    let side = world.insert_shape(Shape::new(Geometry::Group { children: vec![] }));
    let corner = hexagon_corner(world, m);
    let edge = hexagon_edge(world, m);
    world.add_child(side, corner);
    world.add_child(side, edge);
    side
}

fn hexagon(world: &mut World, m: &Material) -> ShapeId {
    let hex = world.insert_shape(Shape::new(Geometry::Group { children: vec![] }));
    for n in 0..=5 {
        let side = hexagon_side(world, m);
        world.get_mut(side).set_transform(rotation_y(n as f32 * PI / 3.0));
        world.add_child(hex, side);
    }
    world.promote_to_root(hex);
    hex
}
