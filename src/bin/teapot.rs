// Show an OBJ model
use ray_tracer_core::camera::Camera;
use ray_tracer_core::light::PointLight;
use ray_tracer_core::obj_parser::parse_obj;
use ray_tracer_core::transformations::rotation_x;
use ray_tracer_core::transformations::view_transform;
use ray_tracer_core::world::World;
use ray_tracer_core::{color, point, vector};
use std::{env, fs::File, path::Path};

use std::f32::consts::PI;

// To render larger, be sure to use an optimized (release) build and give it up to a minute to finish
const CANVAS_WIDTH: u32 = 300;
const CANVAS_HEIGHT: u32 = 300;

fn main() {
    let args: Vec<String> = env::args().collect();
    let obj_file_path = Path::new(&args[1]);

    let mut world = World::new();
    let model = get_obj(&mut world, obj_file_path);
    world.get_mut(model).set_transform(rotation_x(-PI / 2.));

    world
        .lights
        .push(PointLight::new(point!(-10, 100, -100), color!(1, 1, 1)));

    let camera = Camera::new(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        1.,
        view_transform(point!(0, 0, -2), point!(0, 0, 0), vector!(0, 1, 0)),
    );

    let canvas = camera.render(world, ray_tracer_core::constants::DEFAULT_RAY_RECURSION_DEPTH);
    println!("{}", canvas.to_ppm());
}

fn get_obj(world: &mut World, obj_file_path: &Path) -> ray_tracer_core::shape::ShapeId {
    let file = File::open(obj_file_path).unwrap();
    let parse_results = parse_obj(file).unwrap();
    eprintln!("Finished parsing obj");
    let model = parse_results.insert_into_world(world);
    eprintln!("Finished inserting model into world");
    model
}
