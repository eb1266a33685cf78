use ray_tracer_core::camera::Camera;
use ray_tracer_core::light::PointLight;
use ray_tracer_core::material::Material;
use ray_tracer_core::shape::{Geometry, Shape};
use ray_tracer_core::transformations::rotation_x;
use ray_tracer_core::transformations::rotation_y;
use ray_tracer_core::transformations::scaling;
use ray_tracer_core::transformations::shearing;
use ray_tracer_core::transformations::translation;
use ray_tracer_core::transformations::view_transform;
use ray_tracer_core::world::World;
use ray_tracer_core::{color, point, vector};
use std::f32::consts::PI;

// To render larger, be sure to use an optimized (release) build and give it several minutes to finish
// const CANVAS_WIDTH: u32 = 1000;
// const CANVAS_HEIGHT: u32 = 500;
const CANVAS_WIDTH: u32 = 100;
const CANVAS_HEIGHT: u32 = 50;

fn main() {
    let mut room_material = Material::default();
    room_material.color = color!(1, 0.9, 0.9);
    room_material.specular = 0.0;

    let mut world = World::new();

    // The floor is an extremely flattened sphere with a matte texture.
    let mut floor = Shape::new(Geometry::Sphere);
    floor.set_transform(scaling(10.0, 0.01, 10.0));
    floor.material = room_material.clone();
    world.add_shape(floor);

    // The wall on the left has the same scale and color as the floor, but is also rotated and translated into place.
    let mut left_wall = Shape::new(Geometry::Sphere);
    left_wall.set_transform(
        &translation(0.0, 0.0, 5.0) * &(&rotation_y(-PI / 4.0) * &(&rotation_x(PI / 2.0) * &scaling(10.0, 0.01, 10.0))),
    );
    left_wall.material = room_material.clone();
    world.add_shape(left_wall);

    // The wall on the right is identical to the left wall, but is rotated the opposite direction in y.
    let mut right_wall = Shape::new(Geometry::Sphere);
    right_wall.set_transform(
        &translation(0.0, 0.0, 5.0) * &(&rotation_y(PI / 4.0) * &(&rotation_x(PI / 2.0) * &scaling(10.0, 0.01, 10.0))),
    );
    right_wall.material = room_material;
    world.add_shape(right_wall);

    // The large sphere in the middle is a unit sphere, translated upward slightly and colored green.
    let mut middle = Shape::new(Geometry::Sphere);
    middle.set_transform(translation(-0.5, 1.0, 0.5));
    middle.material.color = color!(0.1, 1, 0.5);
    middle.material.diffuse = 0.7;
    middle.material.specular = 0.3;
    world.add_shape(middle);

    // The smaller green sphere on the right is scaled in half
    let mut right = Shape::new(Geometry::Sphere);
    right.set_transform(&shearing(0.0, 1.0, 0.0, 0.0, 0.0, 1.0) * &(&translation(1.5, 0.5, -0.5) * &scaling(0.5, 0.5, 0.5)));
    right.material.color = color!(0.5, 1, 0.1);
    right.material.diffuse = 0.7;
    right.material.specular = 0.3;
    world.add_shape(right);

    // The smallest sphere is scaled by a third before being translated
    let mut left = Shape::new(Geometry::Sphere);
    left.set_transform(&translation(-1.5, 0.33, -0.75) * &scaling(0.33, 0.33, 0.33));
    left.material.color = color!(1, 0.8, 0.1);
    left.material.diffuse = 0.7;
    left.material.specular = 0.3;
    world.add_shape(left);

    // The light source is white, shining from above and to the left
    world.lights.push(PointLight::new(point!(-10, 10, -10), color!(1, 1, 1)));

    let camera = Camera::new(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        PI / 3.0,
        view_transform(point!(0, 1.5, -5), point!(0, 1, 0), vector!(0, 1, 0)),
    );

    let canvas = camera.render(world, ray_tracer_core::constants::DEFAULT_RAY_RECURSION_DEPTH);
    println!("{}", canvas.to_ppm());
}
