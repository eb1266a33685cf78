#![allow(dead_code)]

#[cfg_attr(test, macro_use)]
extern crate approx;

// It's important that mods with macros come first so that they are available in other mods.
// The macros will automatically be available in all following mods. However, for binaries in
// the bin directory, the macros must be imported from the root crate, like
// `use ray_tracer_core::point`, etc.
#[macro_use]
pub mod matrix;
#[macro_use]
pub mod tuple;
#[macro_use]
pub mod color;

pub mod bounding_box;
pub mod camera;
pub mod canvas;
pub mod constants;
pub mod intersection;
pub mod light;
pub mod material;
pub mod obj_parser;
pub mod pattern;
pub mod ray;
pub mod shape;
#[cfg(test)]
pub mod test;
pub mod transformations;
pub mod world;
