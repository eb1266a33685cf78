use crate::canvas::Canvas;
use crate::color::Color;
use crate::tuple::Tuple;
use std::f32::consts::PI;
use std::sync::Arc;

// Maps a 3D point on a shape's surface down to a (u, v) pair in [0, 1) x [0, 1).
#[derive(Clone, Debug, PartialEq)]
pub enum UvMapper {
    Spherical,
    Planar,
    Cylindrical,
}

impl UvMapper {
    pub fn map(&self, point: Tuple) -> (f32, f32) {
        match self {
            UvMapper::Spherical => spherical_map(point),
            UvMapper::Planar => planar_map(point),
            UvMapper::Cylindrical => cylindrical_map(point),
        }
    }
}

fn spherical_map(point: Tuple) -> (f32, f32) {
    let radius = (point.x * point.x + point.y * point.y + point.z * point.z).sqrt();
    let theta = point.x.atan2(point.z);
    let phi = (point.y / radius).acos();
    let raw_u = theta / (2.0 * PI);
    let u = 1.0 - (raw_u + 0.5);
    let v = 1.0 - phi / PI;
    (u, v)
}

fn planar_map(point: Tuple) -> (f32, f32) {
    let u = point.x - point.x.floor();
    let v = point.z - point.z.floor();
    (u, v)
}

fn cylindrical_map(point: Tuple) -> (f32, f32) {
    let theta = point.x.atan2(point.z);
    let raw_u = theta / (2.0 * PI);
    let u = 1.0 - (raw_u + 0.5);
    let v = point.y - point.y.floor();
    (u, v)
}

#[derive(Clone, Debug, PartialEq)]
pub enum CubeFace {
    Left,
    Right,
    Up,
    Down,
    Front,
    Back,
}

impl CubeFace {
    pub fn of(point: Tuple) -> CubeFace {
        let abs_x = point.x.abs();
        let abs_y = point.y.abs();
        let abs_z = point.z.abs();
        let coord = abs_x.max(abs_y).max(abs_z);
        if coord == point.x {
            CubeFace::Right
        } else if coord == -point.x {
            CubeFace::Left
        } else if coord == point.y {
            CubeFace::Up
        } else if coord == -point.y {
            CubeFace::Down
        } else if coord == point.z {
            CubeFace::Front
        } else {
            CubeFace::Back
        }
    }

    pub fn uv(&self, point: Tuple) -> (f32, f32) {
        match self {
            CubeFace::Right => face_uv(-point.z, point.y, point.x),
            CubeFace::Left => face_uv(point.z, point.y, point.x),
            CubeFace::Up => face_uv(point.x, -point.z, point.y),
            CubeFace::Down => face_uv(point.x, point.z, point.y),
            CubeFace::Front => face_uv(point.x, point.y, point.z),
            CubeFace::Back => face_uv(-point.x, point.y, point.z),
        }
    }
}

fn face_uv(coord_u: f32, coord_v: f32, _main: f32) -> (f32, f32) {
    let u = ((coord_u + 1.0) % 2.0) / 2.0;
    let v = ((coord_v + 1.0) % 2.0) / 2.0;
    (u, v)
}

#[derive(Clone, Debug, PartialEq)]
pub enum UvPattern {
    Checkers { nu: usize, nv: usize, a: Color, b: Color },
    Noise { a: Color, b: Color, scale: f32 },
    Image(UvImage),
}

impl UvPattern {
    pub fn color_at(&self, u: f32, v: f32) -> Color {
        match self {
            UvPattern::Checkers { nu, nv, a, b } => {
                let u2 = (u * *nu as f32).floor() as i64;
                let v2 = (v * *nv as f32).floor() as i64;
                if (u2 + v2) % 2 == 0 {
                    *a
                } else {
                    *b
                }
            }
            UvPattern::Noise { a, b, scale } => {
                let n = super::perlin(u * scale, v * scale, 0.0);
                if n > 0.0 {
                    *a
                } else {
                    *b
                }
            }
            UvPattern::Image(image) => image.color_at(u, v),
        }
    }
}

// Shares a canvas across many cube faces/patterns without re-cloning pixel data.
#[derive(Clone, Debug)]
pub struct UvImage(pub Arc<Canvas>);

impl UvImage {
    pub fn new(canvas: Canvas) -> UvImage {
        UvImage(Arc::new(canvas))
    }

    pub fn color_at(&self, u: f32, v: f32) -> Color {
        let canvas = &self.0;
        let x = (u * (canvas.width as f32 - 1.0)).round() as usize;
        // flip v, since image space starts at the top-left while uv space starts at the bottom-left
        let y = ((1.0 - v) * (canvas.height as f32 - 1.0)).round() as usize;
        canvas.pixel_at(x, y)
    }
}

impl PartialEq for UvImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
