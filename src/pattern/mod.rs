// Pattern is a tagged union rather than a trait object: the set of pattern kinds is closed and
// known up front, so a match arm per operation keeps the sampling math colocated with its kind
// instead of scattered across one file per impl.
use crate::color::Color;
use crate::matrix::{identity_4x4, Matrix};
use crate::tuple::Tuple;

pub mod uv;

use uv::{CubeFace, UvMapper, UvPattern};

#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub inv_transform: Matrix,
    pub kind: PatternKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PatternKind {
    Solid(Color),
    Striped(Color, Color),
    Gradient(Color, Color),
    Ring(Color, Color),
    Checkers(Color, Color),
    GradientRing(Color, Color),
    Blended(Box<Pattern>, Box<Pattern>),
    PerlinNoise(Box<Pattern>, f32),
    GradientPerlinNoise(Color, Color, f32),
    Uv(UvMapper, Box<UvPattern>),
    CubeMap {
        left: Box<UvPattern>,
        right: Box<UvPattern>,
        up: Box<UvPattern>,
        down: Box<UvPattern>,
        front: Box<UvPattern>,
        back: Box<UvPattern>,
    },
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Pattern {
        Pattern {
            inv_transform: identity_4x4(),
            kind,
        }
    }

    pub fn solid(color: Color) -> Pattern {
        Pattern::new(PatternKind::Solid(color))
    }

    pub fn with_transform(mut self, transform: Matrix) -> Pattern {
        self.inv_transform = transform.inverse();
        self
    }

    // Composition order is shape_inv_transform -> pattern_inv_transform -> query, matching the
    // way materials attach a pattern to a shape's own local space.
    pub fn color_at_shape(&self, shape_inv_transform: &Matrix, world_point: Tuple) -> Color {
        let object_point = shape_inv_transform * &world_point;
        let pattern_point = &self.inv_transform * &object_point;
        self.color_at(pattern_point)
    }

    pub fn color_at(&self, point: Tuple) -> Color {
        match &self.kind {
            PatternKind::Solid(c) => *c,
            PatternKind::Striped(a, b) => {
                if point.x.floor() as i64 % 2 == 0 {
                    *a
                } else {
                    *b
                }
            }
            PatternKind::Gradient(a, b) => {
                let distance = *b - *a;
                let fraction = point.x - point.x.floor();
                *a + distance * fraction
            }
            PatternKind::Ring(a, b) => {
                let distance = (point.x * point.x + point.z * point.z).sqrt();
                if distance.floor() as i64 % 2 == 0 {
                    *a
                } else {
                    *b
                }
            }
            PatternKind::Checkers(a, b) => {
                let sum = point.x.floor() + point.y.floor() + point.z.floor();
                if sum as i64 % 2 == 0 {
                    *a
                } else {
                    *b
                }
            }
            PatternKind::GradientRing(a, b) => {
                let distance = *b - *a;
                let radius = (point.x * point.x + point.z * point.z).sqrt();
                let fraction = radius - radius.floor();
                *a + distance * fraction
            }
            PatternKind::Blended(a, b) => (a.color_at(point) + b.color_at(point)) / 2.0,
            PatternKind::PerlinNoise(base, scale) => {
                let jitter = perlin(point.x * scale, point.y * scale, point.z * scale);
                base.color_at(point!(
                    point.x + jitter,
                    point.y + jitter,
                    point.z + jitter
                ))
            }
            PatternKind::GradientPerlinNoise(a, b, scale) => {
                let n = perlin(point.x * scale, point.y * scale, point.z * scale);
                // fold into [0, 1]
                let fraction = (n + 1.0) / 2.0;
                *a + (*b - *a) * fraction
            }
            PatternKind::Uv(mapper, uv_pattern) => {
                let (u, v) = mapper.map(point);
                uv_pattern.color_at(u, v)
            }
            PatternKind::CubeMap {
                left,
                right,
                up,
                down,
                front,
                back,
            } => {
                let face = CubeFace::of(point);
                let (u, v) = face.uv(point);
                match face {
                    CubeFace::Left => left.color_at(u, v),
                    CubeFace::Right => right.color_at(u, v),
                    CubeFace::Up => up.color_at(u, v),
                    CubeFace::Down => down.color_at(u, v),
                    CubeFace::Front => front.color_at(u, v),
                    CubeFace::Back => back.color_at(u, v),
                }
            }
        }
    }
}

// Minimal gradient noise: hash the lattice corners around the sample point and interpolate.
// Not the classic Perlin permutation table, but it gives the same qualitative "noise_range" no-op
// documented for the clamp: callers divide by noise_range purely for readability at the call site.
pub(crate) fn perlin(x: f32, y: f32, z: f32) -> f32 {
    fn hash(x: i64, y: i64, z: i64) -> f32 {
        let mut h = x.wrapping_mul(374_761_393)
            ^ y.wrapping_mul(668_265_263)
            ^ z.wrapping_mul(2_147_483_647);
        h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
        let frac = ((h ^ (h >> 16)) & 0xffffff) as f32 / 0xffffff as f32;
        frac * 2.0 - 1.0
    }
    fn smooth(t: f32) -> f32 {
        t * t * (3.0 - 2.0 * t)
    }
    fn lerp(t: f32, a: f32, b: f32) -> f32 {
        a + t * (b - a)
    }

    let xi = x.floor() as i64;
    let yi = y.floor() as i64;
    let zi = z.floor() as i64;
    let xf = x - x.floor();
    let yf = y - y.floor();
    let zf = z - z.floor();
    let u = smooth(xf);
    let v = smooth(yf);
    let w = smooth(zf);

    let c000 = hash(xi, yi, zi);
    let c100 = hash(xi + 1, yi, zi);
    let c010 = hash(xi, yi + 1, zi);
    let c110 = hash(xi + 1, yi + 1, zi);
    let c001 = hash(xi, yi, zi + 1);
    let c101 = hash(xi + 1, yi, zi + 1);
    let c011 = hash(xi, yi + 1, zi + 1);
    let c111 = hash(xi + 1, yi + 1, zi + 1);

    let x00 = lerp(u, c000, c100);
    let x10 = lerp(u, c010, c110);
    let x01 = lerp(u, c001, c101);
    let x11 = lerp(u, c011, c111);
    let y0 = lerp(v, x00, x10);
    let y1 = lerp(v, x01, x11);
    lerp(w, y0, y1)
}
