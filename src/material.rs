use crate::color::Color;
use crate::constants::{white, REFRACTIVE_VACUUM};
use crate::pattern::Pattern;
use typed_builder::TypedBuilder;

// Represents the reflective properties of a surface
#[derive(PartialEq, Debug, Clone, TypedBuilder)]
pub struct Material {
    #[builder(default = white())]
    pub color: Color,
    // light reflected from other objects in the environment [0,1]
    #[builder(default = 0.1)]
    pub ambient: f32,
    // light reflected from a matte surface; depends on angle between
    // light source and surface normal [0,1]
    #[builder(default = 0.9)]
    pub diffuse: f32,
    // the reflection of the light source itself (gives specular highlight);
    // depends on the angle between the reflection vector and the eye vector [0,1]
    #[builder(default = 0.9)]
    pub specular: f32,
    // higher values give smaller and tighter specular highlights [10,200] (no real upper bound)
    #[builder(default = 200.0)]
    pub shininess: f32,

    #[builder(default = 0.0)]
    pub reflective: f32,

    #[builder(default = 0.0)]
    pub transparency: f32,
    #[builder(default = REFRACTIVE_VACUUM)]
    pub refractive_index: f32,

    #[builder(default, setter(strip_option))]
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Self {
        Material::builder().build()
    }
}
