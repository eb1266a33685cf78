use crate::color::Color;
use crate::material::Material;
use crate::matrix::Matrix;
use crate::pattern::Pattern;
use crate::ray::Ray;
use crate::tuple::Tuple;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> PointLight {
        PointLight { position, intensity }
    }
}

// Phong reflection model: ambient + diffuse + specular, gated by whether the point is in shadow
// of this particular light.
pub fn phong_lighting(
    material: &Material,
    shape_inv_transform: &Matrix,
    light: &PointLight,
    point: Tuple,
    eye_vector: Tuple,
    normal_vector: Tuple,
    in_shadow: bool,
) -> Color {
    let color = match &material.pattern {
        Some(pattern) => pattern.color_at_shape(shape_inv_transform, point),
        None => material.color,
    };

    let effective_color = color * light.intensity;
    let ambient = effective_color * material.ambient;

    if in_shadow {
        return ambient;
    }

    let light_vector = (light.position - point).norm();
    let light_dot_normal = light_vector.dot(normal_vector);

    let (diffuse, specular) = if light_dot_normal < 0.0 {
        (crate::constants::black(), crate::constants::black())
    } else {
        let diffuse = effective_color * material.diffuse * light_dot_normal;

        let reflect_vector = Ray::reflect(-light_vector, normal_vector);
        let reflect_dot_eye = reflect_vector.dot(eye_vector);

        let specular = if reflect_dot_eye <= 0.0 {
            crate::constants::black()
        } else {
            let factor = reflect_dot_eye.powf(material.shininess);
            light.intensity * material.specular * factor
        };
        (diffuse, specular)
    };

    ambient + diffuse + specular
}
