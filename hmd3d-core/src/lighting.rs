/// CPU evaluation of the Phong lighting model used by the GLSL shaders
use nalgebra::{Matrix4, Point3, Vector3};

/// Phong reflectances, linear RGB in 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

/// Omnidirectional light. Position is in world coordinates and gets moved
/// into camera space by the view matrix when shading, exactly as the
/// fragment shaders do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub color: Vector3<f32>,
}

/// Parallel light. The direction is the direction the light travels, given
/// in camera coordinates (the shaders consume it untransformed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub color: Vector3<f32>,
}

/// The full light setup for a scene.
#[derive(Debug, Clone)]
pub struct LightRig {
    pub ambient_color: Vector3<f32>,
    pub point_lights: Vec<PointLight>,
    pub directional_lights: Vec<DirectionalLight>,
}

impl Default for LightRig {
    /// A dark scene: no ambient term and no lights.
    fn default() -> Self {
        Self {
            ambient_color: Vector3::zeros(),
            point_lights: Vec::new(),
            directional_lights: Vec::new(),
        }
    }
}

/// Point-light attenuation profile `1 / (k0 + k1*d + k2*d²)`.
///
/// These constants are baked into the fragment shaders (which declare an
/// `attenuation` uniform but never read it); the CPU path uses the same
/// values so software and GL renders match.
const ATTENUATION: [f32; 3] = [2.0, 0.0, 0.001];

fn attenuate(distance: f32) -> f32 {
    1.0 / (ATTENUATION[0] + ATTENUATION[1] * distance + ATTENUATION[2] * distance * distance)
}

/// Reflection of `l` (pointing away from the surface) about the unit
/// normal `n`.
fn reflect_about(l: &Vector3<f32>, n: &Vector3<f32>) -> Vector3<f32> {
    2.0 * n.dot(l) * n - l
}

/// Shades one point with the same accumulation the shaders perform:
/// ambient, then attenuated diffuse + specular per point light, then
/// unattenuated diffuse + specular per directional light.
///
/// `frag_pos_cam` and `normal_cam` are in camera coordinates; the eye sits
/// at the camera-space origin.
pub fn shade(
    material: &Material,
    rig: &LightRig,
    frag_pos_cam: &Point3<f32>,
    normal_cam: &Vector3<f32>,
    view_mat: &Matrix4<f32>,
) -> Vector3<f32> {
    let n = normal_cam.normalize();
    let to_eye = (-frag_pos_cam.coords).normalize();
    let mut color = material.ambient.component_mul(&rig.ambient_color);

    for light in &rig.point_lights {
        let light_cam = view_mat.transform_point(&light.position);
        let offset = light_cam - frag_pos_cam;
        let l = offset.normalize();

        let diffuse_term = l.dot(&n).max(0.0);
        let r = reflect_about(&l, &n).normalize();
        let specular_term = r.dot(&to_eye).max(0.0).powf(material.shininess);

        let falloff = attenuate(offset.norm());
        color += falloff
            * (material.diffuse.component_mul(&light.color) * diffuse_term
                + material.specular.component_mul(&light.color) * specular_term);
    }

    for light in &rig.directional_lights {
        let l = (-light.direction).normalize();

        let diffuse_term = l.dot(&n).max(0.0);
        color += material.diffuse.component_mul(&light.color) * diffuse_term;

        let r = reflect_about(&l, &n).normalize();
        let specular_term = r.dot(&to_eye).max(0.0).powf(material.shininess);
        color += material.specular.component_mul(&light.color) * specular_term;
    }

    color
}
