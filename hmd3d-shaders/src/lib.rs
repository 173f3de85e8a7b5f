/// HMD3D Shaders - GLSL sources for the stereo lighting and unwarp passes
///
/// The light-array sizes in the lighting shaders are placeholders
/// (`NUM_POINT_LIGHTS`, `NUM_DIR_LIGHTS`) so one source serves any scene;
/// callers patch in the actual counts with [`with_light_counts`] before
/// handing the source to the GL compiler. Zero-light scenes still compile
/// because the arrays and loops sit behind `#if` guards.

pub mod sources;

pub use sources::{
    GOURAUD_VERT, MULTI_PHONG_FRAG, PHONG_FRAG, PHONG_VERT, UNWARP_FRAG, UNWARP_VERT,
};

/// Pipeline stage a shader source compiles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// The shader programs shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderId {
    GouraudVertex,
    PhongVertex,
    PhongFragment,
    MultiPhongFragment,
    UnwarpVertex,
    UnwarpFragment,
}

impl ShaderId {
    pub const ALL: [ShaderId; 6] = [
        ShaderId::GouraudVertex,
        ShaderId::PhongVertex,
        ShaderId::PhongFragment,
        ShaderId::MultiPhongFragment,
        ShaderId::UnwarpVertex,
        ShaderId::UnwarpFragment,
    ];

    /// Raw GLSL source with the light-count placeholders still in place.
    pub fn source(self) -> &'static str {
        match self {
            ShaderId::GouraudVertex => GOURAUD_VERT,
            ShaderId::PhongVertex => PHONG_VERT,
            ShaderId::PhongFragment => PHONG_FRAG,
            ShaderId::MultiPhongFragment => MULTI_PHONG_FRAG,
            ShaderId::UnwarpVertex => UNWARP_VERT,
            ShaderId::UnwarpFragment => UNWARP_FRAG,
        }
    }

    pub fn stage(self) -> ShaderStage {
        match self {
            ShaderId::GouraudVertex | ShaderId::PhongVertex | ShaderId::UnwarpVertex => {
                ShaderStage::Vertex
            }
            ShaderId::PhongFragment | ShaderId::MultiPhongFragment | ShaderId::UnwarpFragment => {
                ShaderStage::Fragment
            }
        }
    }
}

/// Replaces the `NUM_POINT_LIGHTS` / `NUM_DIR_LIGHTS` placeholders with
/// concrete counts. Must run before the source is compiled; GLSL ES 1.00
/// requires constant array sizes.
pub fn with_light_counts(source: &str, num_point_lights: usize, num_dir_lights: usize) -> String {
    source
        .replace("NUM_POINT_LIGHTS", &num_point_lights.to_string())
        .replace("NUM_DIR_LIGHTS", &num_dir_lights.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_counts_are_substituted() {
        let patched = with_light_counts(MULTI_PHONG_FRAG, 2, 1);
        assert!(patched.contains("uniform PointLight pointLights[ 2 ];"));
        assert!(patched.contains("uniform DirectionalLight directionalLights[ 1 ];"));
        assert!(!patched.contains("NUM_POINT_LIGHTS"));
        assert!(!patched.contains("NUM_DIR_LIGHTS"));
    }

    #[test]
    fn test_zero_lights_disable_the_light_blocks() {
        let patched = with_light_counts(PHONG_FRAG, 0, 0);
        // The guard stays in the source; `#if 0 > 0` compiles the loop out.
        assert!(patched.contains("#if 0 > 0"));
    }

    #[test]
    fn test_lighting_shaders_declare_the_uniform_contract() {
        for id in [
            ShaderId::GouraudVertex,
            ShaderId::PhongFragment,
            ShaderId::MultiPhongFragment,
        ] {
            let src = id.source();
            assert!(src.contains("uniform Material material;"), "{id:?}");
            assert!(src.contains("uniform vec3 ambientLightColor;"), "{id:?}");
            assert!(src.contains("uniform vec3 attenuation;"), "{id:?}");
        }
        assert!(GOURAUD_VERT.contains("uniform mat4 projectionMat;"));
        assert!(PHONG_FRAG.contains("uniform mat4 viewMat;"));
    }

    #[test]
    fn test_unwarp_shader_declares_the_distortion_uniforms() {
        for uniform in [
            "uniform sampler2D map;",
            "uniform vec2 centerCoordinate;",
            "uniform vec2 viewportSize;",
            "uniform vec2 K;",
            "uniform float distLensScreen;",
        ] {
            assert!(UNWARP_FRAG.contains(uniform), "missing {uniform}");
        }
    }

    #[test]
    fn test_every_shader_has_a_stage_and_source() {
        for id in ShaderId::ALL {
            assert!(id.source().contains("void main()"));
            match id.stage() {
                ShaderStage::Vertex => assert!(id.source().contains("gl_Position")),
                ShaderStage::Fragment => assert!(id.source().contains("gl_FragColor")),
            }
        }
    }
}
