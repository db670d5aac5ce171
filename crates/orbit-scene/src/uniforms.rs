//! Per-frame data handed to the external renderer.

use orbit_math::DMat4;

/// Uniforms for drawing one object, matrices column-major as GL expects.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectUniforms {
    pub mesh_file: String,
    pub model: [f32; 16],
    pub normal: [f32; 16],
    pub color: [f32; 3],
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
    pub shininess: f32,
    pub is_selected: bool,
    pub has_texture: bool,
    pub texture: Option<String>,
}

/// Everything the renderer uploads for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUniforms {
    pub view: [f32; 16],
    pub projection: [f32; 16],
    pub camera_position: [f32; 3],
    pub light_position: [f32; 3],
    pub light_color: [f32; 3],
    pub objects: Vec<ObjectUniforms>,
}

/// Column-major `f32` array as GL expects.
pub fn mat4_to_gl(m: &DMat4) -> [f32; 16] {
    m.to_cols_array().map(|v| v as f32)
}

pub fn vec3_to_gl(v: orbit_math::DVec3) -> [f32; 3] {
    v.to_array().map(|c| c as f32)
}
