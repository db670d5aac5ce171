//! Orbit scene context: objects, materials, camera, and per-frame animation.

pub mod animation;
pub mod camera;
pub mod config;
pub mod controls;
pub mod material;
pub mod mtl;
pub mod object;
pub mod scene;
pub mod uniforms;

// Re-export main types
pub use animation::AnimationContext;
pub use camera::Camera;
pub use config::SceneConfig;
pub use controls::{Axis, ControlInput};
pub use material::Material;
pub use mtl::MaterialLibrary;
pub use object::{MotionMode, ObjectId, SceneObject};
pub use scene::{Light, Scene};
pub use uniforms::{FrameUniforms, ObjectUniforms};
