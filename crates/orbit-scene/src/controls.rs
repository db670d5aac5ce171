//! Continuous manual controls, as delivered by the UI sliders.

use orbit_math::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Overwrite one component of `v`.
    pub fn set(self, v: &mut Vector3, value: f64) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }
}

/// One absolute control value. Object inputs act on the selected object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlInput {
    Move(Axis, f64),
    /// Degrees
    Rotate(Axis, f64),
    Scale(Axis, f64),
    CameraPosition(Axis, f64),
    CameraTarget(Axis, f64),
    Ambient(f32),
    Diffuse(f32),
    Specular(f32),
}

impl ControlInput {
    /// Map a slider identifier such as `moveX` or `lightKd` to an input.
    pub fn from_slider(id: &str, value: f64) -> Option<Self> {
        match id {
            "lightKa" => return Some(ControlInput::Ambient(value as f32)),
            "lightKd" => return Some(ControlInput::Diffuse(value as f32)),
            "lightKs" => return Some(ControlInput::Specular(value as f32)),
            _ => {}
        }

        let (prefix, axis) = [('X', Axis::X), ('Y', Axis::Y), ('Z', Axis::Z)]
            .into_iter()
            .find_map(|(c, axis)| id.strip_suffix(c).map(|p| (p, axis)))?;
        match prefix {
            "move" => Some(ControlInput::Move(axis, value)),
            "rotate" => Some(ControlInput::Rotate(axis, value)),
            "scale" => Some(ControlInput::Scale(axis, value)),
            "cameraPos" => Some(ControlInput::CameraPosition(axis, value)),
            "cameraView" => Some(ControlInput::CameraTarget(axis, value)),
            _ => None,
        }
    }
}
