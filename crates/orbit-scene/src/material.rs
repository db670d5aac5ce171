//! Phong material terms for scene objects.

use crate::mtl::MtlMaterial;

/// Surface terms consumed by the per-fragment lighting model.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    /// Ambient coefficient
    pub ka: f32,
    /// Diffuse coefficient
    pub kd: f32,
    /// Specular coefficient
    pub ks: f32,
    pub shininess: f32,
    pub texture: Option<String>,
}

impl Material {
    /// Build from an MTL definition. Each coefficient is the first channel
    /// of the matching colour statement.
    pub fn from_mtl(mtl: &MtlMaterial) -> Self {
        Self {
            color: mtl.diffuse.unwrap_or([1.0, 1.0, 1.0]),
            ka: mtl.ambient.map_or(0.1, |c| c[0]),
            kd: mtl.diffuse.map_or(0.6, |c| c[0]),
            ks: mtl.specular.map_or(0.3, |c| c[0]),
            shininess: mtl.shininess.unwrap_or(32.0),
            texture: mtl.texture.clone(),
        }
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }
}

impl Default for Material {
    /// Material of objects that name no MTL entry.
    fn default() -> Self {
        Self {
            color: [1.0, 0.5, 0.31],
            ka: 0.5,
            kd: 0.7,
            ks: 0.9,
            shininess: 32.0,
            texture: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_empty_mtl_uses_mtl_defaults() {
        let material = Material::from_mtl(&MtlMaterial::default());
        assert_eq!(material.color, [1.0, 1.0, 1.0]);
        assert_eq!(material.ka, 0.1);
        assert_eq!(material.kd, 0.6);
        assert_eq!(material.ks, 0.3);
        assert_eq!(material.shininess, 32.0);
        assert!(!material.has_texture());
    }

    #[test]
    fn test_from_mtl_takes_first_channel() {
        let mtl = MtlMaterial {
            ambient: Some([0.2, 0.9, 0.9]),
            diffuse: Some([0.8, 0.1, 0.1]),
            specular: Some([0.4, 0.0, 0.0]),
            shininess: Some(8.0),
            texture: Some("brick.png".into()),
        };
        let material = Material::from_mtl(&mtl);
        assert_eq!(material.color, [0.8, 0.1, 0.1]);
        assert_eq!(material.ka, 0.2);
        assert_eq!(material.kd, 0.8);
        assert_eq!(material.ks, 0.4);
        assert_eq!(material.shininess, 8.0);
        assert!(material.has_texture());
    }

    #[test]
    fn test_fallback_material() {
        let material = Material::default();
        assert_eq!(material.color, [1.0, 0.5, 0.31]);
        assert_eq!((material.ka, material.kd, material.ks), (0.5, 0.7, 0.9));
    }
}
