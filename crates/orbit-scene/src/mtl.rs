//! Wavefront MTL material library parser.
//!
//! Only the statements the lighting model consumes are read: `newmtl`,
//! `Ka`, `Kd`, `Ks`, `Ns` and `map_Kd`. Everything else is skipped.

use std::collections::HashMap;

use orbit_core::{OrbitError, Result};

/// One `newmtl` block as written in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MtlMaterial {
    pub ambient: Option<[f32; 3]>,
    pub diffuse: Option<[f32; 3]>,
    pub specular: Option<[f32; 3]>,
    pub shininess: Option<f32>,
    pub texture: Option<String>,
}

/// Materials keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: HashMap<String, MtlMaterial>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse MTL text into a new library.
    pub fn parse(source: &str) -> Result<Self> {
        let mut library = Self::new();
        library.parse_into(source)?;
        Ok(library)
    }

    /// Parse MTL text, replacing any material already defined under the same name.
    pub fn parse_into(&mut self, source: &str) -> Result<()> {
        let mut current: Option<String> = None;

        for (index, raw) in source.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(keyword) = parts.next() else {
                continue;
            };
            let args: Vec<&str> = parts.collect();

            if keyword == "newmtl" {
                let name = args
                    .first()
                    .ok_or_else(|| OrbitError::parse(line_no, "'newmtl' without a name"))?;
                self.materials.insert(name.to_string(), MtlMaterial::default());
                current = Some(name.to_string());
                continue;
            }

            let Some(material) = current.as_ref().and_then(|n| self.materials.get_mut(n)) else {
                continue;
            };

            match keyword {
                "Ka" => material.ambient = Some(parse_color(line_no, keyword, &args)?),
                "Kd" => material.diffuse = Some(parse_color(line_no, keyword, &args)?),
                "Ks" => material.specular = Some(parse_color(line_no, keyword, &args)?),
                "Ns" => {
                    let value = args.first().ok_or_else(|| {
                        OrbitError::parse(line_no, "expected a number after 'Ns'")
                    })?;
                    material.shininess = Some(parse_number(line_no, keyword, value)?);
                }
                "map_Kd" => {
                    // Options such as `-s 1 1 1` may precede the file name
                    if let Some(file) = args.last() {
                        material.texture = Some(file.to_string());
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MtlMaterial> {
        self.materials.get(name)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

fn parse_number(line_no: usize, keyword: &str, value: &str) -> Result<f32> {
    value.parse::<f32>().map_err(|e| {
        OrbitError::parse(line_no, format!("invalid number '{value}' after '{keyword}': {e}"))
    })
}

/// `r [g b]`: a single value is a grey level.
fn parse_color(line_no: usize, keyword: &str, args: &[&str]) -> Result<[f32; 3]> {
    match args {
        [v] => {
            let v = parse_number(line_no, keyword, v)?;
            Ok([v, v, v])
        }
        [r, g, b, ..] => Ok([
            parse_number(line_no, keyword, r)?,
            parse_number(line_no, keyword, g)?,
            parse_number(line_no, keyword, b)?,
        ]),
        _ => Err(OrbitError::parse(
            line_no,
            format!("'{keyword}' expects 1 or 3 numbers, got {}", args.len()),
        )),
    }
}
