//! Vertex attribute binding: buffer layout × program locations.

use crate::vertex::AttributeDescriptor;

use super::RenderError;

/// Attribute name → shader location table of a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeLocations {
    entries: Vec<(String, u32)>,
}

impl AttributeLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the location of `name`.
    pub fn insert(&mut self, name: impl Into<String>, location: u32) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = location,
            None => self.entries.push((name, location)),
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|(n, _)| n == name).map(|&(_, loc)| loc)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for AttributeLocations {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (name, loc) in iter {
            out.insert(name, loc);
        }
        out
    }
}

pub(crate) fn vertex_format(name: &str, count: usize) -> Result<wgpu::VertexFormat, RenderError> {
    Ok(match count {
        1 => wgpu::VertexFormat::Float32,
        2 => wgpu::VertexFormat::Float32x2,
        3 => wgpu::VertexFormat::Float32x3,
        4 => wgpu::VertexFormat::Float32x4,
        _ => {
            return Err(RenderError::UnsupportedComponentCount {
                name: name.to_owned(),
                count,
            });
        }
    })
}

/// One `wgpu::VertexAttribute` per declared attribute, at the program's
/// location for that name and the buffer's byte offset.
pub fn vertex_attributes(
    attributes: &[AttributeDescriptor],
    locations: &AttributeLocations,
) -> Result<Vec<wgpu::VertexAttribute>, RenderError> {
    attributes
        .iter()
        .map(|a| {
            let shader_location = locations
                .get(&a.name)
                .ok_or_else(|| RenderError::UnknownAttribute { name: a.name.clone() })?;
            Ok(wgpu::VertexAttribute {
                format: vertex_format(&a.name, a.component_count)?,
                offset: a.byte_offset as u64,
                shader_location,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::SPRITE_ATTRIBUTES;
    use crate::vertex::VertexBufferBuilder;

    fn sprite_locations() -> AttributeLocations {
        SPRITE_ATTRIBUTES
            .iter()
            .enumerate()
            .map(|(i, &(name, _))| (name, i as u32))
            .collect()
    }

    #[test]
    fn maps_every_attribute() {
        let vb = VertexBufferBuilder::new()
            .attribute("a_position", 3)
            .attribute("a_color", 4)
            .attribute("a_tex_coord", 2)
            .build(Vec::new())
            .unwrap();

        let attrs = vertex_attributes(vb.attributes(), &sprite_locations()).unwrap();
        assert_eq!(
            attrs,
            vec![
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 28,
                    shader_location: 2,
                },
            ]
        );
    }

    #[test]
    fn unknown_name_is_reported() {
        let vb = VertexBufferBuilder::new()
            .attribute("a_normal", 3)
            .build(Vec::new())
            .unwrap();
        assert_eq!(
            vertex_attributes(vb.attributes(), &sprite_locations()),
            Err(RenderError::UnknownAttribute { name: "a_normal".into() })
        );
    }

    #[test]
    fn wide_attribute_is_reported() {
        let vb = VertexBufferBuilder::new()
            .attribute("a_position", 5)
            .build(Vec::new())
            .unwrap();
        assert_eq!(
            vertex_attributes(vb.attributes(), &sprite_locations()),
            Err(RenderError::UnsupportedComponentCount { name: "a_position".into(), count: 5 })
        );
    }

    #[test]
    fn insert_replaces() {
        let mut locs = AttributeLocations::new();
        locs.insert("a_position", 0);
        locs.insert("a_position", 3);
        assert_eq!(locs.len(), 1);
        assert_eq!(locs.get("a_position"), Some(3));
        assert_eq!(locs.get("a_color"), None);
    }
}
