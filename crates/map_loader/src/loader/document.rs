//! Read-only view over a parsed map document
//!
//! Wraps `roxmltree` so extractors only see the handful of queries they need:
//! named children, named child sequences and typed attribute lookups.

use crate::foundation::math::{radians, Vec3};

use super::LoadError;

/// A parsed map document
pub struct MapDocument<'input> {
    document: roxmltree::Document<'input>,
}

impl<'input> MapDocument<'input> {
    /// Parse markup text
    pub fn parse(source: &'input str) -> Result<Self, LoadError> {
        let document = roxmltree::Document::parse(source)?;
        Ok(Self { document })
    }

    /// The document's root element; map sections are its children
    pub fn root(&self) -> MapElement<'_, 'input> {
        MapElement {
            node: self.document.root_element(),
        }
    }
}

/// Handle to one element of a [`MapDocument`]
#[derive(Debug, Clone, Copy)]
pub struct MapElement<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input: 'a> MapElement<'a, 'input> {
    /// Element tag name
    pub fn name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    /// First child element called `name`
    pub fn first_child(&self, name: &str) -> Option<Self> {
        self.children_named(name).next()
    }

    /// All child elements called `name`, in document order
    ///
    /// The iterator may be empty. Call again to start over.
    pub fn children_named<'n>(&self, name: &'n str) -> impl Iterator<Item = Self> + 'n
    where
        'a: 'n,
    {
        self.node
            .children()
            .filter(move |child| child.is_element() && child.has_tag_name(name))
            .map(|node| Self { node })
    }

    /// String attribute
    pub fn attr_str(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Integer attribute
    ///
    /// Only the leading integer is read, so `"1.0"` gives `1` and `" 7px"`
    /// gives `7`. A value with no leading digits counts as absent.
    pub fn attr_i32(&self, name: &str) -> Option<i32> {
        let raw = self.attr_str(name)?;
        let trimmed = raw.trim_start();
        let sign = usize::from(trimmed.starts_with(['+', '-']));
        let digits = trimmed[sign..].bytes().take_while(u8::is_ascii_digit).count();

        match trimmed[..sign + digits].parse() {
            Ok(value) => {
                if sign + digits < trimmed.trim_end().len() {
                    log::debug!(
                        "Attribute {}=\"{}\" on <{}> at {} read as {}",
                        name,
                        raw,
                        self.name(),
                        self.position(),
                        value
                    );
                }
                Some(value)
            }
            Err(_) => {
                self.warn_unparsable(name, raw, "i32");
                None
            }
        }
    }

    /// Float attribute; unparsable values count as absent
    pub fn attr_f32(&self, name: &str) -> Option<f32> {
        self.parse_attr(name)
    }

    /// Float attribute, `0.0` when absent
    pub fn attr_f32_or_zero(&self, name: &str) -> f32 {
        self.attr_f32(name).unwrap_or(0.0)
    }

    fn parse_attr<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        let raw = self.attr_str(name)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.warn_unparsable(name, raw, std::any::type_name::<T>());
                None
            }
        }
    }

    fn warn_unparsable(&self, name: &str, raw: &str, expected: &str) {
        log::warn!(
            "Ignoring attribute {}=\"{}\" on <{}> at {}: not a {}",
            name,
            raw,
            self.name(),
            self.position(),
            expected
        );
    }

    /// Line and column of the element, for diagnostics
    pub fn position(&self) -> String {
        let pos = self.node.document().text_pos_at(self.node.range().start);
        format!("{}:{}", pos.row, pos.col)
    }
}

/// Read `x`, `y`, `z` attributes of `element`; missing ones are zero
pub fn vector_attrs(element: MapElement<'_, '_>) -> Vec3 {
    Vec3::new(
        element.attr_f32_or_zero("x"),
        element.attr_f32_or_zero("y"),
        element.attr_f32_or_zero("z"),
    )
}

/// Position from the `position` child, `(0,0,0)` if absent
pub fn extract_position(element: MapElement<'_, '_>) -> Vec3 {
    element
        .first_child("position")
        .map_or_else(Vec3::zeros, vector_attrs)
}

/// Rotation from the `rotation` child, in radians
///
/// Maps write degrees. `(0,0,0)` if absent.
pub fn extract_rotation(element: MapElement<'_, '_>) -> Vec3 {
    element
        .first_child("rotation")
        .map_or_else(Vec3::zeros, |rotation| radians(vector_attrs(rotation)))
}

/// Scale from the `scale` child, or `None` to keep the current scale
pub fn extract_scale(element: MapElement<'_, '_>) -> Option<Vec3> {
    element.first_child("scale").map(vector_attrs)
}
