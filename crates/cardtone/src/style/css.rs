//! Inline style declarations handed to the renderer.
//!
//! An unset color emits no declaration at all, so the renderer falls back
//! to its stylesheet instead of an inline literal.

use std::fmt;

use super::value::ColorValue;

/// An ordered list of `property: value` pairs.
///
/// ```rust
/// use cardtone::{ColorValue, InlineStyle};
///
/// let bg = ColorValue::from("#f9f8f6");
/// let style = InlineStyle::new()
///     .declare("background-color", Some(&bg))
///     .declare("color", None);
/// assert_eq!(style.to_string(), "background-color: #f9f8f6");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(&'static str, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `property` when `value` is set; skips it otherwise.
    pub fn declare(self, property: &'static str, value: Option<&ColorValue>) -> Self {
        match value {
            Some(value) => self.declare_raw(property, value.to_string()),
            None => self,
        }
    }

    /// Adds a declaration with a literal value.
    pub fn declare_raw(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    /// The value declared for `property`, if any.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        let style = InlineStyle::new().declare("color", None);
        assert!(style.is_empty());
        assert_eq!(style.to_string(), "");
    }

    #[test]
    fn test_declarations_keep_order() {
        let text = ColorValue::from("#000");
        let style = InlineStyle::new()
            .declare_raw("transition", "color 0.3s")
            .declare("color", Some(&text));

        assert_eq!(style.to_string(), "transition: color 0.3s; color: #000");
        assert_eq!(style.get("color"), Some("#000"));
        assert_eq!(
            style.declarations().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["transition", "color"]
        );
    }
}
