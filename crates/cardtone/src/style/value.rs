//! Opaque color tokens.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A color as the caller wrote it.
///
/// Values are forwarded to the renderer untouched. `"#fff"`, `"rgb(0 0 0)"`,
/// `"var(--surface)"` and even malformed strings are all equally valid here;
/// interpreting them is the renderer's job.
///
/// ```rust
/// use cardtone::ColorValue;
///
/// let value = ColorValue::from("var(--ifm-card-bg)");
/// assert_eq!(value.as_str(), "var(--ifm-card-bg)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(Cow<'static, str>);

impl ColorValue {
    /// The CSS `transparent` keyword.
    pub const TRANSPARENT: ColorValue = ColorValue::from_static("transparent");

    /// Wraps a static string without allocating.
    pub const fn from_static(value: &'static str) -> Self {
        ColorValue(Cow::Borrowed(value))
    }

    /// The token as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the `transparent` keyword.
    pub fn is_transparent(&self) -> bool {
        self.0.eq_ignore_ascii_case("transparent")
    }
}

impl From<&'static str> for ColorValue {
    fn from(value: &'static str) -> Self {
        ColorValue::from_static(value)
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue(Cow::Owned(value))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ColorValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ColorValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
