//! Caller-supplied color overrides.

use serde::{Deserialize, Serialize};

use super::value::ColorValue;
use crate::theme::ColorMode;

/// A region of a card that receives a resolved color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// The card's outer surface.
    OuterBackground,
    /// The inner panel laid over the outer surface.
    InnerBackground,
    /// Primary text.
    Text,
    /// Secondary text (descriptions, captions).
    SubText,
}

impl Slot {
    /// Every slot, in rendering order.
    pub const ALL: [Slot; 4] = [
        Slot::OuterBackground,
        Slot::InnerBackground,
        Slot::Text,
        Slot::SubText,
    ];
}

/// Optional per-card colors, one light and one dark field per slot.
///
/// Field names follow the card props the host passes in (`bgColor`,
/// `darkTextColor`, ...). Sub-text has no override; it always comes from the
/// card's built-in defaults.
///
/// ```rust
/// use cardtone::{ColorMode, ColorOverrides, Slot};
///
/// let overrides = ColorOverrides::new()
///     .bg_color("#f9f8f6")
///     .dark_text_color("#ffffff");
///
/// assert_eq!(overrides.for_mode(Slot::OuterBackground, ColorMode::Light).unwrap(), "#f9f8f6");
/// assert!(overrides.for_mode(Slot::Text, ColorMode::Light).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_bg_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_bg_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_inner_bg_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_text_color: Option<ColorValue>,
}

impl ColorOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bg_color(mut self, value: impl Into<ColorValue>) -> Self {
        self.bg_color = Some(value.into());
        self
    }

    pub fn inner_bg_color(mut self, value: impl Into<ColorValue>) -> Self {
        self.inner_bg_color = Some(value.into());
        self
    }

    pub fn text_color(mut self, value: impl Into<ColorValue>) -> Self {
        self.text_color = Some(value.into());
        self
    }

    pub fn dark_bg_color(mut self, value: impl Into<ColorValue>) -> Self {
        self.dark_bg_color = Some(value.into());
        self
    }

    pub fn dark_inner_bg_color(mut self, value: impl Into<ColorValue>) -> Self {
        self.dark_inner_bg_color = Some(value.into());
        self
    }

    pub fn dark_text_color(mut self, value: impl Into<ColorValue>) -> Self {
        self.dark_text_color = Some(value.into());
        self
    }

    /// The light-mode override for `slot`.
    pub fn light(&self, slot: Slot) -> Option<&ColorValue> {
        match slot {
            Slot::OuterBackground => self.bg_color.as_ref(),
            Slot::InnerBackground => self.inner_bg_color.as_ref(),
            Slot::Text => self.text_color.as_ref(),
            Slot::SubText => None,
        }
    }

    /// The dark-mode override for `slot`.
    pub fn dark(&self, slot: Slot) -> Option<&ColorValue> {
        match slot {
            Slot::OuterBackground => self.dark_bg_color.as_ref(),
            Slot::InnerBackground => self.dark_inner_bg_color.as_ref(),
            Slot::Text => self.dark_text_color.as_ref(),
            Slot::SubText => None,
        }
    }

    /// The override for `slot` in `mode`. Never crosses modes.
    pub fn for_mode(&self, slot: Slot, mode: ColorMode) -> Option<&ColorValue> {
        match mode {
            ColorMode::Light => self.light(slot),
            ColorMode::Dark => self.dark(slot),
        }
    }

    /// Returns `true` if the caller set an outer background for either mode.
    ///
    /// This gates the opaque inner-background default.
    pub fn customizes_outer(&self) -> bool {
        self.bg_color.is_some() || self.dark_bg_color.is_some()
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        assert!(ColorOverrides::new().is_empty());
        assert!(!ColorOverrides::new().text_color("#000").is_empty());
    }

    #[test]
    fn test_for_mode_does_not_cross_modes() {
        let overrides = ColorOverrides::new().dark_text_color("#ffffff");
        assert_eq!(
            overrides.for_mode(Slot::Text, ColorMode::Dark).unwrap(),
            "#ffffff"
        );
        assert!(overrides.for_mode(Slot::Text, ColorMode::Light).is_none());
    }

    #[test]
    fn test_sub_text_has_no_override() {
        let overrides = ColorOverrides::new()
            .text_color("#111")
            .dark_text_color("#eee");
        assert!(overrides.light(Slot::SubText).is_none());
        assert!(overrides.dark(Slot::SubText).is_none());
    }

    #[test]
    fn test_customizes_outer() {
        assert!(!ColorOverrides::new().inner_bg_color("#fff").customizes_outer());
        assert!(ColorOverrides::new().bg_color("#f9f8f6").customizes_outer());
        assert!(ColorOverrides::new().dark_bg_color("#111").customizes_outer());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let overrides: ColorOverrides = serde_yaml::from_str(
            r##"
            bgColor: "#f9f8f6"
            darkInnerBgColor: "#222"
            "##,
        )
        .unwrap();

        assert_eq!(overrides.bg_color.unwrap(), "#f9f8f6");
        assert_eq!(overrides.dark_inner_bg_color.unwrap(), "#222");
        assert!(overrides.text_color.is_none());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let json = serde_json::to_string(&ColorOverrides::new().text_color("#000")).unwrap();
        assert_eq!(json, r##"{"textColor":"#000"}"##);
    }
}
