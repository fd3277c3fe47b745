//! Built-in defaults for each card kind.
//!
//! Defaults are the last step of every fallback chain. Where a kind has no
//! default for a slot the slot stays unset and the renderer's structural
//! styling applies.
//!
//! | slot | Topic light | Topic dark | Content light | Content dark |
//! |---|---|---|---|---|
//! | outer | unset | unset | `transparent` | `transparent` |
//! | inner, outer customized | `#ffffff` | `#1b1b1d` | `#ffffff` | `#1b1b1d` |
//! | inner, otherwise | unset | unset | unset | unset |
//! | text | `#1c1e21` | `#e3e3e3` | unset | unset |
//! | sub-text | `rgba(0, 0, 0, 0.6)` | `rgba(255, 255, 255, 0.7)` | unset | unset |

use serde::{Deserialize, Serialize};

use super::overrides::{ColorOverrides, Slot};
use super::value::ColorValue;
use crate::theme::ColorMode;

pub const LIGHT_SURFACE: ColorValue = ColorValue::from_static("#ffffff");
pub const DARK_SURFACE: ColorValue = ColorValue::from_static("#1b1b1d");

const TOPIC_LIGHT_TEXT: ColorValue = ColorValue::from_static("#1c1e21");
const TOPIC_DARK_TEXT: ColorValue = ColorValue::from_static("#e3e3e3");
const LIGHT_SUB_TEXT: ColorValue = ColorValue::from_static("rgba(0, 0, 0, 0.6)");
const DARK_SUB_TEXT: ColorValue = ColorValue::from_static("rgba(255, 255, 255, 0.7)");

const LIGHT_BORDER_TINT: ColorValue = ColorValue::from_static("rgba(0, 0, 0, 0.1)");
const DARK_BORDER_TINT: ColorValue = ColorValue::from_static("rgba(255, 255, 255, 0.1)");

/// Which card is being resolved. Each kind carries its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Topic card: outer, inner, text and sub-text.
    Topic,
    /// Content card: outer, inner, text, plus a hover CTA panel.
    Content,
}

impl CardKind {
    /// The built-in default for `slot`.
    ///
    /// `overrides` is consulted only to decide whether the outer background
    /// was customized, which switches on the opaque inner surface.
    pub fn default_color(
        self,
        slot: Slot,
        mode: ColorMode,
        overrides: &ColorOverrides,
    ) -> Option<ColorValue> {
        match (self, slot) {
            (CardKind::Topic, Slot::OuterBackground) => None,
            (CardKind::Content, Slot::OuterBackground) => Some(ColorValue::TRANSPARENT),
            (_, Slot::InnerBackground) => {
                if overrides.customizes_outer() {
                    Some(surface(mode))
                } else {
                    None
                }
            }
            (CardKind::Topic, Slot::Text) => Some(match mode {
                ColorMode::Light => TOPIC_LIGHT_TEXT,
                ColorMode::Dark => TOPIC_DARK_TEXT,
            }),
            (CardKind::Content, Slot::Text) => None,
            (CardKind::Topic, Slot::SubText) => Some(match mode {
                ColorMode::Light => LIGHT_SUB_TEXT,
                ColorMode::Dark => DARK_SUB_TEXT,
            }),
            (CardKind::Content, Slot::SubText) => None,
        }
    }

    /// Returns `true` if this kind renders a hover CTA panel.
    pub fn has_cta(self) -> bool {
        self == CardKind::Content
    }
}

/// The opaque surface color for `mode`.
pub fn surface(mode: ColorMode) -> ColorValue {
    match mode {
        ColorMode::Light => LIGHT_SURFACE,
        ColorMode::Dark => DARK_SURFACE,
    }
}

/// The border tint for hovered panels in `mode`.
pub fn border_tint(mode: ColorMode) -> ColorValue {
    match mode {
        ColorMode::Light => LIGHT_BORDER_TINT,
        ColorMode::Dark => DARK_BORDER_TINT,
    }
}
