//! Resolved style descriptors.
//!
//! [`resolve_style`] is the pure entry point: given the card kind, the
//! caller's overrides, the mode and the hover flag, it returns a fresh
//! [`ResolvedStyle`]. Nothing is cached or patched; consumers call it again
//! on every change.

use std::time::Duration;

use serde::{Serialize, Serializer};

use super::chain::{FallbackChain, ResolveInput, ResolvedColor};
use super::css::InlineStyle;
use super::overrides::{ColorOverrides, Slot};
use super::palette::{border_tint, surface, CardKind};
use super::value::ColorValue;
use crate::theme::ColorMode;

/// Colors for one render pass of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    pub kind: CardKind,
    pub mode: ColorMode,
    pub outer_background: ResolvedColor,
    pub inner_background: ResolvedColor,
    pub text_color: ResolvedColor,
    pub sub_text_color: ResolvedColor,
    /// Present for cards with a CTA panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaStyle>,
}

impl ResolvedStyle {
    /// The resolved color for `slot`.
    pub fn slot(&self, slot: Slot) -> &ResolvedColor {
        match slot {
            Slot::OuterBackground => &self.outer_background,
            Slot::InnerBackground => &self.inner_background,
            Slot::Text => &self.text_color,
            Slot::SubText => &self.sub_text_color,
        }
    }

    /// Inline declarations for the outer container.
    pub fn outer_css(&self) -> InlineStyle {
        InlineStyle::new()
            .declare("background-color", self.outer_background.value.as_ref())
            .declare("color", self.text_color.value.as_ref())
    }

    /// Inline declarations for the inner panel.
    pub fn inner_css(&self) -> InlineStyle {
        InlineStyle::new().declare("background-color", self.inner_background.value.as_ref())
    }

    /// Inline declarations for secondary text.
    pub fn sub_text_css(&self) -> InlineStyle {
        InlineStyle::new().declare("color", self.sub_text_color.value.as_ref())
    }
}

/// Background and border of the CTA panel in one interaction state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaSurface {
    pub background: ColorValue,
    pub border_color: ColorValue,
}

impl CtaSurface {
    /// No visible surface.
    pub fn hidden() -> Self {
        Self {
            background: ColorValue::TRANSPARENT,
            border_color: ColorValue::TRANSPARENT,
        }
    }

    /// Returns `true` if both background and border are transparent.
    pub fn is_hidden(&self) -> bool {
        self.background.is_transparent() && self.border_color.is_transparent()
    }
}

/// An interpolation the renderer applies between CTA states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    #[serde(serialize_with = "serialize_millis", rename = "duration_ms")]
    pub duration: Duration,
    pub properties: &'static [&'static str],
}

impl Transition {
    /// The CTA transition: 0.3s over background and border color.
    pub fn cta() -> Self {
        Self {
            duration: Duration::from_millis(300),
            properties: &["background-color", "border-color"],
        }
    }

    /// CSS `transition` value, e.g. `background-color 0.3s, border-color 0.3s`.
    pub fn to_css(&self) -> String {
        let seconds = self.duration.as_secs_f64();
        self.properties
            .iter()
            .map(|property| format!("{} {}s", property, seconds))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Both CTA states plus the one currently shown.
///
/// Renderers that animate interpolate from one state to the other using
/// [`transition`](Self::transition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaStyle {
    pub idle: CtaSurface,
    pub hovered: CtaSurface,
    pub transition: Transition,
    pub is_hovered: bool,
}

impl CtaStyle {
    /// Builds the CTA treatment from the resolved inner background.
    ///
    /// The hovered surface uses the inner background when set, otherwise the
    /// opaque surface for `mode`.
    pub fn new(inner_background: &ResolvedColor, mode: ColorMode, is_hovered: bool) -> Self {
        Self {
            idle: CtaSurface::hidden(),
            hovered: CtaSurface {
                background: inner_background
                    .value
                    .clone()
                    .unwrap_or_else(|| surface(mode)),
                border_color: border_tint(mode),
            },
            transition: Transition::cta(),
            is_hovered,
        }
    }

    /// The surface for the current interaction state.
    pub fn current(&self) -> &CtaSurface {
        if self.is_hovered {
            &self.hovered
        } else {
            &self.idle
        }
    }

    /// Inline declarations for the panel in its current state.
    pub fn css(&self) -> InlineStyle {
        let surface = self.current();
        InlineStyle::new()
            .declare("background-color", Some(&surface.background))
            .declare("border-color", Some(&surface.border_color))
            .declare_raw("transition", self.transition.to_css())
    }
}

/// Resolves every slot of a card.
///
/// Pure: identical inputs give identical outputs. `hovered` only affects
/// cards with a CTA panel.
pub fn resolve_style(
    kind: CardKind,
    overrides: &ColorOverrides,
    mode: ColorMode,
    hovered: bool,
) -> ResolvedStyle {
    let chain = FallbackChain::standard();
    let input = ResolveInput {
        kind,
        overrides,
        mode,
    };

    let inner_background = chain.resolve(Slot::InnerBackground, &input);
    let cta = kind
        .has_cta()
        .then(|| CtaStyle::new(&inner_background, mode, hovered));

    ResolvedStyle {
        kind,
        mode,
        outer_background: chain.resolve(Slot::OuterBackground, &input),
        inner_background,
        text_color: chain.resolve(Slot::Text, &input),
        sub_text_color: chain.resolve(Slot::SubText, &input),
        cta,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn resolve_style_is_pure(
            bg in proptest::option::of("#[0-9a-f]{3}"),
            dark_text in proptest::option::of("#[0-9a-f]{3}"),
            dark in any::<bool>(),
            hovered in any::<bool>(),
            content in any::<bool>(),
        ) {
            let overrides = ColorOverrides {
                bg_color: bg.map(|s| ColorValue::from(s)),
                dark_text_color: dark_text.map(|s| ColorValue::from(s)),
                ..ColorOverrides::default()
            };
            let kind = if content { CardKind::Content } else { CardKind::Topic };
            let mode = ColorMode::from_dark(dark);

            prop_assert_eq!(
                resolve_style(kind, &overrides, mode, hovered),
                resolve_style(kind, &overrides, mode, hovered)
            );
        }
    }
}
