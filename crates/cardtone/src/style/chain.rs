//! Per-slot fallback chain.
//!
//! A [`FallbackChain`] is an ordered list of steps. Each step is a pure
//! function of the slot, the caller's overrides, the mode and the card kind.
//! Steps are tried in order; the first one that yields a value wins. When
//! none does, the slot resolves to unset.
//!
//! ```text
//! FallbackChain::standard()
//! ├── DarkOverride    → only in dark mode
//! ├── LightOverride   → only in light mode
//! └── BuiltInDefault  → CardKind::default_color
//! ```
//!
//! The order lives in data rather than in nested conditionals so it can be
//! inspected and tested directly.

use std::fmt;

use serde::Serialize;

use super::overrides::{ColorOverrides, Slot};
use super::palette::CardKind;
use super::value::ColorValue;
use crate::theme::ColorMode;

/// Everything a step may look at.
#[derive(Debug, Clone, Copy)]
pub struct ResolveInput<'a> {
    pub kind: CardKind,
    pub overrides: &'a ColorOverrides,
    pub mode: ColorMode,
}

/// Which step produced a resolved color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    /// The caller's dark-mode override.
    DarkOverride,
    /// The caller's light-mode override.
    LightOverride,
    /// The card kind's built-in default.
    BuiltInDefault,
    /// No step produced a value.
    Unset,
}

impl fmt::Display for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DarkOverride => write!(f, "dark override"),
            Self::LightOverride => write!(f, "light override"),
            Self::BuiltInDefault => write!(f, "built-in default"),
            Self::Unset => write!(f, "unset"),
        }
    }
}

/// A slot's resolved color and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColor {
    pub value: Option<ColorValue>,
    pub source: ColorSource,
}

impl ResolvedColor {
    /// An unset slot.
    pub fn unset() -> Self {
        Self {
            value: None,
            source: ColorSource::Unset,
        }
    }

    /// The value as a string, or `None` when unset.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().map(ColorValue::as_str)
    }

    /// Returns `true` if no step produced a value.
    pub fn is_unset(&self) -> bool {
        self.value.is_none()
    }
}

type StepFn = fn(Slot, &ResolveInput<'_>) -> Option<ColorValue>;

fn dark_override(slot: Slot, input: &ResolveInput<'_>) -> Option<ColorValue> {
    match input.mode {
        ColorMode::Dark => input.overrides.dark(slot).cloned(),
        ColorMode::Light => None,
    }
}

fn light_override(slot: Slot, input: &ResolveInput<'_>) -> Option<ColorValue> {
    match input.mode {
        ColorMode::Light => input.overrides.light(slot).cloned(),
        ColorMode::Dark => None,
    }
}

fn built_in_default(slot: Slot, input: &ResolveInput<'_>) -> Option<ColorValue> {
    input
        .kind
        .default_color(slot, input.mode, input.overrides)
}

/// An ordered list of resolution steps.
#[derive(Clone)]
pub struct FallbackChain {
    steps: Vec<(ColorSource, StepFn)>,
}

impl FallbackChain {
    /// Dark override, then light override, then the built-in default.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                (ColorSource::DarkOverride, dark_override as StepFn),
                (ColorSource::LightOverride, light_override as StepFn),
                (ColorSource::BuiltInDefault, built_in_default as StepFn),
            ],
        }
    }

    /// The step sources, in evaluation order.
    pub fn order(&self) -> Vec<ColorSource> {
        self.steps.iter().map(|(source, _)| *source).collect()
    }

    /// Resolves one slot.
    pub fn resolve(&self, slot: Slot, input: &ResolveInput<'_>) -> ResolvedColor {
        self.steps
            .iter()
            .find_map(|(source, step)| {
                step(slot, input).map(|value| ResolvedColor {
                    value: Some(value),
                    source: *source,
                })
            })
            .unwrap_or_else(ResolvedColor::unset)
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackChain")
            .field("steps", &self.order())
            .finish()
    }
}
