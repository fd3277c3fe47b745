//! Color resolution for cards.
//!
//! Resolution is per slot and most-specific-first:
//!
//! 1. In dark mode, the caller's dark override for the slot.
//! 2. In light mode, the caller's light override for the slot.
//! 3. The card kind's built-in default, which may itself depend on the mode
//!    and, for the inner background, on whether the outer background was
//!    customized.
//! 4. Otherwise the slot is unset and the renderer keeps its structural
//!    styling.
//!
//! Overrides never cross modes: a dark override is invisible in light mode
//! and vice versa.
//!
//! ```rust
//! use cardtone::{resolve_style, CardKind, ColorMode, ColorOverrides};
//!
//! let overrides = ColorOverrides::new().dark_text_color("#ffffff");
//!
//! let dark = resolve_style(CardKind::Topic, &overrides, ColorMode::Dark, false);
//! assert_eq!(dark.text_color.as_str(), Some("#ffffff"));
//!
//! let light = resolve_style(CardKind::Topic, &overrides, ColorMode::Light, false);
//! assert_eq!(light.text_color.as_str(), Some("#1c1e21"));
//! ```
//!
//! Color strings are opaque. Nothing here parses or validates them.

mod chain;
mod css;
mod overrides;
mod palette;
mod resolved;
mod value;

pub use chain::{ColorSource, FallbackChain, ResolveInput, ResolvedColor};
pub use css::InlineStyle;
pub use overrides::{ColorOverrides, Slot};
pub use palette::{border_tint, surface, CardKind, DARK_SURFACE, LIGHT_SURFACE};
pub use resolved::{resolve_style, CtaStyle, CtaSurface, ResolvedStyle, Transition};
pub use value::ColorValue;
