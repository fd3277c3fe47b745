//! # Cardtone - Theme-Reactive Card Colors
//!
//! `cardtone` resolves the colors of documentation cards against a light/dark
//! theme that can flip at any time, from outside the card's control.
//!
//! ## Core Concepts
//!
//! - [`ThemeSignal`]: the injected capability a card observes (read the
//!   current [`ColorMode`], subscribe to changes)
//! - [`ThemeResolver`]: a mounted consumer's cached mode plus its scoped
//!   [`Subscription`]
//! - [`ColorOverrides`]: caller-supplied light and dark colors per slot
//! - [`resolve_style`]: the pure fallback-chain resolution producing a
//!   [`ResolvedStyle`]
//! - [`TopicCard`] / [`ContentCard`]: mounted consumers that keep their
//!   resolved style current in an [`Observable`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use cardtone::{Card, ColorMode, ColorOverrides, ContentCard, ContentCardProps, ThemeStore};
//!
//! let store = Rc::new(ThemeStore::new(ColorMode::Light));
//! let card = ContentCard::mount(
//!     ContentCardProps::new("Quickstart")
//!         .href("/docs/quickstart")
//!         .colors(ColorOverrides::new().bg_color("#f9f8f6")),
//!     &store,
//! );
//!
//! let style = card.style();
//! assert_eq!(style.outer_background.as_str(), Some("#f9f8f6"));
//! assert_eq!(style.inner_background.as_str(), Some("#ffffff"));
//!
//! store.set(ColorMode::Dark);
//! assert_eq!(card.style().inner_background.as_str(), Some("#1b1b1d"));
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded and synchronous. Recomputation runs on
//! the thread that delivers the theme change or pointer event; nothing
//! blocks and nothing is deferred.

pub mod cards;
pub mod config;
mod error;
pub mod reactive;
pub mod resolver;
pub mod style;
pub mod theme;

pub use error::ConfigError;

pub use cards::{Card, ContentCard, ContentCardProps, MountedCard, TopicCard, TopicCardProps};
pub use config::{DeckConfig, MountedDeck, ThemePreference};
pub use reactive::Observable;
pub use resolver::ThemeResolver;
pub use style::{
    resolve_style, CardKind, ColorOverrides, ColorSource, ColorValue, CtaStyle, CtaSurface,
    FallbackChain, InlineStyle, ResolveInput, ResolvedColor, ResolvedStyle, Slot, Transition,
};
pub use theme::{
    detect_color_mode, reset_theme_detector, set_theme_detector, ColorMode, Listeners,
    OsThemeSignal, Subscription, ThemeSignal, ThemeStore,
};
