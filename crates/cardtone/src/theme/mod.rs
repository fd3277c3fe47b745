//! The ambient light/dark theme and how consumers observe it.
//!
//! Two layers:
//!
//! - [`adaptive`]: the [`ColorMode`] value and OS detection, with a
//!   process-wide override for tests ([`set_theme_detector`]).
//! - [`signal`]: the [`ThemeSignal`] capability injected into consumers,
//!   its scoped [`Subscription`] handle, and the stock sources
//!   ([`ThemeStore`], [`OsThemeSignal`]).
//!
//! Consumers never reach for a global. They receive a signal at mount time,
//! which is what lets tests drive theme flips deterministically:
//!
//! ```rust
//! use std::rc::Rc;
//! use cardtone::{ColorMode, ThemeResolver, ThemeStore};
//!
//! let store = Rc::new(ThemeStore::new(ColorMode::Light));
//! let resolver = ThemeResolver::mount(&store, |_| {});
//! store.set(ColorMode::Dark);
//! assert!(resolver.is_dark());
//! ```

pub mod adaptive;
pub mod signal;

pub use adaptive::{detect_color_mode, reset_theme_detector, set_theme_detector, ColorMode};
pub use signal::{Listeners, OsThemeSignal, Subscription, ThemeSignal, ThemeStore};
