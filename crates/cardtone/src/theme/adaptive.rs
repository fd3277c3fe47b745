//! Color mode and OS-level detection.
//!
//! [`detect_color_mode`] asks the configured detector for the user's
//! preferred scheme. The default detector queries the OS through the
//! `dark-light` crate. Override it for testing with [`set_theme_detector`]:
//!
//! ```rust
//! use cardtone::{detect_color_mode, reset_theme_detector, set_theme_detector, ColorMode};
//!
//! set_theme_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! reset_theme_detector();
//! ```
//!
//! Detection never fails. An OS that cannot be queried, or one that reports
//! no preference, resolves to [`ColorMode::Light`].

use std::sync::Mutex;

use dark_light::Mode as OsThemeMode;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The active color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light mode (light surfaces, dark text).
    #[default]
    Light,
    /// Dark mode (dark surfaces, light text).
    Dark,
}

impl ColorMode {
    /// Builds a mode from an "is dark theme active" flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Returns `true` for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by [`detect_color_mode`].
///
/// This is process-wide. Tests that call it should restore the default with
/// [`reset_theme_detector`] and run serially.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores OS-based detection.
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

/// Detects the user's preferred color mode.
///
/// # Returns
///
/// - [`ColorMode::Dark`] if the detector reports dark mode
/// - [`ColorMode::Light`] otherwise, including when the OS cannot be queried
pub fn detect_color_mode() -> ColorMode {
    let detector = *THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn os_theme_detector() -> ColorMode {
    match dark_light::detect() {
        Ok(OsThemeMode::Dark) => ColorMode::Dark,
        Ok(OsThemeMode::Light) | Ok(OsThemeMode::Unspecified) => ColorMode::Light,
        Err(err) => {
            tracing::debug!(error = ?err, "OS theme detection unavailable, using light mode");
            ColorMode::Light
        }
    }
}
