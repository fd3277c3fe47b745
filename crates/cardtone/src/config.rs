//! Card deck configuration.
//!
//! A deck lists the cards a page shows plus the theme to start in:
//!
//! ```yaml
//! theme: auto          # light | dark | auto (default)
//! topics:
//!   - title: Guides
//!     href: /docs/guides
//!     darkTextColor: "#ffffff"
//! content:
//!   - title: Quickstart
//!     ctaLabel: Start here
//!     bgColor: "#f9f8f6"
//! ```
//!
//! ```rust
//! use std::rc::Rc;
//! use cardtone::{ColorMode, DeckConfig};
//!
//! let deck = DeckConfig::from_yaml("theme: dark\ntopics:\n  - title: Guides\n").unwrap();
//! let store = Rc::new(deck.store());
//! let mounted = deck.mount(&store);
//! assert_eq!(mounted.topics.len(), 1);
//! assert_eq!(deck.initial_mode(), ColorMode::Dark);
//! ```

use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::cards::{ContentCard, ContentCardProps, TopicCard, TopicCardProps};
use crate::error::ConfigError;
use crate::theme::{detect_color_mode, ColorMode, ThemeSignal, ThemeStore};

/// The mode a deck starts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS, via [`detect_color_mode`].
    #[default]
    Auto,
}

impl ThemePreference {
    /// Resolves the preference to a concrete mode.
    pub fn resolve(self) -> ColorMode {
        match self {
            ThemePreference::Light => ColorMode::Light,
            ThemePreference::Dark => ColorMode::Dark,
            ThemePreference::Auto => detect_color_mode(),
        }
    }
}

/// A page's cards and starting theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub theme: ThemePreference,
    pub topics: Vec<TopicCardProps>,
    pub content: Vec<ContentCardProps>,
}

/// Cards mounted from a [`DeckConfig`].
#[derive(Debug)]
pub struct MountedDeck {
    pub topics: Vec<TopicCard>,
    pub content: Vec<ContentCard>,
}

impl DeckConfig {
    /// Parses a deck from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the YAML does not describe a deck.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(ConfigError::Parse)
    }

    /// Loads a deck from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::ParseFile`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let deck: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            topics = deck.topics.len(),
            content = deck.content.len(),
            "card deck loaded"
        );
        Ok(deck)
    }

    /// The mode the deck starts in.
    pub fn initial_mode(&self) -> ColorMode {
        self.theme.resolve()
    }

    /// A theme store seeded with [`initial_mode`](Self::initial_mode).
    pub fn store(&self) -> ThemeStore {
        ThemeStore::new(self.initial_mode())
    }

    /// Mounts every card in the deck against `signal`.
    pub fn mount<S>(&self, signal: &Rc<S>) -> MountedDeck
    where
        S: ThemeSignal + ?Sized + 'static,
    {
        MountedDeck {
            topics: self
                .topics
                .iter()
                .cloned()
                .map(|props| TopicCard::mount(props, signal))
                .collect(),
            content: self
                .content
                .iter()
                .cloned()
                .map(|props| ContentCard::mount(props, signal))
                .collect(),
        }
    }
}
