use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::{Card, MountedCard};
use crate::style::{CardKind, ColorOverrides, CtaStyle};
use crate::theme::ThemeSignal;

/// Configuration for a [`ContentCard`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCardProps {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Label shown in the CTA panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(flatten)]
    pub colors: ColorOverrides,
}

impl ContentCardProps {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn cta_label(mut self, label: impl Into<String>) -> Self {
        self.cta_label = Some(label.into());
        self
    }

    pub fn colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }
}

/// A content card with a CTA panel that surfaces on hover.
///
/// ```rust
/// use std::rc::Rc;
/// use cardtone::{Card, ColorMode, ContentCard, ContentCardProps, ThemeStore};
///
/// let store = Rc::new(ThemeStore::new(ColorMode::Light));
/// let card = ContentCard::mount(ContentCardProps::new("Quickstart"), &store);
///
/// assert!(card.cta().current().is_hidden());
/// card.pointer_enter();
/// assert_eq!(card.cta().current().background, "#ffffff");
/// ```
#[derive(Debug)]
pub struct ContentCard {
    props: ContentCardProps,
    card: MountedCard,
}

impl ContentCard {
    /// Mounts the card and subscribes it to `signal`.
    pub fn mount<S>(props: ContentCardProps, signal: &Rc<S>) -> Self
    where
        S: ThemeSignal + ?Sized + 'static,
    {
        let card = MountedCard::mount(CardKind::Content, props.colors.clone(), signal);
        Self { props, card }
    }

    pub fn props(&self) -> &ContentCardProps {
        &self.props
    }

    /// Pointer entered the card. Returns `true` if the hover state changed.
    pub fn pointer_enter(&self) -> bool {
        self.card.set_hovered(true)
    }

    /// Pointer left the card. Returns `true` if the hover state changed.
    pub fn pointer_leave(&self) -> bool {
        self.card.set_hovered(false)
    }

    pub fn is_hovered(&self) -> bool {
        self.card.is_hovered()
    }

    /// The CTA treatment for the current render pass.
    pub fn cta(&self) -> CtaStyle {
        let hovered = self.is_hovered();
        self.card
            .with_style(|style| CtaStyle::new(&style.inner_background, style.mode, hovered))
    }
}

impl Card for ContentCard {
    fn mounted(&self) -> &MountedCard {
        &self.card
    }

    fn mounted_mut(&mut self) -> &mut MountedCard {
        &mut self.card
    }

    fn href(&self) -> Option<&str> {
        self.props.href.as_deref()
    }
}
