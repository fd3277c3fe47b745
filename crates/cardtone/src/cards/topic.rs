use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::{Card, MountedCard};
use crate::style::{CardKind, ColorOverrides};
use crate::theme::ThemeSignal;

/// Configuration for a [`TopicCard`].
///
/// Content fields are passed through to the renderer. Color fields are
/// flattened, so a YAML or JSON record reads `{ title, href, bgColor, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCardProps {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub colors: ColorOverrides,
}

impl TopicCardProps {
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

    pub fn colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }
}

/// A topic card: outer and inner backgrounds, text and sub-text.
#[derive(Debug)]
pub struct TopicCard {
    props: TopicCardProps,
    card: MountedCard,
}

impl TopicCard {
    /// Mounts the card and subscribes it to `signal`.
    pub fn mount<S>(props: TopicCardProps, signal: &Rc<S>) -> Self
    where
        S: ThemeSignal + ?Sized + 'static,
    {
        let card = MountedCard::mount(CardKind::Topic, props.colors.clone(), signal);
        Self { props, card }
    }

    pub fn props(&self) -> &TopicCardProps {
        &self.props
    }
}

impl Card for TopicCard {
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
