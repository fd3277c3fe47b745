//! Theme-reactive cards.
//!
//! A mounted card owns a [`ThemeResolver`] and an [`Observable`] holding its
//! current [`ResolvedStyle`]. The style is resolved once at mount and again
//! on each real theme change (and, for [`ContentCard`], on each hover
//! change). Hosts redraw by watching it:
//!
//! ```rust
//! use std::rc::Rc;
//! use cardtone::{Card, ColorMode, ThemeStore, TopicCard, TopicCardProps};
//!
//! let store = Rc::new(ThemeStore::new(ColorMode::Light));
//! let card = TopicCard::mount(TopicCardProps::new("Guides"), &store);
//!
//! let _redraw = card.watch(|| { /* re-render */ });
//! store.set(ColorMode::Dark);
//! assert_eq!(card.style().mode, ColorMode::Dark);
//! assert_eq!(card.recompute_count(), 2);
//! ```
//!
//! Unmounting (or dropping) a card releases its subscription. The last
//! resolved style stays readable after an explicit [`Card::unmount`].

mod content;
mod topic;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::reactive::Observable;
use crate::resolver::ThemeResolver;
use crate::style::{resolve_style, CardKind, ColorOverrides, ResolvedStyle};
use crate::theme::{ColorMode, Subscription, ThemeSignal};

pub use content::{ContentCard, ContentCardProps};
pub use topic::{TopicCard, TopicCardProps};

struct CardState {
    kind: CardKind,
    overrides: ColorOverrides,
    hovered: Cell<bool>,
    style: Observable<ResolvedStyle>,
}

impl CardState {
    fn recompute(&self, mode: ColorMode) {
        let style = resolve_style(self.kind, &self.overrides, mode, self.hovered.get());
        self.style.set(style);
    }
}

/// The reactive machinery shared by every card kind.
pub struct MountedCard {
    state: Rc<CardState>,
    resolver: ThemeResolver,
}

impl MountedCard {
    /// Mounts a card of `kind` against `signal`.
    pub fn mount<S>(kind: CardKind, overrides: ColorOverrides, signal: &Rc<S>) -> Self
    where
        S: ThemeSignal + ?Sized + 'static,
    {
        let placeholder = resolve_style(kind, &overrides, ColorMode::default(), false);
        let state = Rc::new(CardState {
            kind,
            overrides,
            hovered: Cell::new(false),
            style: Observable::new(placeholder),
        });

        let on_change = Rc::clone(&state);
        let resolver = ThemeResolver::mount(signal, move |mode| on_change.recompute(mode));
        state.recompute(resolver.mode());
        tracing::debug!(?kind, mode = %resolver.mode(), "card mounted");

        Self { state, resolver }
    }

    /// The card kind.
    pub fn kind(&self) -> CardKind {
        self.state.kind
    }

    /// The caller's overrides.
    pub fn overrides(&self) -> &ColorOverrides {
        &self.state.overrides
    }

    /// The current resolved style.
    pub fn style(&self) -> ResolvedStyle {
        self.state.style.get()
    }

    /// Runs `f` against the current resolved style without cloning it.
    pub fn with_style<R>(&self, f: impl FnOnce(&ResolvedStyle) -> R) -> R {
        self.state.style.with(f)
    }

    /// Registers a redraw callback, called after each recomputation.
    pub fn watch(&self, on_change: impl Fn() + 'static) -> Subscription {
        self.state.style.watch(on_change)
    }

    /// Number of times the style has been resolved since mount.
    pub fn recompute_count(&self) -> u64 {
        self.state.style.version()
    }

    /// The cached color mode.
    pub fn mode(&self) -> ColorMode {
        self.resolver.mode()
    }

    /// Returns `true` until the card is unmounted.
    pub fn is_mounted(&self) -> bool {
        self.resolver.is_mounted()
    }

    /// Whether the pointer is over the card.
    pub fn is_hovered(&self) -> bool {
        self.state.hovered.get()
    }

    /// Releases the theme subscription and drops interaction state.
    /// The frozen style is resolved without hover. Unmounting twice is a
    /// no-op.
    pub fn unmount(&mut self) {
        if self.resolver.is_mounted() {
            tracing::debug!(kind = ?self.state.kind, "card unmounted");
        }
        self.resolver.release();
        if self.state.hovered.replace(false) {
            self.state.recompute(self.resolver.mode());
        }
    }

    /// Updates the hover flag. Recomputes and returns `true` only when the
    /// flag actually changed on a mounted card.
    fn set_hovered(&self, hovered: bool) -> bool {
        if !self.resolver.is_mounted() || self.state.hovered.replace(hovered) == hovered {
            return false;
        }
        tracing::trace!(hovered, "card interaction changed");
        self.state.recompute(self.resolver.mode());
        true
    }
}

impl fmt::Debug for MountedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedCard")
            .field("kind", &self.state.kind)
            .field("mode", &self.mode())
            .field("mounted", &self.is_mounted())
            .field("hovered", &self.is_hovered())
            .field("recomputes", &self.recompute_count())
            .finish()
    }
}

/// Operations common to every mounted card.
pub trait Card {
    /// The shared mount state backing this card.
    fn mounted(&self) -> &MountedCard;

    /// Mutable access to the mount state, for unmounting.
    fn mounted_mut(&mut self) -> &mut MountedCard;

    /// The current resolved style.
    fn style(&self) -> ResolvedStyle {
        self.mounted().style()
    }

    /// Registers a redraw callback.
    fn watch(&self, on_change: impl Fn() + 'static) -> Subscription
    where
        Self: Sized,
    {
        self.mounted().watch(on_change)
    }

    /// Number of style resolutions since mount.
    fn recompute_count(&self) -> u64 {
        self.mounted().recompute_count()
    }

    /// The cached color mode.
    fn mode(&self) -> ColorMode {
        self.mounted().mode()
    }

    /// Returns `true` until the card is unmounted.
    fn is_mounted(&self) -> bool {
        self.mounted().is_mounted()
    }

    /// Releases the theme subscription; idempotent.
    fn unmount(&mut self) {
        self.mounted_mut().unmount();
    }

    /// Navigation target, passed through untouched.
    fn href(&self) -> Option<&str>;
}
