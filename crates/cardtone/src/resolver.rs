//! Per-consumer cached view of the theme signal.
//!
//! A [`ThemeResolver`] is what a consumer holds while mounted. It reads the
//! signal once up front, so the first render already uses the right mode,
//! then subscribes. Each notification re-reads the signal and forwards the
//! new mode to the consumer only when it differs from the cached one.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use cardtone::{ColorMode, ThemeResolver, ThemeStore};
//!
//! let store = Rc::new(ThemeStore::new(ColorMode::Light));
//! let changes = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&changes);
//!
//! let mut resolver = ThemeResolver::mount(&store, move |_| seen.set(seen.get() + 1));
//! store.set(ColorMode::Light); // spurious, no change
//! store.set(ColorMode::Dark);
//! assert_eq!(changes.get(), 1);
//!
//! resolver.release();
//! store.set(ColorMode::Light);
//! assert_eq!(changes.get(), 1);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::theme::{ColorMode, Subscription, ThemeSignal};

/// A mounted consumer's subscription plus its cached color mode.
pub struct ThemeResolver {
    cached: Rc<Cell<ColorMode>>,
    subscription: Subscription,
    mounted: bool,
}

impl ThemeResolver {
    /// Reads `signal`, caches the mode, and subscribes to changes.
    ///
    /// `on_change` runs synchronously with the new mode whenever a
    /// notification carries a mode different from the cached one. The
    /// subscription keeps `signal` alive until it is released.
    pub fn mount<S, F>(signal: &Rc<S>, on_change: F) -> Self
    where
        S: ThemeSignal + ?Sized + 'static,
        F: Fn(ColorMode) + 'static,
    {
        let initial = signal.current();
        let cached = Rc::new(Cell::new(initial));
        tracing::debug!(mode = %initial, "theme resolver mounted");

        let source = Rc::clone(signal);
        let cell = Rc::clone(&cached);
        let subscription = signal.subscribe(Box::new(move || {
            let fresh = source.current();
            if cell.get() == fresh {
                tracing::trace!(mode = %fresh, "theme notification without change");
                return;
            }
            cell.set(fresh);
            tracing::debug!(mode = %fresh, "theme changed");
            on_change(fresh);
        }));

        Self {
            cached,
            subscription,
            mounted: true,
        }
    }

    /// The cached mode.
    pub fn mode(&self) -> ColorMode {
        self.cached.get()
    }

    /// Returns `true` if the cached mode is dark.
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Returns `true` until [`release`](Self::release) is called.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Unsubscribes. The cached mode is kept; releasing twice is a no-op.
    pub fn release(&mut self) {
        if self.mounted {
            tracing::debug!(mode = %self.mode(), "theme resolver released");
        }
        self.mounted = false;
        self.subscription.release();
    }
}

impl fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("mode", &self.mode())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeStore;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<ColorMode>>>, impl Fn(ColorMode) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |mode| sink.borrow_mut().push(mode))
    }

    #[test]
    fn test_initial_read_is_synchronous() {
        let store = Rc::new(ThemeStore::new(ColorMode::Dark));
        let (log, on_change) = recorder();
        let resolver = ThemeResolver::mount(&store, on_change);

        assert_eq!(resolver.mode(), ColorMode::Dark);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_change_is_forwarded_once() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        let (log, on_change) = recorder();
        let resolver = ThemeResolver::mount(&store, on_change);

        store.set(ColorMode::Dark);
        assert_eq!(*log.borrow(), vec![ColorMode::Dark]);
        assert!(resolver.is_dark());
    }

    #[test]
    fn test_spurious_notifications_are_ignored() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        let (log, on_change) = recorder();
        let _resolver = ThemeResolver::mount(&store, on_change);

        store.set(ColorMode::Light);
        store.set(ColorMode::Light);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_each_toggle_forwards_once() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        let (log, on_change) = recorder();
        let _resolver = ThemeResolver::mount(&store, on_change);

        store.toggle();
        store.toggle();
        store.toggle();
        assert_eq!(
            *log.borrow(),
            vec![ColorMode::Dark, ColorMode::Light, ColorMode::Dark]
        );
    }

    #[test]
    fn test_release_stops_forwarding() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        let (log, on_change) = recorder();
        let mut resolver = ThemeResolver::mount(&store, on_change);

        resolver.release();
        assert!(!resolver.is_mounted());
        store.toggle();

        assert!(log.borrow().is_empty());
        assert_eq!(resolver.mode(), ColorMode::Light);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_double_release_is_noop() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        let mut resolver = ThemeResolver::mount(&store, |_| {});
        resolver.release();
        resolver.release();
        assert!(!resolver.is_mounted());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        {
            let _resolver = ThemeResolver::mount(&store, |_| {});
            assert_eq!(store.subscriber_count(), 1);
        }
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_independent_resolvers() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        let (first_log, first) = recorder();
        let (second_log, second) = recorder();
        let mut first_resolver = ThemeResolver::mount(&store, first);
        let second_resolver = ThemeResolver::mount(&store, second);

        first_resolver.release();
        store.toggle();

        assert!(first_log.borrow().is_empty());
        assert_eq!(*second_log.borrow(), vec![ColorMode::Dark]);
        assert!(second_resolver.is_dark());
    }

    #[test]
    fn test_mount_through_trait_object() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        let signal: Rc<dyn ThemeSignal> = store.clone();
        let resolver = ThemeResolver::mount(&signal, |_| {});

        store.set(ColorMode::Dark);
        assert!(resolver.is_dark());
    }

    #[test]
    fn test_tracks_shared_store_after_mount_handle_dropped() {
        let host = ThemeStore::new(ColorMode::Light);
        let (log, on_change) = recorder();
        let resolver = ThemeResolver::mount(&Rc::new(host.clone()), on_change);

        host.set(ColorMode::Dark);
        assert_eq!(resolver.mode(), ColorMode::Dark);
        assert_eq!(*log.borrow(), vec![ColorMode::Dark]);
    }

    #[test]
    fn test_release_frees_signal() {
        let store = Rc::new(ThemeStore::new(ColorMode::Light));
        let mut resolver = ThemeResolver::mount(&store, |_| {});
        assert_eq!(Rc::strong_count(&store), 2);

        resolver.release();
        assert_eq!(Rc::strong_count(&store), 1);
    }

    #[test]
    fn test_fixed_mode_signal_never_changes() {
        let signal = Rc::new(ColorMode::Dark);
        let mut resolver = ThemeResolver::mount(&signal, |_| {});
        assert!(resolver.is_dark());
        assert!(resolver.is_mounted());
        resolver.release();
        assert!(!resolver.is_mounted());
    }
}
