//! The ambient theme signal boundary.
//!
//! A [`ThemeSignal`] is the whole contract the resolver needs from its host:
//! a synchronous read of the current mode plus change notification. How the
//! host tracks the mode (a document attribute, a settings store, an OS
//! query) stays behind the trait.
//!
//! Notifications carry no payload. Subscribers re-read [`ThemeSignal::current`]
//! when called, so a source is free to fire spuriously.
//!
//! # Release Semantics
//!
//! [`Subscription::release`] takes effect before it returns. A listener that
//! is released while a notification is being dispatched (for example, by an
//! earlier listener in the same dispatch) is not called afterwards.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::adaptive::{detect_color_mode, ColorMode};

/// Change-notified read access to the active color mode.
pub trait ThemeSignal {
    /// Returns the mode at this instant. Must not fail.
    fn current(&self) -> ColorMode;

    /// Registers `on_change` to be called after the mode may have changed.
    ///
    /// The callback runs synchronously on the thread that mutates the
    /// signal. The returned handle severs the registration when released
    /// or dropped.
    fn subscribe(&self, on_change: Box<dyn Fn()>) -> Subscription;
}

/// Scoped registration handle returned by [`ThemeSignal::subscribe`].
///
/// Dropping the handle releases it, so a subscription held by a consumer
/// ends with that consumer on every exit path.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a handle that runs `release` once, on the first release or drop.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release, for sources that never change.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Returns `true` until the handle is released.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Severs the registration. Releasing twice is a no-op.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

struct Listener {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Rc<dyn Fn()>,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<Listener>,
}

/// A table of change listeners shared by signal sources and reactive cells.
///
/// Cloning yields another handle to the same table.
#[derive(Clone, Default)]
pub struct Listeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl Listeners {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener and returns the handle that removes it.
    pub fn add(&self, callback: Box<dyn Fn()>) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let id = {
            let mut table = self.table.borrow_mut();
            let id = table.next_id;
            table.next_id += 1;
            table.entries.push(Listener {
                id,
                active: Rc::clone(&active),
                callback: Rc::from(callback),
            });
            id
        };
        tracing::trace!(listener = id, "listener added");

        let table: Weak<RefCell<ListenerTable>> = Rc::downgrade(&self.table);
        Subscription::new(move || {
            // Cleared first: a dispatch already holding a snapshot checks it.
            active.set(false);
            if let Some(table) = table.upgrade() {
                table.borrow_mut().entries.retain(|l| l.id != id);
            }
            tracing::trace!(listener = id, "listener released");
        })
    }

    /// Calls every listener that is still active, in registration order.
    ///
    /// Returns the number of listeners called. Listeners added during the
    /// dispatch are not called until the next one.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<(Rc<Cell<bool>>, Rc<dyn Fn()>)> = self
            .table
            .borrow()
            .entries
            .iter()
            .map(|l| (Rc::clone(&l.active), Rc::clone(&l.callback)))
            .collect();

        let mut delivered = 0;
        for (active, callback) in snapshot {
            if active.get() {
                callback();
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    /// Returns `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish()
    }
}

/// An in-process theme signal owned by the host.
///
/// The host flips it with [`set`](Self::set) or [`toggle`](Self::toggle);
/// consumers observe it through [`ThemeSignal`]. Clones share state, and it
/// doubles as the fake signal in tests.
///
/// Every write notifies, even when the mode is unchanged, the way a DOM
/// mutation observer fires on any attribute write. Consumers are expected
/// to compare against their cached value.
///
/// ```rust
/// use cardtone::{ColorMode, ThemeSignal, ThemeStore};
///
/// let store = ThemeStore::new(ColorMode::Light);
/// store.set(ColorMode::Dark);
/// assert_eq!(store.current(), ColorMode::Dark);
/// ```
#[derive(Clone, Debug)]
pub struct ThemeStore {
    mode: Rc<Cell<ColorMode>>,
    listeners: Listeners,
}

impl ThemeStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: ColorMode) -> Self {
        Self {
            mode: Rc::new(Cell::new(initial)),
            listeners: Listeners::new(),
        }
    }

    /// Creates a store seeded from [`detect_color_mode`].
    pub fn detect() -> Self {
        Self::new(detect_color_mode())
    }

    /// Writes the mode and notifies every subscriber.
    pub fn set(&self, mode: ColorMode) {
        let previous = self.mode.replace(mode);
        let delivered = self.listeners.notify();
        tracing::debug!(%previous, %mode, delivered, "theme store written");
    }

    /// Flips between light and dark.
    pub fn toggle(&self) {
        self.set(self.mode.get().toggled());
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

impl ThemeSignal for ThemeStore {
    fn current(&self) -> ColorMode {
        self.mode.get()
    }

    fn subscribe(&self, on_change: Box<dyn Fn()>) -> Subscription {
        self.listeners.add(on_change)
    }
}

/// A theme signal backed by OS detection.
///
/// The OS offers no push notification through `dark-light`, so the host
/// drives change detection by calling [`poll`](Self::poll) from its event
/// loop.
#[derive(Debug, Default)]
pub struct OsThemeSignal {
    last_seen: Cell<Option<ColorMode>>,
    listeners: Listeners,
}

impl OsThemeSignal {
    /// Creates a signal. The first [`poll`](Self::poll) only records the mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-detects the OS mode and notifies subscribers if it changed since
    /// the previous poll. Returns `true` when subscribers were notified.
    pub fn poll(&self) -> bool {
        let detected = detect_color_mode();
        match self.last_seen.replace(Some(detected)) {
            Some(previous) if previous != detected => {
                tracing::debug!(%previous, %detected, "OS color mode changed");
                self.listeners.notify();
                true
            }
            _ => false,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ThemeSignal for OsThemeSignal {
    fn current(&self) -> ColorMode {
        detect_color_mode()
    }

    fn subscribe(&self, on_change: Box<dyn Fn()>) -> Subscription {
        if self.last_seen.get().is_none() {
            self.last_seen.set(Some(detect_color_mode()));
        }
        self.listeners.add(on_change)
    }
}

/// A fixed mode is a signal that never changes.
impl ThemeSignal for ColorMode {
    fn current(&self) -> ColorMode {
        *self
    }

    fn subscribe(&self, _on_change: Box<dyn Fn()>) -> Subscription {
        Subscription::noop()
    }
}
