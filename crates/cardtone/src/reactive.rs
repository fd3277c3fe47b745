//! An explicit reactive cell.
//!
//! Hosts without an implicit re-render model watch an [`Observable`] and
//! redraw when it fires. Every [`set`](Observable::set) notifies; whoever
//! writes the cell decides when a write is warranted.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::theme::{Listeners, Subscription};

/// A value plus the watchers interested in it.
///
/// Clones share the same value and watchers.
pub struct Observable<T> {
    value: Rc<RefCell<T>>,
    version: Rc<Cell<u64>>,
    watchers: Listeners,
}

impl<T: Clone> Observable<T> {
    /// Creates a cell holding `value`, at version zero.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            version: Rc::new(Cell::new(0)),
            watchers: Listeners::new(),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replaces the value, bumps the version and notifies every watcher.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.version.set(self.version.get() + 1);
        self.watchers.notify();
    }

    /// Registers `on_change`, called after each [`set`](Self::set).
    pub fn watch(&self, on_change: impl Fn() + 'static) -> Subscription {
        self.watchers.add(Box::new(on_change))
    }

    /// Number of writes since creation.
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    /// Number of live watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            version: Rc::clone(&self.version),
            watchers: self.watchers.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value.borrow())
            .field("version", &self.version.get())
            .field("watchers", &self.watchers.len())
            .finish()
    }
}
