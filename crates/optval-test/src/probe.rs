//! Call probes - count how often caller-supplied functions run
//!
//! Short-circuit laws are about what does *not* happen, so every closure
//! handed to a combinator under test is built from a probe.

use std::future::{ready, Ready};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared invocation counter
#[derive(Clone, Debug, Default)]
pub struct CallProbe {
    calls: Arc<AtomicUsize>,
}

impl CallProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn was_called(&self) -> bool {
        self.calls() > 0
    }

    /// Record one call
    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }

    /// Zero-argument supplier returning `value`
    pub fn supplier<T>(&self, value: T) -> impl FnOnce() -> T {
        let probe = self.clone();
        move || {
            probe.hit();
            value
        }
    }

    /// Predicate with a fixed answer
    pub fn predicate<T>(&self, answer: bool) -> impl FnOnce(&T) -> bool {
        let probe = self.clone();
        move |_: &T| {
            probe.hit();
            answer
        }
    }

    /// Wrap a mapper
    pub fn mapper<A, R, F>(&self, f: F) -> impl FnOnce(A) -> R
    where
        F: FnOnce(A) -> R,
    {
        let probe = self.clone();
        move |a| {
            probe.hit();
            f(a)
        }
    }

    /// Callback that only records
    pub fn callback<T>(&self) -> impl FnOnce(&T) {
        let probe = self.clone();
        move |_: &T| probe.hit()
    }

    /// Empty action that only records
    pub fn action(&self) -> impl FnOnce() {
        let probe = self.clone();
        move || probe.hit()
    }

    pub fn async_supplier<T>(&self, value: T) -> impl FnOnce() -> Ready<T> {
        let supply = self.supplier(value);
        move || ready(supply())
    }

    pub fn async_predicate<T>(&self, answer: bool) -> impl FnOnce(&T) -> Ready<bool> {
        let probe = self.clone();
        move |_: &T| {
            probe.hit();
            ready(answer)
        }
    }

    pub fn async_mapper<A, R, F>(&self, f: F) -> impl FnOnce(A) -> Ready<R>
    where
        F: FnOnce(A) -> R,
    {
        let map = self.mapper(f);
        move |a| ready(map(a))
    }

    pub fn async_callback<T>(&self) -> impl FnOnce(&T) -> Ready<()> {
        let probe = self.clone();
        move |_: &T| {
            probe.hit();
            ready(())
        }
    }

    pub fn async_action(&self) -> impl FnOnce() -> Ready<()> {
        let probe = self.clone();
        move || {
            probe.hit();
            ready(())
        }
    }
}
