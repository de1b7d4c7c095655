//! Observable values and one-way derivations.
//!
//! A [`LiveValue`] holds the latest value and a version counter that is
//! bumped on **every** write, equal value or not.  Consumers keep an
//! [`ObserverCursor`] and pull changes with [`LiveValue::observe`], so
//! delivery needs no callbacks and no shared ownership:
//!
//! ```text
//!   set_source ──▶ Derived ──▶ LiveValue<T> (version n)
//!                                   │
//!                  ObserverCursor(n-1) ──observe──▶ Some(&T)
//! ```
//!
//! Everything here is single-threaded; writes take `&mut self`.

/// Version a cursor holds before it has seen anything.
const UNSEEN: u64 = 0;

/// A value plus a monotonically increasing write counter.
#[derive(Debug, Clone)]
pub struct LiveValue<T> {
    value: T,
    /// Starts at 1 so a fresh cursor always sees the initial value.
    version: u64,
}

impl<T> LiveValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            version: 1,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value.  Always bumps the version.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.version += 1;
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Return the value if it changed since `cursor` last looked, and
    /// advance the cursor.
    pub fn observe(&self, cursor: &mut ObserverCursor) -> Option<&T> {
        if cursor.last_version >= self.version {
            return None;
        }
        cursor.last_version = self.version;
        Some(&self.value)
    }
}

/// Per-observer bookkeeping: the last version delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObserverCursor {
    last_version: u64,
}

impl ObserverCursor {
    pub fn new() -> Self {
        Self {
            last_version: UNSEEN,
        }
    }

    /// Forget what was delivered; the next observe re-delivers the
    /// current value.
    pub fn reset(&mut self) {
        self.last_version = UNSEEN;
    }
}

/// A source value and a value derived from it by a pure mapping.
///
/// The derived value is recomputed synchronously on every
/// [`set_source`](Self::set_source); it is never stale.
pub struct Derived<S, T> {
    source: LiveValue<S>,
    derived: LiveValue<T>,
    map: Box<dyn Fn(&S) -> T>,
}

impl<S, T> Derived<S, T> {
    pub fn new(initial: S, map: impl Fn(&S) -> T + 'static) -> Self {
        let derived = LiveValue::new(map(&initial));
        Self {
            source: LiveValue::new(initial),
            derived,
            map: Box::new(map),
        }
    }

    /// Write the source and recompute unconditionally.
    pub fn set_source(&mut self, value: S) {
        self.source.set(value);
        self.recompute();
    }

    /// Re-run the mapping against the current source.
    pub fn recompute(&mut self) {
        let next = (self.map)(self.source.get());
        self.derived.set(next);
    }

    pub fn source(&self) -> &LiveValue<S> {
        &self.source
    }

    pub fn value(&self) -> &LiveValue<T> {
        &self.derived
    }
}

impl<S: core::fmt::Debug, T: core::fmt::Debug> core::fmt::Debug for Derived<S, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Derived")
            .field("source", &self.source)
            .field("derived", &self.derived)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cursor_sees_initial_value() {
        let v = LiveValue::new(7);
        let mut cur = ObserverCursor::new();
        assert_eq!(v.observe(&mut cur), Some(&7));
        assert_eq!(v.observe(&mut cur), None);
    }

    #[test]
    fn equal_write_still_notifies() {
        let mut v = LiveValue::new(String::from("a"));
        let mut cur = ObserverCursor::new();
        let _ = v.observe(&mut cur);

        v.set(String::from("a"));
        assert_eq!(v.version(), 2);
        assert_eq!(v.observe(&mut cur).map(String::as_str), Some("a"));
    }

    #[test]
    fn observe_skips_intermediate_values() {
        let mut v = LiveValue::new(0);
        let mut cur = ObserverCursor::new();
        let _ = v.observe(&mut cur);
        v.set(1);
        v.set(2);
        assert_eq!(v.observe(&mut cur), Some(&2));
        assert_eq!(v.observe(&mut cur), None);
    }

    #[test]
    fn reset_redelivers() {
        let v = LiveValue::new('x');
        let mut cur = ObserverCursor::new();
        let _ = v.observe(&mut cur);
        cur.reset();
        assert_eq!(v.observe(&mut cur), Some(&'x'));
    }

    #[test]
    fn derived_tracks_source() {
        let mut d = Derived::new(2, |x: &i32| x * 10);
        assert_eq!(*d.value().get(), 20);

        d.set_source(5);
        assert_eq!(*d.source().get(), 5);
        assert_eq!(*d.value().get(), 50);
    }

    #[test]
    fn derived_recomputes_on_every_write() {
        let mut d = Derived::new(1, |x: &i32| *x);
        let before = d.value().version();
        d.set_source(1);
        d.set_source(1);
        assert_eq!(d.value().version(), before + 2);
    }
}
