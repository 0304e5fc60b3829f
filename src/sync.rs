//! Lock shim shared by the `std` and `alloc` builds.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// Runs `f` with exclusive access to the value.
    ///
    /// A poisoned std lock still guards a complete value, so it is recovered.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        #[cfg(feature = "std")]
        let mut guard = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        #[cfg(all(not(feature = "std"), feature = "alloc"))]
        let mut guard = self.0.lock();

        f(&mut guard)
    }

    /// Stores `value` and returns the previous one.
    pub fn replace(&self, value: T) -> T {
        self.with(|slot| core::mem::replace(slot, value))
    }
}
