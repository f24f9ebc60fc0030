use std::sync::Arc;

/// Identity of a shared allocation, independent of the value's equality.
///
/// Two handles have the same identity exactly when they point at the same
/// allocation. The address stays reserved for as long as any `Weak` to it is
/// alive, so an identity is never reused while something still tracks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(usize);

impl Identity {
    pub fn of<T: ?Sized>(item: &Arc<T>) -> Self {
        Self(Arc::as_ptr(item) as *const () as usize)
    }
}
