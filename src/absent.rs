/// Implemented for values that can be absent.
///
/// Absence is judged on the outermost layer only, the same way a `== None`
/// or `is_null()` check would judge it. A present wrapper around an absent
/// value is **present**:
///
/// ```
/// use affirm::Absent;
/// use std::ptr;
///
/// assert!(None::<u8>.is_absent());
/// assert!(!Some(None::<u8>).is_absent());
/// assert!(!Some(ptr::null::<u8>()).is_absent());
/// ```
pub trait Absent {
    /// Returns `true` if there is no value present.
    fn is_absent(&self) -> bool;
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Absent for *const T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Absent for *mut T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl Absent for () {
    fn is_absent(&self) -> bool {
        true
    }
}

impl<T> Absent for &T
where
    T: Absent + ?Sized,
{
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T> Absent for &mut T
where
    T: Absent + ?Sized,
{
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}
