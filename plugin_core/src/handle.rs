use std::num::TryFromIntError;

/// Identifies one item inside a module, usually its index.
///
/// This type crosses the C boundary by value, so it is laid out exactly like
/// an `i32`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SearchItemHandle(pub i32);

impl SearchItemHandle {
    /// Terminates a handle table returned through the C interface.
    pub const TERMINATOR: Self = Self(-1);

    pub const fn is_terminator(self) -> bool {
        self.0 == Self::TERMINATOR.0
    }

    /// The handle as an index into a table of `len` items, if it is one.
    pub fn index(self, len: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|&idx| idx < len)
    }
}

/// Handles are `i32` at the C boundary, so indices past `i32::MAX` have none.
impl TryFrom<usize> for SearchItemHandle {
    type Error = TryFromIntError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        i32::try_from(idx).map(SearchItemHandle)
    }
}
