/// Errors returned by [`DynamicArray`](crate::DynamicArray) operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A negative initial capacity was requested.
    #[error("capacity cannot be negative: {0}")]
    InvalidArgument(isize),

    /// `index` is outside the range accepted by the operation.
    #[error("Index: {index}, Size: {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The elements have no natural ordering to sort by.
    #[error("elements have no natural ordering")]
    UnsupportedOperation,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
