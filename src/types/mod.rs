//! Value types for the outcome of fallible operations.
//!
//! # Examples
//!
//! ```
//! use failable::{Failable, SimpleFailable};
//!
//! let served: Failable<&str, u16> = Failable::failure(404);
//! let status: SimpleFailable<u16> = served.into_simple_failable();
//! assert_eq!(status, SimpleFailable::failure(404));
//! ```
use smallvec::SmallVec;

pub(crate) mod alloc_type;
pub mod defect;
pub mod failable;
pub mod raised;
pub mod simple_failable;

pub use defect::{ConstructionError, StateError};
pub use failable::Failable;
#[cfg(feature = "std")]
pub use raised::PanicPayload;
pub use raised::{Raised, NULL_RESULT_MESSAGE};
pub use simple_failable::SimpleFailable;

/// Type-erased error, the usual `E` for operations that raise many kinds of
/// error.
#[cfg(feature = "std")]
pub type BoxedError = std::boxed::Box<dyn core::error::Error + Send + Sync + 'static>;
#[cfg(not(feature = "std"))]
pub type BoxedError = alloc::boxed::Box<dyn core::error::Error + Send + Sync + 'static>;

/// SmallVec-backed collection used for walking error cause chains.
///
/// Uses inline storage for up to 4 elements, which covers most chains
/// without touching the heap.
pub type CauseVec<T> = SmallVec<[T; 4]>;
