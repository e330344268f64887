//! # Duality Core
//!
//! Null-free sum types for error handling without exceptions.
//!
//! - [`Outcome<L, R>`]: `Left` (failure) or `Right` (success), plus a Bottom
//!   state that only `Default` and `filter` can produce
//! - [`Maybe<T>`]: `Present` or `Absent`
//! - [`ContainerError`]: contract violations (null payloads, null results,
//!   collapsing Bottom)
//!
//! Business failures travel as `Left`/`Absent` values and must be collapsed
//! explicitly. Only misuse of a container produces a `ContainerError`.
//!
//! This layer is synchronous apart from the `*_async` collapse methods, which
//! only await the futures returned by the caller's branches. The deferred
//! `AsyncOutcome` lives in `duality-runtime`.

mod compose;
mod convert;
pub mod error;
pub mod maybe;
pub mod outcome;

pub use error::{ContainerError, ContainerResult};
pub use maybe::Maybe;
pub use outcome::{Outcome, OutcomeState};

pub mod prelude {
    pub use crate::error::{ContainerError, ContainerResult};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::{Outcome, OutcomeState};
}
