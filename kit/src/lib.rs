//! Duality facade crate.
//!
//! Re-exports the synchronous core and, with the `runtime` feature (on by
//! default), the deferred `AsyncOutcome`.
//!
//! ```
//! use duality::prelude::*;
//!
//! fn parse(value: &str) -> Outcome<String, i32> {
//!     value.parse::<i32>().map_err(|_| format!("not a number: {}", value)).into()
//! }
//!
//! let sum = parse("40").zip_with(parse("2"), |a, b| a + b);
//! assert_eq!(sum.value_or(0), Ok(42));
//! ```

pub use duality_core as core;
#[cfg(feature = "runtime")]
pub use duality_runtime as runtime;

pub use duality_core::{ContainerError, ContainerResult, Maybe, Outcome, OutcomeState};
#[cfg(feature = "runtime")]
pub use duality_runtime::{AsyncOutcome, OutcomeFutureExt};

pub mod prelude {
    pub use duality_core::prelude::*;
    #[cfg(feature = "runtime")]
    pub use duality_runtime::prelude::*;
}
