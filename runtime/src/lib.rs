//! Duality Runtime - deferred outcomes.
//!
//! [`AsyncOutcome`] composes an in-flight computation with an `Outcome`
//! using the same map/bind/collapse vocabulary as the synchronous core.

pub mod async_outcome;
pub mod ext;
mod telemetry;

pub mod prelude {
    pub use crate::async_outcome::AsyncOutcome;
    pub use crate::ext::OutcomeFutureExt;
}

pub use async_outcome::AsyncOutcome;
pub use ext::OutcomeFutureExt;
