use crate::async_outcome::AsyncOutcome;
use duality_core::Outcome;
use std::future::Future;

/// Lift any future of an [`Outcome`] into an [`AsyncOutcome`].
pub trait OutcomeFutureExt<L, R>: Future<Output = Outcome<L, R>> + Sized {
    fn into_async(self) -> AsyncOutcome<L, R>;
}

impl<L, R, F> OutcomeFutureExt<L, R> for F
where
    F: Future<Output = Outcome<L, R>> + Send + 'static,
    L: Send + 'static,
    R: Send + 'static,
{
    fn into_async(self) -> AsyncOutcome<L, R> {
        AsyncOutcome::new(self)
    }
}
