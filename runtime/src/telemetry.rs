//! # Telemetry: Tracing for Deferred Outcomes
//!
//! `traced` wraps an `AsyncOutcome` in a span and reports how it resolved.

use crate::async_outcome::AsyncOutcome;
use std::fmt::Debug;
use tracing::{Instrument, info_span};

impl<L, R> AsyncOutcome<L, R>
where
    L: Debug + Send + 'static,
    R: Debug + Send + 'static,
{
    /// Instrument the deferred computation under a span named after `stage`.
    ///
    /// `Right` is logged at `info`, `Left` at `warn` (a business failure) and
    /// Bottom at `error`, each with the time spent waiting for resolution.
    pub fn traced(self, stage: &str) -> Self {
        let span = info_span!("outcome", duality.stage = %stage);

        AsyncOutcome::new(
            async move {
                let start = std::time::Instant::now();
                let outcome = self.await;
                let duration = start.elapsed();

                if let Some(value) = outcome.right_ref() {
                    tracing::info!(?value, ?duration, "Outcome resolved: Right");
                } else if let Some(error) = outcome.left_ref() {
                    tracing::warn!(?error, ?duration, "Outcome resolved: Left");
                } else {
                    tracing::error!(?duration, "Outcome resolved: Bottom");
                }
                outcome
            }
            .instrument(span),
        )
    }
}
