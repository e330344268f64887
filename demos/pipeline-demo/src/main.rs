//! # Pipeline Demo - Outcome-based control flow
//!
//! Parses the command-line arguments as integers, sums them, and checks the
//! total against an async quota service. Every failure travels as a `Left`
//! value; the only collapse happens at the very end.
//!
//! ```bash
//! cargo run --bin pipeline-demo -- 10 20 12
//! RUST_LOG=debug cargo run --bin pipeline-demo -- 10 oops
//! ```

use async_trait::async_trait;
use duality::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ============================================================================
// 1. Domain
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum DemoError {
    NoInput,
    NotANumber(String),
    OverQuota { requested: i64, limit: i64 },
    Overflow,
}

fn parse(arg: &str) -> Outcome<DemoError, i64> {
    arg.trim()
        .parse::<i64>()
        .map_err(|_| DemoError::NotANumber(arg.to_string()))
        .into()
}

fn sum(values: Vec<i64>) -> Outcome<DemoError, i64> {
    Outcome::from_nullable(values.into_iter().try_fold(0i64, i64::checked_add), DemoError::Overflow)
}

#[async_trait]
trait QuotaService: Send + Sync {
    /// Remaining quota after spending `requested`.
    async fn spend(&self, requested: i64) -> Outcome<DemoError, i64>;
}

struct FixedQuota {
    limit: i64,
}

#[async_trait]
impl QuotaService for FixedQuota {
    async fn spend(&self, requested: i64) -> Outcome<DemoError, i64> {
        tokio::task::yield_now().await;
        if requested > self.limit {
            Outcome::left(DemoError::OverQuota {
                requested,
                limit: self.limit,
            })
        } else {
            Outcome::right(self.limit - requested)
        }
    }
}

// ============================================================================
// 2. Main - build the chain and collapse once
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    tracing::info!(?args, "Starting pipeline");

    // An empty argument list is a business failure, not a panic.
    let first = Maybe::from_nullable(args.first()).to_outcome(DemoError::NoInput);
    let numbers: Outcome<DemoError, Vec<i64>> = first
        .bind(|_| args.iter().map(|arg| parse(arg)).collect());
    let total = numbers.bind(sum);

    let quota: Arc<dyn QuotaService> = Arc::new(FixedQuota { limit: 100 });
    let report = AsyncOutcome::from(total)
        .traced("sum")
        .bind_async(move |total| async move { quota.spend(total).await })
        .traced("quota")
        .match_with(
            |remaining| format!("Accepted, {} units of quota left", remaining),
            |error| format!("Rejected: {:?}", error),
        )
        .await?;

    println!("{}", report);
    Ok(())
}
