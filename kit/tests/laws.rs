//! Container laws exercised through the facade.

use duality::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
struct NotFound;

#[test]
fn no_null_payload_enters_any_container() {
    assert_eq!(
        Outcome::<String, i32>::try_right(None),
        Err(ContainerError::NullPayload {
            container: "Outcome",
            state: "right"
        })
    );
    assert_eq!(
        Outcome::<String, i32>::try_left(None),
        Err(ContainerError::NullPayload {
            container: "Outcome",
            state: "left"
        })
    );
    assert_eq!(
        Maybe::<i32>::try_present(None),
        Err(ContainerError::NullPayload {
            container: "Maybe",
            state: "present"
        })
    );

    // The sanctioned boundary adapters turn null into a state instead.
    assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::absent());
    assert_eq!(Outcome::<NotFound, i32>::from_nullable(None, NotFound), Outcome::left(NotFound));
}

#[test]
fn left_short_circuits_map_and_bind() {
    let calls = AtomicUsize::new(0);
    let left: Outcome<&str, i32> = Outcome::left("first failure");

    let mapped = left.map(|n| {
        calls.fetch_add(1, Ordering::SeqCst);
        n + 1
    });
    let bound: Outcome<&str, String> = left.bind(|n| {
        calls.fetch_add(1, Ordering::SeqCst);
        Outcome::right(n.to_string())
    });

    assert_eq!(mapped, Outcome::left("first failure"));
    assert_eq!(bound, Outcome::left("first failure"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn filter_leads_to_bottom() -> anyhow::Result<()> {
    let calls = AtomicUsize::new(0);

    let filtered = Outcome::<String, i32>::right(5).filter(|x| *x > 10);
    assert_eq!(filtered.state(), OutcomeState::Bottom);

    assert!(matches!(
        filtered.clone().match_with(|n| n, |_| 0),
        Err(ContainerError::BottomState { .. })
    ));
    assert!(matches!(
        filtered.clone().value_or(1),
        Err(ContainerError::BottomState { .. })
    ));

    let remapped = filtered.map(|x| {
        calls.fetch_add(1, Ordering::SeqCst);
        x + x
    });
    assert!(remapped.is_bottom());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // A passing filter keeps the pipeline intact.
    let kept = Outcome::<String, i32>::right(50).filter(|x| *x > 10).value_or(0)?;
    assert_eq!(kept, 50);
    Ok(())
}

#[test]
fn conversions_round_trip() {
    for value in [0, 7, -3, i32::MAX] {
        let present = Maybe::present(value);
        assert_eq!(present.to_outcome(NotFound).to_maybe(), present);
    }

    assert_eq!(Maybe::<i32>::absent().to_outcome(NotFound), Outcome::left(NotFound));
    assert_eq!(Outcome::<NotFound, i32>::left(NotFound).to_maybe(), Maybe::absent());
}

#[test]
fn collapse_rejects_null_results_unless_unsafe() {
    let maybe = Maybe::present("42");
    assert!(matches!(
        maybe.try_match(|_| None::<String>, || None),
        Err(ContainerError::NullResult { .. })
    ));
    assert_eq!(maybe.match_unsafe(|_| None::<String>, || None), None);

    let outcome: Outcome<String, i32> = Outcome::right(42);
    assert!(matches!(
        outcome.clone().try_match(|_| None::<String>, |_| None),
        Err(ContainerError::NullResult { .. })
    ));
    assert_eq!(outcome.match_unsafe(|_| None::<String>, |_| None), Ok(None));

    // Unsafe collapse still refuses Bottom.
    let bottom = Outcome::<String, i32>::default();
    assert!(matches!(
        bottom.match_unsafe(|_| None::<String>, |_| None),
        Err(ContainerError::BottomState { .. })
    ));
}

#[test]
fn equality_is_structural_and_cheap() {
    const BUDGET: Duration = Duration::from_millis(50);

    let first: Outcome<String, i32> = Outcome::right(1);
    let same: Outcome<String, i32> = Outcome::right(1);
    let other: Outcome<String, i32> = Outcome::right(2);
    let left: Outcome<String, i32> = Outcome::left("1".to_string());

    let start = Instant::now();
    let first_call = first == same;
    assert!(start.elapsed() < BUDGET);
    assert!(first_call);

    for _ in 0..1_000 {
        let start = Instant::now();
        assert_ne!(first, other);
        assert_ne!(first, left);
        assert_eq!(first, same);
        assert!(start.elapsed() < BUDGET);
    }
}

#[tokio::test]
async fn async_bind_never_runs_after_left() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let result = AsyncOutcome::<String, i32>::left("e".to_string())
        .bind_async(move |n| {
            seen.fetch_add(1, Ordering::SeqCst);
            async move { Outcome::<String, i32>::right(n * 2) }
        })
        .await;

    assert_eq!(result, Outcome::left("e".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
