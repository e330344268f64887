//! AsyncOutcome - Deferred Outcomes
//!
//! An `AsyncOutcome<L, R>` is a boxed future resolving to `Outcome<L, R>`,
//! with the same combinator surface as `Outcome`. Each stage awaits the
//! previous one completely before deciding whether to run; a `Left` or Bottom
//! result skips every downstream callback.
//!
//! Awaiting an `AsyncOutcome` directly yields the underlying `Outcome`.

use duality_core::{ContainerResult, Maybe, Outcome};
use futures_util::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::{Future, IntoFuture};

/// A deferred computation resolving to an [`Outcome`].
#[must_use = "an AsyncOutcome does nothing unless awaited or collapsed"]
pub struct AsyncOutcome<L, R> {
    inner: BoxFuture<'static, Outcome<L, R>>,
}

impl<L, R> AsyncOutcome<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<L, R>> + Send + 'static,
    {
        AsyncOutcome {
            inner: future.boxed(),
        }
    }

    /// An already resolved outcome.
    pub fn from_outcome(outcome: Outcome<L, R>) -> Self {
        Self::new(future::ready(outcome))
    }

    pub fn right(value: R) -> Self {
        Self::from_outcome(Outcome::right(value))
    }

    pub fn left(value: L) -> Self {
        Self::from_outcome(Outcome::left(value))
    }

    /// Lift a plain future of a success value.
    pub fn from_right_future<F>(future: F) -> Self
    where
        F: Future<Output = R> + Send + 'static,
    {
        Self::new(future.map(Outcome::right))
    }

    /// Lift a future of a std `Result`: `Ok` becomes `Right`, `Err` becomes `Left`.
    pub fn from_result_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<R, L>> + Send + 'static,
    {
        Self::new(future.map(Outcome::from))
    }

    /// Back to the bare deferred form.
    pub fn into_deferred(self) -> BoxFuture<'static, Outcome<L, R>> {
        self.inner
    }

    // ------------------------------------------------------------------
    // Transformations
    // ------------------------------------------------------------------

    pub fn map<R2, F>(self, f: F) -> AsyncOutcome<L, R2>
    where
        R2: Send + 'static,
        F: FnOnce(R) -> R2 + Send + 'static,
    {
        AsyncOutcome::new(self.inner.map(move |outcome| outcome.map(f)))
    }

    pub fn map_left<L2, F>(self, f: F) -> AsyncOutcome<L2, R>
    where
        L2: Send + 'static,
        F: FnOnce(L) -> L2 + Send + 'static,
    {
        AsyncOutcome::new(self.inner.map(move |outcome| outcome.map_left(f)))
    }

    pub fn bi_map<L2, R2, FL, FR>(self, f_left: FL, f_right: FR) -> AsyncOutcome<L2, R2>
    where
        L2: Send + 'static,
        R2: Send + 'static,
        FL: FnOnce(L) -> L2 + Send + 'static,
        FR: FnOnce(R) -> R2 + Send + 'static,
    {
        AsyncOutcome::new(self.inner.map(move |outcome| outcome.bi_map(f_left, f_right)))
    }

    /// Transform the right value with an async function.
    pub fn map_async<R2, F, Fut>(self, f: F) -> AsyncOutcome<L, R2>
    where
        R2: Send + 'static,
        F: FnOnce(R) -> Fut + Send + 'static,
        Fut: Future<Output = R2> + Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.map_async(f).await })
    }

    pub fn bind<R2, F>(self, f: F) -> AsyncOutcome<L, R2>
    where
        R2: Send + 'static,
        F: FnOnce(R) -> Outcome<L, R2> + Send + 'static,
    {
        AsyncOutcome::new(self.inner.map(move |outcome| outcome.bind(f)))
    }

    /// Chain an async fallible computation.
    ///
    /// `f` may return an `AsyncOutcome` or any other future of an `Outcome`.
    /// It is never invoked when this outcome resolves to `Left` or Bottom.
    pub fn bind_async<R2, F, Fut>(self, f: F) -> AsyncOutcome<L, R2>
    where
        R2: Send + 'static,
        F: FnOnce(R) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = Outcome<L, R2>> + Send + 'static,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.bind_async(f).await })
    }

    /// Keep a `Right` only if `predicate` holds; otherwise resolve to Bottom.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool + Send + 'static,
    {
        AsyncOutcome::new(self.inner.map(move |outcome| outcome.filter(predicate)))
    }

    // ------------------------------------------------------------------
    // Collapse
    // ------------------------------------------------------------------

    pub async fn match_with<U, FR, FL>(self, on_right: FR, on_left: FL) -> ContainerResult<U>
    where
        FR: FnOnce(R) -> U,
        FL: FnOnce(L) -> U,
    {
        self.await.match_with(on_right, on_left)
    }

    pub async fn match_async<U, FR, FL, RFut, LFut>(self, on_right: FR, on_left: FL) -> ContainerResult<U>
    where
        FR: FnOnce(R) -> RFut,
        FL: FnOnce(L) -> LFut,
        RFut: Future<Output = U>,
        LFut: Future<Output = U>,
    {
        self.await.match_async(on_right, on_left).await
    }

    pub async fn value_or(self, default: R) -> ContainerResult<R> {
        self.await.value_or(default)
    }

    pub async fn value_or_compute<F>(self, f: F) -> ContainerResult<R>
    where
        F: FnOnce(L) -> R,
    {
        self.await.value_or_compute(f)
    }

    pub async fn value_or_compute_async<F, Fut>(self, f: F) -> ContainerResult<R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = R>,
    {
        self.await.value_or_compute_async(f).await
    }

    pub async fn to_maybe(self) -> Maybe<R> {
        self.await.to_maybe()
    }
}

impl<L, R> IntoFuture for AsyncOutcome<L, R> {
    type Output = Outcome<L, R>;
    type IntoFuture = BoxFuture<'static, Outcome<L, R>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<L, R> From<Outcome<L, R>> for AsyncOutcome<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    fn from(outcome: Outcome<L, R>) -> Self {
        AsyncOutcome::from_outcome(outcome)
    }
}

// The state is unknown until the computation resolves.
impl<L, R> fmt::Debug for AsyncOutcome<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncOutcome").finish_non_exhaustive()
    }
}
