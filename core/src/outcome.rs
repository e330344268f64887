//! Outcome - Two-sided Results with an Explicit Bottom
//!
//! `Outcome<L, R>` holds either a `Left` or a `Right` value. By convention
//! `Right` is success and `Left` is failure, so every collapse takes the right
//! branch first.
//!
//! A third, non-data-bearing **Bottom** state exists. It cannot be built by
//! user code: it only comes from `Outcome::default()` or from a `filter` whose
//! predicate rejected the right value. Chains (`map`, `bind`, `filter`) carry
//! Bottom along without calling user code; every collapse on Bottom fails with
//! [`ContainerError::BottomState`].

use crate::error::{ContainerError, ContainerResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::future::{Future, IntoFuture};
use std::hash::{Hash, Hasher};

/// Which of the three states an [`Outcome`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeState {
    Left,
    Right,
    Bottom,
}

/// A value that is either `Left(L)` or `Right(R)`, never null.
///
/// Build one with [`Outcome::right`] / [`Outcome::left`], or from nullable
/// data with [`Outcome::try_right`], [`Outcome::try_left`] and
/// [`Outcome::from_nullable`].
#[derive(Clone, Copy)]
pub struct Outcome<L, R> {
    pub(crate) state: State<L, R>,
}

#[derive(Clone, Copy)]
pub(crate) enum State<L, R> {
    Left(L),
    Right(R),
    Bottom,
}

impl<L, R> Outcome<L, R> {
    pub const fn left(value: L) -> Self {
        Outcome {
            state: State::Left(value),
        }
    }

    pub const fn right(value: R) -> Self {
        Outcome {
            state: State::Right(value),
        }
    }

    /// Build a `Left` from a nullable source, rejecting `None`.
    pub fn try_left(value: Option<L>) -> ContainerResult<Self> {
        value
            .map(Outcome::left)
            .ok_or_else(|| ContainerError::null_payload("Outcome", "left"))
    }

    /// Build a `Right` from a nullable source, rejecting `None`.
    pub fn try_right(value: Option<R>) -> ContainerResult<Self> {
        value
            .map(Outcome::right)
            .ok_or_else(|| ContainerError::null_payload("Outcome", "right"))
    }

    pub(crate) const fn bottom() -> Self {
        Outcome {
            state: State::Bottom,
        }
    }

    pub fn state(&self) -> OutcomeState {
        match self.state {
            State::Left(_) => OutcomeState::Left,
            State::Right(_) => OutcomeState::Right,
            State::Bottom => OutcomeState::Bottom,
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self.state, State::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self.state, State::Right(_))
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self.state, State::Bottom)
    }

    pub fn left_ref(&self) -> Option<&L> {
        match &self.state {
            State::Left(value) => Some(value),
            _ => None,
        }
    }

    pub fn right_ref(&self) -> Option<&R> {
        match &self.state {
            State::Right(value) => Some(value),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Transformations
    // ------------------------------------------------------------------

    /// Transform the right value; `Left` and Bottom pass through untouched.
    pub fn map<R2, F>(self, f: F) -> Outcome<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self.state {
            State::Right(value) => Outcome::right(f(value)),
            State::Left(value) => Outcome::left(value),
            State::Bottom => Outcome::bottom(),
        }
    }

    /// Transform the left value; `Right` and Bottom pass through untouched.
    pub fn map_left<L2, F>(self, f: F) -> Outcome<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self.state {
            State::Left(value) => Outcome::left(f(value)),
            State::Right(value) => Outcome::right(value),
            State::Bottom => Outcome::bottom(),
        }
    }

    /// Transform whichever side is populated.
    pub fn bi_map<L2, R2, FL, FR>(self, f_left: FL, f_right: FR) -> Outcome<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        match self.state {
            State::Left(value) => Outcome::left(f_left(value)),
            State::Right(value) => Outcome::right(f_right(value)),
            State::Bottom => Outcome::bottom(),
        }
    }

    /// Chain a fallible computation on the right value.
    ///
    /// On `Left` the existing left value is re-wrapped with the new right type
    /// and `f` is never invoked.
    pub fn bind<R2, F>(self, f: F) -> Outcome<L, R2>
    where
        F: FnOnce(R) -> Outcome<L, R2>,
    {
        match self.state {
            State::Right(value) => f(value),
            State::Left(value) => Outcome::left(value),
            State::Bottom => Outcome::bottom(),
        }
    }

    /// Keep a `Right` only if `predicate` holds.
    ///
    /// A rejected right value becomes **Bottom**, not `Left`: the outcome no
    /// longer carries any error information. Check for Bottom right after a
    /// pipeline that filters.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        match self.state {
            State::Right(value) => {
                if predicate(&value) {
                    Outcome::right(value)
                } else {
                    tracing::trace!("filter rejected right value, outcome is now bottom");
                    Outcome::bottom()
                }
            }
            other => Outcome { state: other },
        }
    }

    // ------------------------------------------------------------------
    // Collapse
    // ------------------------------------------------------------------

    /// Collapse into a single value, success branch first. Bottom is a
    /// [`ContainerError::BottomState`].
    pub fn match_with<U, FR, FL>(self, on_right: FR, on_left: FL) -> ContainerResult<U>
    where
        FR: FnOnce(R) -> U,
        FL: FnOnce(L) -> U,
    {
        match self.state {
            State::Right(value) => Ok(on_right(value)),
            State::Left(value) => Ok(on_left(value)),
            State::Bottom => Err(ContainerError::bottom_state("Outcome::match_with")),
        }
    }

    /// Collapse with branches that may yield a null-equivalent; `None` is a
    /// [`ContainerError::NullResult`].
    pub fn try_match<U, FR, FL>(self, on_right: FR, on_left: FL) -> ContainerResult<U>
    where
        FR: FnOnce(R) -> Option<U>,
        FL: FnOnce(L) -> Option<U>,
    {
        let result = match self.state {
            State::Right(value) => on_right(value),
            State::Left(value) => on_left(value),
            State::Bottom => return Err(ContainerError::bottom_state("Outcome::try_match")),
        };
        result.ok_or_else(|| ContainerError::null_result("Outcome::try_match"))
    }

    /// Unsafe collapse: a null-equivalent branch result is returned as `None`.
    /// Bottom still fails.
    pub fn match_unsafe<U, FR, FL>(self, on_right: FR, on_left: FL) -> ContainerResult<Option<U>>
    where
        FR: FnOnce(R) -> Option<U>,
        FL: FnOnce(L) -> Option<U>,
    {
        match self.state {
            State::Right(value) => Ok(on_right(value)),
            State::Left(value) => Ok(on_left(value)),
            State::Bottom => Err(ContainerError::bottom_state("Outcome::match_unsafe")),
        }
    }

    /// Non-returning match. Bottom fails instead of running either action.
    pub fn switch_on<FR, FL>(self, on_right: FR, on_left: FL) -> ContainerResult<()>
    where
        FR: FnOnce(R),
        FL: FnOnce(L),
    {
        match self.state {
            State::Right(value) => on_right(value),
            State::Left(value) => on_left(value),
            State::Bottom => return Err(ContainerError::bottom_state("Outcome::switch_on")),
        }
        Ok(())
    }

    /// Run `action` on a right value; `Left` is a no-op.
    pub fn if_right<F>(self, action: F) -> ContainerResult<()>
    where
        F: FnOnce(R),
    {
        self.switch_on(action, |_| {})
    }

    /// Run `action` on a left value; `Right` is a no-op.
    pub fn if_left<F>(self, action: F) -> ContainerResult<()>
    where
        F: FnOnce(L),
    {
        self.switch_on(|_| {}, action)
    }

    /// The right value, or `default` when `Left`.
    pub fn value_or(self, default: R) -> ContainerResult<R> {
        match self.state {
            State::Right(value) => Ok(value),
            State::Left(_) => Ok(default),
            State::Bottom => Err(ContainerError::bottom_state("Outcome::value_or")),
        }
    }

    /// The right value, or a fallback computed from the left value.
    pub fn value_or_compute<F>(self, f: F) -> ContainerResult<R>
    where
        F: FnOnce(L) -> R,
    {
        match self.state {
            State::Right(value) => Ok(value),
            State::Left(value) => Ok(f(value)),
            State::Bottom => Err(ContainerError::bottom_state("Outcome::value_or_compute")),
        }
    }

    /// Unpack into a std `Result` with the success side as `Ok`.
    pub fn into_result(self) -> ContainerResult<Result<R, L>> {
        match self.state {
            State::Right(value) => Ok(Ok(value)),
            State::Left(value) => Ok(Err(value)),
            State::Bottom => Err(ContainerError::bottom_state("Outcome::into_result")),
        }
    }

    // ------------------------------------------------------------------
    // Async transformations and collapse
    // ------------------------------------------------------------------

    /// Transform the right value with an async function.
    pub async fn map_async<R2, F, Fut>(self, f: F) -> Outcome<L, R2>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = R2>,
    {
        match self.state {
            State::Right(value) => Outcome::right(f(value).await),
            State::Left(value) => Outcome::left(value),
            State::Bottom => Outcome::bottom(),
        }
    }

    /// Chain an async fallible computation. `f` may return any future of an
    /// outcome, including an `AsyncOutcome`; it is not invoked on `Left` or
    /// Bottom.
    pub async fn bind_async<R2, F, Fut>(self, f: F) -> Outcome<L, R2>
    where
        F: FnOnce(R) -> Fut,
        Fut: IntoFuture<Output = Outcome<L, R2>>,
    {
        match self.state {
            State::Right(value) => f(value).await,
            State::Left(value) => Outcome::left(value),
            State::Bottom => Outcome::bottom(),
        }
    }

    /// Async counterpart of [`Outcome::match_with`].
    pub async fn match_async<U, FR, FL, RFut, LFut>(self, on_right: FR, on_left: FL) -> ContainerResult<U>
    where
        FR: FnOnce(R) -> RFut,
        FL: FnOnce(L) -> LFut,
        RFut: Future<Output = U>,
        LFut: Future<Output = U>,
    {
        match self.state {
            State::Right(value) => Ok(on_right(value).await),
            State::Left(value) => Ok(on_left(value).await),
            State::Bottom => Err(ContainerError::bottom_state("Outcome::match_async")),
        }
    }

    /// Async counterpart of [`Outcome::value_or_compute`].
    pub async fn value_or_compute_async<F, Fut>(self, f: F) -> ContainerResult<R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = R>,
    {
        match self.state {
            State::Right(value) => Ok(value),
            State::Left(value) => Ok(f(value).await),
            State::Bottom => Err(ContainerError::bottom_state("Outcome::value_or_compute_async")),
        }
    }
}

/// The default outcome is Bottom. Never hand one out; it exists so that
/// struct defaults compile, and it fails every collapse.
impl<L, R> Default for Outcome<L, R> {
    fn default() -> Self {
        Outcome::bottom()
    }
}

// Per-state comparison. Payloads are only compared when both sides are in the
// same data-bearing state.
impl<L: PartialEq, R: PartialEq> PartialEq for Outcome<L, R> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Right(a), State::Right(b)) => a == b,
            (State::Left(a), State::Left(b)) => a == b,
            (State::Bottom, State::Bottom) => true,
            _ => false,
        }
    }
}

impl<L: Eq, R: Eq> Eq for Outcome<L, R> {}

impl<L: Hash, R: Hash> Hash for Outcome<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state().hash(state);
        match &self.state {
            State::Left(value) => value.hash(state),
            State::Right(value) => value.hash(state),
            State::Bottom => {}
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Outcome<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Left(value) => f.debug_tuple("Left").field(value).finish(),
            State::Right(value) => f.debug_tuple("Right").field(value).finish(),
            State::Bottom => f.write_str("Bottom"),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Outcome<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Left(value) => write!(f, "Left({})", value),
            State::Right(value) => write!(f, "Right({})", value),
            State::Bottom => f.write_str("Bottom"),
        }
    }
}

impl<L: Serialize, R: Serialize> Serialize for Outcome<L, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as _;

        match &self.state {
            State::Left(value) => serializer.serialize_newtype_variant("Outcome", 0, "Left", value),
            State::Right(value) => serializer.serialize_newtype_variant("Outcome", 1, "Right", value),
            State::Bottom => Err(S::Error::custom(
                "cannot serialize an outcome in the bottom state",
            )),
        }
    }
}

/// Wire shape accepted on deserialization. Bottom has no representation.
#[derive(Deserialize)]
#[serde(rename = "Outcome")]
enum Wire<L, R> {
    Left(L),
    Right(R),
}

impl<'de, L: Deserialize<'de>, R: Deserialize<'de>> Deserialize<'de> for Outcome<L, R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Left(value) => Outcome::left(value),
            Wire::Right(value) => Outcome::right(value),
        })
    }
}
