//! Maybe - Null-free Optional Values
//!
//! `Maybe<T>` is either `Present(T)` or `Absent`. A plain `T` can never be
//! null, so `present` needs no runtime check; data arriving from a nullable
//! source (`Option<T>`) enters through `from_nullable` or the checked
//! `try_present`.
//!
//! Collapse operations come in three flavours:
//! - plain (`match_with`, `value_or`): branches return `U`, which cannot be null
//! - checked (`try_*`): branches return `Option<U>`; `None` is a contract
//!   violation reported as [`ContainerError::NullResult`]
//! - unsafe (`*_unsafe`): branches return `Option<U>` and `None` is passed
//!   through. Keep these at system boundaries where a nullable result is
//!   genuinely required.

use crate::error::{ContainerError, ContainerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// An optional value that never holds a null-equivalent.
///
/// There is no `Default` impl: every `Maybe` comes from an explicit
/// constructor or combinator. Ordering matches `Option`: `Absent` sorts first.
///
/// On the wire a `Maybe` is externally tagged (`{"Present": 5}` / `"Absent"`),
/// so a present payload that itself serializes as `null` survives a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// Nothing is there.
    Absent,
    /// A value is present.
    Present(T),
}

impl<T> Maybe<T> {
    pub const fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    pub const fn absent() -> Self {
        Maybe::Absent
    }

    /// Build a `Present` from a nullable source, rejecting `None`.
    pub fn try_present(value: Option<T>) -> ContainerResult<Self> {
        value
            .map(Maybe::Present)
            .ok_or_else(|| ContainerError::null_payload("Maybe", "present"))
    }

    /// Boundary adapter for nullable data: `Some` becomes `Present`, `None`
    /// becomes `Absent`.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    // ------------------------------------------------------------------
    // Transformations
    // ------------------------------------------------------------------

    /// Transform the present value. `Absent` passes through and `f` is not called.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Transform with a callback that may yield a null-equivalent.
    ///
    /// A transform must not reintroduce nullability, so `None` from `f` is
    /// reported as [`ContainerError::NullResult`] instead of becoming `Absent`.
    pub fn try_map<U, F>(self, f: F) -> ContainerResult<Maybe<U>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Maybe::Present(value) => f(value)
                .map(Maybe::Present)
                .ok_or_else(|| ContainerError::null_result("Maybe::try_map")),
            Maybe::Absent => Ok(Maybe::Absent),
        }
    }

    /// Chain a computation that itself may be absent.
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the value only if `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) if predicate(&value) => Maybe::Present(value),
            _ => Maybe::Absent,
        }
    }

    // ------------------------------------------------------------------
    // Collapse
    // ------------------------------------------------------------------

    pub fn match_with<U, FP, FA>(self, on_present: FP, on_absent: FA) -> U
    where
        FP: FnOnce(T) -> U,
        FA: FnOnce() -> U,
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Collapse with branches that may yield a null-equivalent; `None` from
    /// either branch is a [`ContainerError::NullResult`].
    pub fn try_match<U, FP, FA>(self, on_present: FP, on_absent: FA) -> ContainerResult<U>
    where
        FP: FnOnce(T) -> Option<U>,
        FA: FnOnce() -> Option<U>,
    {
        self.match_unsafe(on_present, on_absent)
            .ok_or_else(|| ContainerError::null_result("Maybe::try_match"))
    }

    /// Unsafe collapse: a null-equivalent branch result is returned as `None`.
    pub fn match_unsafe<U, FP, FA>(self, on_present: FP, on_absent: FA) -> Option<U>
    where
        FP: FnOnce(T) -> Option<U>,
        FA: FnOnce() -> Option<U>,
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    pub fn value_or_compute<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f(),
        }
    }

    /// Like `value_or_compute`, but the fallback may yield a null-equivalent,
    /// which is reported as [`ContainerError::NullResult`].
    pub fn try_value_or_compute<F>(self, f: F) -> ContainerResult<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => f().ok_or_else(|| ContainerError::null_result("Maybe::try_value_or_compute")),
        }
    }

    /// Unsafe fallback: the default itself may be null.
    pub fn value_or_unsafe(self, default: Option<T>) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => default,
        }
    }

    pub fn if_present<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Maybe::Present(value) = self {
            action(value);
        }
    }

    pub fn if_absent<F>(self, action: F)
    where
        F: FnOnce(),
    {
        if let Maybe::Absent = self {
            action();
        }
    }

    /// Non-returning match.
    pub fn switch_on<FP, FA>(self, on_present: FP, on_absent: FA)
    where
        FP: FnOnce(T),
        FA: FnOnce(),
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    // ------------------------------------------------------------------
    // Async collapse
    // ------------------------------------------------------------------

    pub async fn match_async<U, FP, FA, PFut, AFut>(self, on_present: FP, on_absent: FA) -> U
    where
        FP: FnOnce(T) -> PFut,
        FA: FnOnce() -> AFut,
        PFut: Future<Output = U>,
        AFut: Future<Output = U>,
    {
        match self {
            Maybe::Present(value) => on_present(value).await,
            Maybe::Absent => on_absent().await,
        }
    }

    pub async fn try_match_async<U, FP, FA, PFut, AFut>(
        self,
        on_present: FP,
        on_absent: FA,
    ) -> ContainerResult<U>
    where
        FP: FnOnce(T) -> PFut,
        FA: FnOnce() -> AFut,
        PFut: Future<Output = Option<U>>,
        AFut: Future<Output = Option<U>>,
    {
        let result = match self {
            Maybe::Present(value) => on_present(value).await,
            Maybe::Absent => on_absent().await,
        };
        result.ok_or_else(|| ContainerError::null_result("Maybe::try_match_async"))
    }

    pub async fn value_or_compute_async<F, Fut>(self, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f().await,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(value) => write!(f, "Present({})", value),
            Maybe::Absent => f.write_str("Absent"),
        }
    }
}
