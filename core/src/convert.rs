//! Conversions between `Maybe`, `Outcome` and their std counterparts.
//!
//! `From<Option<T>>` is the only implicit path from nullable data and it goes
//! through `Maybe::from_nullable`, so it cannot smuggle a null payload in.

use crate::error::ContainerError;
use crate::maybe::Maybe;
use crate::outcome::{Outcome, State};

impl<T> Maybe<T> {
    /// `Present(v)` becomes `Right(v)`, `Absent` becomes `Left(left_default)`.
    pub fn to_outcome<L>(self, left_default: L) -> Outcome<L, T> {
        match self {
            Maybe::Present(value) => Outcome::right(value),
            Maybe::Absent => Outcome::left(left_default),
        }
    }

    /// Like `to_outcome`, building the left value only when it is needed.
    pub fn to_outcome_with<L, F>(self, f: F) -> Outcome<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Maybe::Present(value) => Outcome::right(value),
            Maybe::Absent => Outcome::left(f()),
        }
    }
}

impl<L, R> Outcome<L, R> {
    /// Drop the left information: `Right(v)` becomes `Present(v)`; `Left` and
    /// Bottom become `Absent`.
    pub fn to_maybe(self) -> Maybe<R> {
        match self.state {
            State::Right(value) => Maybe::Present(value),
            State::Left(_) | State::Bottom => Maybe::Absent,
        }
    }

    /// Boundary adapter for nullable data: `Some(v)` becomes `Right(v)`,
    /// `None` becomes `Left(left_default)`.
    pub fn from_nullable(value: Option<R>, left_default: L) -> Self {
        Maybe::from_nullable(value).to_outcome(left_default)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<L, R> From<Result<R, L>> for Outcome<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(value) => Outcome::right(value),
            Err(value) => Outcome::left(value),
        }
    }
}

impl<L, R> TryFrom<Outcome<L, R>> for Result<R, L> {
    type Error = ContainerError;

    fn try_from(value: Outcome<L, R>) -> Result<Self, Self::Error> {
        value.into_result()
    }
}
