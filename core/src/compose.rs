//! Composition helpers.
//!
//! `zip_with` is the method form of a two-step comprehension
//! (`from a in x from b in y select f(a, b)`), i.e. a nested `bind`/`map`.
//! The `FromIterator` impls sequence many containers into one, stopping at
//! the first `Left`, Bottom or `Absent`.

use crate::maybe::Maybe;
use crate::outcome::{Outcome, State};

impl<L, R> Outcome<L, R> {
    /// Combine two independent outcomes. The first non-right input wins.
    pub fn zip_with<R2, R3, F>(self, other: Outcome<L, R2>, f: F) -> Outcome<L, R3>
    where
        F: FnOnce(R, R2) -> R3,
    {
        self.bind(|first| other.map(|second| f(first, second)))
    }
}

impl<T> Maybe<T> {
    /// Combine two independent values; `Absent` if either is absent.
    pub fn zip_with<U, V, F>(self, other: Maybe<U>, f: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        self.bind(|first| other.map(|second| f(first, second)))
    }
}

impl<L, R, V> FromIterator<Outcome<L, R>> for Outcome<L, V>
where
    V: FromIterator<R>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<L, R>>>(iter: I) -> Self {
        let mut halted = None;
        let collected: V = iter
            .into_iter()
            .map_while(|outcome| match outcome.state {
                State::Right(value) => Some(value),
                State::Left(value) => {
                    halted = Some(Outcome::left(value));
                    None
                }
                State::Bottom => {
                    halted = Some(Outcome::bottom());
                    None
                }
            })
            .collect();

        halted.unwrap_or(Outcome::right(collected))
    }
}

impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        let mut halted = false;
        let collected: V = iter
            .into_iter()
            .map_while(|maybe| {
                let value = maybe.into_option();
                halted = value.is_none();
                value
            })
            .collect();

        if halted { Maybe::Absent } else { Maybe::Present(collected) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct NotFound(u8);

    fn lookup(value: Option<i32>, which: u8) -> Outcome<NotFound, i32> {
        Outcome::from_nullable(value, NotFound(which))
    }

    #[test]
    fn test_zip_with_sums_when_both_right() {
        let sum = lookup(Some(1), 1).zip_with(lookup(Some(2), 2), |a, b| a + b);
        assert_eq!(sum, Outcome::right(3));
    }

    #[test]
    fn test_zip_with_keeps_first_left() {
        assert_eq!(
            lookup(Some(1), 1).zip_with(lookup(None, 2), |a, b| a + b),
            Outcome::left(NotFound(2))
        );
        assert_eq!(
            lookup(None, 1).zip_with(lookup(None, 2), |a, b| a + b),
            Outcome::left(NotFound(1))
        );
    }

    #[test]
    fn test_maybe_zip_with() {
        assert_eq!(Maybe::present(2).zip_with(Maybe::present(5), |a, b| a * b), Maybe::present(10));
        assert_eq!(Maybe::present(2).zip_with(Maybe::<i32>::absent(), |a, b| a * b), Maybe::absent());
    }

    #[test]
    fn test_collect_outcomes() {
        let all: Outcome<NotFound, Vec<i32>> = (1..=3).map(|n| lookup(Some(n), 0)).collect();
        assert_eq!(all, Outcome::right(vec![1, 2, 3]));

        let inputs = vec![lookup(Some(1), 1), lookup(None, 2), lookup(None, 3)];
        let first_left: Outcome<NotFound, Vec<i32>> = inputs.into_iter().collect();
        assert_eq!(first_left, Outcome::left(NotFound(2)));

        let with_bottom = vec![lookup(Some(1), 1), lookup(Some(2), 2).filter(|_| false)];
        let collected: Outcome<NotFound, Vec<i32>> = with_bottom.into_iter().collect();
        assert!(collected.is_bottom());
    }

    #[test]
    fn test_collect_maybes() {
        let all: Maybe<Vec<u8>> = vec![Maybe::present(1), Maybe::present(2)].into_iter().collect();
        assert_eq!(all, Maybe::present(vec![1, 2]));

        let gap: Maybe<Vec<u8>> = vec![Maybe::present(1), Maybe::absent()].into_iter().collect();
        assert_eq!(gap, Maybe::absent());
    }
}
