//! A two-variant success-or-error container.
//!
//! `Either<L, R>` carries exactly one of an error value (`Left`) or a success
//! value (`Right`). The query-side service operations return it instead of
//! raising, and callers collapse both possibilities with [`Either::fold`].

/// One of two values. By convention `Left` is the error side and `Right`
/// the success side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Consumes the either, returning the left value if present.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Consumes the either, returning the right value if present.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the left value.
    ///
    /// # Panics
    /// Panics if this is a `Right` value.
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    /// Panics if this is a `Left` value.
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Collapses both possibilities into a single result type.
    pub fn fold<T>(self, left_fn: impl FnOnce(L) -> T, right_fn: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(value) => left_fn(value),
            Self::Right(value) => right_fn(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_checks() {
        let left: Either<&str, i32> = Either::Left("error");
        assert!(left.is_left());
        assert!(!left.is_right());

        let right: Either<&str, i32> = Either::Right(7);
        assert!(right.is_right());
        assert!(!right.is_left());
    }

    #[test]
    fn test_accessors() {
        let left: Either<&str, i32> = Either::Left("error");
        assert_eq!(left.clone().left(), Some("error"));
        assert_eq!(left.right(), None);

        let right: Either<&str, i32> = Either::Right(7);
        assert_eq!(right.clone().right(), Some(7));
        assert_eq!(right.left(), None);
    }

    #[test]
    fn test_fold_both_sides() {
        let left: Either<&str, i32> = Either::Left("boom");
        assert_eq!(left.fold(|e| format!("err: {}", e), |v| format!("ok: {}", v)), "err: boom");

        let right: Either<&str, i32> = Either::Right(42);
        assert_eq!(right.fold(|e| format!("err: {}", e), |v| format!("ok: {}", v)), "ok: 42");
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap_left()` on a `Right` value")]
    fn test_unwrap_left_on_right_panics() {
        let right: Either<&str, i32> = Either::Right(1);
        right.unwrap_left();
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
    fn test_unwrap_right_on_left_panics() {
        let left: Either<&str, i32> = Either::Left("nope");
        left.unwrap_right();
    }
}
