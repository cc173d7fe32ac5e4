// src/application/either.rs
//! Success-or-failure container returned by every use case.
//!
//! `Left` carries an expected business failure, `Right` the successful
//! payload. Infrastructure faults never travel through this type; they are the
//! `Err` side of the surrounding [`ApplicationResult`].

use crate::application::error::ApplicationResult;

#[must_use = "a Left carries a business failure that has to be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// Outcome of a use case: fault channel outside, business channel inside.
pub type UseCaseResult<L, R> = ApplicationResult<Either<L, R>>;

pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    pub const fn as_left(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    pub const fn as_right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    pub fn map_left<F, M>(self, f: M) -> Either<F, R>
    where
        M: FnOnce(L) -> F,
    {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    pub fn map_right<T, M>(self, f: M) -> Either<L, T>
    where
        M: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(value: Either<L, R>) -> Self {
        value.into_result()
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_is_success() {
        let result: Either<&str, i32> = right(10);

        assert!(result.is_right());
        assert!(!result.is_left());
        assert_eq!(result.as_right(), Some(&10));
        assert_eq!(result.into_right(), Some(10));
    }

    #[test]
    fn left_is_failure() {
        let result: Either<&str, i32> = left("error");

        assert!(result.is_left());
        assert!(!result.is_right());
        assert_eq!(result.as_left(), Some(&"error"));
        assert_eq!(result.into_right(), None);
    }

    #[test]
    fn maps_only_the_matching_side() {
        let ok: Either<&str, i32> = right(2);
        let err: Either<&str, i32> = left("boom");

        assert_eq!(ok.map_right(|v| v * 2), right(4));
        assert_eq!(err.map_right(|v| v * 2), left("boom"));
        assert_eq!(err.map_left(str::len), left(4));
    }

    #[test]
    fn converts_to_and_from_result() {
        let either: Either<String, u8> = Ok::<u8, String>(1).into();
        assert_eq!(either, right(1));

        let result: Result<u8, String> = left::<String, u8>("bad".into()).into();
        assert_eq!(result, Err("bad".to_string()));
    }
}
