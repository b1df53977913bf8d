//! Error taxonomy for value operations.
//!
//! Every fallible operation on a [`Value`](crate::Value) returns one of these
//! errors. Callers branch on [`Error::kind`], never on the message text; the
//! `Display` output is for humans and takes the form `Kind: detail`.

use crate::{String, ToString, pos::Pos};

use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A failure produced by a value operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operand of the wrong kind. Carries a description of the expected kind.
    #[error("TypeMismatch: {0}")]
    TypeMismatch(String),

    #[error("TypeMismatch: Expected Comparable Type")]
    ExpectedComparable,

    #[error("TypeMismatch: Expected Number Type")]
    ExpectedNumber,

    #[error("TypeMismatch: Expected Boolean Type")]
    ExpectedBoolean,

    #[error("TypeMismatch: Expected Obj Type")]
    ExpectedObj,

    /// List index outside `[0, len)`.
    #[error("IndexOutOfBounds: index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    /// Ordering or arithmetic attempted on `null`.
    #[error("NullValue")]
    NullValue,

    /// Any operation other than `init` on an Obj that has not been initialized.
    #[error("UninitializedObj")]
    UninitializedObj,

    /// `init` on an Obj whose field set is already fixed.
    #[error("AlreadyInitialized: Obj fields are fixed once initialized")]
    AlreadyInitialized,

    #[error("NoSuchField: Field '{0}' not found")]
    NoSuchField(String),

    /// An ObjDef declares the same field name twice.
    #[error("DuplicateField: Field '{0}' is declared more than once")]
    DuplicateField(String),

    /// `init` was given a different number of values than the ObjDef has keys.
    #[error("ArityMismatch: expected {expected} values, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("DivideByZero")]
    DivideByZero,
}

impl Error {
    pub fn type_mismatch(expected: impl Into<String>) -> Self {
        Error::TypeMismatch(expected.into())
    }

    pub fn no_such_field(key: &str) -> Self {
        Error::NoSuchField(key.to_string())
    }

    /// The kind tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Error::ExpectedComparable => ErrorKind::ExpectedComparable,
            Error::ExpectedNumber => ErrorKind::ExpectedNumber,
            Error::ExpectedBoolean => ErrorKind::ExpectedBoolean,
            Error::ExpectedObj => ErrorKind::ExpectedObj,
            Error::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Error::NullValue => ErrorKind::NullValue,
            Error::UninitializedObj => ErrorKind::UninitializedObj,
            Error::AlreadyInitialized => ErrorKind::AlreadyInitialized,
            Error::NoSuchField(_) => ErrorKind::NoSuchField,
            Error::DuplicateField(_) => ErrorKind::DuplicateField,
            Error::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            Error::DivideByZero => ErrorKind::DivideByZero,
        }
    }

    /// Attach the source position the engine was evaluating when this error
    /// was raised.
    pub fn at(self, pos: Pos) -> LocatedError {
        LocatedError { error: self, pos }
    }
}

/// Kind tag of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    ExpectedComparable,
    ExpectedNumber,
    ExpectedBoolean,
    ExpectedObj,
    IndexOutOfBounds,
    NullValue,
    UninitializedObj,
    AlreadyInitialized,
    NoSuchField,
    DuplicateField,
    ArityMismatch,
    DivideByZero,
}

impl ErrorKind {
    /// True for `TypeMismatch` and its operand-specific `Expected*` variants.
    pub fn is_type_mismatch(self) -> bool {
        matches!(
            self,
            ErrorKind::TypeMismatch
                | ErrorKind::ExpectedComparable
                | ErrorKind::ExpectedNumber
                | ErrorKind::ExpectedBoolean
                | ErrorKind::ExpectedObj
        )
    }

    /// Stable diagnostic code (e.g., "V001") for documentation lookup.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "V001",
            ErrorKind::ExpectedComparable => "V002",
            ErrorKind::ExpectedNumber => "V003",
            ErrorKind::ExpectedBoolean => "V004",
            ErrorKind::ExpectedObj => "V005",
            ErrorKind::IndexOutOfBounds => "V006",
            ErrorKind::NullValue => "V007",
            ErrorKind::UninitializedObj => "V008",
            ErrorKind::AlreadyInitialized => "V009",
            ErrorKind::NoSuchField => "V010",
            ErrorKind::DuplicateField => "V011",
            ErrorKind::ArityMismatch => "V012",
            ErrorKind::DivideByZero => "V013",
        }
    }
}

/// An [`Error`] paired with the source position it was raised at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error} at {pos}")]
pub struct LocatedError {
    pub error: Error,
    pub pos: Pos,
}

impl LocatedError {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}
