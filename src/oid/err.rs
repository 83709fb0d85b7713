use backtrace::Backtrace;
use std::fmt::{Debug, Display, Formatter};

use crate::oid::codec::{COMPONENT_MAX, MIN_COMPONENTS, SECOND_COMPONENT_RESTRICTED_MAX};

pub struct Error(pub(crate) Box<Inner>);

impl Error {
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.0.kind
    }

    #[cold]
    #[inline(never)]
    pub fn unexpected_end_of_stream(cause: std::io::Error) -> Self {
        Self::from(ErrorKind::UnexpectedEndOfStream(cause))
    }

    #[cold]
    #[inline(never)]
    pub fn subidentifier_exceeds_max_value() -> Self {
        Self::from(ErrorKind::SubidentifierExceedsMaxValue)
    }

    #[cold]
    #[inline(never)]
    pub fn too_few_components(got: usize) -> Self {
        Self::from(ErrorKind::TooFewComponents(got))
    }

    #[cold]
    #[inline(never)]
    pub fn first_component_not_in_range(got: u32) -> Self {
        Self::from(ErrorKind::FirstComponentNotInRange(got))
    }

    #[cold]
    #[inline(never)]
    pub fn second_component_not_in_range(first: u32, second: u32) -> Self {
        Self::from(ErrorKind::SecondComponentNotInRange { first, second })
    }

    #[cold]
    #[inline(never)]
    pub fn second_component_exceeds_max_value(got: u64) -> Self {
        Self::from(ErrorKind::SecondComponentExceedsMaxValue(got))
    }

    #[cold]
    #[inline(never)]
    pub fn trailing_component_exceeds_max_value(index: usize, got: u64) -> Self {
        Self::from(ErrorKind::TrailingComponentExceedsMaxValue { index, got })
    }

    #[cold]
    #[inline(never)]
    pub fn component_literal_exceeds_max_value(index: usize, literal: &str) -> Self {
        Self::from(ErrorKind::ComponentLiteralExceedsMaxValue {
            index,
            literal: literal.to_string(),
        })
    }

    #[cold]
    #[inline(never)]
    pub fn negative_component(index: usize, literal: &str) -> Self {
        Self::from(ErrorKind::NegativeComponent {
            index,
            literal: literal.to_string(),
        })
    }

    #[cold]
    #[inline(never)]
    pub fn invalid_component_literal(literal: &str) -> Self {
        Self::from(ErrorKind::InvalidComponentLiteral(literal.to_string()))
    }

    #[cold]
    #[inline(never)]
    pub fn missing_opening_brace() -> Self {
        Self::from(ErrorKind::MissingOpeningBrace)
    }

    #[cold]
    #[inline(never)]
    pub fn missing_closing_brace() -> Self {
        Self::from(ErrorKind::MissingClosingBrace)
    }

    #[cold]
    #[inline(never)]
    pub fn invalid_hex_string(cause: hex::FromHexError) -> Self {
        Self::from(ErrorKind::InvalidHexString(cause))
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Error(Box::new(Inner::from(kind)))
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Self::from(ErrorKind::IoError(e))
    }
}

impl Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.0.kind)?;
        let mut backtrace = self.0.backtrace.clone();
        backtrace.resolve();
        writeln!(f, "{:?}", backtrace)
    }
}

impl std::error::Error for Error {
    fn description(&self) -> &str {
        "encoding or decoding an object identifier failed"
    }

    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0.kind {
            ErrorKind::UnexpectedEndOfStream(cause) => Some(cause),
            ErrorKind::InvalidHexString(cause) => Some(cause),
            ErrorKind::IoError(cause) => Some(cause),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) kind: ErrorKind,
    pub(crate) backtrace: Backtrace,
}

impl From<ErrorKind> for Inner {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The ASN.1 curly notation does not start with `{`.
    MissingOpeningBrace,
    /// The ASN.1 curly notation does not end with `}`.
    MissingClosingBrace,
    /// A token between delimiters is not a base-10 integer literal.
    InvalidComponentLiteral(String),
    /// A token parsed to a negative value, but components are non-negative.
    NegativeComponent { index: usize, literal: String },
    /// A token parsed to a value beyond the per-component maximum.
    ComponentLiteralExceedsMaxValue { index: usize, literal: String },
    /// Fewer than the required minimum of two components.
    TooFewComponents(usize),
    /// The first component is not one of 0, 1 or 2.
    FirstComponentNotInRange(u32),
    /// The second component exceeds 39 while the first component is 0 or 1.
    SecondComponentNotInRange { first: u32, second: u32 },
    /// The decoded second component exceeds the per-component maximum.
    SecondComponentExceedsMaxValue(u64),
    /// A decoded component after the second exceeds the per-component maximum.
    TrailingComponentExceedsMaxValue { index: usize, got: u64 },
    /// A single subidentifier carries more than the codec can accumulate.
    SubidentifierExceedsMaxValue,
    /// The octet stream ended before a subidentifier terminated.
    UnexpectedEndOfStream(std::io::Error),
    /// The octet-string form contains non-hex characters or has odd length.
    InvalidHexString(hex::FromHexError),
    IoError(std::io::Error),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::MissingOpeningBrace => {
                write!(f, "The ASN.1 notation does not start with an opening curly brace")
            }
            ErrorKind::MissingClosingBrace => {
                write!(f, "The ASN.1 notation does not end with a closing curly brace")
            }
            ErrorKind::InvalidComponentLiteral(literal) => {
                write!(f, "The token {:?} is not a valid base-10 component", literal)
            }
            ErrorKind::NegativeComponent { index, literal } => {
                write!(
                    f,
                    "The component {:?} at index {} is negative, but components must not be",
                    literal, index
                )
            }
            ErrorKind::ComponentLiteralExceedsMaxValue { index, literal } => {
                write!(
                    f,
                    "The component {:?} at index {} exceeds the maximum of {}",
                    literal, index, COMPONENT_MAX
                )
            }
            ErrorKind::TooFewComponents(got) => {
                write!(
                    f,
                    "An object identifier requires at least {} components but got {}",
                    MIN_COMPONENTS, got
                )
            }
            ErrorKind::FirstComponentNotInRange(got) => {
                write!(f, "The first component must be 0, 1 or 2 but is {}", got)
            }
            ErrorKind::SecondComponentNotInRange { first, second } => {
                write!(
                    f,
                    "The second component must not exceed {} while the first component is {}, but is {}",
                    SECOND_COMPONENT_RESTRICTED_MAX, first, second
                )
            }
            ErrorKind::SecondComponentExceedsMaxValue(got) => {
                write!(
                    f,
                    "The decoded second component {} exceeds the maximum of {}",
                    got, COMPONENT_MAX
                )
            }
            ErrorKind::TrailingComponentExceedsMaxValue { index, got } => {
                write!(
                    f,
                    "The decoded component {} at index {} exceeds the maximum of {}",
                    got, index, COMPONENT_MAX
                )
            }
            ErrorKind::SubidentifierExceedsMaxValue => {
                write!(f, "The subidentifier exceeds the maximum accumulable value")
            }
            ErrorKind::UnexpectedEndOfStream(cause) => {
                write!(
                    f,
                    "The octet stream ended before the subidentifier terminated: {:?}",
                    cause
                )
            }
            ErrorKind::InvalidHexString(cause) => {
                write!(f, "The octet-string form is not valid hex: {}", cause)
            }
            ErrorKind::IoError(cause) => {
                write!(f, "Experienced underlying IO error: {:?}", cause)
            }
        }
    }
}
