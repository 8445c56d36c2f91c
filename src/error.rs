use std::fmt;

/// Error raised by a container operation.
///
/// Errors always propagate to the caller of the offending operation.
/// A compound operation failing halfway leaves the container in the state
/// produced by the primitives that already completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
	/// The container does not support the operation (e.g. it is read-only).
	UnsupportedOperation(&'static str),

	/// A key or value failed a type constraint of the container.
	InvalidArgumentType(String),

	/// An absent-like value was supplied to a container forbidding them.
	RejectedNull,

	/// A key or value failed a value-level constraint of the container.
	IllegalArgument(String),

	/// The container was structurally modified while being iterated.
	ConcurrentStateChanged,

	/// An iteration handle was used while not positioned on a mapping.
	IllegalState(&'static str),
}

impl Error {
	pub fn invalid_type<S: Into<String>>(msg: S) -> Error {
		Error::InvalidArgumentType(msg.into())
	}

	pub fn illegal_argument<S: Into<String>>(msg: S) -> Error {
		Error::IllegalArgument(msg.into())
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::UnsupportedOperation(op) => write!(f, "unsupported operation `{}`", op),
			Error::InvalidArgumentType(msg) => write!(f, "invalid argument type: {}", msg),
			Error::RejectedNull => write!(f, "absent-like value rejected"),
			Error::IllegalArgument(msg) => write!(f, "illegal argument: {}", msg),
			Error::ConcurrentStateChanged => {
				write!(f, "container structurally modified during iteration")
			}
			Error::IllegalState(op) => write!(f, "`{}` called while not on a mapping", op),
		}
	}
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
