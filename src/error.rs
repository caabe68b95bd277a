//! Error types for monadic computations.
//!
//! Every fallible operation in this crate returns [`MonadResult`]. The three
//! kinds of [`MonadError`] are library failures; a `Left` produced by the
//! Either monad is an ordinary computed value and never one of them.
//!
//! # Examples
//!
//! ```rust
//! use monadic::error::MonadError;
//! use monadic::typeclass::Variant;
//!
//! let error = MonadError::TypeMismatch {
//!     expected: Variant::Maybe,
//!     found: Variant::List,
//! };
//! assert_eq!(
//!     error.to_string(),
//!     "type mismatch: expected a Maybe value, found a List value"
//! );
//! ```

use thiserror::Error;

use crate::typeclass::Variant;

/// Failures raised by monad definitions, accessors and environments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonadError {
    /// `zero`, `plus`, `guard` or `filter` was invoked on a variant that is not MonadPlus.
    #[error("{variant} does not support `{operation}`")]
    UnsupportedOperation {
        /// The variant the operation was invoked on.
        variant: Variant,
        /// The name of the unsupported operation.
        operation: &'static str,
    },

    /// A step expression looked up a name that has not been bound yet.
    #[error("name `{name}` is not bound in the environment")]
    UnboundName {
        /// The name that was looked up.
        name: String,
    },

    /// A value tagged for one variant reached an operation of another.
    #[error("type mismatch: expected a {expected} value, found a {found} value")]
    TypeMismatch {
        /// The variant the operation works on.
        expected: Variant,
        /// The variant of the value actually received.
        found: Variant,
    },
}

impl MonadError {
    pub(crate) fn unsupported(variant: Variant, operation: &'static str) -> Self {
        tracing::debug!(%variant, operation, "unsupported monad operation");
        Self::UnsupportedOperation { variant, operation }
    }

    pub(crate) fn mismatch(expected: Variant, found: Variant) -> Self {
        tracing::debug!(%expected, %found, "monadic value tagged for another variant");
        Self::TypeMismatch { expected, found }
    }

    /// Creates an [`MonadError::UnboundName`] for `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::error::MonadError;
    ///
    /// let error = MonadError::unbound("x");
    /// assert_eq!(error.to_string(), "name `x` is not bound in the environment");
    /// ```
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::UnboundName { name: name.into() }
    }
}

/// Result alias used throughout the crate.
pub type MonadResult<T> = Result<T, MonadError>;
