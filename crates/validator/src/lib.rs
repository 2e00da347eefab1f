#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;

pub use error::*;

/// A form or configuration object that can check its own contents
/// before the rest of the program is allowed to act on it.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidateError>;
}

impl<T: Validate> Validate for &T {
    fn validate(&self) -> Result<(), ValidateError> {
        T::validate(self)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidateError> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}
