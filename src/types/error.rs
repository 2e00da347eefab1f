use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Error {
    Internal,
    InvalidFormBody(validator::ValidateError),
    NotFound,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Internal => f.write_str("Failed to perform request"),
            Error::InvalidFormBody(..) => f.write_str("User performed request with invalid body"),
            Error::NotFound => f.write_str("Requested an entry that does not exist"),
        }
    }
}
