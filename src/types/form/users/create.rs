use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateError};

/// Body of `POST /api/users`.
///
/// Absent fields deserialize to their empty values so that a missing
/// and an empty `name`/`email` fail validation the same way, before
/// anything touches the store.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Request {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

impl Validate for Request {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("name", {
            let mut error = ValidateError::msg_builder();
            if self.name.is_empty() {
                error.insert("Missing required field: name");
            }
            error.build()
        });

        fields.insert("email", {
            let mut error = ValidateError::msg_builder();
            if self.email.is_empty() {
                error.insert("Missing required field: email");
            }
            error.build()
        });

        fields.build().into_result()
    }
}
