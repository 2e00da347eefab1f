use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateError};

use crate::store::UserChanges;

/// Body of `PUT /api/users/{id}`. Every field is optional; the handler
/// applies only the ones supplied, and an empty body is a no-op.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Request {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl Validate for Request {
    // A supplied name or email may not be blanked out; records keep
    // the invariant that both always hold text.
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        if let Some(name) = self.name.as_deref() {
            fields.insert("name", {
                let mut error = ValidateError::msg_builder();
                if name.is_empty() {
                    error.insert("Field must not be empty: name");
                }
                error.build()
            });
        }

        if let Some(email) = self.email.as_deref() {
            fields.insert("email", {
                let mut error = ValidateError::msg_builder();
                if email.is_empty() {
                    error.insert("Field must not be empty: email");
                }
                error.build()
            });
        }

        fields.build().into_result()
    }
}

impl From<Request> for UserChanges {
    fn from(value: Request) -> Self {
        Self {
            name: value.name,
            email: value.email,
            role: value.role,
        }
    }
}
