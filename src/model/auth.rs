/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field of the login body identifying the customer
pub const CUSTOMER_ID_FIELD: &str = "customerId";

/// Customer record returned by the login endpoint
///
/// The record is kept as the opaque JSON object the API sends back. The only
/// field the client relies on is `customerId`, which is guaranteed to be present
/// and non-empty for every value of this type.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct AuthenticatedUser {
    fields: Map<String, Value>,
}

impl AuthenticatedUser {
    /// The customer identifier, with the JSON type the API used for it
    #[must_use]
    pub fn customer_id(&self) -> &Value {
        // present by construction
        self.fields.get(CUSTOMER_ID_FIELD).unwrap_or(&Value::Null)
    }

    /// The customer identifier rendered as text
    #[must_use]
    pub fn customer_id_str(&self) -> String {
        match self.customer_id() {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Looks up any other field of the record
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields of the record
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

fn has_customer_id(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

impl TryFrom<Value> for AuthenticatedUser {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => {
                if !has_customer_id(fields.get(CUSTOMER_ID_FIELD)) {
                    return Err(AppError::InvalidArgument(format!(
                        "user object has no {CUSTOMER_ID_FIELD}"
                    )));
                }
                Ok(Self { fields })
            }
            Value::Null => Err(AppError::InvalidArgument(
                "user object is missing".to_string(),
            )),
            other => Err(AppError::InvalidArgument(format!(
                "user must be a JSON object, got {other}"
            ))),
        }
    }
}

impl From<AuthenticatedUser> for Value {
    fn from(user: AuthenticatedUser) -> Self {
        Value::Object(user.fields)
    }
}
