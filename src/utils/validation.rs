use crate::error::Result;
use serde::de::DeserializeOwned;
use validator::Validate;

pub fn validate<T: Validate>(val: &T) -> std::result::Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Deserializes a JSON request body and runs its declarative validation.
pub fn parse_payload<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_str(body)?;
    validate(&payload)?;
    Ok(payload)
}
