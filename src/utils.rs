pub mod ids;
pub mod lenient;

use diesel::result::Error as DieselError;
use serde::Serialize;

/// Encodes a list-valued attribute for a JSON text column.
pub fn to_json_column<T: Serialize>(value: &T) -> Result<String, DieselError> {
    serde_json::to_string(value).map_err(|e| DieselError::SerializationError(Box::new(e)))
}

/// Decodes a stored row whose JSON columns need parsing.
pub fn decode_row<R, T>(row: R) -> Result<T, DieselError>
where
    T: TryFrom<R, Error = serde_json::Error>,
{
    T::try_from(row).map_err(|e| DieselError::DeserializationError(Box::new(e)))
}
