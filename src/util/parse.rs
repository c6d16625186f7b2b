use sea_orm::DbErr;

use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a stored snowflake at the repository boundary.
///
/// Repositories return `DbErr`, so parse failures surface as `DbErr::Custom` naming
/// the field that held the bad value.
///
/// # Arguments
/// - `field` - Name of the column being converted, used in the error message
/// - `value` - The stored string value
pub fn parse_snowflake(field: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}
