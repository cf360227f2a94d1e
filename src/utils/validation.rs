use crate::utils::error::{RecordRef, Result, ShopError};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 以字元數（非位元組數）檢查最短長度
pub fn validate_min_length(record: RecordRef, field_name: &str, value: &str, min: usize) -> Result<()> {
    let length = value.chars().count();
    if length < min {
        return Err(ShopError::ValidationError {
            record,
            field: field_name.to_string(),
            reason: format!(
                "'{}' is too short ({} characters, at least {} required)",
                value, length, min
            ),
        });
    }
    Ok(())
}

pub fn validate_non_negative(record: RecordRef, field_name: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ShopError::ValidationError {
            record,
            field: field_name.to_string(),
            reason: format!("{} must not be negative", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog.path", "data/cookies.csv").is_ok());
        assert!(validate_path("catalog.path", "").is_err());
        assert!(validate_path("catalog.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_min_length_counts_characters() {
        let record = RecordRef::Id(1);
        assert!(validate_min_length(record, "title", "Ab", 2).is_ok());
        assert!(validate_min_length(record, "title", "A", 2).is_err());
        // 兩個多位元組字元仍只算 2 個字元
        assert!(validate_min_length(record, "title", "éé", 2).is_ok());
        assert!(validate_min_length(record, "description", "too short", 10).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        let record = RecordRef::Id(4);
        assert!(validate_non_negative(record, "price", Decimal::ZERO).is_ok());
        assert!(validate_non_negative(record, "price", Decimal::from_str("-0.00").unwrap()).is_ok());
        assert!(validate_non_negative(record, "price", Decimal::from_str("-0.01").unwrap()).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("shop.name", "Cookie Shop").is_ok());
        assert!(validate_non_empty_string("shop.name", "   ").is_err());
    }
}
