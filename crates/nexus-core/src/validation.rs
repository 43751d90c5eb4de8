//! # Validation Module
//!
//! Input validation for order fields, run before business logic mutates
//! anything. Checks here are the Nexus surface-level rules; GS1 identifier
//! checksums live in [`crate::gs1`].

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_ORDER_NUMBER_LEN, MAX_SKU_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an order number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 35 characters (the EDIFACT BGM document number limit)
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_order_number(order_number: &str) -> ValidationResult<()> {
    let order_number = order_number.trim();

    if order_number.is_empty() {
        return Err(ValidationError::Required {
            field: "order_number".to_string(),
        });
    }

    // Character count, not byte length: the filter below admits any
    // alphanumeric, including multi-byte ones
    if order_number.chars().count() > MAX_ORDER_NUMBER_LEN {
        return Err(ValidationError::TooLong {
            field: "order_number".to_string(),
            max: MAX_ORDER_NUMBER_LEN,
        });
    }

    if !order_number
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "order_number".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product SKU.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.chars().count() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an ISO 4217 currency code.
///
/// ## Rules
/// - Exactly 3 ASCII uppercase letters (EUR, USD, GBP, ...)
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a 3-letter uppercase ISO 4217 code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be at least 1 (quantities are unsigned; zero-quantity lines are noise)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
