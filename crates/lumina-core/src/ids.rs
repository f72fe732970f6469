//! # Identifier Generation
//!
//! Record identifiers have the shape `{prefix}-{unix-millis}-{suffix}`:
//! a type prefix, the creation time in milliseconds, and an 8-character
//! random tail taken from a v4 UUID.
//!
//! There is no counter and no coordination. Two records created in the
//! same millisecond collide only if their random tails match, which is
//! astronomically unlikely and accepted for a single-register store.

use chrono::Utc;
use uuid::Uuid;

/// Prefix for product identifiers.
pub const PRODUCT_ID_PREFIX: &str = "prod";
/// Prefix for sale identifiers.
pub const SALE_ID_PREFIX: &str = "sale";
/// Prefix for expense identifiers.
pub const EXPENSE_ID_PREFIX: &str = "exp";

/// Generates a fresh record identifier.
///
/// ## Example
/// ```rust
/// use lumina_core::ids::generate_id;
///
/// let id = generate_id("sale");
/// assert!(id.starts_with("sale-"));
/// assert_eq!(id.split('-').count(), 3);
/// ```
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, millis, &suffix[..8])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let id = generate_id(PRODUCT_ID_PREFIX);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "prod");
        assert!(parts[1].parse::<i64>().unwrap() > 0);
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn test_ids_are_unique_in_practice() {
        let a = generate_id(SALE_ID_PREFIX);
        let b = generate_id(SALE_ID_PREFIX);
        assert_ne!(a, b);
    }
}
