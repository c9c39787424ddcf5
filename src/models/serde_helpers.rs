//! Serde serialization helpers for ensuring consistent JSON output

/// Skip `false` booleans so soft-delete flags only appear on struck words
pub fn is_false(value: &bool) -> bool {
    !*value
}
