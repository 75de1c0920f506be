/*!
 * Serde Helpers
 * Predicates for `#[serde(skip_serializing_if = "...")]`
 */

/// Skip serializing if Option is None
#[inline]
pub const fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Skip serializing if a counter is zero
#[inline]
pub const fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}
