//! Timestamp-derived identifiers for returns and tickets
//!
//! Identifiers are second-granularity UTC timestamps with a type prefix.
//! Two calls within the same second produce the same identifier; that
//! collision window is an accepted limitation of the demo, not a
//! uniqueness contract.

use chrono::Utc;

/// Synthesize an identifier like `RET-20260805143000`
pub fn timestamp_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let id = timestamp_id("RET");
        assert!(id.starts_with("RET-"));
        let digits = &id["RET-".len()..];
        assert_eq!(digits.len(), 14);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_prefix_is_caller_chosen() {
        assert!(timestamp_id("TKT").starts_with("TKT-"));
    }
}
