//! Cache key constants.

/// Key holding the serialized full joke catalog.
pub const JOKES: &str = "jokes";

/// Key holding the decimal-encoded joke count.
pub const TOTAL: &str = "total";
