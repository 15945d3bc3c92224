//! Errors raised while merging an attribute into an availability record.

/// A merge failure that aborts the current merge call.
///
/// Attributes whose arguments do not match a known overload are not errors;
/// the merger skips them and leaves the record untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// A single-platform attribute named a platform outside the closed set.
    #[error("attribute '{attribute}' names unknown platform {value}")]
    UnknownPlatform {
        /// The attribute type name.
        attribute: String,
        /// The platform byte found in the first constructor argument.
        value: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_platform() {
        let err = MergeError::UnknownPlatform {
            attribute: "IntroducedAttribute".to_string(),
            value: 42,
        };
        assert_eq!(
            format!("{err}"),
            "attribute 'IntroducedAttribute' names unknown platform 42"
        );
    }
}
