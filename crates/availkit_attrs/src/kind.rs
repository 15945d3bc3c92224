//! Classification of attribute occurrences into the shapes the merger knows.

use availkit_model::{AvailabilityKind, PlatformName};

use crate::attribute::AttributeData;

/// Namespace of the platform interop attributes.
pub const INTEROP_NAMESPACE: &str = "ObjCRuntime";

/// Namespace of the advice attribute.
pub const ADVICE_NAMESPACE: &str = "Foundation";

/// Every attribute shape this crate distinguishes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttributeKind {
    /// `[iOS (major, minor[, onlyOn64])]` or `[Mac (…)]`: an introduced
    /// version for one platform.
    Shorthand(PlatformName),
    /// `[Availability (…)]` with legacy 64-bit encoded positional and named
    /// arguments.
    Aggregate,
    /// `[Introduced (platform, …)]` and its three siblings.
    Single(AvailabilityKind),
    /// `[Advice ("…")]` from the Foundation namespace.
    Advice,
    /// Anything else. Never an error.
    Unrecognized,
}

impl AttributeKind {
    /// Determines the shape of `attr` from its namespace and class name.
    pub fn classify(attr: &AttributeData) -> AttributeKind {
        if attr.namespace == ADVICE_NAMESPACE && attr.type_name == "AdviceAttribute" {
            return AttributeKind::Advice;
        }

        if simple_namespace(&attr.namespace) != INTEROP_NAMESPACE {
            return AttributeKind::Unrecognized;
        }

        match attr.type_name.as_str() {
            "iOSAttribute" => AttributeKind::Shorthand(PlatformName::Ios),
            "MacAttribute" => AttributeKind::Shorthand(PlatformName::MacOS),
            "AvailabilityAttribute" => AttributeKind::Aggregate,
            "IntroducedAttribute" => AttributeKind::Single(AvailabilityKind::Introduced),
            "DeprecatedAttribute" => AttributeKind::Single(AvailabilityKind::Deprecated),
            "ObsoletedAttribute" => AttributeKind::Single(AvailabilityKind::Obsoleted),
            "UnavailableAttribute" => AttributeKind::Single(AvailabilityKind::Unavailable),
            _ => AttributeKind::Unrecognized,
        }
    }

    /// Returns `true` for shapes that contribute availability facts.
    pub fn is_availability(self) -> bool {
        matches!(
            self,
            AttributeKind::Shorthand(_) | AttributeKind::Aggregate | AttributeKind::Single(_)
        )
    }
}

/// The innermost namespace segment; hosts may hand over either form.
fn simple_namespace(namespace: &str) -> &str {
    namespace.rsplit('.').next().unwrap_or(namespace)
}
