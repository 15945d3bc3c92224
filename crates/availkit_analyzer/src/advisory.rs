//! The two advisory decisions and how they compose.
//!
//! [`deprecation_message`] is consulted first. Only when it has nothing to
//! say does [`introduction_message`] run. [`advise`] performs that sequence,
//! tags the result with the rule it belongs to and appends the record's own
//! message.

use availkit_diagnostics::AdvisoryKind;
use availkit_model::{
    Architecture, AvailabilityKind, AvailabilityRecord, DeploymentVersion, PlatformName,
};
use serde::{Deserialize, Serialize};

/// An advisory message together with the rule it is reported under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// The rule this advisory belongs to.
    pub kind: AdvisoryKind,
    /// The message, without the symbol name.
    pub message: String,
}

impl Advisory {
    /// Creates an advisory.
    pub fn new(kind: AdvisoryKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The diagnostic text for a use of `symbol_name`.
    pub fn render_for(&self, symbol_name: &str) -> String {
        format!("'{symbol_name}' {}", self.message)
    }
}

fn applicable(record: Option<&AvailabilityRecord>, platform: PlatformName) -> Option<&AvailabilityRecord> {
    record.filter(|r| r.is_specified() && platform.is_concrete())
}

/// Reports whether the API is unavailable, obsoleted or deprecated on
/// `platform`, in that priority.
pub fn deprecation_message(
    record: Option<&AvailabilityRecord>,
    platform: PlatformName,
) -> Option<String> {
    let record = applicable(record, platform)?;
    let full_name = |kind| record.set(kind).full_name_for(platform);

    let unavailable = record.is_specified_for(AvailabilityKind::Unavailable, platform);
    let obsoleted = record.is_specified_for(AvailabilityKind::Obsoleted, platform);
    let deprecated = record.is_specified_for(AvailabilityKind::Deprecated, platform);

    if unavailable {
        return Some(format!(
            "was made unavailable in {}",
            full_name(AvailabilityKind::Unavailable)
        ));
    }

    match (deprecated, obsoleted) {
        (true, true) => Some(format!(
            "was deprecated in {} and obsoleted (might be removed) in {}",
            full_name(AvailabilityKind::Deprecated),
            full_name(AvailabilityKind::Obsoleted)
        )),
        (false, true) => Some(format!(
            "was obsoleted (might be removed) in {}",
            full_name(AvailabilityKind::Obsoleted)
        )),
        (true, false) => Some(format!(
            "was deprecated in {}",
            full_name(AvailabilityKind::Deprecated)
        )),
        (false, false) => None,
    }
}

/// Reports whether the API was introduced after the deployment target.
///
/// Without a deployment target there is nothing to compare against and no
/// message is produced.
pub fn introduction_message(
    record: Option<&AvailabilityRecord>,
    minimum_version: Option<DeploymentVersion>,
    platform: PlatformName,
) -> Option<String> {
    let record = applicable(record, platform)?;
    let target = minimum_version?.target_for(platform);

    let introduced = record.slot(AvailabilityKind::Introduced, platform)?;
    if !introduced.is_specified() || introduced.compare(Some(&target)).is_le() {
        return None;
    }

    let arch = introduced.architecture();
    let mut message = format!("is only available on {} or newer", introduced.full_name());
    if arch != Architecture::ALL && arch.contains(Architecture::ARCH64) {
        message.push_str(" and requires a 64-bit architecture");
    }
    Some(message)
}

/// Runs both decisions in order and returns the advisory to report, if any.
pub fn advise(
    record: Option<&AvailabilityRecord>,
    minimum_version: Option<DeploymentVersion>,
    platform: PlatformName,
) -> Option<Advisory> {
    let mut advisory = deprecation_message(record, platform)
        .map(|m| Advisory::new(AdvisoryKind::DeprecatedOrObsoleted, m))
        .or_else(|| {
            introduction_message(record, minimum_version, platform)
                .map(|m| Advisory::new(AdvisoryKind::IntroducedLater, m))
        })?;

    if let Some(extra) = record.and_then(|r| r.message.as_deref()) {
        advisory.message = format!("{}.\n {extra}", advisory.message);
    }
    Some(advisory)
}
