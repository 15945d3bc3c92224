//! Folding recognized attributes into an [`AvailabilityRecord`].
//!
//! Each attribute is first parsed into the facts it states, then applied
//! to the record. Parsing never touches the record, so an attribute whose
//! arguments match no known overload leaves the record exactly as it was.

use availkit_model::{
    Architecture, AvailabilityKind, AvailabilityRecord, ConflictPolicy, PlatformName, PlatformSet,
    PlatformVersion,
};

use crate::attribute::{AttributeData, AttributeValue};
use crate::error::MergeError;
use crate::kind::AttributeKind;

/// Merges attribute occurrences into availability records.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributeMerger {
    policy: ConflictPolicy,
}

impl AttributeMerger {
    /// Creates a merger that combines conflicting slots with `policy`.
    pub fn new(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    /// The conflict policy in use.
    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Folds `attr` into `record`.
    ///
    /// An absent record is created on the first recognized attribute.
    /// Unrecognized attributes and malformed argument lists return the
    /// record unchanged. A single-platform attribute naming a platform
    /// outside the closed set fails the call.
    pub fn merge(
        &self,
        record: Option<AvailabilityRecord>,
        attr: &AttributeData,
    ) -> Result<Option<AvailabilityRecord>, MergeError> {
        let kind = AttributeKind::classify(attr);
        if !kind.is_availability() {
            return Ok(record);
        }

        let facts = match parse_facts(kind, attr) {
            Ok(facts) => facts,
            Err(Rejection::Malformed(reason)) => {
                tracing::debug!(
                    attribute = %attr.type_name,
                    args = attr.constructor_args.len(),
                    reason,
                    "ignoring attribute with unsupported shape"
                );
                return Ok(record);
            }
            Err(Rejection::Fatal(err)) => return Err(err),
        };

        let mut record = record.unwrap_or_default();
        facts.apply(&mut record, self.policy);
        Ok(Some(record))
    }

    /// Folds every attribute in order, stopping at the first fatal error.
    pub fn merge_all<'a, I>(
        &self,
        record: Option<AvailabilityRecord>,
        attrs: I,
    ) -> Result<Option<AvailabilityRecord>, MergeError>
    where
        I: IntoIterator<Item = &'a AttributeData>,
    {
        attrs
            .into_iter()
            .try_fold(record, |record, attr| self.merge(record, attr))
    }
}

enum Rejection {
    Malformed(&'static str),
    Fatal(MergeError),
}

enum MessageUpdate {
    Replace(String),
    Append(String),
}

/// What one attribute says, independent of any record.
#[derive(Default)]
struct Facts {
    sets: Vec<(AvailabilityKind, PlatformSet)>,
    messages: Vec<MessageUpdate>,
}

impl Facts {
    fn apply(self, record: &mut AvailabilityRecord, policy: ConflictPolicy) {
        for (kind, set) in &self.sets {
            record.merge_set(*kind, set, policy);
        }
        for update in self.messages {
            match update {
                MessageUpdate::Replace(message) => record.message = Some(message),
                MessageUpdate::Append(message) => record.append_message(&message),
            }
        }
    }
}

fn parse_facts(kind: AttributeKind, attr: &AttributeData) -> Result<Facts, Rejection> {
    match kind {
        AttributeKind::Shorthand(platform) => parse_shorthand(platform, &attr.constructor_args),
        AttributeKind::Single(kind) => parse_single(kind, attr),
        AttributeKind::Aggregate => parse_aggregate(attr),
        AttributeKind::Advice | AttributeKind::Unrecognized => Ok(Facts::default()),
    }
}

fn byte_arg(args: &[AttributeValue], index: usize) -> Result<u8, Rejection> {
    args.get(index)
        .and_then(AttributeValue::as_u8)
        .ok_or(Rejection::Malformed("expected a byte-sized integer argument"))
}

/// `(major, minor)` or `(major, minor, onlyOn64)`.
fn parse_shorthand(platform: PlatformName, args: &[AttributeValue]) -> Result<Facts, Rejection> {
    if !(2..=3).contains(&args.len()) {
        return Err(Rejection::Malformed("shorthand takes two or three arguments"));
    }

    let major = byte_arg(args, 0)?;
    let minor = byte_arg(args, 1)?;
    let only_64 = match args.get(2) {
        Some(value) => value
            .as_bool()
            .ok_or(Rejection::Malformed("expected a boolean 64-bit flag"))?,
        None => false,
    };
    let arch = if only_64 {
        Architecture::ARCH64
    } else {
        Architecture::NONE
    };

    let version = PlatformVersion::new(platform, arch, major, minor, 0);
    Ok(Facts {
        sets: vec![(AvailabilityKind::Introduced, PlatformSet::single(version))],
        messages: Vec::new(),
    })
}

/// `(platform, arch, message)`, `(platform, major, minor, arch, message)` or
/// `(platform, major, minor, subminor, arch, message)`.
fn parse_single(kind: AvailabilityKind, attr: &AttributeData) -> Result<Facts, Rejection> {
    let args = &attr.constructor_args;

    let raw_platform = byte_arg(args, 0)?;
    let platform = PlatformName::try_from(raw_platform)
        .ok()
        .filter(|p| p.is_concrete())
        .ok_or_else(|| {
            Rejection::Fatal(MergeError::UnknownPlatform {
                attribute: attr.type_name.clone(),
                value: raw_platform,
            })
        })?;

    let (version, message) = match args.len() {
        3 => {
            let arch = Architecture::from_bits(byte_arg(args, 1)?);
            (PlatformVersion::new(platform, arch, 0, 0, 0), None)
        }
        5 => {
            let major = byte_arg(args, 1)?;
            let minor = byte_arg(args, 2)?;
            let arch = Architecture::from_bits(byte_arg(args, 3)?);
            let version = PlatformVersion::new(platform, arch, major, minor, 0);
            (version, args[4].as_str())
        }
        6 => {
            let major = byte_arg(args, 1)?;
            let minor = byte_arg(args, 2)?;
            let subminor = byte_arg(args, 3)?;
            let arch = Architecture::from_bits(byte_arg(args, 4)?);
            let version = PlatformVersion::new(platform, arch, major, minor, subminor);
            (version, args[5].as_str())
        }
        _ => return Err(Rejection::Malformed("no single-platform overload takes this many arguments")),
    };

    Ok(Facts {
        sets: vec![(kind, PlatformSet::single(version))],
        messages: message
            .map(|m| MessageUpdate::Replace(m.to_string()))
            .into_iter()
            .collect(),
    })
}

/// Up to four positional legacy encodings, then named overrides and messages.
fn parse_aggregate(attr: &AttributeData) -> Result<Facts, Rejection> {
    let mut facts = Facts::default();

    for (kind, value) in AvailabilityKind::ALL.into_iter().zip(&attr.constructor_args) {
        let encoding = value
            .as_u64()
            .ok_or(Rejection::Malformed("expected a legacy platform encoding"))?;
        if encoding != 0 {
            facts.sets.push((kind, PlatformSet::decode_legacy(encoding)));
        }
    }

    // Named arguments come after positional ones syntactically, so they are
    // applied last.
    for named in &attr.named_args {
        if named.name == "Message" {
            if let Some(message) = named.value.as_str() {
                facts.messages.push(MessageUpdate::Append(message.to_string()));
            }
            continue;
        }

        let Some(kind) = AvailabilityKind::from_name(&named.name) else {
            continue;
        };
        let encoding = named
            .value
            .as_u64()
            .ok_or(Rejection::Malformed("expected a legacy platform encoding"))?;
        if encoding != 0 {
            facts.sets.push((kind, PlatformSet::decode_legacy(encoding)));
        }
    }

    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::INTEROP_NAMESPACE;

    const IOS: u8 = PlatformName::Ios as u8;
    const MAC: u8 = PlatformName::MacOS as u8;

    fn interop(name: &str) -> AttributeData {
        AttributeData::new(INTEROP_NAMESPACE, name)
    }

    fn merger() -> AttributeMerger {
        AttributeMerger::default()
    }

    fn introduced(record: &AvailabilityRecord, platform: PlatformName) -> PlatformVersion {
        *record.introduced.get(platform).unwrap()
    }

    #[test]
    fn foreign_attribute_is_noop() {
        let mut start = AvailabilityRecord::new();
        start.message = Some("keep".to_string());
        let attr = AttributeData::new("System", "IntroducedAttribute")
            .with_args([AttributeValue::Byte(IOS), AttributeValue::Byte(0xff), AttributeValue::Null]);

        let out = merger().merge(Some(start.clone()), &attr).unwrap();
        assert_eq!(out, Some(start));

        let out = merger().merge(None, &attr).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn shorthand_ios() {
        let attr = interop("iOSAttribute").with_args([AttributeValue::Byte(8), AttributeValue::Byte(0)]);
        let record = merger().merge(None, &attr).unwrap().unwrap();
        let ios = introduced(&record, PlatformName::Ios);
        assert_eq!((ios.major(), ios.minor()), (8, 0));
        assert_eq!(ios.architecture(), Architecture::ALL);
        assert!(!record.introduced.is_specified_for(PlatformName::MacOS));
    }

    #[test]
    fn shorthand_mac_64_bit_only() {
        let attr = interop("MacAttribute").with_args([
            AttributeValue::Byte(10),
            AttributeValue::Byte(9),
            AttributeValue::Bool(true),
        ]);
        let record = merger().merge(None, &attr).unwrap().unwrap();
        let mac = introduced(&record, PlatformName::MacOS);
        assert_eq!((mac.major(), mac.minor()), (10, 9));
        assert_eq!(mac.architecture(), Architecture::ARCH64);
    }

    #[test]
    fn shorthand_wrong_arity_is_noop() {
        let attr = interop("iOSAttribute").with_args([AttributeValue::Byte(8)]);
        assert_eq!(merger().merge(None, &attr).unwrap(), None);
    }

    #[test]
    fn single_five_args_replaces_message() {
        let mut start = AvailabilityRecord::new();
        start.message = Some("old".to_string());
        let attr = interop("DeprecatedAttribute").with_args([
            AttributeValue::Byte(IOS),
            AttributeValue::Int(9),
            AttributeValue::Int(0),
            AttributeValue::Byte(0xff),
            AttributeValue::Str("Use Bar instead".into()),
        ]);
        let record = merger().merge(Some(start), &attr).unwrap().unwrap();
        assert_eq!(record.deprecated.full_name_for(PlatformName::Ios), "iOS 9.0");
        assert_eq!(record.message.as_deref(), Some("Use Bar instead"));
    }

    #[test]
    fn single_six_args_sets_subminor() {
        let attr = interop("ObsoletedAttribute").with_args([
            AttributeValue::Byte(MAC),
            AttributeValue::Int(10),
            AttributeValue::Int(12),
            AttributeValue::Int(4),
            AttributeValue::Byte(0xff),
            AttributeValue::Null,
        ]);
        let record = merger().merge(None, &attr).unwrap().unwrap();
        let mac = *record.obsoleted.get(PlatformName::MacOS).unwrap();
        assert_eq!((mac.major(), mac.minor(), mac.subminor()), (10, 12, 4));
        assert_eq!(record.message, None);
    }

    #[test]
    fn single_three_args_is_architecture_only() {
        let attr = interop("UnavailableAttribute").with_args([
            AttributeValue::Byte(IOS),
            AttributeValue::Byte(0xff),
            AttributeValue::Str("ignored".into()),
        ]);
        let record = merger().merge(None, &attr).unwrap().unwrap();
        assert!(record.unavailable.is_specified_for(PlatformName::Ios));
        assert_eq!(record.unavailable.full_name_for(PlatformName::Ios), "iOS");
        assert_eq!(record.message, None);
    }

    #[test]
    fn single_unsupported_arity_is_noop() {
        let attr = interop("IntroducedAttribute").with_args([
            AttributeValue::Byte(IOS),
            AttributeValue::Int(8),
            AttributeValue::Int(0),
            AttributeValue::Byte(0xff),
        ]);
        let start = Some(AvailabilityRecord::new());
        assert_eq!(merger().merge(start.clone(), &attr).unwrap(), start);
    }

    #[test]
    fn single_unknown_platform_is_fatal() {
        let attr = interop("IntroducedAttribute").with_args([
            AttributeValue::Byte(42),
            AttributeValue::Byte(0xff),
            AttributeValue::Null,
        ]);
        let err = merger().merge(None, &attr).unwrap_err();
        assert_eq!(
            err,
            MergeError::UnknownPlatform {
                attribute: "IntroducedAttribute".to_string(),
                value: 42,
            }
        );

        let none = interop("IntroducedAttribute").with_args([
            AttributeValue::Byte(0),
            AttributeValue::Byte(0xff),
            AttributeValue::Null,
        ]);
        assert!(merger().merge(None, &none).is_err());
    }

    #[test]
    fn aggregate_positional_by_index() {
        let attr = interop("AvailabilityAttribute").with_args([
            AttributeValue::ULong(0x000a_0900_0007_0000),
            AttributeValue::ULong(0),
            AttributeValue::ULong(0x0000_0000_000a_0000),
        ]);
        let record = merger().merge(None, &attr).unwrap().unwrap();
        assert_eq!(record.introduced.full_name_for(PlatformName::Ios), "iOS 7.0");
        assert_eq!(record.introduced.full_name_for(PlatformName::MacOS), "macOS 10.9");
        assert!(!record.deprecated.is_specified());
        assert_eq!(record.obsoleted.full_name_for(PlatformName::Ios), "iOS 10.0");
        assert!(!record.unavailable.is_specified());
    }

    #[test]
    fn aggregate_named_and_messages_append() {
        let attr = interop("AvailabilityAttribute")
            .with_named("Deprecated", AttributeValue::ULong(0x0009_0000))
            .with_named("Message", AttributeValue::Str("first".into()))
            .with_named("Message", AttributeValue::Str("second".into()));
        let mut start = AvailabilityRecord::new();
        start.message = Some("existing".to_string());

        let record = merger().merge(Some(start), &attr).unwrap().unwrap();
        assert_eq!(record.deprecated.full_name_for(PlatformName::Ios), "iOS 9.0");
        assert_eq!(record.message.as_deref(), Some("existing; first; second"));
    }

    #[test]
    fn aggregate_named_extends_positional() {
        let attr = interop("AvailabilityAttribute")
            .with_args([AttributeValue::ULong(0x0008_0000)])
            .with_named("Introduced", AttributeValue::ULong(0x000a_0a00_0000_0000));
        let record = merger().merge(None, &attr).unwrap().unwrap();
        assert_eq!(record.introduced.full_name_for(PlatformName::Ios), "iOS 8.0");
        assert_eq!(record.introduced.full_name_for(PlatformName::MacOS), "macOS 10.10");
    }

    #[test]
    fn aggregate_bad_encoding_is_noop() {
        let attr = interop("AvailabilityAttribute").with_args([AttributeValue::Str("x".into())]);
        assert_eq!(merger().merge(None, &attr).unwrap(), None);
    }

    #[test]
    fn merge_all_accumulates() {
        let attrs = vec![
            interop("iOSAttribute").with_args([AttributeValue::Byte(8), AttributeValue::Byte(0)]),
            AttributeData::new("System", "SerializableAttribute"),
            interop("DeprecatedAttribute").with_args([
                AttributeValue::Byte(IOS),
                AttributeValue::Int(10),
                AttributeValue::Int(0),
                AttributeValue::Byte(0xff),
                AttributeValue::Null,
            ]),
        ];
        let record = merger().merge_all(None, &attrs).unwrap().unwrap();
        assert!(record.introduced.is_specified_for(PlatformName::Ios));
        assert!(record.deprecated.is_specified_for(PlatformName::Ios));
    }

    #[test]
    fn merge_all_skips_malformed_and_continues() {
        let attrs = vec![
            interop("iOSAttribute").with_args([AttributeValue::Byte(8)]),
            interop("iOSAttribute").with_args([AttributeValue::Byte(9), AttributeValue::Byte(0)]),
            interop("ObsoletedAttribute").with_args([AttributeValue::Byte(IOS)]),
        ];
        let record = merger().merge_all(None, &attrs).unwrap().unwrap();
        let ios = introduced(&record, PlatformName::Ios);
        assert_eq!((ios.major(), ios.minor()), (9, 0));
        assert!(!record.obsoleted.is_specified_for(PlatformName::Ios));
    }

    #[test]
    fn prefer_newest_policy() {
        let attrs = vec![
            interop("iOSAttribute").with_args([AttributeValue::Byte(7), AttributeValue::Byte(0)]),
            interop("iOSAttribute").with_args([AttributeValue::Byte(8), AttributeValue::Byte(1)]),
        ];
        let record = AttributeMerger::new(ConflictPolicy::PreferNewest)
            .merge_all(None, &attrs)
            .unwrap()
            .unwrap();
        let ios = introduced(&record, PlatformName::Ios);
        assert_eq!((ios.major(), ios.minor()), (8, 1));

        let blended = merger().merge_all(None, &attrs).unwrap().unwrap();
        assert_eq!(introduced(&blended, PlatformName::Ios).major(), 15);
    }
}
