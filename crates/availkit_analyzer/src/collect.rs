//! Building the availability record for a use site.

use availkit_attrs::{AttributeData, AttributeKind, AttributeMerger};
use availkit_model::{AvailabilityRecord, ConflictPolicy};

use crate::error::AnalysisError;
use crate::symbol::{Symbol, SymbolKind};
use crate::use_site::UseSite;

/// What was learned from a symbol's attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectedAvailability {
    /// The merged record, present only when it states something.
    pub record: Option<AvailabilityRecord>,
    /// Advice texts found along the way, in visit order.
    pub advice: Vec<String>,
}

/// Merges the attributes reachable from a use site into one record.
///
/// The symbol's own attributes come first, followed by those of the
/// property accessors the use goes through. If that yields nothing, the
/// declaring type is consulted instead, starting from an empty record.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordCollector {
    merger: AttributeMerger,
}

impl RecordCollector {
    /// Creates a collector that merges with `policy`.
    pub fn new(policy: ConflictPolicy) -> Self {
        Self {
            merger: AttributeMerger::new(policy),
        }
    }

    /// Collects the record and advice for `site`.
    pub fn collect(&self, site: &UseSite) -> Result<CollectedAvailability, AnalysisError> {
        let mut advice = Vec::new();

        let mut record = self.merge_symbol(None, &site.symbol, &mut advice)?;
        if site.symbol.kind == SymbolKind::Property {
            for role in site.access.accessors() {
                if let Some(accessor) = site.symbol.accessor(*role) {
                    record = self.merge_symbol(record, accessor, &mut advice)?;
                }
            }
        }

        if !is_specified(&record) {
            record = match site.symbol.containing_type.as_deref() {
                Some(ty) => self.merge_symbol(None, ty, &mut advice)?,
                None => None,
            };
        }

        Ok(CollectedAvailability {
            record: record.filter(AvailabilityRecord::is_specified),
            advice,
        })
    }

    fn merge_symbol(
        &self,
        record: Option<AvailabilityRecord>,
        symbol: &Symbol,
        advice: &mut Vec<String>,
    ) -> Result<Option<AvailabilityRecord>, AnalysisError> {
        advice.extend(symbol.attributes.iter().filter_map(advice_text));
        self.merger
            .merge_all(record, &symbol.attributes)
            .map_err(|source| AnalysisError::Merge {
                symbol: symbol.name.clone(),
                source,
            })
    }
}

fn is_specified(record: &Option<AvailabilityRecord>) -> bool {
    record.as_ref().is_some_and(AvailabilityRecord::is_specified)
}

/// A null first argument still reports, with an empty text. Advice without
/// arguments has nothing to say and is skipped.
fn advice_text(attr: &AttributeData) -> Option<String> {
    if AttributeKind::classify(attr) != AttributeKind::Advice {
        return None;
    }
    let first = attr.constructor_args.first()?;
    Some(first.to_display_string().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::AccessKind;
    use crate::use_site::OperationKind;
    use availkit_attrs::{AttributeValue, ADVICE_NAMESPACE, INTEROP_NAMESPACE};
    use availkit_model::PlatformName;

    fn ios_shorthand(major: u8) -> AttributeData {
        AttributeData::new(INTEROP_NAMESPACE, "iOSAttribute")
            .with_args([AttributeValue::Byte(major), AttributeValue::Byte(0)])
    }

    fn deprecated_ios(major: u8) -> AttributeData {
        AttributeData::new(INTEROP_NAMESPACE, "DeprecatedAttribute").with_args([
            AttributeValue::Byte(PlatformName::Ios as u8),
            AttributeValue::Byte(major),
            AttributeValue::Byte(0),
            AttributeValue::Byte(0xff),
            AttributeValue::Null,
        ])
    }

    fn advice(text: &str) -> AttributeData {
        AttributeData::new(ADVICE_NAMESPACE, "AdviceAttribute")
            .with_args([AttributeValue::Str(text.to_string())])
    }

    fn property() -> Symbol {
        Symbol::new("Tint", SymbolKind::Property)
            .with_getter(
                Symbol::new("get_Tint", SymbolKind::Method).with_attributes([ios_shorthand(7)]),
            )
            .with_setter(
                Symbol::new("set_Tint", SymbolKind::Method).with_attributes([deprecated_ios(9)]),
            )
    }

    fn collect(site: &UseSite) -> CollectedAvailability {
        RecordCollector::default().collect(site).unwrap()
    }

    #[test]
    fn own_attributes() {
        let sym = Symbol::new("Foo", SymbolKind::Method).with_attributes([ios_shorthand(8)]);
        let out = collect(&UseSite::new(sym, OperationKind::Invocation));
        let record = out.record.unwrap();
        assert_eq!(record.introduced.full_name_for(PlatformName::Ios), "iOS 8.0");
    }

    #[test]
    fn read_uses_getter_only() {
        let site = UseSite::new(property(), OperationKind::PropertyReference);
        let record = collect(&site).record.unwrap();
        assert!(record.introduced.is_specified_for(PlatformName::Ios));
        assert!(!record.deprecated.is_specified());
    }

    #[test]
    fn assignment_uses_setter_only() {
        let site = UseSite::new(property(), OperationKind::PropertyReference)
            .with_access(AccessKind::AssignmentTarget);
        let record = collect(&site).record.unwrap();
        assert!(!record.introduced.is_specified());
        assert!(record.deprecated.is_specified_for(PlatformName::Ios));
    }

    #[test]
    fn increment_uses_both() {
        let site = UseSite::new(property(), OperationKind::PropertyReference)
            .with_access(AccessKind::IncrementOrDecrement);
        let record = collect(&site).record.unwrap();
        assert!(record.introduced.is_specified());
        assert!(record.deprecated.is_specified());
    }

    #[test]
    fn falls_back_to_containing_type() {
        let ty = Symbol::new("UIStackView", SymbolKind::Type).with_attributes([ios_shorthand(9)]);
        let sym = Symbol::new("AddArrangedSubview", SymbolKind::Method).with_containing_type(ty);
        let record = collect(&UseSite::new(sym, OperationKind::Invocation)).record.unwrap();
        assert_eq!(record.introduced.full_name_for(PlatformName::Ios), "iOS 9.0");
    }

    #[test]
    fn own_facts_shadow_containing_type() {
        let ty = Symbol::new("T", SymbolKind::Type).with_attributes([deprecated_ios(10)]);
        let sym = Symbol::new("M", SymbolKind::Method)
            .with_attributes([ios_shorthand(8)])
            .with_containing_type(ty);
        let record = collect(&UseSite::new(sym, OperationKind::Invocation)).record.unwrap();
        assert!(!record.deprecated.is_specified());
    }

    #[test]
    fn nothing_specified_is_none() {
        let sym = Symbol::new("M", SymbolKind::Method)
            .with_containing_type(Symbol::new("T", SymbolKind::Type));
        let out = collect(&UseSite::new(sym, OperationKind::Invocation));
        assert!(out.record.is_none());
        assert!(out.advice.is_empty());
    }

    #[test]
    fn advice_is_gathered_from_every_visited_symbol() {
        let ty = Symbol::new("T", SymbolKind::Type).with_attributes([advice("type advice")]);
        let sym = Symbol::new("M", SymbolKind::Method)
            .with_attributes([advice("member advice")])
            .with_containing_type(ty);
        let out = collect(&UseSite::new(sym, OperationKind::Invocation));
        assert_eq!(out.advice, vec!["member advice", "type advice"]);
        assert!(out.record.is_none());
    }

    #[test]
    fn advice_without_arguments_is_skipped() {
        let bare = AttributeData::new(ADVICE_NAMESPACE, "AdviceAttribute");
        let sym = Symbol::new("M", SymbolKind::Method).with_attributes([bare, advice("kept")]);
        let out = collect(&UseSite::new(sym, OperationKind::Invocation));
        assert_eq!(out.advice, vec!["kept"]);
    }

    #[test]
    fn null_advice_reports_empty_text() {
        let null = AttributeData::new(ADVICE_NAMESPACE, "AdviceAttribute")
            .with_args([AttributeValue::Null]);
        let sym = Symbol::new("M", SymbolKind::Method).with_attributes([null]);
        let out = collect(&UseSite::new(sym, OperationKind::Invocation));
        assert_eq!(out.advice, vec![String::new()]);
        assert!(out.record.is_none());
    }

    #[test]
    fn malformed_attribute_does_not_hide_later_ones() {
        let short = AttributeData::new(INTEROP_NAMESPACE, "iOSAttribute")
            .with_args([AttributeValue::Byte(8)]);
        let sym = Symbol::new("M", SymbolKind::Method).with_attributes([short, ios_shorthand(9)]);
        let record = collect(&UseSite::new(sym, OperationKind::Invocation)).record.unwrap();
        assert_eq!(record.introduced.full_name_for(PlatformName::Ios), "iOS 9.0");
    }

    #[test]
    fn unknown_platform_names_the_symbol() {
        let bad = AttributeData::new(INTEROP_NAMESPACE, "IntroducedAttribute").with_args([
            AttributeValue::Byte(77),
            AttributeValue::Byte(0xff),
            AttributeValue::Null,
        ]);
        let sym = Symbol::new("Broken", SymbolKind::Field).with_attributes([bad]);
        let err = RecordCollector::default()
            .collect(&UseSite::new(sym, OperationKind::FieldReference))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Merge { symbol, .. } if symbol == "Broken"));
    }
}
