//! Static descriptors of the availability rules.
//!
//! Every availability diagnostic is reported under one of three rules. A
//! descriptor carries what a host needs to list the rule: its code, a short
//! kebab-case name usable in configuration, a title, an optional long
//! description, the default severity and a documentation link.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::code::{Category, DiagnosticCode};
use crate::severity::Severity;

const HELP_LINK_BASE: &str = "https://github.com/xamarin/CodeAnalysis/blob/master/docs";

/// Static description of one availability rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    /// The rule's diagnostic code.
    pub code: DiagnosticCode,
    /// Short kebab-case name, accepted wherever a code is.
    pub name: &'static str,
    /// One-line title.
    pub title: &'static str,
    /// Longer explanation, when the rule has one.
    pub description: Option<&'static str>,
    /// Severity used when configuration does not override it.
    pub default_severity: Severity,
}

impl RuleDescriptor {
    /// The documentation URL for this rule.
    pub fn help_link(&self) -> String {
        format!("{HELP_LINK_BASE}/{}.md", self.code)
    }

    /// All rule descriptors, ordered by code.
    pub fn all() -> [&'static RuleDescriptor; 3] {
        [&ADVICE, &INTRODUCED, &DEPRECATED]
    }

    /// Looks a rule up by its code (`XIA1002`) or name (`introduced-later`).
    pub fn lookup(ident: &str) -> Option<&'static RuleDescriptor> {
        match ident.parse::<DiagnosticCode>() {
            Ok(code) => Self::all().into_iter().find(|d| d.code == code),
            Err(_) => Self::all().into_iter().find(|d| d.name == ident),
        }
    }
}

static ADVICE: RuleDescriptor = RuleDescriptor {
    code: DiagnosticCode::new(Category::Apple, 1001),
    name: "advice",
    title: "Notifies you with advice on how to use Apple APIs",
    description: None,
    default_severity: Severity::Info,
};

static INTRODUCED: RuleDescriptor = RuleDescriptor {
    code: DiagnosticCode::new(Category::Apple, 1002),
    name: "introduced-later",
    title: "Notifies you if you are using newer Apple APIs when targeting an older OS version",
    description: Some(
        "This rule is comparing the versions of the API's introduced attribute and the minimum deployment target defined in the Info.plist.",
    ),
    default_severity: Severity::Info,
};

static DEPRECATED: RuleDescriptor = RuleDescriptor {
    code: DiagnosticCode::new(Category::Apple, 1003),
    name: "deprecated",
    title: "Notifies you when using a deprecated, obsolete or unavailable Apple API",
    description: None,
    default_severity: Severity::Info,
};

/// Which rule an advisory is reported under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryKind {
    /// Free-form usage advice attached to the API.
    Advice,
    /// The API is newer than the deployment target.
    IntroducedLater,
    /// The API is deprecated, obsoleted or unavailable.
    DeprecatedOrObsoleted,
}

impl AdvisoryKind {
    /// The descriptor of the rule this advisory is reported under.
    pub fn descriptor(self) -> &'static RuleDescriptor {
        match self {
            AdvisoryKind::Advice => &ADVICE,
            AdvisoryKind::IntroducedLater => &INTRODUCED,
            AdvisoryKind::DeprecatedOrObsoleted => &DEPRECATED,
        }
    }

    /// Shorthand for `self.descriptor().code`.
    pub fn code(self) -> DiagnosticCode {
        self.descriptor().code
    }
}

impl fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}
