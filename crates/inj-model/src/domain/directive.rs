use serde::{Deserialize, Serialize};

/// Interpretation of a resolved inject-flag value.
///
/// The resolver hands back raw strings; this enum is how the injector reads
/// them. The value space is fixed: empty means no decision, `"true"` and
/// `"false"` (case-insensitive) are generic on/off switches, and anything
/// else names a specific instrumentation instance (which implies opting in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InjectDirective {
    /// Neither scope expressed a decision.
    Unset,
    /// Generic opt-in.
    Enabled,
    /// Explicit opt-out.
    Disabled,
    /// Opt-in bound to a named instrumentation instance.
    Instance(String),
}

impl InjectDirective {
    /// Interpret a resolved annotation value.
    ///
    /// Total over all strings: unknown values are instance names by
    /// definition, never an error.
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            InjectDirective::Unset
        } else if value.eq_ignore_ascii_case("true") {
            InjectDirective::Enabled
        } else if value.eq_ignore_ascii_case("false") {
            InjectDirective::Disabled
        } else {
            InjectDirective::Instance(value.to_string())
        }
    }

    /// Returns `true` if the directive asks for injection, generically or
    /// via a named instance.
    pub fn wants_injection(&self) -> bool {
        matches!(
            self,
            InjectDirective::Enabled | InjectDirective::Instance(_)
        )
    }

    /// The instance name, when the directive selects one.
    pub fn instance(&self) -> Option<&str> {
        match self {
            InjectDirective::Instance(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for InjectDirective {
    fn from(value: &str) -> Self {
        Self::from_value(value)
    }
}
