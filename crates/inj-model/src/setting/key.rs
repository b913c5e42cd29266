use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::constants::{
    ANNOTATION_CONTAINER_NAME, ANNOTATION_GO_EXEC_PATH, ANNOTATION_PHP_VERSION,
};
use crate::error::{ModelError, ModelResult};
use crate::kind::Runtime;

/// One configurable setting, resolved independently of all others.
///
/// The injector resolves each setting once per admission review: the inject
/// flag and the container list of every candidate runtime, plus a handful of
/// shared keys. Variants carry the runtime they belong to; `key()` yields the
/// annotation key the setting is declared under at either scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Setting {
    /// Whether to inject the runtime's agent.
    Inject(Runtime),
    /// Which containers the runtime's agent targets.
    ContainerNames(Runtime),
    /// Shared target-container designation.
    TargetContainer,
    /// Executable the Go auto-instrumentation attaches to.
    GoExecPath,
    /// PHP agent version pin.
    PhpVersion,
}

impl Setting {
    /// Annotation key this setting is declared under.
    pub fn key(&self) -> &'static str {
        match self {
            Setting::Inject(rt) => rt.inject_annotation(),
            Setting::ContainerNames(rt) => rt.container_names_annotation(),
            Setting::TargetContainer => ANNOTATION_CONTAINER_NAME,
            Setting::GoExecPath => ANNOTATION_GO_EXEC_PATH,
            Setting::PhpVersion => ANNOTATION_PHP_VERSION,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Setting {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        if s == ANNOTATION_CONTAINER_NAME {
            return Ok(Setting::TargetContainer);
        }
        if s == ANNOTATION_GO_EXEC_PATH {
            return Ok(Setting::GoExecPath);
        }
        if s == ANNOTATION_PHP_VERSION {
            return Ok(Setting::PhpVersion);
        }
        for rt in Runtime::ALL {
            if s == rt.inject_annotation() {
                return Ok(Setting::Inject(rt));
            }
            if s == rt.container_names_annotation() {
                return Ok(Setting::ContainerNames(rt));
            }
        }
        Err(ModelError::UnknownSetting(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Setting;
    use crate::error::ModelError;
    use crate::kind::Runtime;

    #[test]
    fn key_roundtrips_through_from_str() {
        let mut settings = vec![
            Setting::TargetContainer,
            Setting::GoExecPath,
            Setting::PhpVersion,
        ];
        for rt in Runtime::ALL {
            settings.push(Setting::Inject(rt));
            settings.push(Setting::ContainerNames(rt));
        }

        for setting in settings {
            let parsed = Setting::from_str(setting.key()).unwrap();
            assert_eq!(parsed, setting, "key {:?}", setting.key());
        }
    }

    #[test]
    fn from_str_rejects_unknown_key() {
        match Setting::from_str("instrumentation.inj.io/inject-fortran") {
            Err(ModelError::UnknownSetting(s)) => {
                assert_eq!(s, "instrumentation.inj.io/inject-fortran");
            }
            other => panic!("expected UnknownSetting, got {other:?}"),
        }
    }

    #[test]
    fn from_str_is_byte_exact() {
        // annotation keys are not case-folded
        let upper = Setting::TargetContainer.key().to_uppercase();
        assert!(Setting::from_str(&upper).is_err());
    }

    #[test]
    fn display_prints_the_annotation_key() {
        let s = Setting::Inject(Runtime::Java).to_string();
        assert_eq!(s, "instrumentation.inj.io/inject-java");
    }
}
