use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::constants::{
    ANNOTATION_DOTNET_CONTAINER_NAMES, ANNOTATION_GO_CONTAINER_NAME,
    ANNOTATION_INJECT_DOTNET, ANNOTATION_INJECT_GO, ANNOTATION_INJECT_JAVA,
    ANNOTATION_INJECT_NODEJS, ANNOTATION_INJECT_PHP, ANNOTATION_INJECT_PYTHON,
    ANNOTATION_INJECT_RUBY, ANNOTATION_JAVA_CONTAINER_NAMES,
    ANNOTATION_NODEJS_CONTAINER_NAMES, ANNOTATION_PHP_CONTAINER_NAMES,
    ANNOTATION_PYTHON_CONTAINER_NAMES, ANNOTATION_RUBY_CONTAINER_NAMES,
};
use crate::error::{ModelError, ModelResult};

/// Language runtime a pod may ask instrumentation for.
///
/// Each runtime owns a pair of annotation keys: the inject flag and the
/// container-name list. The injector sweeps the supported runtimes one by
/// one; resolution of each flag is independent of the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Java,
    Nodejs,
    Python,
    Dotnet,
    Php,
    Ruby,
    Go,
}

impl Runtime {
    /// Every supported runtime, in sweep order.
    pub const ALL: [Runtime; 7] = [
        Runtime::Java,
        Runtime::Nodejs,
        Runtime::Python,
        Runtime::Dotnet,
        Runtime::Php,
        Runtime::Ruby,
        Runtime::Go,
    ];

    /// Returns the runtime as a static string.
    pub fn name(&self) -> &'static str {
        match self {
            Runtime::Java => "java",
            Runtime::Nodejs => "nodejs",
            Runtime::Python => "python",
            Runtime::Dotnet => "dotnet",
            Runtime::Php => "php",
            Runtime::Ruby => "ruby",
            Runtime::Go => "go",
        }
    }

    /// Annotation key of this runtime's inject flag.
    pub fn inject_annotation(&self) -> &'static str {
        match self {
            Runtime::Java => ANNOTATION_INJECT_JAVA,
            Runtime::Nodejs => ANNOTATION_INJECT_NODEJS,
            Runtime::Python => ANNOTATION_INJECT_PYTHON,
            Runtime::Dotnet => ANNOTATION_INJECT_DOTNET,
            Runtime::Php => ANNOTATION_INJECT_PHP,
            Runtime::Ruby => ANNOTATION_INJECT_RUBY,
            Runtime::Go => ANNOTATION_INJECT_GO,
        }
    }

    /// Annotation key of this runtime's container-name list.
    ///
    /// Go carries a single container name rather than a list, reflected in
    /// its key.
    pub fn container_names_annotation(&self) -> &'static str {
        match self {
            Runtime::Java => ANNOTATION_JAVA_CONTAINER_NAMES,
            Runtime::Nodejs => ANNOTATION_NODEJS_CONTAINER_NAMES,
            Runtime::Python => ANNOTATION_PYTHON_CONTAINER_NAMES,
            Runtime::Dotnet => ANNOTATION_DOTNET_CONTAINER_NAMES,
            Runtime::Php => ANNOTATION_PHP_CONTAINER_NAMES,
            Runtime::Ruby => ANNOTATION_RUBY_CONTAINER_NAMES,
            Runtime::Go => ANNOTATION_GO_CONTAINER_NAME,
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Runtime {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(Runtime::Java),
            "nodejs" => Ok(Runtime::Nodejs),
            "python" => Ok(Runtime::Python),
            "dotnet" => Ok(Runtime::Dotnet),
            "php" => Ok(Runtime::Php),
            "ruby" => Ok(Runtime::Ruby),
            "go" => Ok(Runtime::Go),
            other => Err(ModelError::UnknownRuntime(other.to_string())),
        }
    }
}
