//! Well-known annotation keys.
//!
//! This module contains the annotation keys recognized by the injector.
//! Keeping them here avoids scattering magic strings throughout the codebase.
//!
//! Each supported runtime owns two keys: an inject flag (value `"true"`,
//! `"false"`, or an instrumentation instance name) and a container-name list
//! (comma-separated). The Go keys live under the OpenTelemetry prefix: Go
//! injection is delegated to the OpenTelemetry Go auto-instrumentation, which
//! also expects the target executable path and a single container name.

/// Inject flag for the Java agent.
pub const ANNOTATION_INJECT_JAVA: &str = "instrumentation.inj.io/inject-java";
/// Containers targeted by Java injection.
pub const ANNOTATION_JAVA_CONTAINER_NAMES: &str = "instrumentation.inj.io/java-container-names";

/// Inject flag for the Node.js agent.
pub const ANNOTATION_INJECT_NODEJS: &str = "instrumentation.inj.io/inject-nodejs";
/// Containers targeted by Node.js injection.
pub const ANNOTATION_NODEJS_CONTAINER_NAMES: &str = "instrumentation.inj.io/nodejs-container-names";

/// Inject flag for the Python agent.
pub const ANNOTATION_INJECT_PYTHON: &str = "instrumentation.inj.io/inject-python";
/// Containers targeted by Python injection.
pub const ANNOTATION_PYTHON_CONTAINER_NAMES: &str = "instrumentation.inj.io/python-container-names";

/// Inject flag for the .NET agent.
pub const ANNOTATION_INJECT_DOTNET: &str = "instrumentation.inj.io/inject-dotnet";
/// Containers targeted by .NET injection.
pub const ANNOTATION_DOTNET_CONTAINER_NAMES: &str = "instrumentation.inj.io/dotnet-container-names";

/// Inject flag for the PHP agent.
pub const ANNOTATION_INJECT_PHP: &str = "instrumentation.inj.io/inject-php";
/// Containers targeted by PHP injection.
pub const ANNOTATION_PHP_CONTAINER_NAMES: &str = "instrumentation.inj.io/php-container-names";
/// PHP agent version pin.
pub const ANNOTATION_PHP_VERSION: &str = "instrumentation.inj.io/php-version";

/// Inject flag for the Ruby agent.
pub const ANNOTATION_INJECT_RUBY: &str = "instrumentation.inj.io/inject-ruby";
/// Containers targeted by Ruby injection.
pub const ANNOTATION_RUBY_CONTAINER_NAMES: &str = "instrumentation.inj.io/ruby-container-names";

/// Inject flag for the Go auto-instrumentation.
pub const ANNOTATION_INJECT_GO: &str = "instrumentation.opentelemetry.io/inject-go";
/// Container targeted by Go injection (a single name, not a list).
pub const ANNOTATION_GO_CONTAINER_NAME: &str = "instrumentation.opentelemetry.io/go-container-name";
/// Path of the executable the Go auto-instrumentation attaches to.
pub const ANNOTATION_GO_EXEC_PATH: &str = "instrumentation.opentelemetry.io/otel-go-auto-target-exe";

/// Shared target-container designation, used when a pod does not carry a
/// per-runtime container list.
pub const ANNOTATION_CONTAINER_NAME: &str = "instrumentation.inj.io/container-name";
