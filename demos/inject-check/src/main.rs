use std::str::FromStr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use inj_core::EffectiveAnnotations;
use inj_model::{Annotations, Runtime, constants};

fn main() -> anyhow::Result<()> {
    // 1) logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!("logger initialized");

    // 2) runtimes to check: names from the command line, or the full sweep
    let args: Vec<String> = std::env::args().skip(1).collect();
    let runtimes: Vec<Runtime> = if args.is_empty() {
        Runtime::ALL.to_vec()
    } else {
        args.iter()
            .map(|name| Runtime::from_str(name))
            .collect::<Result<_, _>>()?
    };

    // 3) namespace scope: a java default instance, a blanket python opt-out, ruby on
    let namespace: Annotations = [
        (constants::ANNOTATION_INJECT_JAVA, "apm-java-default"),
        (constants::ANNOTATION_INJECT_PYTHON, "false"),
        (constants::ANNOTATION_INJECT_RUBY, "true"),
    ]
    .into_iter()
    .collect();

    // 4) pod scope: generic java opt-in, explicit python opt-in, dotnet opt-out
    let pod: Annotations = [
        (constants::ANNOTATION_INJECT_JAVA, "true"),
        (constants::ANNOTATION_INJECT_PYTHON, "true"),
        (constants::ANNOTATION_INJECT_DOTNET, "false"),
        (constants::ANNOTATION_JAVA_CONTAINER_NAMES, "app,worker"),
        (constants::ANNOTATION_CONTAINER_NAME, "app"),
    ]
    .into_iter()
    .collect();

    // 5) resolve each runtime's flag and container list
    let effective = EffectiveAnnotations::new(&namespace, &pod);
    for runtime in runtimes {
        let directive = effective.inject_directive(runtime);
        let containers = effective.container_names(runtime);
        info!(
            runtime = %runtime,
            directive = ?directive,
            containers = ?containers,
            "resolved"
        );
    }

    if let Some(container) = effective.target_container() {
        info!(container, "shared target container");
    }

    info!("demo completed");
    Ok(())
}
