//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire two demo extensions through the host lifecycle.
//! - Print the frozen order, one lookup and one dispatch for quick sanity checks.
//!
//! Usage: `kbext_cli [extension-id]`. Set `KBEXT_LOG_DIR` (absolute path) to
//! also write registry diagnostics to rolling log files.

mod demo;

use kbext_core::{
    default_log_level, init_logging, AnnotatorState, ConceptIri, ExtensionHost, KnowledgeBase,
    LifecycleEvent, NoopActionHandler, RegistryConfig,
};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kbext_cli error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(log_dir) = std::env::var("KBEXT_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    let mut host = ExtensionHost::new(RegistryConfig::default())?;
    host.register(Arc::new(demo::LabelMatchExtension::new("label-match", 10)))?;
    host.register(Arc::new(demo::ExactIriExtension::new("exact-iri", 5)))?;
    host.publish(LifecycleEvent::ContextRefreshed)?;

    let registry = host.registry();
    println!("kbext_core version={}", kbext_core::core_version());
    println!("registry order={}", registry.list_extensions().ids().join(","));

    let wanted = std::env::args().nth(1);
    let found = registry
        .find_extension(wanted.as_deref())
        .map(|extension| extension.bean_name().to_string());
    println!(
        "registry find({})={}",
        wanted.as_deref().unwrap_or("<none>"),
        found.as_deref().unwrap_or("<absent>")
    );

    let kb = KnowledgeBase::new("demo-kb", "Demo", "demo-project");
    let state = AnnotatorState::new("demo-project", "demo.txt", "cli").with_selection("Berlin");
    let candidates = registry.fire_disambiguate(
        &kb,
        &ConceptIri::new("http://example.org/City"),
        &state,
        &NoopActionHandler,
    )?;
    for candidate in candidates {
        println!("candidate {} name={}", candidate.identifier, candidate.name);
    }
    Ok(())
}
