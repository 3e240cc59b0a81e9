//! Log filter selection and subscriber setup.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here picks those records up and writes them to stderr so command output
//! on stdout stays clean.

use tracing_subscriber::EnvFilter;

const GRADUS_TARGETS: &[&str] = &[
    "gradus",
    "gradus_cli",
    "gradus_core",
    "gradus_outline",
    "gradus_query",
];

/// Level for Gradus crates from `-v`/`-q`, falling back to `configured`.
pub fn level_for(verbose: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Filter directive applying `level` to Gradus crates and `warn` elsewhere.
pub fn directive(level: &str) -> String {
    let mut parts = vec!["warn".to_string()];
    parts.extend(GRADUS_TARGETS.iter().map(|target| format!("{target}={level}")));
    parts.join(",")
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the directive comes from
/// [`level_for`].
pub fn init(verbose: u8, quiet: bool, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(&level_for(verbose, quiet, configured))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
