//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! # Which modules ran and whether they changed anything
//! RUST_LOG=info cargo run
//!
//! # Full canonical argument maps and module output
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a run looks like:
//!
//! ```text
//! INFO Module host started backend_type="DryRunBackend"
//! INFO Running module tool="lambda" module="lambda" category=aws_compute target=Remote
//! INFO run_module: Module ok module=lambda changed=false handled=1
//! INFO Module finished tool="lambda" changed=false
//! ```
//!
//! Module paths are hidden (`with_target(false)`); every event carries the tool and
//! module name as structured fields instead.

/// Initializes the global subscriber. Call once, from a binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
