//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `burrow-dash <date> (<commit>)`, as printed by `--version`.
pub fn version_line() -> String {
    format!("burrow-dash {} ({})", BUILD_DATE, BUILD_COMMIT)
}
