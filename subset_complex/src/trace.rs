//! Debug tracing for numerically sensitive paths.
//!
//! Set `SUBSET_COMPLEX_DEBUG` to any value to get one stderr line per traced
//! event (division branch selection, failed narrowing). Only debug builds
//! carry the trace points; release builds compile them out.

use once_cell::sync::Lazy;

/// Environment variable that enables tracing.
pub const DEBUG_ENV_VAR: &str = "SUBSET_COMPLEX_DEBUG";

static ENABLED: Lazy<bool> = Lazy::new(|| std::env::var_os(DEBUG_ENV_VAR).is_some());

/// Whether tracing was requested. Read once per process.
pub fn debug_enabled() -> bool {
    *ENABLED
}

/// Write one trace line to stderr when tracing is enabled.
pub fn debug_log(args: std::fmt::Arguments<'_>) {
    if debug_enabled() {
        use std::io::Write;
        let _ = writeln!(std::io::stderr(), "[subset_complex] {args}");
    }
}
