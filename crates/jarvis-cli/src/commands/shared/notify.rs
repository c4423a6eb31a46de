use crate::cli::{GlobalFlags, OutputFormat};

/// One-line human notice on stderr. Suppressed by `--quiet` and for
/// machine-readable formats, so stdout stays parseable.
pub fn notice(flags: &GlobalFlags, message: &str) {
    if !flags.quiet && flags.format == OutputFormat::Table {
        eprintln!("{message}");
    }
}

/// A warning the user should see whatever the output format.
pub fn warning(flags: &GlobalFlags, message: &str) {
    if !flags.quiet {
        eprintln!("warning: {message}");
    }
}
