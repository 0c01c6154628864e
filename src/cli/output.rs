//! Failure reporting to standard error
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::error::Error;
use std::io::Write;

use colored::Colorize;

use crate::meta::TOOL;

/// Write the diagnostic trace: the failure and its source chain, outermost
/// first.
pub fn diagnostic_trace<W: Write>(w: &mut W, err: &dyn Error) {
    let _ = writeln!(w, "diagnostic trace:");
    let mut cause: Option<&dyn Error> = Some(err);
    let mut depth = 0;
    while let Some(e) = cause {
        let _ = writeln!(w, "  {depth}: {e}");
        cause = e.source();
        depth += 1;
    }
}

/// Write the full failure report: the trace when debug is on, then the
/// error line and the failure banner.
pub fn report_failure<W: Write>(w: &mut W, debug: bool, err: &dyn Error) {
    if debug {
        diagnostic_trace(w, err);
    }
    let _ = writeln!(w, "\n{}\n", format!("ERROR: {err}").red());
    let _ = writeln!(w, "{} {} failed!", TOOL.title, TOOL.version);
}
