//! Setup wizard for new amplimap pipeline directories.
//!
//! The interactive flow is not built yet: running it always reports
//! [`SetupError::NotImplemented`] so callers fail loudly instead of ending
//! up with a half-configured working directory.

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{SetupError, SetupResult};

/// Attempt to run the setup wizard.
///
/// TODO: interactive prompts collecting reference genome, probe design and
/// config.yaml values for a new pipeline working directory.
#[instrument(skip(cli))]
pub fn run_wizard(cli: &Cli) -> SetupResult<()> {
    debug!("starting setup wizard, debug={}", cli.debug);
    Err(SetupError::NotImplemented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn wizard_reports_not_implemented() {
        let cli = Cli::parse_from(["amplimap-setup"]);
        let err = run_wizard(&cli).unwrap_err();
        assert!(matches!(err, SetupError::NotImplemented));
        assert_eq!(err.to_string(), "Not implemented yet.");
    }
}
