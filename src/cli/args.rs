//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;

/// amplimap setup wizard
#[derive(Parser, Debug)]
#[command(name = "amplimap-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print a full diagnostic trace on failure
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn debug_flag_reflects_argv() {
        let cli = Cli::parse_from(["amplimap-setup"]);
        assert!(!cli.debug);

        let cli = Cli::parse_from(["amplimap-setup", "--debug"]);
        assert!(cli.debug);
    }
}
