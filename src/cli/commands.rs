use clap::{Parser, Subcommand};
use crate::config::{Settings, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SCANNER};

#[derive(Parser)]
#[command(name = "upgrade-guard", version, about = "Ask an AI model whether pending package upgrades are safe")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Environment variable holding the Gemini API key
    #[arg(long, default_value = DEFAULT_API_KEY_ENV, global = true)]
    pub api_key_env: String,

    /// Gemini model identifier
    #[arg(long, default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Gemini API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Update-check command, run with no arguments
    #[arg(long, default_value = DEFAULT_SCANNER, global = true)]
    pub scanner: String,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Check pending upgrades and print a JSON report (default)
    Check,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            api_key_env: self.api_key_env.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            scanner: self.scanner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = Cli::try_parse_from(["upgrade-guard"]).unwrap();
        assert!(cli.command.is_none());
        let settings = cli.settings();
        assert_eq!(settings.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(settings.model, "gemini-2.0-flash-001");
        assert_eq!(settings.scanner, "checkupdates");
    }

    #[test]
    fn test_check_with_overrides() {
        let cli = Cli::try_parse_from([
            "upgrade-guard", "check", "-vv", "--model", "gemini-2.5-flash", "--scanner", "/usr/bin/checkupdates",
        ]).unwrap();
        assert_eq!(cli.command, Some(Commands::Check));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.settings().model, "gemini-2.5-flash");
        assert_eq!(cli.settings().scanner, "/usr/bin/checkupdates");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["upgrade-guard", "--upgrade"]).is_err());
    }
}
