use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use devutils_core::{BaseField, InputFormat, Radix, VERSION};

/// DevUtils - number base and unix time converters for the terminal
#[derive(Parser)]
#[command(name = "devutils")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "DEVUTILS_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `base` command
#[derive(Args)]
pub struct BaseArgs {
    /// Value to convert
    #[arg(value_name = "VALUE", required_unless_present = "session")]
    pub value: Option<String>,

    /// Field the value is typed into (bin, oct, dec, hex, custom)
    #[arg(long, value_name = "FIELD", conflicts_with_all = ["from_base", "to_base"])]
    pub from: Option<BaseField>,

    /// Radix of the custom field (2-36)
    #[arg(long, value_name = "N")]
    pub custom_base: Option<Radix>,

    /// Convert directly from this radix (requires --to-base)
    #[arg(long, value_name = "N", requires = "to_base")]
    pub from_base: Option<Radix>,

    /// Convert directly to this radix (requires --from-base)
    #[arg(long, value_name = "N", requires = "from_base")]
    pub to_base: Option<Radix>,

    /// Read edits line by line from stdin
    #[arg(long, conflicts_with_all = ["value", "from_base", "to_base"])]
    pub session: bool,

    /// Copy the decimal value (or the direct conversion) to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for the `validate` command
#[derive(Args)]
pub struct ValidateArgs {
    /// Text to check
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Radix the text should be valid in
    #[arg(long, value_name = "N")]
    pub base: u32,
}

/// Arguments for the `time` command
#[derive(Args)]
pub struct TimeArgs {
    /// Time input (defaults to now); unix and ms accept + - * / ( )
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: Option<String>,

    /// How INPUT is read (unix, ms, iso)
    #[arg(long, short = 'i', value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Print only the canonical text of the instant in this format
    #[arg(long, value_name = "FORMAT", conflicts_with_all = ["watch", "session"])]
    pub to: Option<InputFormat>,

    /// Display time zone (IANA name or "local")
    #[arg(long, value_name = "ZONE")]
    pub tz: Option<String>,

    /// Extra rendering with a strftime pattern
    #[arg(long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Keep refreshing the relative time every second
    #[arg(long, conflicts_with = "session")]
    pub watch: bool,

    /// Stop watching after N refreshes
    #[arg(long, value_name = "N", requires = "watch")]
    pub ticks: Option<u64>,

    /// Read commands line by line from stdin
    #[arg(long, conflicts_with = "input")]
    pub session: bool,

    /// Copy the canonical input text to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init(ConfigInitArgs),
}

/// Arguments for `config init`
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a number between bases 2-36
    Base(BaseArgs),

    /// Check that text is a valid number in a base
    Validate(ValidateArgs),

    /// Convert unix seconds, milliseconds, or ISO-8601 timestamps
    Time(TimeArgs),

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_base_parses_typed_fields() {
        let cli = Cli::try_parse_from(["devutils", "base", "ff", "--from", "hex", "--custom-base", "7"])
            .unwrap();
        match cli.command {
            Some(Commands::Base(args)) => {
                assert_eq!(args.value.as_deref(), Some("ff"));
                assert_eq!(args.from, Some(BaseField::Hex));
                assert_eq!(args.custom_base.map(Radix::get), Some(7));
            }
            _ => panic!("expected base command"),
        }
    }

    #[test]
    fn test_base_rejects_out_of_range_radix() {
        assert!(Cli::try_parse_from(["devutils", "base", "1", "--custom-base", "37"]).is_err());
        assert!(Cli::try_parse_from(["devutils", "base", "1", "--from-base", "2"]).is_err());
    }

    #[test]
    fn test_time_accepts_negative_input() {
        let cli = Cli::try_parse_from(["devutils", "time", "-1", "--input-format", "ms"]).unwrap();
        match cli.command {
            Some(Commands::Time(args)) => {
                assert_eq!(args.input.as_deref(), Some("-1"));
                assert_eq!(args.input_format, Some(InputFormat::Ms));
            }
            _ => panic!("expected time command"),
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["devutils", "-vv", "validate", "1", "--base", "2"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
