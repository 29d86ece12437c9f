use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::parse_datetime_arg;

#[derive(Parser)]
#[command(name = "dincharya")]
#[command(about = "A personal schedule and expense book with natural language event entry")]
#[command(long_about = "dincharya - schedule and expense book

Record calendar events and expenses per user in a local database.
Events can be typed as free-form English or Hinglish phrases.

QUICK START:
  dincharya --demo schedule add \"lunch tomorrow at 1pm with Raj\"
  dincharya --demo schedule add \"kal 6 baje milna hai\"
  dincharya --demo schedule list
  dincharya --demo expense add 250 food --note thali
  dincharya --demo expense monthly

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  dincharya <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// User whose records are read and written
    #[arg(long, global = true, env = "DINCHARYA_USER")]
    pub user: Option<String>,

    /// Act as the shared demo user
    #[arg(long, global = true)]
    pub demo: bool,

    /// Reference instant for relative dates and new records (YYYY-MM-DDTHH:MM)
    ///
    /// Defaults to the current local time.
    #[arg(long, global = true, value_parser = parse_reference)]
    pub now: Option<NaiveDateTime>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add, list and parse schedule entries
    #[command(alias = "s")]
    Schedule(ScheduleArgs),

    /// Record expenses and view monthly totals
    #[command(alias = "e")]
    Expense(ExpenseArgs),

    /// Generate shell completions
    ///
    /// Example: dincharya completions bash > ~/.bash_completion.d/dincharya
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommands,
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Add a schedule entry
    ///
    /// Give either a natural language phrase, or both --title and --at.
    ///
    /// # Examples
    ///
    ///   dincharya schedule add "lunch tomorrow at 1pm with Raj"
    ///   dincharya schedule add "kal 6 baje milna vishay kiraya"
    ///   dincharya schedule add --title "Board meeting" --at 2024-02-01T15:30
    ///
    /// # Supported Patterns
    ///
    ///   Times:   at 6, at 6:30 pm, 18:30, 6pm, 6 baje
    ///   Dates:   tomorrow, kal, next week, next monday
    ///   Notes:   with <person>, ke sath <person>, topic <word>, vishay <word>
    ///
    /// Hours 1-7 without am/pm are read as evening.
    #[command(alias = "a")]
    Add(ScheduleAddArgs),

    /// List schedule entries, earliest first
    #[command(alias = "ls")]
    List,

    /// Parse a phrase and show the resulting event without storing it
    Parse {
        /// The event phrase
        text: String,
    },
}

#[derive(Args)]
pub struct ScheduleAddArgs {
    /// The event in natural language
    pub text: Option<String>,

    /// Explicit event title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Explicit event date-time (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub at: Option<String>,

    /// Event note (replaces any note found in the phrase)
    #[arg(long, short = 'n')]
    pub note: Option<String>,

    /// Only parse and show what would be created, don't store it
    #[arg(long)]
    pub parse_only: bool,
}

#[derive(Args)]
pub struct ExpenseArgs {
    #[command(subcommand)]
    pub command: ExpenseCommands,
}

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    ///
    /// # Examples
    ///
    ///   dincharya expense add 250 food --note thali
    ///   dincharya expense add 1200 company --image-url https://example.com/r.jpg
    #[command(alias = "a")]
    Add {
        /// Amount spent
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Spending category ("company" counts as company spending)
        category: String,

        /// Optional note
        #[arg(long, short = 'n')]
        note: Option<String>,

        /// Link to a receipt image
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Show personal, company and total spending for a month
    ///
    /// Defaults to the current month.
    #[command(alias = "m")]
    Monthly {
        /// Year (defaults to the current year)
        #[arg(long, short = 'y')]
        year: Option<i32>,

        /// Month number 1-12 (defaults to the current month)
        #[arg(long, short = 'm')]
        month: Option<u32>,
    },
}

fn parse_reference(s: &str) -> Result<NaiveDateTime, String> {
    parse_datetime_arg(s).ok_or_else(|| format!("invalid date-time '{s}' (expected YYYY-MM-DDTHH:MM)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_schedule_add_text() {
        let cli = Cli::parse_from([
            "dincharya",
            "--demo",
            "schedule",
            "add",
            "lunch tomorrow at 1pm",
            "--now",
            "2024-01-10T09:00",
        ]);
        assert!(cli.demo);
        assert!(cli.now.is_some());
        match cli.command {
            Commands::Schedule(args) => match args.command {
                ScheduleCommands::Add(add) => {
                    assert_eq!(add.text.as_deref(), Some("lunch tomorrow at 1pm"));
                    assert!(!add.parse_only);
                },
                _ => panic!("expected schedule add"),
            },
            _ => panic!("expected schedule"),
        }
    }

    #[test]
    fn test_parse_expense_add() {
        let cli = Cli::parse_from(["dincharya", "-o", "json", "expense", "add", "250.5", "food"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Expense(args) => match args.command {
                ExpenseCommands::Add { amount, category, .. } => {
                    assert_eq!(amount, 250.5);
                    assert_eq!(category, "food");
                },
                ExpenseCommands::Monthly { .. } => panic!("expected expense add"),
            },
            _ => panic!("expected expense"),
        }
    }

    #[test]
    fn test_invalid_now_is_rejected() {
        let result = Cli::try_parse_from(["dincharya", "--now", "soon", "schedule", "list"]);
        assert!(result.is_err());
    }
}
