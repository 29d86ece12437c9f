use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use dincharya::cli::args::{Cli, Commands, ExpenseCommands, ScheduleCommands};
use dincharya::cli::commands;
use dincharya::config::{Config, Paths};
use dincharya::core::{Clock, FixedClock, SystemClock};
use dincharya::error::DincharyaError;
use dincharya::features::expense::{ExpenseStorage, NewExpense};
use dincharya::features::schedule::{ScheduleRequest, ScheduleStorage};
use dincharya::identity::{resolve_user, UserId};
use dincharya::storage::Database;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            let code = e
                .downcast_ref::<DincharyaError>()
                .map_or(1, DincharyaError::exit_code);
            std::process::exit(code);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("DINCHARYA_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("loading {}", paths.config_file.display()))?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let clock: Box<dyn Clock> = match cli.now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };
    tracing::debug!(now = %clock.now(), ?format, "starting");

    let user = || -> Result<UserId, DincharyaError> {
        resolve_user(cli.user.as_deref(), cli.demo, &config.auth)
    };
    let database = || -> Result<Database, DincharyaError> {
        paths.ensure_dirs()?;
        Database::open_at(&paths.database)
    };

    let output = match cli.command {
        Commands::Schedule(args) => match args.command {
            ScheduleCommands::Parse { text } => commands::schedule_parse(&text, clock.as_ref(), format)?,
            ScheduleCommands::Add(add) => {
                let parse_only = add.parse_only;
                let request = ScheduleRequest {
                    text: add.text,
                    title: add.title,
                    datetime: add.at,
                    note: add.note,
                };
                if parse_only {
                    commands::schedule_preview(request, clock.as_ref(), format)?
                } else {
                    let user = user()?;
                    let storage = ScheduleStorage::with_database(database()?);
                    commands::schedule_add(&storage, &user, request, clock.as_ref(), format)?
                }
            }
            ScheduleCommands::List => {
                let user = user()?;
                let storage = ScheduleStorage::with_database(database()?);
                commands::schedule_list(&storage, &user, format)?
            }
        }
        Commands::Expense(args) => {
            let user = user()?;
            let storage = ExpenseStorage::with_database(database()?);
            match args.command {
                ExpenseCommands::Add {
                    amount,
                    category,
                    note,
                    image_url,
                } => {
                    let expense = NewExpense {
                        amount,
                        category,
                        note,
                        image_url,
                    };
                    commands::expense_add(&storage, &user, &expense, clock.as_ref(), format)?
                }
                ExpenseCommands::Monthly { year, month } => commands::expense_monthly(
                    &storage,
                    &user,
                    year,
                    month,
                    &config.expenses.company_category,
                    clock.as_ref(),
                    format,
                )?,
            }
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    Ok(output)
}
