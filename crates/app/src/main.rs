use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use ::log::{LevelFilter, info};
use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use splitgen_app::{
    commands,
    log::{self as logger, FileLog},
    settings,
};
use splitgen_domain::UserID;

/// Render stored training programs as chat messages.
#[derive(Parser)]
#[command(name = "splitgen", version)]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = "splitgen.json")]
    config: PathBuf,

    /// Program store, overriding the settings
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the program of a user as it would be sent
    Show { user_id: String },
    /// Delete the program of a user
    Clear { user_id: String },
    /// List the program families
    Families {
        /// Only families with this number of training days
        #[arg(long)]
        days: Option<u32>,
    },
    /// Print the effective settings
    Settings {
        /// Write the effective settings to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logger::init(level).context("failed to initialize logger")?;

    let mut settings = settings::read_settings(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    if let Some(store) = cli.store {
        settings.store_path = store;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        settings.level_filter()?
    };
    let repository = settings.log_file.clone().map(|path| {
        Arc::new(Mutex::new(FileLog::new(path))) as Arc<Mutex<dyn logger::Repository>>
    });
    logger::configure(repository, level);

    match cli.command {
        Command::Show { user_id } => {
            let user_id = UserID::from(user_id.as_str());
            let output = commands::show(&settings, &user_id)
                .map_err(|err| anyhow!("failed to read program of user {user_id}: {err}"))?;
            println!("{output}");
        }
        Command::Clear { user_id } => {
            let user_id = UserID::from(user_id.as_str());
            let output = commands::clear(&settings, &user_id)
                .map_err(|err| anyhow!("failed to delete program of user {user_id}: {err}"))?;
            println!("{output}");
        }
        Command::Families { days } => println!("{}", commands::families(days)),
        Command::Settings { write } => {
            if write {
                settings::write_settings(&cli.config, &settings)
                    .with_context(|| format!("failed to write {}", cli.config.display()))?;
                info!("wrote settings to {}", cli.config.display());
            }
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}
