//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use tutorly_core::config;

use self::commands::dialog::Canvas;

mod commands;

#[derive(Parser)]
#[command(name = "tutorly")]
#[command(version = "0.1")]
#[command(about = "Shared alert and confirmation dialog for the Tutorly marketplace")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Canvas size for headless renders.
#[derive(clap::Args, Debug, Clone, Copy)]
struct CanvasArgs {
    /// Canvas width in columns
    #[arg(long, default_value_t = 70)]
    width: u16,

    /// Canvas height in rows
    #[arg(long, default_value_t = 12)]
    height: u16,
}

impl From<CanvasArgs> for Canvas {
    fn from(args: CanvasArgs) -> Self {
        Canvas {
            width: args.width,
            height: args.height,
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the interactive page demo (default)
    Demo,

    /// Render an alert dialog to stdout
    Alert {
        /// Dialog title
        #[arg(value_name = "TITLE")]
        title: String,

        /// Dialog message
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Visual variant (info, success, error); anything else renders as info
        #[arg(short, long, default_value = "info")]
        kind: String,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Render a confirmation dialog to stdout
    Confirm {
        /// Dialog title
        #[arg(value_name = "TITLE")]
        title: String,

        /// Dialog message
        #[arg(value_name = "MESSAGE")]
        message: String,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // default to the demo
    let command = cli.command.unwrap_or(Commands::Demo);

    match command {
        Commands::Demo => commands::demo::run(&load_config()?).await,
        Commands::Alert {
            title,
            message,
            kind,
            canvas,
        } => commands::dialog::alert(&load_config()?, &title, &message, &kind, canvas.into()),
        Commands::Confirm {
            title,
            message,
            canvas,
        } => commands::dialog::confirm(&load_config()?, &title, &message, canvas.into()),

        // Config commands must work even when the existing file is malformed.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

fn load_config() -> Result<config::Config> {
    config::Config::load().context("load config")
}
