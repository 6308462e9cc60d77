use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use surplus_application::SurplusApp;
use surplus_infrastructure::ConfigService;

mod commands;

use commands::account::{ProfileAction, RegisterArgs};
use commands::community::ReferAction;
use commands::donate::DonateArgs;
use commands::market::{DonationAction, RequestAction};

#[derive(Parser)]
#[command(name = "surplus")]
#[command(about = "Surplus - share surplus food with your neighbourhood", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register(RegisterArgs),
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in identity
    Whoami,
    /// View or edit your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// List surplus food through the three-step donation flow
    Donate(DonateArgs),
    /// Browse available food within a distance
    Browse {
        /// Maximum distance in km (0-20)
        #[arg(long)]
        distance: Option<f64>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Listed donations
    Donations {
        #[command(subcommand)]
        action: DonationAction,
    },
    /// Food requests
    Requests {
        #[command(subcommand)]
        action: RequestAction,
    },
    /// Top donors
    Leaderboard {
        /// Current month only
        #[arg(long)]
        monthly: bool,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Send feedback
    Feedback {
        #[arg(long)]
        text: String,
        /// 1-5
        #[arg(long)]
        rating: Option<u8>,
    },
    /// Invite someone
    Refer {
        #[command(subcommand)]
        action: ReferAction,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("SURPLUS_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_app(cli: &Cli) -> Result<SurplusApp> {
    let service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    let mut config = service.load()?;
    if let Some(base) = &cli.api_base {
        config.api_base_url = base.clone();
    }
    tracing::debug!(
        "[Bootstrap] API base {} (browse source: {})",
        config.normalized_base_url(),
        config.browse_source
    );
    Ok(SurplusApp::from_config(config)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let app = build_app(&cli)?;

    match cli.command {
        Commands::Register(args) => commands::account::register(&app, args).await?,
        Commands::Login { email, password } => {
            commands::account::login(&app, email, password).await?
        }
        Commands::Logout => commands::account::logout(&app)?,
        Commands::Whoami => commands::account::whoami(&app)?,
        Commands::Profile { action } => commands::account::profile(&app, action).await?,
        Commands::Donate(args) => commands::donate::run(&app, args).await?,
        Commands::Browse { distance, search } => {
            commands::browse::run(&app, distance, search).await?
        }
        Commands::Donations { action } => commands::market::donations(&app, action).await?,
        Commands::Requests { action } => commands::market::requests(&app, action).await?,
        Commands::Leaderboard { monthly, limit } => {
            commands::community::leaderboard(&app, monthly, limit).await?
        }
        Commands::Feedback { text, rating } => {
            commands::community::feedback(&app, text, rating).await?
        }
        Commands::Refer { action } => commands::community::refer(&app, action).await?,
    }

    Ok(())
}
