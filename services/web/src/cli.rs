use crate::commands::{run_confirmation, run_eligibility, ConfirmationArgs, EligibilityArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use verify_frontend::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Verify Frontend",
    about = "Serve the identity verification hub front-end or evaluate its journeys from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify a set of "will it work for me" answers
    Eligibility(EligibilityArgs),
    /// Show which confirmation template a level of assurance selects
    Confirmation(ConfirmationArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed a demo journey session under this id (local development only)
    #[arg(long)]
    pub(crate) seed_session: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Eligibility(args) => run_eligibility(args),
        Command::Confirmation(args) => run_confirmation(args),
    }
}
