use crate::board::{run_jobs, run_locations, JobsArgs, LocationsArgs};
use crate::forms::{run_apply, run_contact, ApplyArgs, ContactArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use focus_recruitment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Focus Recruitment",
    about = "Serve and explore the Focus Recruitment jobs board from the command line",
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
    /// Print one page of the jobs board
    Jobs(JobsArgs),
    /// List the location dropdown options
    Locations(LocationsArgs),
    /// Submit an application for a listing (recorded in the log only)
    Apply(ApplyArgs),
    /// Validate and send a contact form message
    Contact(ContactArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Jobs(args) => run_jobs(args),
        Command::Locations(args) => run_locations(args),
        Command::Apply(args) => run_apply(args),
        Command::Contact(args) => run_contact(args).await,
    }
}
