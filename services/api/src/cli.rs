use crate::report_cmd::{run_action_report, ActionReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use klub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Klub API",
    about = "Run the mountaineering-club membership service or generate reports from the command line",
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
    /// Aggregate an action participant CSV into report counts
    Report(ActionReportArgs),
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
        Command::Report(args) => run_action_report(args),
    }
}
