use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fitscope::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FitScope Assessment Service",
    about = "Serve and exercise the career-fit assessment engine from the command line",
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
    /// Work with assessment response exports
    Assess {
        #[command(subcommand)]
        command: AssessCommand,
    },
    /// Run an end-to-end CLI demo covering the questionnaire and report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessCommand {
    /// Score a response export and print the resulting report
    Score(ScoreArgs),
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
        Command::Assess {
            command: AssessCommand::Score(args),
        } => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
