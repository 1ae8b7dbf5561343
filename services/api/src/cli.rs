use crate::demo::{run_demo, run_evaluate, run_questions, EvaluateArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use studio_viability::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Soundproof Studio Site Assessment",
    about = "Score a home-studio soundproofing site and serve the assessment API",
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
    /// Print the questionnaire in presentation order
    Questions(QuestionsArgs),
    /// Evaluate a set of answers and print the verdict
    Evaluate(EvaluateArgs),
    /// Evaluate a few sample sites end to end
    Demo,
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
        Command::Questions(args) => run_questions(args),
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo => run_demo(),
    }
}
