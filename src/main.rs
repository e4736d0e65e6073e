use clap::Parser;
use style_predictor::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Predict(args) => cli::predict::run(args).await,
        Command::Models => cli::models::run(),
        Command::Serve => cli::serve::run().await,
    }
}
