//! CLI module for the style predictor
//!
//! - `predict`: one prediction, printed as a ranked table
//! - `models`: list the known models
//! - `serve`: run the form-session HTTP API

pub mod models;
pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Style Predictor - guess which author a piece of text reads like
#[derive(Parser)]
#[command(name = "style-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send one text to the prediction service
    Predict(predict::PredictArgs),

    /// List the models the prediction service offers
    Models,

    /// Run the form-session HTTP API
    Serve,
}

/// Load `.env`, the layered config and the logging subscriber
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}
