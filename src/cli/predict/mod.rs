//! Predict command - one request against the prediction service

use clap::Args;
use tracing::{info, warn};

use crate::domain::{
    prediction::is_known, DomainError, PredictionRequest, PredictionResult, DEFAULT_MODEL_NAME,
};

#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Text whose style should be guessed
    #[arg(long)]
    pub text: String,

    /// Model to run the prediction with
    #[arg(long, default_value = DEFAULT_MODEL_NAME)]
    pub model: String,

    /// Prediction service host (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Prediction service port (overrides config)
    #[arg(long)]
    pub port: Option<String>,
}

pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    let mut config = super::bootstrap()?;

    if args.model.trim().is_empty() {
        return Err(DomainError::validation("Model name must not be empty").into());
    }
    if !is_known(&args.model) {
        warn!(model_name = %args.model, "Model is not in the known catalog, sending anyway");
    }

    if let Some(host) = args.host {
        config.style.host = host;
    }
    if let Some(port) = args.port {
        config.style.port = port;
    }

    let client = crate::create_prediction_client(&config.style)?;
    let request = PredictionRequest::new(args.text, args.model);

    info!(model_name = %request.model_name, "Requesting prediction");
    let result = client.predict(&request).await?;

    print!("{}", render_table(&result));
    Ok(())
}

/// Ranked author table, one row per author
pub fn render_table(result: &PredictionResult) -> String {
    let ranked = result.ranked();
    let width = ranked
        .iter()
        .map(|(author, _)| author.chars().count())
        .max()
        .unwrap_or(0)
        .max("Author".len());

    let mut out = format!("{:<3} {:<width$} {}\n", "#", "Author", "Probability", width = width);
    for (i, (author, probability)) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:<3} {:<width$} {:.4}\n",
            i + 1,
            author,
            probability,
            width = width
        ));
    }
    out
}
