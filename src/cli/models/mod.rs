//! Models command - print the known model catalog

use crate::domain::{prediction::known_models, DEFAULT_MODEL_NAME};

pub fn run() -> anyhow::Result<()> {
    for model in known_models() {
        let marker = if model.name == DEFAULT_MODEL_NAME { " (default)" } else { "" };
        println!("{}{}: {}", model.name, marker, model.description);
    }
    Ok(())
}
