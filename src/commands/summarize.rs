//! Summarize command handler

use std::path::Path;

use anyhow::Result;

use studybuddy::analyzer::{SummaryComposer, SummaryStyle};
use studybuddy::Config;

use super::{content_generator, load_document};

/// Print a summary of one document, composed locally or by the configured
/// completion command.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    config_path: &Path,
    file: &Path,
    style: Option<SummaryStyle>,
    remote: bool,
) -> Result<()> {
    let document = load_document(file)?;
    let style = style.unwrap_or_else(|| config.analysis.summary_style());

    if remote {
        let generator = content_generator(config, config_path)?;
        println!("{}", generator.summarize(document.text(), style)?);
        return Ok(());
    }

    let analysis = config.analyzer().analyze(&document);
    println!("{}", SummaryComposer::new().compose(&analysis, style));
    Ok(())
}
