//! Command handlers.

use chrono::{Local, NaiveDate, NaiveDateTime};
use leave_extract::{Config, DateExtractor, IntentPrediction, MessageProcessor};

use super::output;

/// Load the configuration from an explicit path or the default locations.
pub fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Reference instant: midnight of `today` if given, otherwise now.
fn reference_time(today: Option<NaiveDate>) -> anyhow::Result<NaiveDateTime> {
    match today {
        Some(date) => date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid reference date: {}", date)),
        None => Ok(Local::now().naive_local()),
    }
}

/// Extract begin/end dates from text.
pub fn run_dates(
    config: &Config,
    text: &str,
    today: Option<NaiveDate>,
    json: bool,
) -> anyhow::Result<()> {
    let extractor = DateExtractor::from_config(&config.extraction);
    let result = extractor.extract(text, reference_time(today)?);
    output::print_dates(&result, json)
}

/// Process a message with an intent supplied by the caller.
pub fn run_message(
    config: &Config,
    text: &str,
    prediction: IntentPrediction,
    today: Option<NaiveDate>,
    json: bool,
) -> anyhow::Result<()> {
    let processor = MessageProcessor::new(config)?;
    let response = processor.process(text, &prediction, reference_time(today)?)?;
    output::print_message(&response, json)
}
