//! leave-extract command-line entry point

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use leave_extract::IntentPrediction;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// leave-extract: pull leave dates and details out of chat messages
#[derive(Parser, Debug)]
#[command(name = "leave-extract")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable JSON logging format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract begin and end dates from text
    Dates {
        /// Message text
        text: String,
        /// Reference date (YYYY-MM-DD) used instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Process a message whose intent was classified upstream
    Message {
        /// Message text
        text: String,
        /// Predicted intent label (e.g. apply_leave, greetings)
        #[arg(short, long)]
        intent: String,
        /// Confidence of the predicted intent
        #[arg(long, default_value = "1.0")]
        confidence: f32,
        /// Greeting sub-intent (e.g. greeting_morning)
        #[arg(long)]
        sub_intent: Option<String>,
        /// Reference date (YYYY-MM-DD) used instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if args.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let config = cli::load_config(args.config.as_deref())?;

    match args.command {
        Command::Dates { text, today } => cli::run_dates(&config, &text, today, args.json),
        Command::Message {
            text,
            intent,
            confidence,
            sub_intent,
            today,
        } => {
            let mut prediction = IntentPrediction::new(intent, confidence);
            if let Some(sub_intent) = sub_intent {
                prediction = prediction.with_sub_label(sub_intent);
            }
            cli::run_message(&config, &text, prediction, today, args.json)
        }
    }
}
