use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use dotenvy::dotenv;
use log::info;
use std::fmt;
use std::path::PathBuf;

use stride::logging::set_log_level;
use stride::report::{Labels, read_data};
use stride::samples;
use stride::training::CaloriesCalculator;

#[derive(Parser, Debug)]
#[command(version, about = "Stride - training metrics calculator", long_about = None)]
struct Args {
    /// Language of the summary labels
    #[arg(long, value_enum, env = "STRIDE_LOCALE", default_value_t = Locale::En)]
    locale: Locale,

    /// JSON file overriding individual labels
    #[arg(long, env = "STRIDE_LABELS")]
    labels: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// off, error, warn, info, debug or trace
    #[arg(long, env = "STRIDE_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, ValueEnum)]
enum Locale {
    En,
    Ru,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_labels(args: &Args) -> Result<Labels> {
    if let Some(path) = &args.labels {
        return Labels::from_json_file(path)
            .with_context(|| format!("Failed to load labels from {}", path.display()));
    }
    Ok(match args.locale {
        Locale::En => Labels::english(),
        Locale::Ru => Labels::russian(),
    })
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    if !set_log_level(&args.log_level) {
        bail!("Unknown log level: {}", args.log_level);
    }

    let labels = load_labels(&args)?;
    let trainings = samples::all(&labels).context("Failed to build sample trainings")?;
    info!(
        "printing {} trainings with {} labels as {:?}",
        trainings.len(),
        args.locale,
        args.format
    );

    for training in &trainings {
        match args.format {
            OutputFormat::Text => println!("{}", read_data(training, &labels)),
            OutputFormat::Json => println!("{}", serde_json::to_string(&training.summary())?),
        }
    }

    Ok(())
}
