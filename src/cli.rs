use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Html,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'html' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Html => "📝 Generating HTML notice report...",
            OutputFormat::Json => "📝 Generating JSON notice report...",
        }
    }
}

/// Generate open-source notice reports from a compliance catalog server
#[derive(Parser, Debug)]
#[command(name = "notice-report")]
#[command(version)]
#[command(about = "Generate open-source notice reports from a compliance catalog server", long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    /// (defaults to notice-report.config.yml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Application name (overrides the configured one)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Application version (overrides the configured one)
    #[arg(short, long = "app-version")]
    pub app_version: Option<String>,

    /// Output format: html or json
    #[arg(short, long, default_value = "html")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write per-component text files
    #[arg(long)]
    pub text_files: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
