use notice_report::cli::{Args, OutputFormat};
use notice_report::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use notice_report::prelude::*;
use notice_report::shared::error::{ExitCode, NoticeError};
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

#[tokio::main]
async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;

    let application_name = args
        .name
        .clone()
        .unwrap_or_else(|| config.application.name.clone());
    let application_version = args
        .app_version
        .clone()
        .unwrap_or_else(|| config.application.version.clone());
    if application_name.is_empty() || application_version.is_empty() {
        return Err(NoticeError::Validation {
            message: "Application name and version must be set in the config file \
                      or via --name / --app-version"
                .to_string(),
        }
        .into());
    }

    // Create adapters (Dependency Injection)
    let catalog_client = CatalogApiClient::new(&config.server.url, config.server.api_token.clone())?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = AssembleReportUseCase::new(catalog_client, config.rules.clone(), progress_reporter);

    // Execute use case
    let request = ReportRequest::new(application_name.clone(), application_version);
    let response = use_case.execute(request).await?;

    // Render the report
    eprintln!("{}", args.format.progress_message());
    let formatter = create_formatter(args.format, &config)?;
    let output = formatter.format(&response.components, &response.metadata, &config.export_properties)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match &args.output {
        Some(path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&output)?;

    // Optional per-component text files
    if args.text_files || config.report.text_file_output {
        let dir = notice_report::adapters::outbound::filesystem::text_files_dir(
            &application_name,
            Path::new("."),
        );
        let writer = TextReportWriter::new(
            dir,
            config.report.show_file_paths,
            config.report.show_copyrights,
        );
        let written = writer.write(&response.components)?;
        eprintln!("✅ Wrote {} component text file(s)", written.len());
    }

    if response.components.is_empty() {
        eprintln!("⚠️  Warning: the report contains no components");
        return Ok(ExitCode::EmptyReport);
    }

    Ok(ExitCode::Success)
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => discover_config(Path::new("."))?.ok_or_else(|| {
            NoticeError::Validation {
                message: format!(
                    "No {} found in the current directory.\n\n💡 Hint: Pass --config <path> or create the file.",
                    CONFIG_FILENAME
                ),
            }
            .into()
        }),
    }
}

fn create_formatter(format: OutputFormat, config: &ConfigFile) -> Result<Box<dyn ReportFormatter>> {
    match format {
        OutputFormat::Html => match &config.report.template_path {
            Some(path) => {
                let template =
                    fs::read_to_string(path).map_err(|e| NoticeError::FileReadError {
                        path: path.clone(),
                        details: e.to_string(),
                    })?;
                Ok(Box::new(HtmlReportFormatter::with_template(template)))
            }
            None => Ok(Box::new(HtmlReportFormatter::new())),
        },
        OutputFormat::Json => Ok(Box::new(JsonReportFormatter::new())),
    }
}
