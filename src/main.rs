mod cli;

use cli::Args;
use sonar_issues::adapters::outbound::console::StderrProgressReporter;
use sonar_issues::adapters::outbound::filesystem::{FileSystemReader, StdinReader};
use sonar_issues::adapters::outbound::formatters::MarkdownTableFormatter;
use sonar_issues::application::dto::FormatIssuesRequest;
use sonar_issues::application::factories::{PresenterFactory, PresenterType};
use sonar_issues::application::read_models::IssueReportReadModel;
use sonar_issues::application::use_cases::FormatIssuesUseCase;
use sonar_issues::config::ReportSettings;
use sonar_issues::ports::outbound::{IssueReportFormatter, OutputPresenter, PayloadReader};
use sonar_issues::shared::error::{ExitCode, IssueFormatError};
use sonar_issues::shared::Result;
use std::process;

fn main() {
    // clap exits with status 2 on argument errors
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        let exit_code = ExitCode::for_error(&e);

        match e.downcast_ref::<IssueFormatError>() {
            Some(err @ IssueFormatError::InvalidJson { .. }) => eprintln!("{}", err),
            _ => {
                eprintln!("\n❌ An error occurred:\n");
                eprintln!("{}", e);

                // Display error chain
                let mut source = e.source();
                while let Some(err) = source {
                    eprintln!("\nCaused by: {}", err);
                    source = err.source();
                }

                eprintln!();
            }
        }

        process::exit(exit_code.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let settings = ReportSettings::from_env(args.overrides());
    let progress_reporter = StderrProgressReporter::with_verbosity(args.verbose);
    let request = FormatIssuesRequest::new(settings);

    let model = match args.input {
        Some(path) => build_model(FileSystemReader::new(path), progress_reporter, request)?,
        None => build_model(StdinReader::new(), progress_reporter, request)?,
    };

    let formatter = MarkdownTableFormatter::new();
    let rendered = formatter.format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output_path(args.output));
    presenter.present(&rendered)?;

    Ok(())
}

fn build_model<R: PayloadReader>(
    reader: R,
    progress_reporter: StderrProgressReporter,
    request: FormatIssuesRequest,
) -> Result<IssueReportReadModel> {
    FormatIssuesUseCase::new(reader, progress_reporter).execute(request)
}
