use baggage_checker::application::checker::BaggageChecker;
use baggage_checker::interfaces::csv::baggage_reader::BaggageReader;
use baggage_checker::interfaces::report::{ReportFormat, ReportWriter};
use baggage_checker::logging;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input baggage CSV file (length, width, height, weight). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let source: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin().lock()),
    };
    tracing::info!(input = ?cli.input, format = ?cli.format, "checking baggage");

    let mut checker = BaggageChecker::new();
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), cli.format);
    writer.begin().into_diagnostic()?;

    for entry in BaggageReader::new(source).entries() {
        match entry {
            Ok(baggage) => {
                let assessment = checker.process(baggage);
                writer.write_assessment(&assessment).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading baggage entry: {}", e);
            }
        }
    }

    let summary = checker.into_summary();
    tracing::info!(count = summary.count, total_weight = %summary.total_weight, "done");
    writer.finish(&summary).into_diagnostic()?;

    Ok(())
}
