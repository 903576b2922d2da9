// Command-line entry point for cobtrace.

use clap::Parser;
use cobtrace::application::AnalyzeUsecase;
use cobtrace::domain::scanner::CobolScanner;
use cobtrace::infrastructure::{read_source, resolve_path, DotRenderer, JsonRenderer, TextRenderer};
use cobtrace::ports::TreeRenderer;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Paragraph to start the call tree from (e.g. 100-MAIN)
    start_paragraph: String,

    /// COBOL source file to analyze
    file: String,

    /// Output format (text, json, dot)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Write the rendered tree to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                // Missing arguments are a usage error: status 1.
                _ => ExitCode::from(1),
            };
        }
    };

    let renderer: Box<dyn TreeRenderer> = match cli.format.as_str() {
        "text" => Box::new(TextRenderer),
        "json" => Box::new(JsonRenderer),
        "dot" => Box::new(DotRenderer),
        other => {
            eprintln!("Unknown format: {} (expected text, json, or dot)", other);
            return ExitCode::from(1);
        }
    };

    let path = resolve_path(&cli.file);
    let source = match read_source(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error reading file: {:#}", err);
            return ExitCode::from(1);
        }
    };

    let scanner = CobolScanner::new();
    let usecase = AnalyzeUsecase {
        scanner: &scanner,
        renderer: renderer.as_ref(),
    };

    let report = match usecase.run(&source, &cli.start_paragraph) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::from(1);
        }
    };

    match &cli.output {
        Some(out_path) => {
            if let Err(err) = std::fs::write(out_path, &report.rendered) {
                eprintln!("Error writing {}: {}", out_path, err);
                return ExitCode::from(1);
            }
        }
        None => {
            if cli.format == "text" {
                println!("PERFORM Call Tree:");
            }
            print!("{}", report.rendered);
        }
    }

    // The core returns a boolean; only the CLI maps it to a process status.
    if report.contains_sql {
        eprintln!("ERROR: EXEC SQL found in the call tree.");
        ExitCode::from(1)
    } else {
        println!("SUCCESS: No EXEC SQL found in the call tree.");
        ExitCode::SUCCESS
    }
}
