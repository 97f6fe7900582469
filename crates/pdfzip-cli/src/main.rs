//! pdfzip CLI - extracts the PDFs from a ZIP archive into a sibling
//! directory and writes a metadata sidecar for each.

mod cli;
mod error;
mod extract;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and succeed; usage errors exit 1
            if let Err(e) = err.print() {
                eprintln!("failed to write usage: {e}");
            }
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose, cli.quiet, cli.json);

    let formatter = output::create_formatter(cli.json, cli.verbose);

    match extract::execute(&cli, &*formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}
