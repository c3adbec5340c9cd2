//! Sumador: terminal front end for the sumar calculator engine
//!
//! ## Usage
//!
//! ```bash
//! sumador                 # Interactive session
//! sumador "3+2*2"         # One-shot evaluation
//! sumador --json "1/3"    # Machine-readable output
//! ```

use std::process::ExitCode;

use clap::Parser;

mod error;
mod interactive;

use error::CliResult;

/// Two-register arithmetic calculator
#[derive(Debug, Parser)]
#[command(name = "sumador", version, about)]
struct Cli {
    /// Expression to evaluate; starts the interactive session when omitted
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", console::style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    if cli.expression.is_empty() {
        interactive::run()?;
        return Ok(());
    }

    let expr = cli.expression.join(" ");
    let value = sumar::core::evaluate(&expr)?;
    if cli.json {
        println!(
            "{}",
            serde_json::json!({ "expression": expr, "result": value })
        );
    } else {
        println!("{}", sumar::app::format_number(value));
    }
    Ok(())
}
