//! Nutrition Mix Calculator
//!
//! Prints the nutrition report for the house mix.
//! Usage: nutrimix [--json]

use tracing_subscriber::EnvFilter;

use nutrimix::catalog;

const USAGE: &str = "Usage: nutrimix [--json]";

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Option<Format>, String> {
    match args {
        [] => Ok(Some(Format::Text)),
        [flag] if flag == "--json" => Ok(Some(Format::Json)),
        [flag] if flag == "-h" || flag == "--help" => Ok(None),
        _ => Err(format!("Unrecognized arguments: {}", args.join(" "))),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrimix=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let format = match parse_args(&args) {
        Ok(Some(format)) => format,
        Ok(None) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            std::process::exit(2);
        }
    };

    let registry = catalog::builtin_registry()?;
    let mix = catalog::default_mix(&registry)?;

    match format {
        Format::Text => print!("{}", mix.render()?),
        Format::Json => println!("{}", mix.report()?.to_json()?),
    }

    Ok(())
}
