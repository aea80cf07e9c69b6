use clap::Parser;
use naturallanguage::config;
use naturallanguage::driver;
use std::path::PathBuf;
use std::process::ExitCode;

/// Interpreter for the NaturalLanguage `.nl` scripting language
#[derive(Parser, Debug)]
#[command(name = "nl")]
#[command(version = config::VERSION)]
#[command(about = "Interpreter for NaturalLanguage .nl source files")]
struct CliArgs {
    /// Source file to execute
    #[arg(value_name = "FILE")]
    path: PathBuf,
}

fn main() -> ExitCode {
    // The argument-count and `.nl`-suffix checks have to run ahead of clap
    // so they produce these exact strings rather than clap's own usage
    // text; clap still gets the final word on `--help`/`--version`/errors.
    let mut raw_args = std::env::args();
    raw_args.next();

    let path = match (raw_args.next(), raw_args.next()) {
        (Some(arg), None) => arg,
        _ => {
            println!("{}", config::MISSING_FILE_MESSAGE);
            return ExitCode::FAILURE;
        }
    };

    if !path.ends_with(config::SOURCE_EXTENSION) {
        println!("{}", config::WRONG_EXTENSION_MESSAGE);
    }

    let args = CliArgs::parse();

    if let Err(err) = driver::run_file(&args.path) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
