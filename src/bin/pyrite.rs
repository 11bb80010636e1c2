use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use pyrite_json::report;
use pyrite_json::scanner::{self, validate_directory};
use pyrite_json::validator::{validate_file, Strictness};

#[derive(Parser)]
#[command(name = "pyrite")]
#[command(about = "validates json files one at a time or a whole directory", long_about = None)]
struct Cli {
    /// File or directory to validate
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Reject documents whose root is not an object or array
    #[arg(short, long)]
    strict: bool,
}

fn main() -> Result<()> {
    miette::set_panic_hook();
    let cli = Cli::parse();
    let strictness = if cli.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };

    if cli.path.is_file() {
        if let Err(err) = scanner::require_json_extension(&cli.path) {
            println!("Error: {err}");
            return Ok(());
        }
        let file_report = validate_file(&cli.path, strictness);
        println!("{}", report::status_line(&file_report));
    } else if cli.path.is_dir() {
        let summary = validate_directory(&cli.path, strictness)?;
        report::write_summary(&mut io::stdout(), &summary).into_diagnostic()?;
    } else {
        println!(
            "Error: '{}' is neither a file nor a directory",
            cli.path.display()
        );
        process::exit(1);
    }
    Ok(())
}
