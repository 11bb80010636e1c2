use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use pyrite_json::report;
use pyrite_json::validator::{validate_file, Strictness, Verdict};

#[derive(Parser)]
#[command(name = "pyrite-verify")]
#[command(about = "verifies a single json file and shows what is inside", long_about = None)]
struct Cli {
    /// JSON file to verify
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Accept any well-formed JSON root, not just objects and arrays
    #[arg(short, long)]
    lenient: bool,
}

fn main() {
    miette::set_panic_hook();
    // report usage with exit code 1 instead of clap's default 2
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    });
    let strictness = if cli.lenient {
        Strictness::Lenient
    } else {
        Strictness::Strict
    };

    let file_report = validate_file(&cli.file, strictness);
    println!("{}", report::verify_message(&file_report));

    match file_report.verdict {
        Verdict::Valid => print_content(&cli.file),
        Verdict::Invalid(err) if err.is_syntax() => {
            eprintln!("{:?}", miette::Report::new(err));
        }
        _ => {}
    }
}

fn print_content(path: &Path) {
    // The file was valid a moment ago, but it can vanish or change before we
    // re-read it here. That is a warning, not a crash.
    match report::pretty_content(path) {
        Ok(rendered) => {
            println!();
            println!("JSON Content:");
            println!("{rendered}");
        }
        Err(err) => println!("Error printing content: {err}"),
    }
}
