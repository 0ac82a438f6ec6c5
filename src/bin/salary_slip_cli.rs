use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;

use salary_slip::layout;
use salary_slip::record::Record;
use salary_slip::{download_filename, render};

/// Renders a salary statement PDF from `NAME=VALUE` field assignments.
///
/// Field names must match the upstream spreadsheet headers exactly, e.g.
/// `"Rider ID=1001"` or `"Gross salary=500"`.  Amounts are parsed lazily by
/// the renderer, so every value is passed as text.
#[derive(Parser)]
#[command(author, version, about = "Render a rider salary statement to a PDF file")]
struct Cli {
    /// Field assignments in `NAME=VALUE` form.
    #[arg(value_name = "NAME=VALUE")]
    fields: Vec<String>,

    /// Output path; defaults to `Salary_<Rider ID>.pdf` in the current directory.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut record = Record::new();
    for pair in &cli.fields {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("invalid field assignment '{pair}', expected NAME=VALUE"))?;
        record.insert(name.trim(), value.trim());
    }

    let bytes = render(&record)?;
    let out = cli.out.unwrap_or_else(|| {
        PathBuf::from(download_filename(&record.text(layout::RIDER_ID_FIELD)))
    });
    fs::write(&out, &bytes)?;
    println!("Wrote {} ({} bytes)", out.display(), bytes.len());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
