use clap::{CommandFactory, Parser};
use namesmith::config::AppConfig;
use namesmith::error::AppError;
use namesmith::generator::UsernameGenerator;
use namesmith::telemetry;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

const TEMPLATE_HELP: &str = "\
Template fields:
    {first}   First name
    {middle}  Middle name
    {last}    Last name
    {f}       First initial
    {m}       Middle initial
    {l}       Last initial

A name component referenced by the template (under either form) must be
present in a name, or that name is skipped: first = token 1, middle =
token 2, last = final token; tokens in between are ignored.

Input files are CSV files with names in the first column, or plain text
with one name per line. Files that do not exist contribute no names.

The username list goes to stdout, one per line; redirect it to save.
A skip-count summary goes to stderr.

Example:
    namesmith \"{f}{m}{last}@acme.com\" employees.csv > usernames.txt";

#[derive(Parser, Debug)]
#[command(
    name = "namesmith",
    about = "Generate a deduplicated username or email list from rosters of personal names",
    version,
    after_long_help = TEMPLATE_HELP
)]
struct Cli {
    /// Username template, e.g. "{f}{m}{last}@acme.com"
    template: Option<String>,
    /// Name files (CSV first column, or one name per line)
    files: Vec<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    // An invocation without a template and at least one file is a usage
    // request by this tool's convention, not a failure.
    let (template, files) = match (cli.template, cli.files) {
        (Some(template), files) if !files.is_empty() => (template, files),
        _ => {
            Cli::command().print_long_help()?;
            println!();
            return Ok(());
        }
    };

    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;

    let generator = UsernameGenerator::new(&template)?;
    let batch = generator.from_paths(&files)?;

    info!(
        usernames = batch.usernames.len(),
        skipped = batch.skipped,
        "generation complete"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for username in &batch.usernames {
        writeln!(out, "{username}")?;
    }
    out.flush()?;

    eprintln!(
        "[warning] Skipped {} name(s) missing a component required by the template.",
        batch.skipped
    );

    Ok(())
}
