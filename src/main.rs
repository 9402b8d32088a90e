use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use rustyline::{error::ReadlineError, Editor};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use fbdlc::{compile, scan};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "fbdlc",
    about = "Compiles FBDL universes and rulebases into FRI initialization calls"
)]
struct Opt {
    /// FBDL source file. Starts an interactive session when omitted.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Print the scanned tokens instead of compiling
    #[structopt(long)]
    tokens: bool,

    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_input(code: &str, show_tokens: bool) -> Result<String> {
    let tokens = scan(code)?;
    if show_tokens {
        return Ok(tokens.iter().map(|token| format!("{}\n", token)).join(""));
    }
    Ok(compile(&tokens)?)
}

fn compile_file(path: &Path, show_tokens: bool) -> Result<()> {
    let code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    print!("{}", handle_input(&code, show_tokens)?);
    Ok(())
}

fn repl(show_tokens: bool) -> Result<()> {
    let mut editor = Editor::<()>::new();
    let mut code = String::new();

    // A block of input ends at the first empty line.
    loop {
        let prompt = if code.is_empty() { "> " } else { ". " };
        match editor.readline(prompt) {
            Ok(line) => {
                editor.add_history_entry(line.as_str());

                if !line.trim().is_empty() {
                    code.push_str(&line);
                    code.push('\n');
                    continue;
                }
                if code.is_empty() {
                    continue;
                }

                match handle_input(&code, show_tokens) {
                    Ok(output) => print!("{}", output),
                    Err(e) => println!("Error: {:#}", e),
                }
                code.clear();
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("Failed to read input"),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logging(opt.verbose);

    match &opt.input {
        Some(path) => compile_file(path, opt.tokens),
        None => repl(opt.tokens),
    }
}
