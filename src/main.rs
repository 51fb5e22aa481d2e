use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use fab::{
    DEMO_SCRIPT,
    interpreter::{
        evaluator::{core::execute, environment::Environment},
        lexer::tokenize,
        parser::core::parse,
    },
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Extension expected on fab script files.
const SCRIPT_EXTENSION: &str = "fab";

/// fab runs scripts written in a tiny language of variables, ordered maps and
/// `echo`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. When omitted, a built-in demo script runs instead.
    file: Option<PathBuf>,

    /// Print the token stream to stderr before running.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed statements to stderr before running.
    #[arg(long)]
    dump_ast: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = match &args.file {
        Some(path) => {
            if path.extension().is_none_or(|ext| ext != SCRIPT_EXTENSION) {
                warn!(path = %path.display(), "script does not have the .{SCRIPT_EXTENSION} extension");
            }
            match fs::read_to_string(path) {
                Ok(script) => script,
                Err(e) => {
                    eprintln!("Error: failed to read '{}': {e}", path.display());
                    return ExitCode::FAILURE;
                },
            }
        },
        None => {
            debug!("no script given, running the demo");
            DEMO_SCRIPT.to_string()
        },
    };

    match run_script(&script, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs `script` against a fresh environment, writing output to stdout.
fn run_script(script: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(script)?;
    if args.dump_tokens {
        for lexeme in &tokens {
            eprintln!("{}:{}\t{}\t{:?}", lexeme.line, lexeme.column, lexeme.token, lexeme.text);
        }
    }

    let statements = parse(&tokens)?;
    if args.dump_ast {
        for statement in &statements {
            eprintln!("{statement:#?}");
        }
    }

    let mut env = Environment::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&statements, &mut env, &mut out)?;

    debug!(variables = env.len(), "script finished");
    Ok(())
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, e.g.
/// `RUST_LOG=fab=debug` shows pipeline stages and `RUST_LOG=fab=trace` every
/// executed statement.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}
