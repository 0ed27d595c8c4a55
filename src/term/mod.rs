extern crate ansi_term;
extern crate ctrlc;
use crate::lang::{self, Error, Limits};
use crate::mach::{Output, Runtime};
use ansi_term::Style;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Run a Dartmouth BASIC program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File of numbered BASIC lines.
    file: PathBuf,

    /// Stop with BREAK after this many statements.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Most characters a single PRINT may produce.
    #[arg(long, default_value_t = 75)]
    width: usize,

    /// List the parsed program instead of running it.
    #[arg(short, long)]
    list: bool,

    /// Log interpreter activity to stderr. Overrides RUST_LOG.
    #[arg(short, long)]
    verbose: bool,
}

/// Runs the command line and returns the process exit code.
pub fn main() -> i32 {
    let args = Args::parse();
    init_tracing(args.verbose);
    let source = match std::fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            report(&format!("{}: {}", args.file.display(), error));
            return 1;
        }
    };
    let limits = Limits {
        max_steps: args.max_steps,
        print_width: args.width,
        ..Limits::default()
    };
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C will not interrupt the program");
    }
    match run(&source, limits, interrupted, args.list) {
        Ok(()) => 0,
        Err(error) => {
            report(&error.to_string());
            1
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(
    source: &str,
    limits: Limits,
    interrupted: Arc<AtomicBool>,
    list: bool,
) -> Result<(), Error> {
    let program = lang::compile_with(source, &limits)?;
    if list {
        print!("{}", program);
        return Ok(());
    }
    let mut console = Console::default();
    let result = Runtime::new(&program)
        .with_limits(limits)
        .with_interrupt(interrupted)
        .execute(&mut console);
    console.finish();
    result
}

fn report(message: &str) {
    eprintln!("{}", Style::new().bold().paint(message));
}

/// Standard output, flushed after every write so a `PRINT` ending in a
/// comma shows up before the program moves on.
#[derive(Default)]
struct Console {
    mid_line: bool,
}

impl Console {
    /// Ends a line left open by a trailing comma.
    fn finish(&mut self) {
        if self.mid_line {
            self.write("\n");
        }
    }
}

impl Output for Console {
    fn write(&mut self, s: &str) {
        print!("{}", s);
        let _ = std::io::stdout().flush();
        if let Some(ch) = s.chars().last() {
            self.mid_line = ch != '\n';
        }
    }
}
