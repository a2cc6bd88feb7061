use clap::{ArgAction, Parser};
use scratchpad::editor::{file_ops, Editor, Exit, Settings};
use scratchpad::logging;
use scratchpad::session::{self, TerminalKeys, TerminalSession};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "scratchpad", version, disable_version_flag = true)]
#[command(about = "A small full-screen terminal text editor")]
struct Args {
    /// File to open; starts with an empty buffer when omitted
    path: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Settings file [default: <config dir>/scratchpad/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a debug log to PATH
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Log all key inputs (requires --log)
    #[arg(long)]
    keys: bool,

    /// Log cursor movement (requires --log)
    #[arg(long)]
    movement: bool,
}

fn main() -> ExitCode {
    // Parse arguments BEFORE terminal init
    let args = Args::parse();

    match run(args) {
        Ok(Exit::Saved(path)) => {
            println!("Saved to {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(Exit::Discarded) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Exit, Box<dyn std::error::Error>> {
    if let Some(log_path) = &args.log {
        logging::init(log_path)?;
        logging::configure(args.keys, args.movement);
        log::info!("scratchpad {} starting", env!("CARGO_PKG_VERSION"));
    }

    let settings = Settings::load(args.config.as_deref())?;

    // The file is read before raw mode so a failure needs no terminal cleanup
    let text = match &args.path {
        Some(path) => {
            log::info!("Opening file: {}", path.display());
            file_ops::read_document(path)?
        }
        None => String::new(),
    };
    let mut editor = Editor::new(text);

    // Dropping the session restores the terminal before anything is printed
    let mut terminal = TerminalSession::enter()?;
    let exit = session::run(terminal.terminal(), &mut editor, &settings, &mut TerminalKeys)?;
    Ok(exit)
}
