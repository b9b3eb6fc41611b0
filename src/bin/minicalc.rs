use clap::Parser;
use log::{debug, warn};
use minicalc_rs::compute;
use minicalc_rs::history::{History, DEFAULT_CAPACITY};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "minicalc",
    version,
    about = "Terminal calculator with degree-based trigonometry and a rolling history"
)]
struct Args {
    /// History file (JSON). Defaults to the user data directory.
    #[arg(long, value_name = "PATH")]
    history_file: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long)]
    no_history: bool,

    /// Maximum number of history entries kept
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    max_history: usize,

    /// Evaluate this expression once and exit
    expression: Vec<String>,
}

struct Session {
    history: History,
    path: Option<PathBuf>,
}

impl Session {
    fn open(args: &Args) -> Self {
        let path = if args.no_history {
            None
        } else {
            args.history_file.clone().or_else(default_history_path)
        };

        let history = match &path {
            Some(path) => History::load(path, args.max_history).unwrap_or_else(|e| {
                warn!("{}; starting with an empty history", e);
                History::with_capacity(args.max_history)
            }),
            None => History::with_capacity(args.max_history),
        };

        Self { history, path }
    }

    /// Computes `input`, printing the outcome. Returns false on error.
    fn calculate(&mut self, input: &str, out: &mut impl Write) -> io::Result<bool> {
        let expression = input.trim();
        match compute(expression) {
            Ok(None) => Ok(true),
            Ok(Some(display)) => {
                writeln!(out, "{} =", expression)?;
                writeln!(out, "{}", display)?;
                self.history.push(expression, display.as_str());
                self.history.set_last_input(display);
                self.persist();
                Ok(true)
            }
            Err(e) => {
                debug!("{} failed with {}", expression, e.kind());
                writeln!(out, "Error: {}", e)?;
                Ok(false)
            }
        }
    }

    fn list(&self, out: &mut impl Write) -> io::Result<()> {
        if self.history.is_empty() {
            return writeln!(out, "No history yet");
        }
        for (i, entry) in self.history.entries().iter().enumerate() {
            writeln!(out, "{:>3}. {} = {}", i + 1, entry.expression, entry.result)?;
        }
        Ok(())
    }

    fn persist(&self) {
        if let Some(path) = &self.path {
            if let Err(e) = self.history.save(path) {
                warn!("{}", e);
            }
        }
    }

    /// Handles a `:command` line. Returns false when the session should end.
    fn command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some(":q") | Some(":quit") => return Ok(false),
            Some(":history") => self.list(out)?,
            Some(":clear") => {
                self.history.clear();
                self.persist();
                writeln!(out, "History cleared")?;
            }
            Some(":recall") => {
                let entry = parts
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| self.history.get(index))
                    .map(|entry| entry.expression.clone());
                match entry {
                    Some(expression) => {
                        self.calculate(&expression, out)?;
                    }
                    None => writeln!(out, "Usage: :recall N (1..={})", self.history.len())?,
                }
            }
            _ => writeln!(out, "Commands: :history, :recall N, :clear, :quit")?,
        }
        Ok(true)
    }

    fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        if !self.history.last_input().is_empty() {
            writeln!(stdout, "(last: {})", self.history.last_input())?;
        }

        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let line = line.trim();
            if line.starts_with(':') {
                if !self.command(line, &mut stdout)? {
                    break;
                }
            } else {
                self.calculate(line, &mut stdout)?;
            }
        }
        Ok(())
    }
}

fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("minicalc").join("history.json"))
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();
    let mut session = Session::open(&args);

    let result = if args.expression.is_empty() {
        session.run().map(|_| true)
    } else {
        session.calculate(&args.expression.join(" "), &mut io::stdout())
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("minicalc: {}", e);
            ExitCode::FAILURE
        }
    }
}
