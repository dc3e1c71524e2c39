mod problem;
mod report;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use lpbridge_model::VariableLimit;
use lpbridge_protocol::{
    HttpTransport, Session, SessionConfig, SubmitError, TransportError, UnusedBound, WireResponse,
};
use tracing_subscriber::EnvFilter;

use crate::problem::ProblemFile;

#[derive(Parser)]
#[command(name = "lpbridge")]
#[command(
    about = "Build, submit and inspect linear programs solved by a remote service",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    settings: Settings,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Settings {
    /// Base URL of the solver service
    #[arg(
        long,
        global = true,
        env = "LPBRIDGE_ENDPOINT",
        default_value = lpbridge_protocol::config::DEFAULT_ENDPOINT
    )]
    endpoint: String,
    /// Maximum number of decision variables
    #[arg(long, global = true, default_value_t = lpbridge_model::DEFAULT_MAX_VARIABLES)]
    max_variables: usize,
    /// Allow any number of decision variables
    #[arg(long, global = true, conflicts_with = "max_variables")]
    unbounded_variables: bool,
    /// Leave the unused side of one-sided bounds out of the request instead of sending 0
    #[arg(long, global = true)]
    omit_unused_bounds: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Settings {
    fn session_config(&self) -> SessionConfig {
        let limit = if self.unbounded_variables {
            VariableLimit::Unbounded
        } else {
            VariableLimit::Capped(self.max_variables)
        };
        let unused = if self.omit_unused_bounds {
            UnusedBound::Omit
        } else {
            UnusedBound::Zero
        };
        SessionConfig::new()
            .with_endpoint(self.endpoint.clone())
            .with_variable_limit(limit)
            .with_unused_bound(unused)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check a problem file for errors
    Check {
        /// The problem file (JSON)
        file: PathBuf,
    },
    /// Show the problem as readable expressions
    Preview {
        /// The problem file (JSON)
        file: PathBuf,
    },
    /// Print the request that would be sent to the solver
    Request {
        /// The problem file (JSON)
        file: PathBuf,
    },
    /// Send the problem to the solver and show the result
    Solve {
        /// The problem file (JSON)
        file: PathBuf,
        /// Give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interpret a saved solver response for a problem
    Interpret {
        /// The problem file (JSON)
        file: PathBuf,
        /// The solver response (JSON)
        response: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_session(file: &Path, config: SessionConfig) -> Session {
    match ProblemFile::load(file) {
        Ok(problem) => problem.into_session(Session::new(config)),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn exit_on_submit_error(e: SubmitError) -> ! {
    eprintln!("Invalid problem: {}", e);
    std::process::exit(1);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

fn show_result(session: &Session, json: bool) {
    let Some(result) = session.result() else {
        return;
    };
    if json {
        print_json(result);
    } else {
        let augmented = session.augmented_model();
        let maximize = session.model().maximize();
        print!("{}", report::render_result(result, augmented.as_ref(), maximize));
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.settings.verbose);
    let config = cli.settings.session_config();

    match cli.command {
        Commands::Check { file } => {
            let session = load_session(&file, config);
            match session.model().validate() {
                Ok(()) => {
                    println!("✓ {} is valid", file.display());
                    println!("  {} variables", session.model().variable_count());
                    println!("  {} constraints", session.model().num_constraints());
                }
                Err(e) => {
                    eprintln!("✗ {} has errors:", file.display());
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Preview { file } => {
            let session = load_session(&file, config);
            print!("{}", report::render_preview(session.model()));
        }
        Commands::Request { file } => {
            let mut session = load_session(&file, config);
            let pending = session
                .begin_submit()
                .unwrap_or_else(|e| exit_on_submit_error(e));
            eprintln!("POST {}", pending.url);
            print_json(&pending.request);
            session.cancel_submit();
        }
        Commands::Solve { file, timeout, json } => {
            let mut session = load_session(&file, config);
            let transport = match timeout {
                Some(secs) => HttpTransport::with_timeout(Duration::from_secs(secs)),
                None => HttpTransport::new(),
            };
            if let Err(e) = session.submit(&transport) {
                exit_on_submit_error(e);
            }
            show_result(&session, json);
        }
        Commands::Interpret {
            file,
            response,
            json,
        } => {
            let mut session = load_session(&file, config);
            if let Err(e) = session.begin_submit() {
                exit_on_submit_error(e);
            }
            let reply = std::fs::read_to_string(&response)
                .map_err(|e| TransportError::Network(e.to_string()))
                .and_then(|text| {
                    serde_json::from_str::<WireResponse>(&text)
                        .map_err(|e| TransportError::Decode(e.to_string()))
                });
            if let Err(e) = session.finish_submit(reply) {
                exit_on_submit_error(e);
            }
            show_result(&session, json);
        }
    }
}
