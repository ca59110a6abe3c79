mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{make_controller, EXIT_FAILURE, EXIT_NAME_ERROR, EXIT_NOT_FOUND, EXIT_REMOTE_ERROR};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "stackctl",
    version,
    about = "Manage deployment stacks in the remote orchestration service"
)]
struct Cli {
    /// Orchestration service URL (overrides ~/.config/stackctl/remote.json).
    #[arg(long, global = true)]
    remote: Option<String>,

    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every live stack's canonical name.
    List,
    /// Create a stack, skipping if it already exists.
    Create {
        /// Canonical stack name, `product-envname`.
        stack_name: String,
        /// Path to the template file (JSON, or TOML by extension).
        template: PathBuf,
    },
    /// Update an existing stack; fails if it does not exist.
    Update {
        /// Canonical stack name, `product-envname`.
        stack_name: String,
        /// Path to the template file (JSON, or TOML by extension).
        template: PathBuf,
    },
    /// Tear down a stack, skipping if it is already absent.
    Destroy {
        /// Canonical stack name, `product-envname`.
        stack_name: String,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("STACKCTL_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    let remote = cli.remote.as_deref();
    let json_output = cli.json;

    let result = match cli.command {
        Commands::List => {
            make_controller(remote).and_then(|c| commands::list::run(&c, json_output))
        }
        Commands::Create {
            stack_name,
            template,
        } => make_controller(remote)
            .and_then(|c| commands::create::run(&c, &stack_name, &template, json_output)),
        Commands::Update {
            stack_name,
            template,
        } => make_controller(remote)
            .and_then(|c| commands::update::run(&c, &stack_name, &template, json_output)),
        Commands::Destroy { stack_name } => {
            make_controller(remote).and_then(|c| commands::destroy::run(&c, &stack_name, json_output))
        }
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("invalid stack name:") {
                EXIT_NAME_ERROR
            } else if msg.starts_with("stack does not exist:") {
                EXIT_NOT_FOUND
            } else if msg.starts_with("remote service error:") || msg.starts_with("remote config") {
                EXIT_REMOTE_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
