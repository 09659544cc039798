mod cmd;
mod output;
mod root;
mod tools;

use clap::{Parser, Subcommand};
use cmd::agent::AgentSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "designer",
    about = "Deep Designer: manage the DESIGN.json document that design agents build up",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from DESIGN.json or .git/)
    #[arg(long, global = true, env = "DESIGNER_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create DESIGN.json with empty sections if it is missing or empty
    Init,

    /// Check DESIGN.json and report which sections are populated
    ///
    /// Section sizes are bytes of compact JSON, with no space after `,` or
    /// `:`, so they read smaller than sizes taken from spaced JSON output.
    /// A section of 2 bytes or less (`{}`) is reported as empty.
    Validate {
        /// Also check populated sections against their expected shape
        #[arg(long)]
        strict: bool,
    },

    /// Print the whole document or one section as JSON
    Get {
        /// Section: idea, marketing, architecture, design, tasks
        section: Option<String>,
    },

    /// Replace one section with new JSON content
    Update {
        /// Section: idea, marketing, architecture, design, tasks
        section: String,

        /// New content as a JSON literal
        #[arg(long, conflicts_with = "file")]
        value: Option<String>,

        /// Read new content from a JSON file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Convert the idea markdown file to JSON
    Idea {
        /// Idea file (default: IDEA.md, or idea_file in designer.yaml)
        file: Option<PathBuf>,

        /// Store the result as the idea section of DESIGN.json
        #[arg(long)]
        save: bool,
    },

    /// Inspect agent profiles built from prompt templates
    Agent {
        #[command(subcommand)]
        subcommand: AgentSubcommand,
    },

    /// Run as an MCP stdio server exposing the design tools to agents
    Mcp,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Mcp => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    // Logs go to stderr: stdout carries JSON output and the MCP protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Validate { strict } => cmd::validate::run(&root, strict, cli.json),
        Commands::Get { section } => cmd::get::run(&root, section.as_deref()),
        Commands::Update {
            section,
            value,
            file,
        } => cmd::update::run(&root, &section, value.as_deref(), file.as_deref()),
        Commands::Idea { file, save } => cmd::idea::run(&root, file.as_deref(), save),
        Commands::Agent { subcommand } => cmd::agent::run(&root, subcommand, cli.json),
        Commands::Mcp => cmd::mcp::run(&root),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
