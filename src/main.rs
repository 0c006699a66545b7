//! link-stacklog main entry point
//!
//! This is the command-line interface for the link-stacklog backlog.

use anyhow::Context;
use clap::{Parser, Subcommand};
use link_stacklog::config::{load_config_or_default, Config, CONFIG_FILE};
use link_stacklog::fetcher::build_http_client;
use link_stacklog::output::{format_link, format_link_detail, format_popped, print_links};
use link_stacklog::storage::{
    backup_database, database_path, open_store, user_dir, LinkStore, SqliteStore,
    DEFAULT_LIST_COUNT, DEFAULT_PEEK_COUNT, NO_TITLE,
};
use link_stacklog::{push_url, PushOutcome};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Link backlog management utility using a stack style interface
#[derive(Parser, Debug)]
#[command(name = "link-stacklog")]
#[command(version, long_about = None)]
struct Cli {
    /// Log (stack) to operate on; defaults to the configured default log
    #[arg(short, long, global = true, value_name = "NAME")]
    log: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize the stacklog database
    Init,

    /// Push a link to the stack
    Push {
        /// URL to fetch and push
        url: String,
    },

    /// Peak at the top of the stack
    #[command(alias = "peek")]
    Peak {
        /// Number of links to peak
        #[arg(short, long, default_value_t = DEFAULT_PEEK_COUNT)]
        number: usize,

        /// Show description and timestamp for each link
        #[arg(short, long)]
        detailed: bool,
    },

    /// Pop the top of the stack
    Pop,

    /// Show the most recent links
    Head {
        /// Number of links to show
        #[arg(short, long, default_value_t = DEFAULT_LIST_COUNT)]
        number: usize,

        /// Show description and timestamp for each link
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the oldest links
    Tail {
        /// Number of links to show
        #[arg(short, long, default_value_t = DEFAULT_LIST_COUNT)]
        number: usize,

        /// Show description and timestamp for each link
        #[arg(short, long)]
        detailed: bool,
    },

    /// Search titles and descriptions (case-sensitive, % and _ are wildcards)
    Search {
        /// Text to look for
        query: String,

        /// Show description and timestamp for each link
        #[arg(short, long)]
        detailed: bool,
    },

    /// Count the links in the stack
    Count,

    /// Show a link by id
    Get {
        /// Id of the link
        id: i64,
    },

    /// Show a random link from the stack
    Random,

    /// Remove every link from the stack
    Clear,

    /// Copy the database to a timestamped backup file
    Backup,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let dir = user_dir().context("Failed to resolve the data directory")?;
    let config = load_config_or_default(&dir.join(CONFIG_FILE))
        .context("Failed to load configuration")?;
    let log_name = cli
        .log
        .clone()
        .unwrap_or_else(|| config.stack.default_log.clone());

    run(cli.command, &dir, &config, &log_name).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_stacklog=warn,error"),
            1 => EnvFilter::new("link_stacklog=info,warn"),
            2 => EnvFilter::new("link_stacklog=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

async fn run(command: Command, dir: &Path, config: &Config, log_name: &str) -> anyhow::Result<()> {
    let db_path = database_path(dir);

    match command {
        Command::Init => {
            SqliteStore::init(&db_path)?.close()?;
            println!("Initialized database at {}", db_path.display());
        }
        Command::Push { url } => {
            let mut store = open_store(&db_path)?;
            let client = build_http_client(&config.fetcher)?;
            match push_url(&mut store, &client, log_name, &url).await? {
                PushOutcome::Pushed { link, .. } => {
                    let title = link.title.as_deref().unwrap_or(NO_TITLE);
                    println!("Pushed {}: {}", url, title);
                }
                PushOutcome::Unavailable { url } => {
                    println!("Could not fetch metadata for {}", url);
                }
            }
        }
        Command::Peak { number, detailed } => {
            let store = open_store(&db_path)?;
            print_links(&store.peek(log_name, number)?, detailed);
        }
        Command::Pop => {
            let mut store = open_store(&db_path)?;
            match store.pop(log_name)? {
                Some(popped) => println!("{}", format_popped(&popped)),
                None => println!("Stack is empty"),
            }
        }
        Command::Head { number, detailed } => {
            let store = open_store(&db_path)?;
            print_links(&store.head(log_name, number)?, detailed);
        }
        Command::Tail { number, detailed } => {
            let store = open_store(&db_path)?;
            print_links(&store.tail(log_name, number)?, detailed);
        }
        Command::Search { query, detailed } => {
            let store = open_store(&db_path)?;
            let links = store.search(log_name, &query)?;
            if links.is_empty() {
                println!("No links match '{}'", query);
            }
            print_links(&links, detailed);
        }
        Command::Count => {
            let store = open_store(&db_path)?;
            println!("{}", store.count(log_name)?);
        }
        Command::Get { id } => {
            let store = open_store(&db_path)?;
            match store.get_by_id(log_name, id)? {
                Some(link) => println!("{}", format_link_detail(&link)),
                None => println!("No link with id {} in '{}'", id, log_name),
            }
        }
        Command::Random => {
            let store = open_store(&db_path)?;
            match store.random(log_name)? {
                Some(link) => println!("{}", format_link(&link)),
                None => println!("Stack is empty"),
            }
        }
        Command::Clear => {
            let mut store = open_store(&db_path)?;
            let removed = store.clear(log_name)?;
            println!("Removed {} links from '{}'", removed, log_name);
        }
        Command::Backup => {
            let backup = backup_database(dir)?;
            println!("Backed up database to {}", backup.display());
        }
    }

    Ok(())
}
