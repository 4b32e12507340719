use clap::{Parser as ClapParser, Subcommand};
use dql_lang::cli::{self, CheckOptions, CliError};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "dql")]
#[command(about = "DQL - compile filter and sort expressions into condition documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its condition document
    Check {
        /// The DQL query (reads from stdin if not provided)
        query: Option<String>,

        /// Translator config (sort mappings, condition mappings, defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't render
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the token stream of a query
    Tokens {
        /// The DQL query (reads from stdin if not provided)
        query: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            query,
            config,
            pretty,
            syntax_only,
        } => run_check(query, config, pretty, syntax_only),
        Commands::Tokens { query } => run_tokens(query),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(
    query: Option<String>,
    config: Option<PathBuf>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let options = CheckOptions {
        query: read_query(query)?,
        config,
        syntax_only,
    };

    let result = cli::execute_check(&options)?;
    println!("{}", result.to_output(pretty)?);
    Ok(())
}

fn run_tokens(query: Option<String>) -> Result<(), CliError> {
    let query = read_query(query)?;
    for line in cli::execute_tokens(&query)? {
        println!("{}", line);
    }
    Ok(())
}
