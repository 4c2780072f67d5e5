use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Canonical SQL text
    Text,
    /// The syntax tree as JSON
    Json,
}

/// Parses a SELECT statement and prints it back in canonical form.
#[derive(Parser)]
#[command(name = "sqlselect", version)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// The statement, possibly split across several arguments.
    query: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.query.is_empty() {
        bail!("Missing <query>");
    }
    let sql = join_args(&cli.query);
    tracing::debug!(%sql, "parsing");

    let stmt = sqlselect::parse(&sql).context("parse query")?;
    match cli.format {
        Format::Text => println!("{stmt}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&stmt)?),
    }

    Ok(())
}

// Every argument is followed by a single space, trailing one included.
fn join_args(args: &[String]) -> String {
    args.iter().map(|arg| format!("{arg} ")).collect()
}
