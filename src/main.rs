use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use mssql_schema_reader::{read_schema, ReadOptions};

#[derive(Parser)]
#[command(name = "mssql-schema-reader")]
#[command(author, version, about = "Fast Rust reader for SQL Server catalog schemas")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a database's schema and write it as JSON
    Read {
        /// ADO.NET-style connection string (Server=...;User Id=...;...)
        #[arg(short, long)]
        connection_string: String,

        /// Restrict discovery to one schema (defaults to all schemas)
        #[arg(short, long)]
        schema: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Read {
            connection_string,
            schema,
            output,
            pretty,
        } => {
            let options = ReadOptions {
                connection_string,
                schema_name: schema,
            };

            let schema_info = read_schema(&options)?;

            let serialized = if pretty {
                serde_json::to_string_pretty(&schema_info)?
            } else {
                serde_json::to_string(&schema_info)?
            };

            match output {
                Some(path) => fs::write(&path, serialized)?,
                None => println!("{}", serialized),
            }
        }
    }

    Ok(())
}
