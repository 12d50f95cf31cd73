use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::io::{self, Read};
use std::net::SocketAddr;
use std::path::PathBuf;
use txquery::application::engine::QueryEngine;
use txquery::infrastructure::json_file::JsonFileSource;
use txquery::interfaces::http;
use txquery::interfaces::json::transaction_reader::read_request;
use txquery::logging::init_logger;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter and aggregation details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer queries over HTTP (POST /)
    Serve {
        /// JSON file holding the transaction array, re-read on every request
        #[arg(long, env = "TXQUERY_DATA", default_value = "data.json")]
        data: PathBuf,

        /// Address to listen on
        #[arg(long, env = "TXQUERY_ADDR", default_value = "127.0.0.1:5000")]
        addr: SocketAddr,
    },
    /// Run a single query and print the result as JSON
    Query {
        /// JSON file holding the transaction array
        #[arg(long, env = "TXQUERY_DATA", default_value = "data.json")]
        data: PathBuf,

        /// Query payload file. Reads stdin when absent or `-`.
        request: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Serve { data, addr } => {
            tracing::info!(data = %data.display(), "Starting transaction query server");
            let engine = QueryEngine::new(Box::new(JsonFileSource::new(data)));
            http::serve(engine, addr).await.into_diagnostic()?;
        }
        Command::Query { data, request } => {
            let body = match request {
                Some(path) if path.as_os_str() != "-" => std::fs::read(path).into_diagnostic()?,
                _ => {
                    let mut buf = Vec::new();
                    io::stdin().lock().read_to_end(&mut buf).into_diagnostic()?;
                    buf
                }
            };
            let request = read_request(&body).into_diagnostic()?;

            let engine = QueryEngine::new(Box::new(JsonFileSource::new(data)));
            let result = engine.run(&request).await.into_diagnostic()?;

            let output = serde_json::to_string_pretty(&result).into_diagnostic()?;
            println!("{output}");
        }
    }

    Ok(())
}
