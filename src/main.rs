#![doc = include_str!("../README.md")]

use apiscan::{API_URLS, ApiScanner, DocsWriter, ReqwestHttpClient};
use clap::Parser;
use core::error::Error;
use std::{path::PathBuf, process::exit};
use url::Url;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// API endpoint URLs.
    urls: Vec<Url>,
    /// Sets an output file path.
    #[arg(long, default_value = "docs.md")]
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let Arguments { urls, output } = Arguments::parse();

    let urls = if urls.is_empty() {
        API_URLS
            .iter()
            .map(|url| Url::parse(url))
            .collect::<Result<_, _>>()?
    } else {
        urls
    };

    let scanner = ApiScanner::new(ReqwestHttpClient::new()?);
    let responses = scanner.scan(&urls).await?;

    DocsWriter::new(output).write(&responses).await?;

    Ok(())
}
