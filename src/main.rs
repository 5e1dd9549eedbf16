use anyhow::Result;
use artwork_theme::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.json {
        return artwork_theme::run_headless(&cli);
    }
    artwork_theme::run(cli).await
}
