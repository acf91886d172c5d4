use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use playlist_piper::{config, fatal, server};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    /// Listen address, overriding SERVER_ADDRESS (e.g. 127.0.0.1:3000)
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        fatal!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    // Fail fast on incomplete configuration; the handlers assume every
    // credential accessor succeeds.
    let missing = config::missing_vars();
    let missing: Vec<&str> = missing
        .into_iter()
        .filter(|name| !(*name == "SERVER_ADDRESS" && cli.address.is_some()))
        .collect();
    if !missing.is_empty() {
        fatal!("Missing environment variables: {}", missing.join(", "));
    }

    let address = cli.address.unwrap_or_else(config::server_addr);
    server::start_api_server(&address).await;
}
