//! Preview binary: hosts the map component behind a local HTTP server.
//!
//! ```text
//! turkiye-map-preview [--addr HOST:PORT] [--version]
//! ```

use std::net::SocketAddr;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use turkiye_map::preview::start_preview_server;
use turkiye_map::{CityInfo, MapOptions, TurkeyMap};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_ADDR: &str = "127.0.0.1:3030";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Start the preview server on the given address.
    Serve(SocketAddr),
    /// Print version information and exit.
    Version,
}

/// Parse command-line arguments.
fn parse_args<I>(args: I) -> Result<Command>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1); // Skip the program name
    let mut addr: SocketAddr = DEFAULT_ADDR.parse()?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(Command::Version),
            "--addr" => {
                let value = args
                    .next()
                    .ok_or_else(|| eyre!("--addr requires a HOST:PORT value"))?;
                addr = value
                    .parse()
                    .map_err(|_| eyre!("invalid address: {value}"))?;
            }
            other => return Err(eyre!("unknown argument: {other}")),
        }
    }
    Ok(Command::Serve(addr))
}

/// Demo configuration for the preview: every other plate number gets a
/// cooler tint, clicks and hovers are logged.
fn demo_options() -> MapOptions {
    MapOptions::default()
        .city_color(|city: &CityInfo| {
            (city.plate_number % 2 == 0).then(|| "#3b5368".to_string())
        })
        .on_hover(|city: Option<&CityInfo>| {
            if let Some(city) = city {
                tracing::debug!(id = %city.id, name = %city.name, "hovering");
            }
        })
        .on_click(|city: &CityInfo| {
            tracing::info!(
                id = %city.id,
                plate = city.plate_number,
                name = %city.name,
                "province clicked"
            );
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = match parse_args(std::env::args())? {
        Command::Version => {
            println!("turkiye-map-preview {VERSION}");
            return Ok(());
        }
        Command::Serve(addr) => addr,
    };

    let map = TurkeyMap::new(demo_options());
    let (handle, _state) = start_preview_server(addr, map).await?;
    handle.await?;
    Ok(())
}
