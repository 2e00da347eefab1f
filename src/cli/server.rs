use clap::Parser;
use error_stack::{Result, ResultExt};
use std::net::IpAddr;
use std::num::NonZeroUsize;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use roster::config;
use roster::http::server::StartServerError;

/// Expose the user management HTTP API.
#[derive(Debug, Parser)]
pub struct ServerCommand {
    #[clap(long)]
    pub address: Option<IpAddr>,
    #[clap(long)]
    pub port: Option<u16>,
    #[clap(long)]
    pub workers: Option<NonZeroUsize>,
}

pub fn run(args: ServerCommand) -> Result<(), StartServerError> {
    let mut config = config::Server::load().change_context(StartServerError)?;
    args.override_config(&mut config);

    init_tracing(&config);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(config.workers.get())
        .build()
        .change_context(StartServerError)
        .attach_printable("could not build tokio runtime")?
        .block_on(roster::http::server::run(config))
}

impl ServerCommand {
    // cli flags win over the config file and environment variables
    fn override_config(&self, config: &mut config::Server) {
        if let Some(address) = self.address {
            config.ip = address;
        }

        if let Some(port) = self.port {
            config.port = port;
        }

        if let Some(workers) = self.workers {
            config.workers = workers;
        }
    }
}

fn init_tracing(config: &config::Server) {
    let level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(tracing_subscriber::filter::LevelFilter::from_level(level)),
        )
        .init();
}
