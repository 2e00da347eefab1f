use clap::Parser;
use error_stack::Result;

use roster::http::server::StartServerError;

mod server;

/// Command line options for the roster backend.
#[derive(Debug, Parser)]
#[command(about = "Utility suite for the roster user service", version)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

impl Cli {
    pub fn run(self) -> Result<(), StartServerError> {
        match self.subcommand {
            Subcommand::Server(args) => self::server::run(args),
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Server(self::server::ServerCommand),
}
