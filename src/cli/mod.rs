use clap::Parser;
use error_stack::Result;
use usuarios_api::http::StartServerError;

mod server;

/// Command line options for the usuarios API.
#[derive(Debug, Parser)]
#[command(about = "Utility suite for the usuarios backend", version, author)]
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

#[derive(Debug, Parser)]
pub enum Subcommand {
    Server(self::server::ServerCommand),
}
