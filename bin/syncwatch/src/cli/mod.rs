pub mod constants;
pub mod serve;
pub mod verbosity;

use clap::{Parser, Subcommand};

use crate::cli::{
    serve::ServeConfig,
    verbosity::{Verbosity, verbosity_parser},
};

const DEFAULT_VERBOSITY: &str = "3";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short,
        long,
        global = true,
        help = "Verbosity level (1=error, 2=warn, 3=info, 4=debug, 5=trace)",
        default_value = DEFAULT_VERBOSITY,
        value_parser = verbosity_parser
    )]
    pub verbosity: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the /status and /height endpoints
    #[command(name = "serve")]
    Serve(Box<ServeConfig>),
}
