// CLI module for camlens

use clap::Parser;

/// camlens - Camera + map scene analysis relay for vision-language APIs
#[derive(Parser, Debug)]
#[command(name = "camlens", version, about, long_about = None)]
pub struct Args {
    /// Override the listening port
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}
