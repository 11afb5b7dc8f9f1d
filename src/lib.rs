// camlens - Camera + map scene analysis relay for vision-language APIs

pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod server;
pub mod upstream;
pub mod utils;
pub mod vision;
