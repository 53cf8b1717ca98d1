// CLI module for gemini-relay
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// gemini-relay - forward prompts and images to Gemini generateContent
#[derive(Parser, Debug)]
#[command(name = "gemini-relay", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.gemini-relay/config.toml)
    #[arg(long, env = "GEMINI_RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding server.port
    #[arg(long)]
    pub port: Option<u16>,
}

impl Args {
    /// Load `.env` from the working directory, then parse the process arguments.
    ///
    /// `.env` is read first so its values are visible to clap's `env` lookups
    /// (`GEMINI_RELAY_CONFIG`) as well as to the config environment source.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    /// Like [`Args::load`], with an explicit env file and argument list.
    pub fn load_from<I, T>(env_file: &Path, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        dotenvy::from_path(env_file).ok();
        Self::parse_from(args)
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
