use std::path::{Path, PathBuf};

use clap::Parser;

/// Runtime configuration for the server.
///
/// The listen address may come from `--listen` or the `LISTEN` environment
/// variable. `--directory` names the base directory served under `/files/`.
#[derive(Debug, Clone, Parser)]
#[command(name = "courier")]
#[command(about = "Minimal HTTP/1.1 server over raw TCP streams")]
pub struct Config {
    /// Address to bind the listener to
    #[arg(long = "listen", default_value = "127.0.0.1:4221", env = "LISTEN")]
    pub listen_addr: String,

    /// Base directory for the `/files/` routes
    #[arg(long)]
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Parses the process arguments, exiting with usage on error.
    pub fn load() -> Self {
        Self::parse()
    }

    /// Parses an explicit argument list (the first item is the binary name).
    pub fn from_args<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    pub fn files_root(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}
