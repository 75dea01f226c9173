//! Service configuration.
//!
//! Values are resolved from defaults, then `TRIVIA_*` environment variables,
//! then command-line flags; the last source to set a value wins.

use crate::query::pager::DEFAULT_PAGE_SIZE;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// JSON seed file; without one the store starts empty with the default categories.
    pub seed_path: Option<PathBuf>,
    pub page_size: usize,
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            seed_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: tracing::Level::INFO,
        }
    }
}

impl Config {
    /// Resolves the configuration from the process environment and arguments.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::resolve(|name| std::env::var(name).ok(), &args)
    }

    /// Resolves the configuration from an environment lookup and an argument list
    /// (without the program name).
    pub fn resolve<F>(env: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = env("TRIVIA_BIND") {
            config.set("TRIVIA_BIND", "bind", &v)?;
        }
        if let Some(v) = env("TRIVIA_SEED") {
            config.set("TRIVIA_SEED", "seed", &v)?;
        }
        if let Some(v) = env("TRIVIA_PAGE_SIZE") {
            config.set("TRIVIA_PAGE_SIZE", "page-size", &v)?;
        }
        if let Some(v) = env("TRIVIA_LOG") {
            config.set("TRIVIA_LOG", "log", &v)?;
        }

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--bind" | "--seed" | "--page-size" | "--log" => {
                    let value = args
                        .get(i + 1)
                        .with_context(|| format!("{} requires a value", flag))?;
                    config.set(flag, flag.trim_start_matches("--"), value)?;
                    i += 2;
                }
                other => {
                    anyhow::bail!("Unknown argument: {}", other);
                }
            }
        }

        Ok(config)
    }

    fn set(&mut self, source: &str, key: &str, value: &str) -> Result<()> {
        match key {
            "bind" => {
                self.bind_addr = value
                    .parse()
                    .with_context(|| format!("{}: invalid address {:?}", source, value))?;
            }
            "seed" => {
                self.seed_path = Some(PathBuf::from(value));
            }
            "page-size" => {
                let size: usize = value
                    .parse()
                    .with_context(|| format!("{}: invalid page size {:?}", source, value))?;
                if size == 0 {
                    anyhow::bail!("{}: page size must be at least 1", source);
                }
                self.page_size = size;
            }
            "log" => {
                self.log_level = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("{}: invalid log level {:?}", source, value))?;
            }
            _ => unreachable!("unknown config key {}", key),
        }
        Ok(())
    }

    pub fn usage(program: &str) -> String {
        format!(
            "Usage: {} [--bind <addr:port>] [--seed <file.json>] [--page-size <n>] [--log <level>]",
            program
        )
    }
}
