use std::path::PathBuf;

use clap::Parser;

/// Prefix the gallery sources are published under
pub const DEFAULT_ASSET_BASE: &str = "/jasper-portfolio";

#[derive(Parser, Debug)]
#[command(name = "jasper-portfolio", version, about = "Jasper Smith's art portfolio")]
pub struct Cli {
    /// Path to open at, as if typed into the address bar
    #[arg(long, env = "PORTFOLIO_PATH", default_value = "/")]
    pub path: String,

    /// Directory the asset paths are resolved against
    #[arg(long, env = "PORTFOLIO_ASSETS", default_value = ".")]
    pub assets: PathBuf,

    /// Public prefix stripped from asset paths before resolving
    #[arg(long, default_value = DEFAULT_ASSET_BASE)]
    pub base: String,

    /// Gallery catalog JSON to use instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub start_path: String,
    pub asset_root: PathBuf,
    pub asset_base: String,
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: "/".into(),
            asset_root: PathBuf::from("."),
            asset_base: DEFAULT_ASSET_BASE.into(),
            catalog: None,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            start_path: cli.path,
            asset_root: cli.assets,
            asset_base: cli.base,
            catalog: cli.catalog,
        }
    }
}
