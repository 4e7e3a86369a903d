//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix of environment overrides, e.g. `POSTCRAFT_MODEL__LLM_TEMPERATURE=0.3`
pub const ENV_PREFIX: &str = "POSTCRAFT_";

const PROJECT_FILES: [&str; 2] = ["postcraft.toml", ".postcraft.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `POSTCRAFT_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./postcraft.toml` or `./.postcraft.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/postcraft/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }

        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged figment, before extraction
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        layered(global.as_deref(), project.as_deref(), config_path, ENV_PREFIX)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/postcraft/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("postcraft").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        project_config_in(Path::new("."))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let found = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", found, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./postcraft.toml or ./.postcraft.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

fn project_config_in(dir: &Path) -> Option<PathBuf> {
    PROJECT_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

fn layered(
    global: Option<&Path>,
    project: Option<&Path>,
    explicit: Option<&Path>,
    env_prefix: &str,
) -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

    // Files are merged at the root so their top-level tables map onto sections
    for path in [global, project, explicit].into_iter().flatten() {
        figment = figment.merge(Toml::file(path));
    }

    figment.merge(Env::prefixed(env_prefix).split("__"))
}
