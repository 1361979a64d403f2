//! Configuration file support for clea.
//!
//! Loads optional `clea.toml` from the working directory. Command-line flags
//! take precedence over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clea_site::meta::PageMeta;
use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "clea.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// External catalog replacing the built-in content
    pub catalog: Option<PathBuf>,
    pub output: OutputConfig,
    /// Document metadata; unset fields keep their production defaults
    pub meta: PageMeta,
}

/// Where the build writes to and what it copies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving index.html
    pub dir: PathBuf,
    /// Static assets (images, favicon) copied verbatim into `dir`
    pub public_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl SiteConfig {
    /// Load the config named on the command line, or `./clea.toml` if present.
    ///
    /// An explicitly named file must exist; the implicit one is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        // Relative paths in the file are relative to the file, not the cwd.
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.rebase(base);
        }
        Ok(config)
    }

    fn rebase(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(catalog) = self.catalog.as_mut() {
            join(catalog);
        }
        join(&mut self.output.dir);
        join(&mut self.output.public_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.output.public_dir, PathBuf::from("public"));
        assert_eq!(config.meta, PageMeta::default());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::resolve(Some(&temp.path().join("nope.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("clea.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
catalog = "content.toml"

[output]
dir = "site-out"

[meta]
url = "https://clea.app"
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&config_path).expect("load");
        assert_eq!(config.catalog, Some(temp.path().join("content.toml")));
        assert_eq!(config.output.dir, temp.path().join("site-out"));
        assert_eq!(config.output.public_dir, temp.path().join("public"));
        assert_eq!(config.meta.url, "https://clea.app");
        assert_eq!(config.meta.lang, "fr");
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("clea.toml");
        std::fs::write(&config_path, "[output\ndir = 3").expect("write config");

        let err = SiteConfig::load_from_path(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let temp = TempDir::new().expect("temp dir");
        let abs_out = temp.path().join("abs");
        let config_path = temp.path().join("nested").join("clea.toml");
        std::fs::create_dir_all(config_path.parent().expect("parent")).expect("mkdir");
        std::fs::write(
            &config_path,
            format!("[output]\ndir = {:?}\n", abs_out.display().to_string()),
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&config_path).expect("load");
        assert_eq!(config.output.dir, abs_out);
    }
}
