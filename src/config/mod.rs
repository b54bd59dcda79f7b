//! Run configuration.
//!
//! A [`Config`] is resolved exactly once at process start from CLI
//! arguments plus a single capture of the CI environment, then passed by
//! value into the components that need it. Nothing else in the crate
//! reads environment variables.

use std::path::PathBuf;

use crate::app::Result;
use crate::cli::Cli;
use crate::readability::FetchConfig;

/// Snapshot of the CI-provided inputs and identifiers.
#[derive(Debug, Clone, Default)]
pub struct CiEnv {
    /// `owner/name` of the hosting repository.
    pub repository: Option<String>,
    /// Checkout root; relative default paths hang off it.
    pub workspace: Option<PathBuf>,
    /// Push token, threaded through for the publishing step.
    pub token: Option<String>,
    /// Custom domain input; set means the site is served from `/`.
    pub custom_domain: Option<String>,
}

impl CiEnv {
    /// Capture the environment. The only place the crate touches it.
    pub fn capture() -> Self {
        Self {
            repository: non_empty(std::env::var("GITHUB_REPOSITORY").ok()),
            workspace: std::env::var("GITHUB_WORKSPACE").ok().map(PathBuf::from),
            token: non_empty(std::env::var("INPUT_TOKEN").ok()),
            custom_domain: non_empty(std::env::var("INPUT_CUSTOM_DOMAIN").ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Category tree: one subdirectory per category, one JSON file per site.
    pub content_dir: PathBuf,
    /// General data output: stores, per-category files, `all.json`.
    pub out_dir: PathBuf,
    /// Data bundled into the published site's template layer.
    pub embed_dir: PathBuf,
    /// Durable readability cache, kept across runs.
    pub cache_dir: PathBuf,
    pub custom_domain: Option<String>,
    pub token: Option<String>,
    pub repository: Option<String>,
    pub fetch: FetchConfig,
}

impl Config {
    /// Resolve configuration from parsed CLI arguments and a captured
    /// environment. CLI options win over environment inputs.
    pub fn resolve(cli: &Cli, env: CiEnv) -> Result<Self> {
        let workspace = env.workspace.unwrap_or_else(|| PathBuf::from("."));

        let fetch = match &cli.fetch_config {
            Some(path) => FetchConfig::load(path)?,
            None => FetchConfig::default(),
        };

        Ok(Self {
            content_dir: cli
                .content_dir
                .clone()
                .unwrap_or_else(|| workspace.join("sites")),
            out_dir: cli
                .out_dir
                .clone()
                .unwrap_or_else(|| workspace.join("public").join("data")),
            embed_dir: cli
                .embed_dir
                .clone()
                .unwrap_or_else(|| workspace.join("templates").join("data")),
            cache_dir: cli
                .cache_dir
                .clone()
                .unwrap_or_else(|| workspace.join("cache")),
            custom_domain: non_empty(cli.custom_domain.clone()).or(env.custom_domain),
            token: non_empty(cli.token.clone()).or(env.token),
            repository: env.repository,
            fetch,
        })
    }

    /// URL base-path fragment for the published site.
    ///
    /// GitHub-Pages-style hosting serves a repository under
    /// `/<repo-name>`; a custom domain serves from the root, so the
    /// fragment is empty.
    pub fn repository_fragment(&self) -> String {
        if self.custom_domain.is_some() {
            return String::new();
        }
        match &self.repository {
            Some(repo) => {
                let name = repo.rsplit_once('/').map(|(_, n)| n).unwrap_or(repo);
                format!("/{}", name)
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["millrace"];
        full.extend_from_slice(args);
        full.push("build");
        Cli::parse_from(full)
    }

    #[test]
    fn test_defaults_hang_off_workspace() {
        let env = CiEnv {
            workspace: Some(PathBuf::from("/ws")),
            ..Default::default()
        };
        let config = Config::resolve(&cli(&[]), env).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("/ws/sites"));
        assert_eq!(config.out_dir, PathBuf::from("/ws/public/data"));
        assert_eq!(config.cache_dir, PathBuf::from("/ws/cache"));
    }

    #[test]
    fn test_cli_paths_win_over_workspace() {
        let env = CiEnv {
            workspace: Some(PathBuf::from("/ws")),
            ..Default::default()
        };
        let config = Config::resolve(&cli(&["--content-dir", "/elsewhere"]), env).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn test_fragment_from_repository() {
        let env = CiEnv {
            repository: Some("octocat/planet".into()),
            ..Default::default()
        };
        let config = Config::resolve(&cli(&[]), env).unwrap();
        assert_eq!(config.repository_fragment(), "/planet");
    }

    #[test]
    fn test_fragment_empty_with_custom_domain() {
        let env = CiEnv {
            repository: Some("octocat/planet".into()),
            custom_domain: Some("feeds.example.com".into()),
            ..Default::default()
        };
        let config = Config::resolve(&cli(&[]), env).unwrap();
        assert_eq!(config.repository_fragment(), "");
    }

    #[test]
    fn test_fragment_empty_without_repository() {
        let config = Config::resolve(&cli(&[]), CiEnv::default()).unwrap();
        assert_eq!(config.repository_fragment(), "");
    }

    #[test]
    fn test_blank_custom_domain_input_ignored() {
        let config = Config::resolve(&cli(&["--custom-domain", "  "]), CiEnv::default()).unwrap();
        assert_eq!(config.custom_domain, None);
    }
}
