//! Config-driven entry point bundling search options and marker class.

use std::path::Path;

use textlayer_common::{
    sort_by_original_offset, Fragment, MappedMatch, MatchOptions, Result, TextLayerError,
};
use textlayer_config::{validation, TextLayerConfig};
use textlayer_highlight::{highlight_matches, reset_containers, Container};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::find_matches;

/// Searches and marks pages using one loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: TextLayerConfig,
}

impl Highlighter {
    pub fn new(config: TextLayerConfig) -> Self {
        Highlighter { config }
    }

    /// Load and validate a TOML config file.
    pub fn from_config_path(path: &Path) -> Result<Self> {
        Self::validated(textlayer_config::load_from_path(path)?)
    }

    /// Like [`Highlighter::from_config_path`], but writes the default config
    /// file to `path` when none exists.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        Self::validated(textlayer_config::load_or_create(path)?)
    }

    /// Use the config at the platform default path, creating it if missing.
    pub fn from_default_config() -> Result<Self> {
        Self::validated(textlayer_config::load_config()?)
    }

    fn validated(config: TextLayerConfig) -> Result<Self> {
        validation::validate(&config)?;
        info!(
            marker_class = %config.highlight.marker_class,
            level = ?config.logging.level,
            "highlighter configured"
        );
        Ok(Highlighter::new(config))
    }

    pub fn config(&self) -> &TextLayerConfig {
        &self.config
    }

    pub fn options(&self) -> MatchOptions {
        self.config.search.match_options()
    }

    /// Find all queries, sorted left to right across the page.
    pub fn find<S: AsRef<str>>(&self, queries: &[S], fragments: &[Fragment]) -> Vec<MappedMatch> {
        let mut matches = find_matches(queries, fragments, &self.options());
        sort_by_original_offset(&mut matches);
        matches
    }

    /// Find all queries and mark them. Returns the applied matches in
    /// rendering order.
    pub fn highlight<S: AsRef<str>>(
        &self,
        queries: &[S],
        fragments: &[Fragment],
        containers: &mut [Option<Container>],
    ) -> Vec<MappedMatch> {
        let matches = self.find(queries, fragments);
        highlight_matches(&matches, fragments, containers);
        matches
    }

    pub fn reset(&self, fragments: &[Fragment], containers: &mut [Option<Container>]) {
        reset_containers(fragments, containers);
    }

    /// Log filter for the configured level, on top of any `RUST_LOG` directives.
    pub fn log_filter(&self) -> EnvFilter {
        let filter = EnvFilter::from_default_env();
        let directive = self.config.logging.level.as_directive();
        match directive.parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(e) => {
                warn!(directive, "ignoring log directive: {e}");
                filter
            }
        }
    }

    /// Install a global fmt subscriber filtered by [`Highlighter::log_filter`].
    /// Fails if the host already installed one.
    pub fn init_logging(&self) -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(self.log_filter())
            .try_init()
            .map_err(|e| TextLayerError::Other(format!("logging already initialized: {e}")))
    }

    /// Render one container as HTML using the configured marker class.
    pub fn render_html(&self, container: &Container) -> String {
        container.to_html(&self.config.highlight.marker_class)
    }
}
