//! Command runner
//!
//! Resolves the effective configuration (defaults, then YAML file, then
//! flags), wires up the view, and drives it for one command.

use super::commands::{Cli, Commands};
use super::render;
use crate::api::BlogApi;
use crate::config::ViewConfig;
use crate::error::Result;
use crate::filter::Debouncer;
use crate::session::{FileSlot, MemorySlot, SessionManager, SessionSlot};
use crate::view::BlogView;
use std::time::Duration;
use tracing::debug;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        debug!("Effective config: {config:?}");

        match &self.cli.command {
            Commands::List { query, page, open } => {
                self.run_list(&config, query.as_deref(), *page, *open).await
            }
            Commands::Show { id } => self.run_show(&config, *id).await,
        }
    }

    /// Merge defaults, config file, and flag overrides
    fn resolve_config(&self) -> Result<ViewConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ViewConfig::from_yaml_file(path)?,
            None => ViewConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        if let Some(window) = self.cli.window {
            config.max_visible = window;
        }
        if let Some(session_file) = &self.cli.session_file {
            config.session_file = Some(session_file.clone());
        }
        if let Some(debounce_ms) = self.cli.debounce_ms {
            config.debounce_ms = debounce_ms;
        }

        config.validate()?;
        Ok(config)
    }

    fn build_view(&self, config: &ViewConfig) -> BlogView<Box<dyn SessionSlot>> {
        let slot: Box<dyn SessionSlot> = match &config.session_file {
            Some(path) => Box::new(FileSlot::new(path)),
            None => Box::new(MemorySlot::new()),
        };

        BlogView::new(
            BlogApi::new(config.base_url.clone()),
            SessionManager::new(slot),
        )
        .with_page_size(config.page_size)
        .with_max_visible(config.max_visible)
        .with_debouncer(Debouncer::new(Duration::from_millis(config.debounce_ms)))
    }

    async fn run_list(
        &self,
        config: &ViewConfig,
        query: Option<&str>,
        page: Option<usize>,
        open: Option<u64>,
    ) -> Result<()> {
        let mut view = self.build_view(config);
        view.load().await?;

        // Explicit inputs override whatever the restore produced
        if let Some(query) = query {
            view.search(query).await;
        }
        if let Some(page) = page {
            view.go_to_page(page);
        }

        print!("{}", render::render_list(&view.render()));

        if let Some(id) = open {
            let detail = view.open_post(id).await?;
            println!();
            print!("{}", render::render_detail(&detail));
        }

        Ok(())
    }

    async fn run_show(&self, config: &ViewConfig, id: u64) -> Result<()> {
        let api = BlogApi::new(config.base_url.clone());

        let (post, comments) =
            futures::future::try_join(api.fetch_post(id), api.fetch_comments(id)).await?;

        print!(
            "{}",
            render::render_detail(&crate::view::PostDetail { post, comments })
        );

        Ok(())
    }
}
