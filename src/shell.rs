//! Catalog shell state
//!
//! [`CatalogShell`] owns everything the viewer keeps between interactions:
//! the last fetch result, the open template, the active tab, the layout and
//! the dark-mode flag. Generation functions receive what they need from here
//! by reference and stay stateless.

use std::sync::Arc;
use tracing::{error, info};

use crate::catalog::{CatalogLoader, TemplateCatalog, TemplateRecord};
use crate::error::{Error, Result};
use crate::generation::{DisplayContext, UsageCodeGenerator};
use crate::preferences::PreferenceStore;

/// Result of the most recent catalog fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(TemplateCatalog),
    /// Message to show next to the retry action
    Failed(String),
}

/// Which view of the open template is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Usage,
    Preview,
}

pub struct CatalogShell {
    loader: Arc<dyn CatalogLoader>,
    generator: UsageCodeGenerator,
    preferences: PreferenceStore,
    state: LoadState,
    selected: Option<String>,
    tab: Tab,
    display: DisplayContext,
    dark_mode: bool,
}

impl CatalogShell {
    /// Creates the shell in the `Loading` state with the saved theme applied
    pub fn new(
        loader: Arc<dyn CatalogLoader>,
        generator: UsageCodeGenerator,
        preferences: PreferenceStore,
    ) -> Self {
        let dark_mode = preferences.load_dark_mode();
        Self {
            loader,
            generator,
            preferences,
            state: LoadState::Loading,
            selected: None,
            tab: Tab::default(),
            display: DisplayContext::default(),
            dark_mode,
        }
    }

    /// Fetches the catalog. Calling it again after a failure is the retry.
    pub async fn refresh(&mut self) -> Result<&TemplateCatalog> {
        self.state = LoadState::Loading;

        match self.loader.fetch().await {
            Ok(catalog) => {
                info!(count = catalog.len(), "Catalog ready");
                let stale = self
                    .selected
                    .as_deref()
                    .is_some_and(|id| catalog.get(id).is_none());
                if stale {
                    self.selected = None;
                }
                self.state = LoadState::Ready(catalog);
                self.catalog()
            }
            Err(e) => {
                error!(error = %e, "Catalog fetch failed");
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The loaded catalog, or the reason there is none
    pub fn catalog(&self) -> Result<&TemplateCatalog> {
        match &self.state {
            LoadState::Ready(catalog) => Ok(catalog),
            LoadState::Loading => Err(Error::NotLoaded),
            LoadState::Failed(message) => Err(Error::fetch(message.clone())),
        }
    }

    /// Opens the template with `template_id`
    pub fn select(&mut self, template_id: &str) -> Result<&TemplateRecord> {
        self.catalog()?.require(template_id)?;
        self.selected = Some(template_id.to_string());
        self.selected()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Result<&TemplateRecord> {
        let id = self.selected.as_deref().ok_or(Error::NoSelection)?;
        self.catalog()?.require(id)
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn display_context(&self) -> DisplayContext {
        self.display
    }

    pub fn set_display_context(&mut self, display: DisplayContext) {
        self.display = display;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Sets the theme and persists it immediately
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<()> {
        self.preferences.save_dark_mode(dark_mode)?;
        self.dark_mode = dark_mode;
        Ok(())
    }

    /// Flips the theme and persists it. Returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        self.set_dark_mode(!self.dark_mode)?;
        Ok(self.dark_mode)
    }

    /// Variable names of the open template, in extraction order
    pub fn selected_variables(&self) -> Result<Vec<String>> {
        Ok(crate::generation::extract_variables(&self.selected()?.html))
    }

    /// Usage code for the open template in the current layout
    pub fn usage_code(&self) -> Result<String> {
        self.generator.generate(self.selected()?, self.display)
    }

    /// Raw HTML body of the open template
    pub fn preview_html(&self) -> Result<&str> {
        Ok(self.selected()?.html.as_str())
    }
}
