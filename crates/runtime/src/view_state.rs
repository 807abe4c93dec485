//! UI state of the point viewer and its transition rules.
//!
//! The highlight set is derived from `(catalog, query_text)` and is
//! recomputed by the transitions that change either input; backend and theme
//! changes are plain field replacements.

use formats::Catalog;
use layers::{HighlightSet, Theme, highlight};
use render::Backend;
use serde::Serialize;

/// User-selected view options; defaults are the startup state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewSelection {
    pub backend: Backend,
    pub theme: Theme,
    pub query_text: String,
}

#[derive(Debug, Clone)]
pub enum Action {
    CatalogLoaded(Catalog),
    SetQueryText(String),
    SelectBackend(Backend),
    SelectTheme(Theme),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::CatalogLoaded(_) => "catalog",
            Action::SetQueryText(_) => "query",
            Action::SelectBackend(_) => "backend",
            Action::SelectTheme(_) => "theme",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::CatalogLoaded(c) => write!(f, "{} points", c.len()),
            Action::SetQueryText(q) => write!(f, "{q:?}"),
            Action::SelectBackend(b) => write!(f, "{}", b.as_str()),
            Action::SelectTheme(t) => write!(f, "{}", t.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    catalog: Catalog,
    selection: ViewSelection,
    highlight: HighlightSet,
    loading: bool,
    revision: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Startup state: empty catalog with the first load pending.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::empty(),
            selection: ViewSelection::default(),
            highlight: HighlightSet::NoFilter,
            loading: true,
            revision: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    pub fn backend(&self) -> Backend {
        self.selection.backend
    }

    pub fn theme(&self) -> Theme {
        self.selection.theme
    }

    pub fn query_text(&self) -> &str {
        &self.selection.query_text
    }

    pub fn highlight(&self) -> &HighlightSet {
        &self.highlight
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Incremented by every applied transition.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pure transition: `(state, action) -> state`.
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::CatalogLoaded(catalog) => self.set_catalog(catalog),
            Action::SetQueryText(text) => self.set_query_text(text),
            Action::SelectBackend(backend) => self.set_backend(backend),
            Action::SelectTheme(theme) => self.set_theme(theme),
        }
        self
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        let highlight = highlight(&self.selection.query_text, &catalog);
        self.catalog = catalog;
        self.highlight = highlight;
        self.loading = false;
        self.revision += 1;
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let highlight = highlight(&text, &self.catalog);
        self.selection.query_text = text;
        self.highlight = highlight;
        self.revision += 1;
    }

    pub fn set_backend(&mut self, backend: Backend) {
        self.selection.backend = backend;
        self.revision += 1;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.selection.theme = theme;
        self.revision += 1;
    }

    pub fn status(&self) -> StatusLine {
        StatusLine {
            loading: self.loading,
            points_loaded: self.catalog.len(),
            found: self.highlight.match_count(),
        }
    }
}

/// Summary shown next to the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub loading: bool,
    pub points_loaded: usize,
    /// Matched names while a filter is active.
    pub found: Option<usize>,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.loading {
            write!(f, "Loading data...")?;
        } else {
            write!(f, "{} points loaded", self.points_loaded)?;
        }
        if let Some(found) = self.found {
            write!(f, "\n{found} found")?;
        }
        Ok(())
    }
}
