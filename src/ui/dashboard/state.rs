//! Dashboard state management
//!
//! Contains the two-field view state, the loaded data and the shell status log

use crate::consts::cli_consts::MAX_STATUS_EVENTS;
use crate::dataset::{DataSource, Dataset};
use crate::events::Event;
use crate::ui::app::UIConfig;

use log::{debug, warn};
use std::collections::VecDeque;
use std::str::FromStr;
use thiserror::Error;

/// Top-level navigation keys. Only `Dashboard` has content of its own.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Queries,
    Policies,
    Analytics,
    Users,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Queries,
        Tab::Policies,
        Tab::Analytics,
        Tab::Users,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Queries => "Queries",
            Tab::Policies => "Policies",
            Tab::Analytics => "Analytics",
            Tab::Users => "Users",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// Next tab, wrapping around.
    pub fn next(&self) -> Tab {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn previous(&self) -> Tab {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tab for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Tab> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tab '{0}' (expected one of: dashboard, queries, policies, analytics, users)")]
pub struct ParseTabError(String);

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.to_string() == s.to_lowercase())
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}

/// The whole interactive state of the view.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    active_tab: Tab,
    menu_open: bool,
}

impl UiState {
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Dataset as seen by the panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataState {
    Ready(Box<Dataset>),
    /// The data source failed; panels show a notice instead.
    Unavailable(String),
}

#[derive(Debug)]
pub struct DashboardState {
    /// Active tab and account menu toggle.
    pub ui: UiState,
    /// Loaded display records.
    pub data: DataState,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Whether the assistant placeholder column is shown
    pub show_assistant_panel: bool,
    /// Shell events for the footer status line (last 50)
    pub status_log: VecDeque<Event>,
}

impl DashboardState {
    pub fn new(data: DataState, ui_config: UIConfig) -> Self {
        Self {
            ui: UiState::default(),
            data,
            with_background_color: ui_config.with_background_color,
            show_assistant_panel: ui_config.show_assistant_panel,
            status_log: VecDeque::new(),
        }
    }

    /// Loads the dataset from `source`. A failure becomes [`DataState::Unavailable`].
    pub fn from_source(source: &dyn DataSource, ui_config: UIConfig) -> Self {
        match source.load() {
            Ok(dataset) => Self::new(DataState::Ready(Box::new(dataset)), ui_config),
            Err(e) => {
                warn!("{}", e);
                let mut state = Self::new(DataState::Unavailable(e.to_string()), ui_config);
                state.add_to_status_log(Event::data_unavailable(e.to_string()));
                state
            }
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.data {
            DataState::Ready(dataset) => Some(dataset.as_ref()),
            DataState::Unavailable(_) => None,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.ui.select_tab(tab);
        debug!("selected tab {}", tab);
        self.add_to_status_log(Event::navigation(format!("Selected tab {}", tab)));
    }

    pub fn toggle_menu(&mut self) {
        self.ui.toggle_menu();
        let msg = if self.ui.menu_open() {
            "Account menu opened"
        } else {
            "Account menu closed"
        };
        debug!("{}", msg);
        self.add_to_status_log(Event::account_menu(msg.to_string()));
    }

    /// Add an event to the status log with size limit
    pub fn add_to_status_log(&mut self, event: Event) {
        if self.status_log.len() >= MAX_STATUS_EVENTS {
            self.status_log.pop_front();
        }
        self.status_log.push_back(event);
    }

    /// Most recent event that passes the `RUST_LOG` threshold.
    pub fn latest_status(&self) -> Option<&Event> {
        self.status_log.iter().rev().find(|event| event.should_display())
    }
}
