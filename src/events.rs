//! Shell events
//!
//! Records what happened in the dashboard shell (navigation, menu toggles, command
//! dispatch, data loading) for the footer status line and headless output.

use crate::logging::{LogLevel, get_rust_log_level, should_log};
use chrono::Local;
use std::fmt::Display;

/// Part of the shell an event came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Origin {
    Navigation,
    AccountMenu,
    Command,
    Data,
    Host,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    StateChange,
    Handled,
    Unavailable,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(origin: Origin, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            origin,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn navigation(msg: String) -> Self {
        Self::new(Origin::Navigation, msg, EventType::StateChange, LogLevel::Debug)
    }

    pub fn account_menu(msg: String) -> Self {
        Self::new(Origin::AccountMenu, msg, EventType::StateChange, LogLevel::Debug)
    }

    pub fn command(msg: String, event_type: EventType) -> Self {
        Self::new(Origin::Command, msg, event_type, LogLevel::Info)
    }

    pub fn data_unavailable(msg: String) -> Self {
        Self::new(Origin::Data, msg, EventType::Error, LogLevel::Warn)
    }

    pub fn host(msg: String) -> Self {
        Self::new(Origin::Host, msg, EventType::StateChange, LogLevel::Debug)
    }

    /// Whether the event passes the given threshold.
    pub fn should_display_at(&self, threshold: LogLevel) -> bool {
        should_log(self.log_level, threshold)
    }

    /// Whether the event passes the `RUST_LOG` threshold.
    pub fn should_display(&self) -> bool {
        self.should_display_at(get_rust_log_level())
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.origin, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_events_are_debug_only() {
        let event = Event::navigation("Selected tab queries".to_string());
        assert!(!event.should_display_at(LogLevel::Info));
        assert!(event.should_display_at(LogLevel::Debug));
    }

    #[test]
    fn command_events_show_at_default_threshold() {
        let event = Event::command("'Help' is not available yet".to_string(), EventType::Unavailable);
        assert!(event.should_display_at(LogLevel::Info));
        assert!(!event.should_display_at(LogLevel::Warn));
    }

    #[test]
    fn display_includes_origin_and_message() {
        let event = Event::data_unavailable("service offline".to_string());
        let rendered = event.to_string();
        assert!(rendered.starts_with("Data ["));
        assert!(rendered.ends_with("service offline"));
    }
}
