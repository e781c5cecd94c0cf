//! Main application state and UI loop
//!
//! Contains the App struct and the input handling that drives the two view toggles

use crate::commands::{Command, CommandHandler};
use crate::config::Config;
use crate::consts::cli_consts::INPUT_POLL_INTERVAL_MS;
use crate::dataset::DataSource;
use crate::document::mount_font_stylesheet;
use crate::events::{Event as ShellEvent, EventType};
use crate::ui::dashboard::{DashboardState, HitTarget, Tab, hit_test, render_dashboard};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, info};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Copy)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub show_assistant_panel: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool, show_assistant_panel: bool) -> Self {
        Self {
            with_background_color,
            show_assistant_panel,
        }
    }
}

impl From<&Config> for UIConfig {
    fn from(config: &Config) -> Self {
        Self::new(config.with_background_color, config.show_assistant_panel)
    }
}

/// Whether the UI loop keeps going after an input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// The dashboard view being displayed.
    state: DashboardState,

    /// Receives every inert dashboard action.
    handler: Box<dyn CommandHandler>,
}

impl App {
    /// Creates the application and mounts the dashboard.
    ///
    /// Mounting registers the font stylesheet with the host document; later mounts
    /// in the same process leave the existing link alone.
    pub fn new(
        source: &dyn DataSource,
        ui_config: UIConfig,
        font_stylesheet_url: &str,
        handler: Box<dyn CommandHandler>,
    ) -> Self {
        let mut state = DashboardState::from_source(source, ui_config);
        if mount_font_stylesheet(font_stylesheet_url) {
            debug!("registered font stylesheet {}", font_stylesheet_url);
            state.add_to_status_log(ShellEvent::host(format!(
                "Registered font stylesheet {}",
                font_stylesheet_url
            )));
        }
        Self { state, handler }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Hands a command to the handler and records the result. Never touches the
    /// view state.
    pub fn dispatch(&mut self, command: Command) {
        let event = match self.handler.handle(command) {
            Ok(()) => {
                info!("dispatched {:?}", command);
                ShellEvent::command(
                    format!("'{}' handled", command.label()),
                    EventType::Handled,
                )
            }
            Err(e) => {
                info!("{}", e);
                ShellEvent::command(e.to_string(), EventType::Unavailable)
            }
        };
        self.state.add_to_status_log(event);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit;
            }
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(tab) = c.to_digit(10).and_then(Tab::from_number) {
                    self.state.select_tab(tab);
                }
            }
            KeyCode::Tab | KeyCode::Right => {
                let next = self.state.ui.active_tab().next();
                self.state.select_tab(next);
            }
            KeyCode::BackTab | KeyCode::Left => {
                let previous = self.state.ui.active_tab().previous();
                self.state.select_tab(previous);
            }
            KeyCode::Char('m') => self.state.toggle_menu(),
            KeyCode::Char('?') => self.dispatch(Command::Help),
            KeyCode::Char('u') => self.dispatch(Command::UpdateThesePolicies),
            KeyCode::Char('f') => self.dispatch(Command::ViewFeedbackQueue),
            KeyCode::Char('p') => self.dispatch(Command::CreatePolicyUpdate),
            KeyCode::Char('c') => self.dispatch(Command::ManageAllContent),
            _ => {}
        }
        Control::Continue
    }

    /// Left clicks only; `area` is the full frame the dashboard was drawn into.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Control {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Control::Continue;
        }
        match hit_test(area, &self.state, mouse.column, mouse.row) {
            Some(HitTarget::Tab(tab)) => self.state.select_tab(tab),
            Some(HitTarget::Avatar) => self.state.toggle_menu(),
            Some(HitTarget::Command(command)) => self.dispatch(command),
            None => {}
        }
        Control::Continue
    }
}

/// Runs the application UI in a loop, handling events and redrawing after each one.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| render_dashboard(f, app.state()))?;

        if !event::poll(Duration::from_millis(INPUT_POLL_INTERVAL_MS))? {
            continue;
        }

        let control = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height))
            }
            _ => Control::Continue,
        };

        if control == Control::Quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{MockCommandHandler, NoopCommandHandler};
    use crate::consts::cli_consts::FONT_STYLESHEET_URL;
    use crate::dataset::FixedDataSource;
    use crate::document::font_stylesheet_count;
    use crate::ui::dashboard::state::UiState;
    use crossterm::event::KeyEventState;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn app_with(handler: Box<dyn CommandHandler>) -> App {
        App::new(
            &FixedDataSource,
            UIConfig::new(false, true),
            FONT_STYLESHEET_URL,
            handler,
        )
    }

    fn app() -> App {
        app_with(Box::new(NoopCommandHandler))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 160,
        height: 56,
    };

    #[test]
    fn starts_on_dashboard_with_menu_closed() {
        let app = app();
        assert_eq!(app.state().ui, UiState::default());
    }

    #[test]
    fn number_keys_select_tabs() {
        let mut app = app();
        for (key, tab) in ['1', '2', '3', '4', '5'].into_iter().zip(Tab::ALL) {
            assert_eq!(app.handle_key(press(KeyCode::Char(key))), Control::Continue);
            assert_eq!(app.state().ui.active_tab(), tab);
        }
    }

    #[test]
    fn arrow_keys_cycle_tabs() {
        let mut app = app();
        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.state().ui.active_tab(), Tab::Users);
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.state().ui.active_tab(), Tab::Queries);
    }

    #[test]
    fn m_toggles_menu_and_release_is_ignored() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('m')));
        assert!(app.state().ui.menu_open());

        let release = KeyEvent {
            code: KeyCode::Char('m'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_key(release);
        assert!(app.state().ui.menu_open());

        app.handle_key(press(KeyCode::Char('m')));
        assert!(!app.state().ui.menu_open());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), Control::Quit);
        assert_eq!(app.handle_key(press(KeyCode::Esc)), Control::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Control::Quit
        );
    }

    #[test]
    fn dispatch_leaves_view_state_alone() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('3')));
        let before = app.state().ui;
        for command in [
            Command::Answer(0),
            Command::Forward(2),
            Command::UpdateThesePolicies,
            Command::CreatePolicyUpdate,
            Command::OpenResource(1),
            Command::SignOut,
        ] {
            app.dispatch(command);
            assert_eq!(app.state().ui, before);
            let latest = app.state().status_log.back().unwrap();
            assert_eq!(latest.event_type, EventType::Unavailable);
        }
        let latest = app.state().status_log.back().unwrap();
        assert_eq!(latest.msg, "'Sign Out' is not available yet");
    }

    #[test]
    fn custom_handler_receives_dispatched_command() {
        let mut handler = MockCommandHandler::new();
        handler
            .expect_handle()
            .with(eq(Command::CreatePolicyUpdate))
            .times(1)
            .returning(|_| Ok(()));

        let mut app = app_with(Box::new(handler));
        app.handle_key(press(KeyCode::Char('p')));
        let latest = app.state().status_log.back().unwrap();
        assert_eq!(latest.event_type, EventType::Handled);
        assert_eq!(latest.msg, "'Create Policy Update' handled");
    }

    #[test]
    fn action_keys_dispatch_their_commands() {
        let mut handler = MockCommandHandler::new();
        let mut seq = Sequence::new();
        for command in [
            Command::Help,
            Command::UpdateThesePolicies,
            Command::ViewFeedbackQueue,
            Command::CreatePolicyUpdate,
            Command::ManageAllContent,
        ] {
            handler
                .expect_handle()
                .with(eq(command))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let mut app = app_with(Box::new(handler));
        let before = app.state().ui;
        for key in ['?', 'u', 'f', 'p', 'c'] {
            assert_eq!(app.handle_key(press(KeyCode::Char(key))), Control::Continue);
        }
        assert_eq!(app.state().ui, before);
    }

    #[test]
    fn clicking_a_body_button_dispatches_it() {
        use crate::ui::dashboard::renderer::{body_targets, dashboard_regions};

        let mut handler = MockCommandHandler::new();
        handler
            .expect_handle()
            .with(eq(Command::Answer(1)))
            .times(1)
            .returning(|_| Ok(()));

        let mut app = app_with(Box::new(handler));
        let body = dashboard_regions(AREA, true).body;
        let (answer, _) = body_targets(body, app.state().dataset().unwrap())
            .into_iter()
            .find(|(_, command)| *command == Command::Answer(1))
            .unwrap();
        app.handle_mouse(click(answer.x, answer.y), AREA);
        assert_eq!(app.state().ui, UiState::default());
    }

    #[test]
    fn clicking_tab_and_avatar_drive_state() {
        use crate::ui::dashboard::components::header::nav_layout;
        use crate::ui::dashboard::renderer::dashboard_regions;

        let mut app = app();
        let nav = nav_layout(dashboard_regions(AREA, true).nav);
        let (_, policies) = nav.tabs[2];

        app.handle_mouse(click(policies.x + 1, policies.y), AREA);
        assert_eq!(app.state().ui.active_tab(), Tab::Policies);

        app.handle_mouse(click(nav.avatar.x, nav.avatar.y), AREA);
        assert!(app.state().ui.menu_open());

        // clicking elsewhere does not dismiss the dropdown
        app.handle_mouse(click(AREA.width - 1, AREA.height - 1), AREA);
        assert!(app.state().ui.menu_open());

        app.handle_mouse(click(nav.avatar.x, nav.avatar.y), AREA);
        assert!(!app.state().ui.menu_open());
    }

    #[test]
    fn non_left_clicks_are_ignored() {
        use crate::ui::dashboard::components::header::nav_layout;
        use crate::ui::dashboard::renderer::dashboard_regions;

        let mut app = app();
        let nav = nav_layout(dashboard_regions(AREA, true).nav);
        let mut right_click = click(nav.avatar.x, nav.avatar.y);
        right_click.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(right_click, AREA);
        assert!(!app.state().ui.menu_open());
    }

    #[test]
    fn mounting_twice_registers_one_font_link() {
        let _first = app();
        let _second = app();
        assert_eq!(font_stylesheet_count(), 1);
    }
}
