//! Dashboard main renderer
//!
//! Lays out the panels, renders them, and maps mouse positions back to what was
//! drawn there.

use super::components::header::{NAV_HEIGHT, nav_layout};
use super::components::{
    assistant, attention, feedback, footer, header, insights, menu, metrics, sidebar, top_asked,
};
use super::state::{DashboardState, DataState, Tab};
use super::utils::{Target, WARNING, section_block};
use crate::commands::Command;
use crate::dataset::Dataset;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

const FOOTER_HEIGHT: u16 = 2;

/// Top-level screen areas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Regions {
    pub nav: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub assistant: Option<Rect>,
}

pub fn dashboard_regions(area: Rect, show_assistant: bool) -> Regions {
    let (main, assistant) = if show_assistant {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(3), Constraint::Fill(1)])
            .split(area);
        (columns[0], Some(columns[1]))
    } else {
        (area, None)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(main);

    Regions {
        nav: rows[0],
        body: rows[1],
        footer: rows[2],
        assistant,
    }
}

/// Panel areas inside the dashboard body.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BodyRegions {
    pub metrics: Rect,
    pub attention: Rect,
    pub top_asked: Rect,
    pub feedback: Rect,
    pub quick_actions: Rect,
    pub content_status: Rect,
    pub activity: Rect,
    pub reminders: Rect,
    pub suggestions: Rect,
    pub topics: Rect,
    pub resources: Rect,
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(10),
        ])
        .split(body);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    // Weights follow each panel's natural height.
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(11),
            Constraint::Fill(12),
            Constraint::Fill(11),
        ])
        .split(columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(7),
            Constraint::Fill(8),
            Constraint::Fill(8),
            Constraint::Fill(7),
        ])
        .split(columns[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(rows[2]);

    BodyRegions {
        metrics: rows[0],
        attention: left[0],
        top_asked: left[1],
        feedback: left[2],
        quick_actions: side[0],
        content_status: side[1],
        activity: side[2],
        reminders: side[3],
        suggestions: bottom[0],
        topics: bottom[1],
        resources: bottom[2],
    }
}

/// What a mouse click landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Tab(Tab),
    Avatar,
    Command(Command),
}

pub fn hit_test(area: Rect, state: &DashboardState, column: u16, row: u16) -> Option<HitTarget> {
    let regions = dashboard_regions(area, state.show_assistant_panel);
    let nav = nav_layout(regions.nav);
    let point = Position::new(column, row);

    if state.ui.menu_open() {
        let dropdown = menu::dropdown_rect(area, regions.nav, nav.avatar);
        // The dropdown is drawn on top; clicks inside it never reach the panels below.
        if dropdown.contains(point) {
            return menu::menu_targets(dropdown)
                .into_iter()
                .find(|(rect, _)| rect.contains(point))
                .map(|(_, command)| HitTarget::Command(command));
        }
    }

    if let Some(tab) = nav.tab_at(column, row) {
        return Some(HitTarget::Tab(tab));
    }
    if nav.avatar.contains(point) {
        return Some(HitTarget::Avatar);
    }
    if nav.help.contains(point) {
        return Some(HitTarget::Command(Command::Help));
    }
    if nav.menu_icon.contains(point) {
        return Some(HitTarget::Command(Command::OpenMenuIcon));
    }

    let dataset = state.dataset()?;
    body_targets(regions.body, dataset)
        .into_iter()
        .find(|(rect, _)| rect.contains(point))
        .map(|(_, command)| HitTarget::Command(command))
}

/// Every clickable button and link in the dashboard body.
pub fn body_targets(area: Rect, dataset: &Dataset) -> Vec<Target> {
    let body = body_regions(area);
    [
        metrics::metric_targets(body.metrics, &dataset.metrics),
        attention::attention_targets(body.attention, &dataset.attention),
        top_asked::top_asked_targets(body.top_asked, &dataset.top_asked),
        feedback::feedback_targets(body.feedback, &dataset.feedback),
        sidebar::quick_action_targets(body.quick_actions, &dataset.quick_actions),
        sidebar::content_status_targets(body.content_status, &dataset.content_status),
        insights::suggestion_targets(body.suggestions),
        insights::resource_targets(body.resources, &dataset.resources),
    ]
    .concat()
}

fn render_body(f: &mut Frame, area: Rect, dataset: &Dataset) {
    let body = body_regions(area);

    metrics::render_metric_cards(f, body.metrics, &dataset.metrics);
    attention::render_attention_panel(f, body.attention, &dataset.attention);
    top_asked::render_top_asked_panel(f, body.top_asked, &dataset.top_asked);
    feedback::render_feedback_panel(f, body.feedback, &dataset.feedback);

    sidebar::render_quick_actions(f, body.quick_actions, &dataset.quick_actions);
    sidebar::render_content_status(f, body.content_status, &dataset.content_status);
    sidebar::render_activity(f, body.activity, &dataset.activity);
    sidebar::render_reminders(f, body.reminders, &dataset.reminders);

    insights::render_suggestions(f, body.suggestions, &dataset.suggestions);
    insights::render_topics(f, body.topics, &dataset.topics);
    insights::render_resources(f, body.resources, &dataset.resources);
}

fn render_unavailable(f: &mut Frame, area: Rect, reason: &str) {
    let notice = Paragraph::new(vec![
        Line::from("Dashboard data could not be loaded."),
        Line::from(reason),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(WARNING).add_modifier(Modifier::BOLD))
    .block(section_block("Data Unavailable"))
    .wrap(Wrap { trim: true });
    f.render_widget(notice, area);
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let area = f.area();
    let regions = dashboard_regions(area, state.show_assistant_panel);

    header::render_header(f, regions.nav, state);
    match &state.data {
        DataState::Ready(dataset) => render_body(f, regions.body, dataset),
        DataState::Unavailable(reason) => render_unavailable(f, regions.body, reason),
    }
    footer::render_footer(f, regions.footer, state);

    if let Some(assistant_area) = regions.assistant {
        assistant::render_assistant_panel(f, assistant_area);
    }

    if state.ui.menu_open() {
        let nav = nav_layout(regions.nav);
        menu::render_menu(f, menu::dropdown_rect(area, regions.nav, nav.avatar));
    }
}

/// Plain-text rows of a rendered buffer, trailing spaces trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FixedDataSource;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::components::sidebar::QUICK_ACTIONS_TITLE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const WIDTH: u16 = 160;
    const HEIGHT: u16 = 56;

    fn state() -> DashboardState {
        DashboardState::from_source(&FixedDataSource, UIConfig::new(false, true))
    }

    fn draw(state: &DashboardState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen(state: &DashboardState) -> String {
        buffer_lines(&draw(state)).join("\n")
    }

    fn full_area() -> Rect {
        Rect::new(0, 0, WIDTH, HEIGHT)
    }

    #[test]
    fn renders_every_panel_title() {
        let text = screen(&state());
        for title in [
            "Support Center",
            "Questions Requiring Your Attention",
            "Most Asked Questions This Week",
            "Recent User Feedback",
            "Quick Actions",
            "Content Status Summary",
            "Recent Activity",
            "Upcoming Reminders",
            "Policy Update Suggestions",
            "Popular Topics",
            "Help & Resources",
            "AI Copilot",
            "Coming Soon",
        ] {
            assert!(text.contains(title), "missing panel title {:?}", title);
        }
    }

    #[test]
    fn only_the_active_tab_is_underlined() {
        for active in Tab::ALL {
            let mut state = state();
            state.select_tab(active);
            let buffer = draw(&state);

            let regions = dashboard_regions(full_area(), true);
            let nav = nav_layout(regions.nav);
            for (tab, rect) in &nav.tabs {
                let underlined = (rect.x..rect.right())
                    .all(|x| buffer[(x, nav.indicator_y)].symbol() == "━");
                assert_eq!(underlined, *tab == active, "tab {} with {} active", tab, active);
            }
        }
    }

    #[test]
    fn dropdown_only_renders_while_open() {
        let mut state = state();
        assert!(!screen(&state).contains("Sign Out"));

        state.toggle_menu();
        let open = screen(&state);
        assert!(open.contains("Sign Out"));
        assert!(open.contains("Notifications (3)"));

        state.toggle_menu();
        assert!(!screen(&state).contains("Sign Out"));
    }

    #[test]
    fn non_dashboard_tabs_keep_dashboard_content() {
        let mut state = state();
        state.select_tab(Tab::Analytics);
        assert!(screen(&state).contains("Questions Requiring Your Attention"));
    }

    #[test]
    fn unavailable_data_renders_notice_but_keeps_shell() {
        let state = DashboardState::new(
            DataState::Unavailable("service offline".to_string()),
            UIConfig::new(false, true),
        );
        let text = screen(&state);
        assert!(text.contains("Dashboard data could not be loaded."));
        assert!(text.contains("service offline"));
        assert!(text.contains("Dashboard"));
        assert!(text.contains("AI Copilot"));
        assert!(!text.contains("Quick Actions"));
    }

    #[test]
    fn assistant_panel_can_be_hidden() {
        let state = DashboardState::from_source(&FixedDataSource, UIConfig::new(false, false));
        let text = screen(&state);
        assert!(!text.contains("AI Copilot"));
        assert!(text.contains("Quick Actions"));
    }

    #[test]
    fn hit_test_finds_tabs_and_avatar() {
        let state = state();
        let nav = nav_layout(dashboard_regions(full_area(), true).nav);
        for (tab, rect) in &nav.tabs {
            assert_eq!(
                hit_test(full_area(), &state, rect.x, rect.y),
                Some(HitTarget::Tab(*tab))
            );
        }
        assert_eq!(
            hit_test(full_area(), &state, nav.avatar.x + 1, nav.avatar.y),
            Some(HitTarget::Avatar)
        );
        assert_eq!(
            hit_test(full_area(), &state, nav.help.x, nav.help.y),
            Some(HitTarget::Command(Command::Help))
        );
    }

    #[test]
    fn hit_test_finds_quick_actions() {
        let state = state();
        let body = body_regions(dashboard_regions(full_area(), true).body);
        let inner = section_block(QUICK_ACTIONS_TITLE).inner(body.quick_actions);
        assert_eq!(
            hit_test(full_area(), &state, inner.x, inner.y + 2),
            Some(HitTarget::Command(Command::QuickAction(2)))
        );
    }

    #[test]
    fn hit_test_prefers_open_dropdown() {
        let mut state = state();
        state.toggle_menu();
        let regions = dashboard_regions(full_area(), true);
        let nav = nav_layout(regions.nav);
        let dropdown = menu::dropdown_rect(full_area(), regions.nav, nav.avatar);
        let targets = menu::menu_targets(dropdown);
        let (sign_out, command) = targets.last().copied().unwrap();
        assert_eq!(command, Command::SignOut);
        assert_eq!(
            hit_test(full_area(), &state, sign_out.x, sign_out.y),
            Some(HitTarget::Command(Command::SignOut))
        );
        // separator row is inert
        assert_eq!(
            hit_test(full_area(), &state, sign_out.x, sign_out.y - 1),
            None
        );
    }

    #[test]
    fn clicks_outside_do_not_target_menu_items_when_closed() {
        let state = state();
        let regions = dashboard_regions(full_area(), true);
        let nav = nav_layout(regions.nav);
        let dropdown = menu::dropdown_rect(full_area(), regions.nav, nav.avatar);
        let (item, _) = menu::menu_targets(dropdown)[0];
        assert_ne!(
            hit_test(full_area(), &state, item.x, item.y),
            Some(HitTarget::Command(Command::Profile))
        );
    }

    /// Text drawn in the cells a target covers.
    fn cells(buffer: &Buffer, rect: Rect) -> String {
        (rect.x..rect.right())
            .map(|x| buffer[(x, rect.y)].symbol())
            .collect()
    }

    /// Each command's target covers `label` on screen and a click there hits it.
    fn assert_clickable(expected: &[(Command, &str)]) {
        let state = state();
        let buffer = draw(&state);
        let regions = dashboard_regions(full_area(), true);
        let targets = body_targets(regions.body, &Dataset::fixed());

        for (command, label) in expected {
            let (rect, _) = targets
                .iter()
                .find(|(_, c)| c == command)
                .unwrap_or_else(|| panic!("no target for {:?}", command));
            assert_eq!(cells(&buffer, *rect), *label, "{:?}", command);
            for x in [rect.x, rect.right() - 1] {
                assert_eq!(
                    hit_test(full_area(), &state, x, rect.y),
                    Some(HitTarget::Command(*command)),
                    "{:?} at column {}",
                    command,
                    x
                );
            }
        }
    }

    #[test]
    fn attention_buttons_are_clickable() {
        assert_clickable(&[
            (Command::Answer(0), "[ Answer ]"),
            (Command::AddToFaq(0), "[ Add to FAQ ]"),
            (Command::Forward(0), "[ ⇗ Forward ]"),
            (Command::Answer(2), "[ Answer ]"),
            (Command::Forward(2), "[ ⇗ Forward ]"),
        ]);
    }

    #[test]
    fn top_asked_button_is_clickable() {
        assert_clickable(&[(Command::UpdateThesePolicies, "[ Update These Policies ]")]);
    }

    #[test]
    fn feedback_links_are_clickable() {
        assert_clickable(&[
            (Command::ViewFullFeedback(0), "View Full Feedback"),
            (Command::ReplyToUser(1), "↩ Reply to User"),
            (Command::ReplyToUser(2), "↩ Reply to User"),
        ]);
    }

    #[test]
    fn sidebar_links_are_clickable() {
        assert_clickable(&[(Command::ManageAllContent, "Manage All Content →")]);
    }

    #[test]
    fn bottom_section_links_are_clickable() {
        assert_clickable(&[
            (Command::CreatePolicyUpdate, "[ + Create Policy Update ]"),
            (Command::OpenResource(1), "▶  How to Update Policies"),
            (Command::OpenResource(3), "✎  Submit Content Request"),
        ]);
    }

    #[test]
    fn metric_link_is_clickable() {
        assert_clickable(&[(Command::ViewFeedbackQueue, "View feedback queue →")]);
    }

    #[test]
    fn plain_text_is_not_clickable() {
        let state = state();
        let body = body_regions(dashboard_regions(full_area(), true).body);
        let attention = section_block("").inner(body.attention);
        // the first question line
        assert_eq!(hit_test(full_area(), &state, attention.x, attention.y), None);
    }
}
