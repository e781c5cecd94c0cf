//! Dashboard navigation bar component
//!
//! Renders the brand, the tab selector with its underline indicator, and the
//! account controls. The same layout is used for mouse hit-testing.

use super::super::state::{DashboardState, Tab};
use super::super::utils::{ACCENT, BLUE, DANGER, MUTED};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows taken by the navigation bar: labels, indicator, bottom border.
pub const NAV_HEIGHT: u16 = 3;
const BRAND_WIDTH: u16 = 22;
const ACTIONS_WIDTH: u16 = 18;
const TAB_GAP: u16 = 3;
const ICON_WIDTH: u16 = 3;
const AVATAR_WIDTH: u16 = 7;
const INDICATOR: &str = "━";

/// Screen positions of everything clickable in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLayout {
    pub brand: Rect,
    pub tabs: Vec<(Tab, Rect)>,
    /// Row the active tab's underline is drawn on.
    pub indicator_y: u16,
    pub help: Rect,
    pub menu_icon: Rect,
    pub avatar: Rect,
}

impl NavLayout {
    pub fn tab_at(&self, column: u16, row: u16) -> Option<Tab> {
        if row != self.tabs.first()?.1.y {
            return None;
        }
        self.tabs
            .iter()
            .find(|(_, rect)| column >= rect.x && column < rect.right())
            .map(|(tab, _)| *tab)
    }
}

pub fn nav_layout(area: Rect) -> NavLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BRAND_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(ACTIONS_WIDTH),
        ])
        .split(area);

    let mut x = chunks[1].x.saturating_add(1);
    let tabs = Tab::ALL
        .iter()
        .map(|tab| {
            let width = tab.label().len() as u16;
            let rect = Rect::new(x, area.y, width, 1).intersection(chunks[1]);
            x = x.saturating_add(width + TAB_GAP);
            (*tab, rect)
        })
        .collect();

    let actions_x = chunks[2].x.saturating_add(1);
    let help = Rect::new(actions_x, area.y, ICON_WIDTH, 1).intersection(chunks[2]);
    let menu_icon =
        Rect::new(actions_x + ICON_WIDTH + 1, area.y, ICON_WIDTH, 1).intersection(chunks[2]);
    let avatar = Rect::new(actions_x + 2 * (ICON_WIDTH + 1), area.y, AVATAR_WIDTH, 1)
        .intersection(chunks[2]);

    NavLayout {
        brand: Rect::new(chunks[0].x, area.y, chunks[0].width, 1).intersection(area),
        tabs,
        indicator_y: area.y.saturating_add(1),
        help,
        menu_icon,
        avatar,
    }
}

/// Render the navigation bar.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let layout = nav_layout(area);

    f.render_widget(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(MUTED)),
        area,
    );

    let brand = Line::from(vec![
        Span::styled(
            " IMF ",
            Style::default()
                .fg(Color::White)
                .bg(BLUE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Support Center",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(brand), layout.brand);

    let active_tab = state.ui.active_tab();
    for (tab, rect) in &layout.tabs {
        let active = *tab == active_tab;
        let style = if active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        f.render_widget(Paragraph::new(tab.label()).style(style), *rect);

        if active {
            let indicator =
                Rect::new(rect.x, layout.indicator_y, rect.width, 1).intersection(area);
            f.render_widget(
                Paragraph::new(INDICATOR.repeat(rect.width as usize))
                    .style(Style::default().fg(ACCENT)),
                indicator,
            );
        }
    }

    let icon_style = Style::default().fg(MUTED);
    f.render_widget(Paragraph::new("[?]").style(icon_style), layout.help);
    f.render_widget(Paragraph::new("[≡]").style(icon_style), layout.menu_icon);

    let avatar = Line::from(vec![
        Span::styled(
            "(AK)",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("³", Style::default().fg(DANGER).add_modifier(Modifier::BOLD)),
        Span::styled(" ▾", icon_style),
    ]);
    f.render_widget(Paragraph::new(avatar), layout.avatar);
}
