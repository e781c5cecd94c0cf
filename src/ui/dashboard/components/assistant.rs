//! Assistant placeholder panel
//!
//! Reserved column for the future assistant; shows a dimmed "coming soon" card.

use super::super::utils::{ACCENT, MUTED};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "AI Copilot";

pub fn render_assistant_panel(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::styled("✉", Style::default().fg(ACCENT)),
        Line::raw(""),
        Line::styled(TITLE, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Line::styled("Coming Soon", Style::default().fg(MUTED)),
    ];
    let height = lines.len() as u16;

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM)),
        centered[1],
    );
}
