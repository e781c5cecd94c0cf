//! Dashboard footer component
//!
//! Renders key hints and the latest shell status message

use super::super::state::DashboardState;
use super::super::utils::{LIGHT, MUTED};

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const KEY_HINTS: &str = "[1-5] Tabs | [M] Menu | [?] Help | [U] Update | [F] Feedback | [P] Policy | [C] Content | [Q] Quit";

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut spans = vec![Span::styled(
        KEY_HINTS,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(event) = state.latest_status() {
        spans.push(Span::styled("  ·  ", Style::default().fg(MUTED)));
        spans.push(Span::styled(event.msg.as_str(), Style::default().fg(LIGHT)));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FixedDataSource;
    use crate::ui::UIConfig;
    use crate::ui::dashboard::buffer_lines;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn hints_list_every_action_key() {
        let state = DashboardState::from_source(&FixedDataSource, UIConfig::new(false, true));
        let mut terminal = Terminal::new(TestBackend::new(120, 2)).unwrap();
        terminal
            .draw(|f| render_footer(f, f.area(), &state))
            .unwrap();

        let hints = &buffer_lines(terminal.backend().buffer())[1];
        for hint in [
            "[?] Help",
            "[U] Update",
            "[F] Feedback",
            "[P] Policy",
            "[C] Content",
        ] {
            assert!(hints.contains(hint), "missing {hint} in {hints}");
        }
    }
}
