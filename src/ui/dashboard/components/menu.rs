//! Account dropdown component
//!
//! Drawn over the dashboard under the avatar while the menu is open. No item does
//! anything beyond dispatching its inert command; clicking outside does not close it.

use super::super::utils::{DANGER, LIGHT, MUTED, Target, clip_targets};
use crate::commands::Command;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

const MENU_WIDTH: u16 = 22;

/// Items above the separator, in display order.
pub const MENU_ITEMS: [(&str, Command); 3] = [
    ("Profile", Command::Profile),
    ("Notifications (3)", Command::Notifications),
    ("Settings", Command::Settings),
];

const SIGN_OUT: (&str, Command) = ("Sign Out", Command::SignOut);

fn menu_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED))
}

/// Dropdown position: right-aligned with the avatar, just under the nav bar.
pub fn dropdown_rect(frame: Rect, nav: Rect, avatar: Rect) -> Rect {
    // items, separator, sign out, two borders
    let height = MENU_ITEMS.len() as u16 + 4;
    let x = avatar.right().saturating_sub(MENU_WIDTH).max(frame.x);
    Rect::new(x, nav.bottom(), MENU_WIDTH, height).intersection(frame)
}

/// One clickable row per command, separator excluded.
pub fn menu_targets(dropdown: Rect) -> Vec<Target> {
    let inner = menu_block().inner(dropdown);
    let mut targets: Vec<Target> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (_, command))| (Rect::new(inner.x, inner.y + i as u16, inner.width, 1), *command))
        .collect();
    let sign_out_row = inner.y + MENU_ITEMS.len() as u16 + 1;
    targets.push((Rect::new(inner.x, sign_out_row, inner.width, 1), SIGN_OUT.1));
    clip_targets(targets, inner)
}

pub fn render_menu(f: &mut Frame, dropdown: Rect) {
    let inner_width = menu_block().inner(dropdown).width as usize;

    let mut lines: Vec<Line> = MENU_ITEMS
        .iter()
        .map(|(label, _)| Line::styled(*label, Style::default().fg(LIGHT)))
        .collect();
    lines.push(Line::styled("─".repeat(inner_width), Style::default().fg(MUTED)));
    lines.push(Line::styled(SIGN_OUT.0, Style::default().fg(DANGER)));

    f.render_widget(Clear, dropdown);
    f.render_widget(Paragraph::new(lines).block(menu_block()), dropdown);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_hangs_below_nav_aligned_to_avatar() {
        let frame = Rect::new(0, 0, 120, 40);
        let nav = Rect::new(0, 0, 120, 3);
        let avatar = Rect::new(110, 0, 7, 1);
        let dropdown = dropdown_rect(frame, nav, avatar);
        assert_eq!(dropdown.y, 3);
        assert_eq!(dropdown.right(), avatar.right());
        assert_eq!(dropdown.height, 7);
    }

    #[test]
    fn targets_skip_separator_row() {
        let dropdown = Rect::new(10, 3, 22, 7);
        let targets = menu_targets(dropdown);
        let commands: Vec<Command> = targets.iter().map(|(_, c)| *c).collect();
        assert_eq!(
            commands,
            vec![
                Command::Profile,
                Command::Notifications,
                Command::Settings,
                Command::SignOut
            ]
        );
        let rows: Vec<u16> = targets.iter().map(|(r, _)| r.y).collect();
        assert_eq!(rows, vec![4, 5, 6, 8]);
    }
}
