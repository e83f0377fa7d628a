use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::dialog::{Focus, StartDialog};

const DIALOG_WIDTH: u16 = 70;
const DIALOG_HEIGHT: u16 = 11;

/// Center a `width` x `height` box inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

impl Widget for &StartDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let focused_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::REVERSED);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let popup = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Start Mob Session ")
            .border_style(bold_style);
        let inner = block.inner(popup);
        block.render(popup, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let max_width = inner.width as usize;

        // minutes field
        let field = format!("[{:<3}]", self.minutes_text());
        let field_style = if self.focus() == Focus::Minutes {
            focused_style
        } else {
            Style::default()
        };
        buf.set_stringn(inner.x + 1, inner.y, "Timer minutes", max_width, Style::default());
        buf.set_stringn(
            inner.x + 16,
            inner.y,
            &field,
            max_width.saturating_sub(16),
            field_style,
        );

        // checkboxes
        let checkboxes = [
            (
                Focus::Sound,
                self.is_timer_sound(),
                "Play sound when the timer ends",
            ),
            (
                Focus::Share,
                self.is_start_with_share(),
                "Start screen share with the session",
            ),
        ];
        for (row, (focus, checked, label)) in checkboxes.into_iter().enumerate() {
            let mark = if checked { "[x]" } else { "[ ]" };
            let mark_style = if self.focus() == focus {
                focused_style
            } else {
                Style::default()
            };
            let y = inner.y + 1 + row as u16;
            buf.set_string(inner.x + 1, y, mark, mark_style);
            buf.set_stringn(inner.x + 5, y, label, max_width.saturating_sub(5), Style::default());
        }

        // precondition failure message, present only while the start is blocked
        if let Some(message) = self.message() {
            buf.set_stringn(
                inner.x + 1,
                inner.y + 4,
                message,
                max_width.saturating_sub(2),
                red_bold_style,
            );
        }

        // buttons
        let buttons = [
            ("Start", Focus::Start, Color::Green),
            ("Settings", Focus::Settings, Color::Yellow),
            ("Cancel", Focus::Cancel, Color::Red),
        ];

        let row_width: usize = buttons
            .iter()
            .map(|(label, _, _)| label.width() + 4)
            .sum::<usize>()
            + 2 * (buttons.len() - 1);
        let mut button_x = inner.x + (max_width.saturating_sub(row_width) / 2) as u16;

        for (label, focus, color) in buttons {
            let is_focused = self.focus() == focus;
            let disabled = focus == Focus::Start && !self.can_execute();

            let text = if is_focused {
                format!("[ {label} ]")
            } else {
                format!("  {label}  ")
            };
            let style = if disabled {
                dim_style
            } else if is_focused {
                Style::default().fg(Color::Black).bg(color).patch(bold_style)
            } else {
                Style::default().fg(color)
            };

            buf.set_string(button_x, inner.y + 6, &text, style);
            button_x += text.width() as u16 + 2;
        }

        // key hints
        let hint = "tab move · space toggle · enter start · esc cancel";
        let hint_x = inner.x + (max_width.saturating_sub(hint.width()) / 2) as u16;
        buf.set_string(hint_x, inner.y + 8, hint, dim_style);
    }
}
