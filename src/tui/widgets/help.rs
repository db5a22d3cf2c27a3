//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::AppScreen;

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect, screen: AppScreen) {
        // Calculate popup area (centered, 60% width, 70% height)
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_x = (area.width - popup_width) / 2;
        let popup_y = (area.height - popup_height) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let (title, shortcuts): (&str, &[(&str, &str)]) = match screen {
            AppScreen::Form => (
                "Form Shortcuts",
                &[
                    ("Enter", "Fetch transcript and summarize"),
                    ("←/→", "Move cursor"),
                    ("Home/End", "Jump to start/end"),
                    ("Ctrl+U", "Clear the link"),
                    ("F1", "Show this help"),
                    ("Esc", "Quit application"),
                    ("Ctrl+C", "Quit from anywhere"),
                ],
            ),
            AppScreen::Summary => (
                "Summary Shortcuts",
                &[
                    ("↑/k", "Scroll up"),
                    ("↓/j", "Scroll down"),
                    ("PgUp", "Page up"),
                    ("PgDn", "Page down"),
                    ("g", "Go to top"),
                    ("G", "Go to bottom"),
                    ("Esc", "Back to the form"),
                ],
            ),
        };

        let mut help_text = vec![
            Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
            Line::from(""),
        ];
        help_text.extend(shortcuts.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<10}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        }));
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help = Paragraph::new(help_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(help, popup_area);
    }
}
