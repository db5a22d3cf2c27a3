//! Summary screen - display the generated summary

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use crate::pipeline::SUMMARY_HEADING;

/// Summary screen state
pub struct SummaryScreen {
    url: String,
    text: String,
    scroll_offset: usize,
    content_height: usize,
}

impl Default for SummaryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryScreen {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            text: String::new(),
            scroll_offset: 0,
            content_height: 0,
        }
    }

    pub fn set_summary(&mut self, url: &str, text: String) {
        self.url = url.to_string();
        self.content_height = text.lines().count();
        self.text = text;
        self.scroll_offset = 0;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, show_help_bar: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(5),    // Summary
                Constraint::Length(if show_help_bar { 3 } else { 0 }),
            ])
            .split(area);

        // Header
        let header_text = vec![
            Line::from(Span::styled(
                SUMMARY_HEADING,
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(Span::styled(
                self.url.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let header = Paragraph::new(header_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(header, chunks[0]);

        // Summary
        let summary_area = chunks[1];
        let visible_height = summary_area.height.saturating_sub(2) as usize; // Account for borders

        let summary = Paragraph::new(self.text.as_str())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(summary, summary_area);

        // Scrollbar
        if self.content_height > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(
                scrollbar,
                summary_area.inner(Margin {
                    horizontal: 0,
                    vertical: 1,
                }),
                &mut scrollbar_state,
            );
        }

        if show_help_bar {
            let help = Paragraph::new(Line::from(vec![
                Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" Scroll  "),
                Span::styled(
                    " PgUp/PgDn ",
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(" Page  "),
                Span::styled(" g/G ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" Top/Bottom  "),
                Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" New link"),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(help, chunks[2]);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.content_height.saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 10).min(self.content_height.saturating_sub(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.content_height.saturating_sub(1);
    }
}
