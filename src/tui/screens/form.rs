//! Form screen - link input and request status

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::pipeline::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Busy,
    Message(Severity, String),
}

/// Form screen state
pub struct FormScreen {
    input: String,
    /// Cursor position in chars
    cursor: usize,
    status: FormStatus,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormScreen {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            status: FormStatus::Idle,
        }
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Busy
    }

    /// Message left by the last request, if it did not succeed
    pub fn message(&self) -> Option<(Severity, &str)> {
        match &self.status {
            FormStatus::Message(severity, message) => Some((*severity, message.as_str())),
            _ => None,
        }
    }

    pub fn set_busy(&mut self) {
        self.status = FormStatus::Busy;
    }

    pub fn set_message(&mut self, severity: Severity, message: String) {
        self.status = FormStatus::Message(severity, message);
    }

    pub fn clear_status(&mut self) {
        self.status = FormStatus::Idle;
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.input.remove(index);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index();
            self.input.remove(index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, show_help_bar: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input
                Constraint::Min(3),    // Status
                Constraint::Length(if show_help_bar { 3 } else { 0 }),
            ])
            .split(area);

        // Title
        let title = Paragraph::new("YouTube Video Summarizer")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        // Input
        let input = Paragraph::new(self.input.as_str()).block(
            Block::default()
                .title(" Paste a YouTube Video Link Below ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(input, chunks[1]);

        if !self.is_busy() {
            let input_width = chunks[1].width.saturating_sub(2);
            let x = chunks[1].x + 1 + (self.cursor as u16).min(input_width);
            frame.set_cursor(x, chunks[1].y + 1);
        }

        // Status
        let status_line = match &self.status {
            FormStatus::Idle => Line::from(Span::styled(
                "Press Enter to get a detailed summary",
                Style::default().fg(Color::DarkGray),
            )),
            FormStatus::Busy => Line::from(Span::styled(
                "Summarizing...",
                Style::default().fg(Color::Cyan),
            )),
            FormStatus::Message(severity, message) => {
                let color = match severity {
                    Severity::Warning => Color::Yellow,
                    Severity::Error => Color::Red,
                    Severity::Success => Color::Green,
                };
                Line::from(Span::styled(message.as_str(), Style::default().fg(color)))
            }
        };

        let status = Paragraph::new(status_line).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(status, chunks[2]);

        if show_help_bar {
            let help = Paragraph::new(Line::from(vec![
                Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" Summarize  "),
                Span::styled(" Ctrl+U ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" Clear  "),
                Span::styled(" F1 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" Help  "),
                Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" Quit"),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(help, chunks[3]);
        }
    }
}
