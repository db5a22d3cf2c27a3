//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::sync::Arc;

use crate::config::Settings;
use crate::pipeline::{Outcome, SummaryPipeline};
use crate::tui::screens::{FormScreen, SummaryScreen};
use crate::tui::widgets::HelpPopup;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Form,
    Summary,
}

/// Main application state
pub struct App {
    settings: Settings,
    pipeline: Arc<SummaryPipeline>,
    current_screen: AppScreen,
    show_help: bool,

    // Screen states
    form: FormScreen,
    summary: SummaryScreen,

    // Link submitted from the form, run on the next update
    pending: Option<String>,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: Settings) -> Result<Self> {
        let pipeline = Arc::new(SummaryPipeline::from_settings(&settings)?);
        Ok(Self::with_pipeline(settings, pipeline))
    }

    /// Create an app around an existing pipeline
    pub fn with_pipeline(settings: Settings, pipeline: Arc<SummaryPipeline>) -> Self {
        Self {
            settings,
            pipeline,
            current_screen: AppScreen::Form,
            show_help: false,
            form: FormScreen::new(),
            summary: SummaryScreen::new(),
            pending: None,
        }
    }

    /// Draw the current screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let show_help_bar = self.settings.tui.show_help_bar;

        match self.current_screen {
            AppScreen::Form => {
                self.form.draw(frame, area, show_help_bar);
            }
            AppScreen::Summary => {
                self.summary.draw(frame, area, show_help_bar);
            }
        }

        // Draw help popup if active
        if self.show_help {
            HelpPopup::draw(frame, area, self.current_screen);
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.current_screen {
            AppScreen::Form => self.handle_form_key(key),
            AppScreen::Summary => self.handle_summary_key(key.code),
        }
    }

    /// Handle form key input
    fn handle_form_key(&mut self, key: KeyEvent) {
        if self.form.is_busy() {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('u') {
                self.form.clear();
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) => self.form.insert_char(c),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Delete => self.form.delete(),
            KeyCode::Left => self.form.move_left(),
            KeyCode::Right => self.form.move_right(),
            KeyCode::Home => self.form.move_home(),
            KeyCode::End => self.form.move_end(),
            _ => {}
        }
    }

    /// Handle summary viewer key input
    fn handle_summary_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.summary.scroll_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.summary.scroll_down();
            }
            KeyCode::PageUp => {
                self.summary.page_up();
            }
            KeyCode::PageDown => {
                self.summary.page_down();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.summary.scroll_to_top();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.summary.scroll_to_bottom();
            }
            _ => {}
        }
    }

    /// Queue the current input for the next update
    fn submit(&mut self) {
        self.form.set_busy();
        self.pending = Some(self.form.value().to_string());
    }

    /// Run a pending request, if any. Returns whether one was run.
    pub async fn update(&mut self) -> bool {
        let Some(url) = self.pending.take() else {
            return false;
        };

        let outcome = self.pipeline.run(&url).await;
        self.apply_outcome(&url, outcome);
        true
    }

    fn apply_outcome(&mut self, url: &str, outcome: Outcome) {
        match outcome {
            Outcome::Summary { text } => {
                self.form.clear_status();
                self.summary.set_summary(url.trim(), text);
                self.current_screen = AppScreen::Summary;
            }
            other => {
                self.form.set_message(other.severity(), other.message());
            }
        }
    }

    /// Handle back navigation
    pub fn handle_back(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.current_screen == AppScreen::Summary {
            self.current_screen = AppScreen::Form;
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.current_screen == AppScreen::Form && !self.show_help
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn current_screen(&self) -> AppScreen {
        self.current_screen
    }

    pub fn form(&self) -> &FormScreen {
        &self.form
    }

    pub fn summary(&self) -> &SummaryScreen {
        &self.summary
    }
}
