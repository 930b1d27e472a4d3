//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{InputFeedback, MessageLevel, PresentationMapper};
use game_core::{GallowsStage, GameStatus};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::Gray)
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_gallows(&self, stage: GallowsStage) -> Self::Style {
        let color = match stage.index() {
            0..=3 => Color::White,
            4..=6 => Color::Yellow,
            7..=8 => Color::LightRed,
            _ => Color::Red,
        };
        Style::default().fg(color)
    }

    fn style_status(&self, status: GameStatus) -> Self::Style {
        let color = match status {
            GameStatus::InProgress => Color::White,
            GameStatus::Won => Color::Green,
            GameStatus::Lost => Color::Red,
        };
        self.emphasize(Style::default().fg(color))
    }

    fn style_input(&self, feedback: &InputFeedback) -> Self::Style {
        match feedback {
            InputFeedback::Empty => Style::default().fg(Color::Gray),
            InputFeedback::Valid(_) => Style::default().fg(Color::LightGreen),
            InputFeedback::Invalid { .. } => Style::default().fg(Color::LightRed),
        }
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::Green),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn emphasize(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}
