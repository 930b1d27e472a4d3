//! Gallows drawing, one ASCII frame per stage.
//!
//! Frames are built from parts: stage `n` shows the first `n` parts, so every
//! frame extends the previous one and stage 9 is the complete figure.

use client_frontend_core::PresentationMapper;
use game_core::GallowsStage;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub const WIDTH: usize = 9;
pub const HEIGHT: usize = 7;

type Part = &'static [(usize, usize, char)];

/// Parts in drawing order as `(row, column, glyph)`.
const PARTS: [Part; 9] = [
    // base
    &[
        (6, 0, '='),
        (6, 1, '='),
        (6, 2, '='),
        (6, 3, '='),
        (6, 4, '='),
        (6, 5, '='),
        (6, 6, '='),
        (6, 7, '='),
        (6, 8, '='),
    ],
    // post
    &[(1, 6, '|'), (2, 6, '|'), (3, 6, '|'), (4, 6, '|'), (5, 6, '|')],
    // beam
    &[(0, 2, '+'), (0, 3, '-'), (0, 4, '-'), (0, 5, '-'), (0, 6, '+')],
    // rope
    &[(1, 2, '|')],
    // head
    &[(2, 2, 'O')],
    // body
    &[(3, 2, '|')],
    // left arm
    &[(3, 1, '/')],
    // right arm
    &[(3, 3, '\\')],
    // legs
    &[(4, 1, '/'), (4, 3, '\\')],
];

/// Lines of the drawing for `stage`, each exactly [`WIDTH`] characters.
pub fn frame_lines(stage: GallowsStage) -> [String; HEIGHT] {
    let mut grid = [[' '; WIDTH]; HEIGHT];
    for part in PARTS.iter().take(stage.index()) {
        for &(row, col, glyph) in part.iter() {
            grid[row][col] = glyph;
        }
    }
    grid.map(|row| row.iter().collect())
}

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    stage: GallowsStage,
    theme: &T,
) {
    let style = theme.style_gallows(stage);
    let lines: Vec<Line> = frame_lines(stage)
        .into_iter()
        .map(|line| Line::styled(line, style))
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_per_stage() {
        assert_eq!(PARTS.len() + 1, GallowsStage::COUNT);
    }

    #[test]
    fn empty_stage_draws_nothing() {
        let lines = frame_lines(GallowsStage::EMPTY);
        assert!(lines.iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn final_stage_is_complete_figure() {
        let expected = [
            "  +---+  ",
            "  |   |  ",
            "  O   |  ",
            " /|\\  |  ",
            " / \\  |  ",
            "      |  ",
            "=========",
        ];
        assert_eq!(frame_lines(GallowsStage::FINAL), expected.map(String::from));
    }

    #[test]
    fn each_stage_adds_to_the_previous() {
        let stages: Vec<_> = GallowsStage::all().map(frame_lines).collect();
        for pair in stages.windows(2) {
            assert_ne!(pair[0], pair[1]);
            for (before, after) in pair[0].iter().zip(pair[1].iter()) {
                for (b, a) in before.chars().zip(after.chars()) {
                    assert!(b == ' ' || b == a);
                }
            }
        }
    }
}
