//! GameView: draws the tic-tac-toe board and the prompt around it.
//!
//! This module only issues draw calls; presenting is up to the caller.

use crate::core::{Board, Mark, Score, BOARD_SIZE};
use crate::screen::Screen;
use crate::surface::Surface;
use crate::types::{Colour, LineStyle, Line, Point, Rectangle, BOARD_ORIGIN};

const PROMPT: &str = "Enter row and column for your move\n\
                      (separated by a comma, e.g.: 0,1) or 'exit' to quit.";

/// One line of feedback under the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status<'a> {
    pub text: &'a str,
    pub colour: Colour,
}

impl<'a> Status<'a> {
    pub fn info(text: &'a str) -> Self {
        Self {
            text,
            colour: Colour::WHITE,
        }
    }

    pub fn error(text: &'a str) -> Self {
        Self {
            text,
            colour: Colour::BRIGHT_RED,
        }
    }

    pub fn success(text: &'a str) -> Self {
        Self {
            text,
            colour: Colour::BRIGHT_GREEN,
        }
    }
}

/// Everything around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud<'a> {
    /// Text typed so far on the prompt line.
    pub input: &'a str,
    pub status: Option<Status<'a>>,
    pub score: Score,
}

pub struct GameView {
    origin: Point,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(Point::new(BOARD_ORIGIN.0, BOARD_ORIGIN.1))
    }
}

impl GameView {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Screen position of the mark in `(row, col)`.
    pub fn cell_position(&self, row: usize, col: usize) -> Point {
        self.origin.offset(2 + 4 * col as i32, 2 + 2 * row as i32)
    }

    pub fn render<S: Surface>(&self, screen: &mut Screen<S>, board: &Board, hud: &Hud<'_>) {
        screen.draw_text(PROMPT, Point::new(0, 0), Colour::WHITE, Colour::BLACK);
        screen.draw_text("> ", Point::new(0, 3), Colour::WHITE, Colour::BLACK);
        screen.draw_text(hud.input, Point::new(2, 3), Colour::WHITE, Colour::BLACK);
        screen.draw_char(
            '_',
            Point::new(2 + hud.input.chars().count() as i32, 3),
            Colour::GRAY,
            Colour::BLACK,
        );

        if let Some(status) = hud.status {
            screen.draw_text(status.text, Point::new(0, 5), status.colour, Colour::BLACK);
        }

        self.draw_board(screen, board);
        self.draw_score(screen, hud.score);
    }

    /// Column labels on top, row labels on the right, a double outline and
    /// the grid lines, then the marks.
    pub fn draw_board<S: Surface>(&self, screen: &mut Screen<S>, board: &Board) {
        let o = self.origin;
        let label = |i: usize| char::from(b'0' + i as u8);

        for i in 0..BOARD_SIZE {
            let step = 4 * i as i32;
            screen.draw_char(label(i), o.offset(2 + step, 0), Colour::WHITE, Colour::BLACK);
            let row_y = 2 + 2 * i as i32;
            screen.draw_char(label(i), o.offset(14, row_y), Colour::WHITE, Colour::BLACK);
        }

        let frame = Rectangle::new(o.offset(0, 1), 12, 13).with_border(LineStyle::Double);
        screen.draw_rectangle(frame, Colour::WHITE, Colour::BLACK);

        for dx in [4, 8] {
            let line = Line::new(o.offset(dx, 2), o.offset(dx, 13), LineStyle::Double);
            screen.draw_line(line, Colour::WHITE, Colour::BLACK);
        }
        for dy in [3, 5] {
            let line = Line::new(o.offset(1, dy), o.offset(12, dy), LineStyle::Double);
            screen.draw_line(line, Colour::WHITE, Colour::BLACK);
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(mark) = board.get(row, col) {
                    screen.draw_char(
                        mark.glyph(),
                        self.cell_position(row, col),
                        mark_colour(mark),
                        Colour::BLACK,
                    );
                }
            }
        }
    }

    fn draw_score<S: Surface>(&self, screen: &mut Screen<S>, score: Score) {
        let at = self.origin.offset(18, 2);
        let text = format!(
            "YOU  {}\nAI   {}\nTIES {}",
            score.player, score.ai, score.ties
        );
        screen.draw_text(text, at, Colour::GRAY, Colour::BLACK);
    }
}

pub fn mark_colour(mark: Mark) -> Colour {
    match mark {
        Mark::Player => Colour::BRIGHT_RED,
        Mark::Ai => Colour::BRIGHT_BLUE,
    }
}
