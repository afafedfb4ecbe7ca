//! Showcase of every draw primitive, depth ordering included.

use crate::glyph;
use crate::screen::Screen;
use crate::surface::Surface;
use crate::types::{Colour, FillMode, Line, LineStyle, Point, Rectangle};

pub fn draw_demo<S: Surface>(screen: &mut Screen<S>) {
    screen.draw_text(
        "Console Drawing Demo.",
        Point::new(10, 1),
        Colour::new(255, 0, 255),
        Colour::GRAY,
    );

    screen.draw_char('X', Point::new(0, 0), Colour::WHITE, Colour::BRIGHT_GREEN);
    screen.draw_char('Y', Point::new(1, 0), Colour::WHITE, Colour::DARK_BLUE);
    screen.draw_char('Z', Point::new(0, 1), Colour::WHITE, Colour::DARK_BLUE);
    screen.draw_char('X', Point::new(1, 1), Colour::WHITE, Colour::DARK_GREEN);

    // B sits in front of A (1 < 5) even though A is drawn later.
    screen.draw_char('B', Point::with_depth(3, 1, 1), Colour::WHITE, Colour::DARK_RED);
    screen.draw_char('A', Point::with_depth(3, 1, 5), Colour::BRIGHT_GREEN, Colour::WHITE);

    for (y, ch, bright, dark) in [
        (1, 'X', Colour::BRIGHT_RED, Colour::DARK_RED),
        (2, 'Y', Colour::BRIGHT_GREEN, Colour::DARK_GREEN),
        (3, 'Z', Colour::BRIGHT_BLUE, Colour::DARK_BLUE),
    ] {
        screen.draw_char(ch, Point::new(5, y), bright, Colour::WHITE);
        screen.draw_char(ch, Point::new(6, y), dark, Colour::GRAY);
    }

    for (y, ch) in [(20, glyph::DITHER_1), (21, glyph::DITHER_2), (22, glyph::DITHER_3)] {
        screen.draw_char(ch, Point::new(8, y), Colour::WHITE, Colour::BLACK);
    }

    screen.draw_text(
        "Line 1\nLine 2\tcontinues.",
        Point::new(8, 3),
        Colour::BRIGHT_RED,
        Colour::DARK_GREEN,
    );

    let lines = [
        ((30, 3), (36, 3), LineStyle::Default, Colour::BRIGHT_RED),
        ((30, 4), (30, 8), LineStyle::Default, Colour::BRIGHT_BLUE),
        ((30, 6), (36, 6), LineStyle::Double, Colour::BRIGHT_RED),
        ((35, 4), (35, 8), LineStyle::Double, Colour::BRIGHT_BLUE),
    ];
    for ((sx, sy), (ex, ey), style, colour) in lines {
        screen.draw_line(
            Line::new(Point::new(sx, sy), Point::new(ex, ey), style),
            colour,
            Colour::BLACK,
        );
    }

    // Three sizes per column: 1x1, 2x2 and 10x10.
    let columns = [
        (15, 10, LineStyle::Default, FillMode::Outline),
        (26, 10, LineStyle::Double, FillMode::Outline),
        (15, 20, LineStyle::Double, FillMode::Solid),
        (26, 20, LineStyle::Default, FillMode::Dither1),
        (37, 20, LineStyle::Default, FillMode::Dither2),
        (48, 20, LineStyle::Default, FillMode::Dither3),
    ];
    for (x, y, border, fill) in columns {
        let (mid, bottom) = if fill == FillMode::Outline {
            (y + 1, y + 4)
        } else {
            (y + 2, y + 4)
        };
        for (origin_y, size) in [(y, 1), (mid, 2), (bottom, 10)] {
            let rect = Rectangle::new(Point::new(x, origin_y), size, size)
                .with_border(border)
                .with_fill(fill);
            screen.draw_rectangle(rect, Colour::WHITE, Colour::BLACK);
        }
    }
}
