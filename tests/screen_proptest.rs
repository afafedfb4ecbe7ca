use proptest::prelude::*;

use tui_tictactoe::term::{MemorySurface, Screen};
use tui_tictactoe::types::{Colour, FillMode, Line, LineStyle, Point, Rectangle};

const W: u16 = 24;
const H: u16 = 12;

fn screen() -> Screen<MemorySurface> {
    Screen::new(MemorySurface::new(W, H), "prop", W, H).unwrap()
}

proptest! {
    #[test]
    fn nearer_write_always_shows(
        x in 0..W as i32,
        y in 0..H as i32,
        z1 in 0..255i32,
        gap in 1..200i32,
        near_first in any::<bool>(),
    ) {
        let z2 = (z1 + gap).min(255);
        prop_assume!(z1 < z2);

        let mut s = screen();
        let near = ('N', Point::with_depth(x, y, z1), Colour::BRIGHT_RED);
        let far = ('F', Point::with_depth(x, y, z2), Colour::BRIGHT_BLUE);
        let order = if near_first { [near, far] } else { [far, near] };
        for (ch, at, fg) in order {
            s.draw_char(ch, at, fg, Colour::BLACK);
        }

        let cell = s.cell(x, y).unwrap();
        prop_assert_eq!(cell.ch, Some('N'));
        prop_assert_eq!(cell.z, z1 as u8);
    }

    #[test]
    fn bounds_check_matches_definition(x in -50..50i32, y in -50..50i32, z in -5..5i32) {
        let s = screen();
        let expected = x >= 0 && y >= 0 && z >= 0 && x <= W as i32 && y <= H as i32;
        prop_assert_eq!(s.is_within_bounds(Point::with_depth(x, y, z)), expected);
    }

    #[test]
    fn off_screen_draws_never_panic(
        x in -1000..1000i32,
        y in -1000..1000i32,
        w in prop_oneof![-50..50i32, Just(i32::MAX), Just(i32::MIN), any::<i32>()],
        h in prop_oneof![-50..50i32, Just(i32::MAX), Just(i32::MIN), any::<i32>()],
        text in "[ -~\n\t]{0,40}",
    ) {
        let mut s = screen();
        s.draw_char('#', Point::new(x, y), Colour::WHITE, Colour::BLACK);
        s.draw_text(&text, Point::new(x, y), Colour::WHITE, Colour::BLACK);
        s.draw_rectangle(Rectangle::new(Point::new(x, y), w, h), Colour::WHITE, Colour::BLACK);
        s.draw_rectangle(
            Rectangle::new(Point::new(x, y), w, h).with_fill(FillMode::Dither1),
            Colour::WHITE,
            Colour::BLACK,
        );
        s.draw_line(
            Line::new(
                Point::new(x, y),
                Point::new(x.saturating_add(w), y.saturating_add(h)),
                LineStyle::Double,
            ),
            Colour::WHITE,
            Colour::BLACK,
        );
        s.present().unwrap();

        if let Some(frame) = s.surface().last_frame() {
            prop_assert_eq!(frame.cells().len(), (W as usize) * (H as usize));
        }
    }
}
