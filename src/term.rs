use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, execute, queue, terminal};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

// Playfield pixel geometry, one cell is a CELL_WIDTH square.
pub const CELL_WIDTH: u16 = 20;
pub const GRID_TOP: u16 = 20;
pub const GRID_LEFT: u16 = 20;
pub const GRID_BOTTOM: u16 = 220;
pub const GRID_RIGHT: u16 = 220;

// One grid cell renders as two terminal characters side by side.
const PX_PER_COL: u16 = CELL_WIDTH / 2;
const PX_PER_ROW: u16 = CELL_WIDTH;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Background,
    Grid,
    Snake,
    Food,
    Text,
}

/// Incremental cell-drawing display. The engine paints and clears single
/// cells and text through this interface and never touches the device
/// directly.
pub trait Screen {
    fn setup(&mut self) {}
    fn restore(&mut self) {}

    fn clear_screen(&mut self, color: Color);
    fn draw_rectangle(&mut self, top: u16, left: u16, bottom: u16, right: u16, color: Color);
    fn fill_cell(&mut self, row: u8, col: u8, color: Color);
    fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color, size: u8);

    fn flush(&mut self) {}
}

/// Terminal-backed screen. Pixel coordinates are scaled down to character
/// cells, so the layout constants above keep their LCD meaning.
pub struct TermScreen {
    stdout: Stdout,
}

impl TermScreen {
    pub fn new() -> Self {
        TermScreen { stdout: stdout() }
    }
}

impl Screen for TermScreen {
    fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error enabling raw mode");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor");
    }

    fn restore(&mut self) {
        execute!(self.stdout, cursor::Show).expect("Error showing cursor");
        terminal::disable_raw_mode().expect("Error disabling raw mode");
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    fn clear_screen(&mut self, _color: Color) {
        execute!(self.stdout, ResetColor, terminal::Clear(ClearType::All)).expect("Error clearing");
    }

    fn draw_rectangle(&mut self, top: u16, left: u16, bottom: u16, right: u16, color: Color) {
        // The outline sits one character outside the pixel rect it frames
        let x0 = left / PX_PER_COL - 1;
        let y0 = top / PX_PER_ROW - 1;
        let x1 = right / PX_PER_COL;
        let y1 = bottom / PX_PER_ROW;

        queue!(self.stdout, SetForegroundColor(term_color(color))).unwrap();
        for x in x0..=x1 {
            let ch = if x == x0 || x == x1 { '+' } else { '-' };
            queue!(self.stdout, cursor::MoveTo(x, y0), Print(ch)).unwrap();
            queue!(self.stdout, cursor::MoveTo(x, y1), Print(ch)).unwrap();
        }
        for y in y0 + 1..y1 {
            queue!(self.stdout, cursor::MoveTo(x0, y), Print('|')).unwrap();
            queue!(self.stdout, cursor::MoveTo(x1, y), Print('|')).unwrap();
        }
        queue!(self.stdout, ResetColor).unwrap();
    }

    fn fill_cell(&mut self, row: u8, col: u8, color: Color) {
        let x = (GRID_LEFT + col as u16 * CELL_WIDTH) / PX_PER_COL;
        let y = (GRID_TOP + row as u16 * CELL_WIDTH) / PX_PER_ROW;
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            SetBackgroundColor(term_color(color)),
            Print("  "),
            ResetColor
        )
        .unwrap();
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color, _size: u8) {
        queue!(
            self.stdout,
            cursor::MoveTo(x / PX_PER_COL, y / PX_PER_ROW),
            SetForegroundColor(term_color(fg)),
            SetBackgroundColor(term_color(bg)),
            Print(text),
            ResetColor
        )
        .unwrap();
    }

    fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing");
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Background => TermColor::Reset,
        Color::Grid => TermColor::DarkGrey,
        Color::Snake => TermColor::Yellow,
        Color::Food => TermColor::Green,
        Color::Text => TermColor::White,
    }
}
