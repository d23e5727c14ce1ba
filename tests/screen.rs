//! Screen backend for render tests.
//!
//! Cells are replayed into a `vt100::Parser` as cursor moves, text and the
//! bold/italic/reverse attributes. Colors are dropped, so assertions read
//! what a user sees as text and emphasis.

use std::io;
use std::iter;
use std::mem;

use crossterm::Command;
use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{self, Clear};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::Modifier;

const EMPHASIS: [(Modifier, Attribute); 3] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::REVERSED, Attribute::Reverse),
];

pub struct ScreenBackend {
    parser: vt100::Parser,
    size: Size,
}

impl ScreenBackend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            size: Size::new(width, height),
        }
    }

    /// Moves the screen out, leaving a blank one of the same size behind.
    pub fn take(&mut self) -> Self {
        let blank = Self::new(self.size.width, self.size.height);
        mem::replace(self, blank)
    }

    /// Every row, joined by newlines.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// Top-left cell of the first occurrence of `needle`, scanning rows top to bottom.
    pub fn find(&self, needle: &str) -> Option<Position> {
        (0..self.size.height).find_map(|y| {
            let (text, columns) = self.row_cells(y);
            text.find(needle).map(|byte| Position::new(columns[byte], y))
        })
    }

    /// True when every cell of the first occurrence of `needle` is bold.
    pub fn is_bold(&self, needle: &str) -> bool {
        let Some(start) = self.find(needle) else {
            return false;
        };
        let screen = self.parser.screen();
        let width = needle.chars().count() as u16;
        (start.x..start.x + width).all(|x| screen.cell(start.y, x).is_some_and(vt100::Cell::bold))
    }

    /// Row text plus the screen column of each byte in it.
    fn row_cells(&self, y: u16) -> (String, Vec<u16>) {
        let screen = self.parser.screen();
        let mut text = String::new();
        let mut columns = Vec::new();
        for x in 0..self.size.width {
            let Some(cell) = screen.cell(y, x) else {
                continue;
            };
            if cell.is_wide_continuation() {
                continue;
            }
            let start = text.len();
            if cell.has_contents() {
                text.push_str(&cell.contents());
            } else {
                text.push(' ');
            }
            columns.extend(iter::repeat_n(x, text.len() - start));
        }
        (text, columns)
    }

    fn emit(&mut self, command: impl Command) {
        let mut ansi = String::new();
        if command.write_ansi(&mut ansi).is_ok() {
            self.parser.process(ansi.as_bytes());
        }
    }
}

impl Backend for ScreenBackend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let mut next: Option<(u16, u16)> = None;
        let mut emphasis: Option<Modifier> = None;

        for (x, y, cell) in content {
            if next != Some((x, y)) {
                self.emit(MoveTo(x, y));
            }

            let modifier = cell.style().add_modifier;
            if emphasis != Some(modifier) {
                self.emit(SetAttribute(Attribute::Reset));
                for (flag, attribute) in EMPHASIS {
                    if modifier.contains(flag) {
                        self.emit(SetAttribute(attribute));
                    }
                }
                emphasis = Some(modifier);
            }

            self.parser.process(cell.symbol().as_bytes());
            next = Some((x + 1, y));
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, col) = self.parser.screen().cursor_position();
        Ok(Position::new(col, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let position = position.into();
        self.emit(MoveTo(position.x, position.y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.emit(Clear(terminal::ClearType::All));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(self.size)
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: self.size,
            pixels: Size::default(),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
