//! Terminal presentation: raw-mode setup/teardown and framebuffer output.
//!
//! Frames are drawn with upper-half-block glyphs so every terminal cell
//! carries two vertically stacked pixels, which keeps the cube roughly
//! square on common cell aspect ratios.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::graphics::Framebuffer;

/// Pixel resolution matching the current terminal, two pixel rows per cell.
/// Falls back to 80x24 cells when the size cannot be queried.
pub fn resolution() -> (usize, usize) {
    let size = termsize::get().unwrap_or(termsize::Size { rows: 24, cols: 80 });
    (size.cols as usize, size.rows as usize * 2)
}

/// Owns the terminal for the duration of a run.
///
/// Entering raw mode and the alternate screen on creation and undoing both
/// on drop keeps the user's shell intact even when the frame loop errors.
pub struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(TerminalGuard { out })
    }

    /// Writes one frame to the terminal with a single flush.
    pub fn present(&mut self, fb: &Framebuffer) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;

        let mut row = 0;
        while row < fb.height() {
            for col in 0..fb.width() {
                let top = fb.pixel(col, row);
                let bottom = if row + 1 < fb.height() {
                    fb.pixel(col, row + 1)
                } else {
                    [0, 0, 0]
                };
                queue!(
                    self.out,
                    SetForegroundColor(Color::Rgb {
                        r: top[0],
                        g: top[1],
                        b: top[2],
                    }),
                    SetBackgroundColor(Color::Rgb {
                        r: bottom[0],
                        g: bottom[1],
                        b: bottom[2],
                    }),
                    Print('▀'),
                )?;
            }
            row += 2;
            if row < fb.height() {
                queue!(self.out, cursor::MoveToNextLine(1))?;
            }
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
