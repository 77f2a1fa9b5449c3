/// Console output via `crossterm`.
///
/// [`ConsoleSurface`] implements the core [`Surface`] trait with queued
/// crossterm commands, flushed at the points the reporter asks for. When
/// stdout is not a terminal the size and cursor queries fall back to a
/// fixed 120×40 screen with the cursor at the origin.
use crossterm::cursor::{self, MoveTo};
use crossterm::style::{self, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use disktally_core::model::Color;
use disktally_core::report::Surface;
use std::io::{self, BufRead, IsTerminal, Stdout, Write};
use tracing::debug;

/// Screen size assumed when the real one cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (120, 40);

/// Terminal colours in palette index order, dark shades first.
const TERM_COLORS: [style::Color; 16] = [
    style::Color::Black,
    style::Color::DarkBlue,
    style::Color::DarkGreen,
    style::Color::DarkCyan,
    style::Color::DarkRed,
    style::Color::DarkMagenta,
    style::Color::DarkYellow,
    style::Color::Grey,
    style::Color::DarkGrey,
    style::Color::Blue,
    style::Color::Green,
    style::Color::Cyan,
    style::Color::Red,
    style::Color::Magenta,
    style::Color::Yellow,
    style::Color::White,
];

/// Map a palette colour onto the terminal's 16-colour set.
pub fn term_color(color: Color) -> style::Color {
    TERM_COLORS[usize::from(color.index())]
}

/// A [`Surface`] writing crossterm escape sequences to `W`.
pub struct ConsoleSurface<W: Write = Stdout> {
    out: W,
    /// Whether `out` is the interactive terminal the queries talk to.
    interactive: bool,
}

impl ConsoleSurface<Stdout> {
    /// Surface over the process's stdout.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let interactive = out.is_terminal();
        Self { out, interactive }
    }
}

impl<W: Write> ConsoleSurface<W> {
    /// Surface over an arbitrary writer. Size and cursor queries use the
    /// fallback values.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            interactive: false,
        }
    }

    /// Restore the default colour and flush.
    pub fn finish(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for ConsoleSurface<W> {
    fn paint(&mut self, color: Color, text: &str) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(term_color(color)), Print(text))
    }

    fn paint_at(&mut self, x: u16, y: u16, color: Color, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(x, y),
            SetForegroundColor(term_color(color)),
            Print(text)
        )
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        if !self.interactive {
            return Ok(FALLBACK_SIZE);
        }
        match terminal::size() {
            Ok(size) => Ok(size),
            Err(err) => {
                debug!("terminal size unavailable: {err}");
                Ok(FALLBACK_SIZE)
            }
        }
    }

    fn cursor(&mut self) -> io::Result<(u16, u16)> {
        if !self.interactive {
            return Ok((0, 0));
        }
        // Pending output must reach the terminal before it reports a position.
        self.out.flush()?;
        match cursor::position() {
            Ok(pos) => Ok(pos),
            Err(err) => {
                debug!("cursor position unavailable: {err}");
                Ok((0, 0))
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Print `prompt` and block until the user presses Enter. Does nothing when
/// stdin is not a terminal, so piped and scripted runs exit straight away.
pub fn wait_for_acknowledgement<S: Surface + ?Sized>(surface: &mut S, prompt: &str) -> io::Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(());
    }
    surface.paint(Color::Silver, prompt)?;
    surface.flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(())
}
