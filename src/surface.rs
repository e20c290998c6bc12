/// Drawing-surface abstraction — all terminal I/O lives behind it.
///
/// The game core only ever talks to a `Surface`; `TerminalSurface` is the
/// crossterm-backed implementation used by the binary, and tests substitute
/// a recording double.  No game logic is performed here; this module only
/// translates draw calls into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};

/// Rough analog of a font selection on a cell grid: titles render bold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Title,
    Text,
}

/// Horizontal anchor for subsequent `draw_text` calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Column at which a run of `text_width` cells starts so that its
    /// anchor point lands on `x`.
    pub fn anchor(self, x: u16, text_width: u16) -> u16 {
        match self {
            TextAlign::Left => x,
            TextAlign::Center => x.saturating_sub(text_width / 2),
            TextAlign::Right => x.saturating_sub(text_width),
        }
    }
}

/// Narrow 2D drawing interface consumed by game states.
pub trait Surface {
    /// Clear the whole surface.
    fn clear(&mut self) -> std::io::Result<()>;
    /// Select the font used by subsequent text draws.
    fn set_font(&mut self, font: FontStyle) -> std::io::Result<()>;
    /// Select the fill colour used by subsequent text draws.
    fn set_fill(&mut self, color: Color) -> std::io::Result<()>;
    /// Select the horizontal anchor used by subsequent text draws.
    fn set_align(&mut self, align: TextAlign) -> std::io::Result<()>;
    /// Draw one line of text anchored at (x, y).
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> std::io::Result<()>;
    /// Flush the completed frame to the output.
    fn present(&mut self) -> std::io::Result<()>;
}

// ── Terminal implementation ───────────────────────────────────────────────────

/// `Surface` over any writer in a raw-mode terminal, using queued crossterm
/// commands flushed once per frame.
pub struct TerminalSurface<W: Write> {
    out: W,
    height: u16,
    font: FontStyle,
    align: TextAlign,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, height: u16) -> Self {
        Self {
            out,
            height,
            font: FontStyle::Text,
            align: TextAlign::Left,
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn set_font(&mut self, font: FontStyle) -> std::io::Result<()> {
        self.font = font;
        Ok(())
    }

    fn set_fill(&mut self, color: Color) -> std::io::Result<()> {
        self.out.queue(style::SetForegroundColor(color))?;
        Ok(())
    }

    fn set_align(&mut self, align: TextAlign) -> std::io::Result<()> {
        self.align = align;
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> std::io::Result<()> {
        let width = text.chars().count() as u16;
        let col = self.align.anchor(x, width);
        self.out.queue(cursor::MoveTo(col, y))?;
        if self.font == FontStyle::Title {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(Print(text))?;
        if self.font == FontStyle::Title {
            // NormalIntensity rather than Reset: keep the current fill colour
            self.out
                .queue(style::SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.height.saturating_sub(1)))?;
        self.out.flush()
    }
}
