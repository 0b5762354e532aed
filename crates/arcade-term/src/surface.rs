//! Half-block terminal surface
//!
//! Every terminal cell shows two vertically stacked pixels using the upper
//! half block: the foreground colours the top pixel, the background the
//! bottom one. A frame's world is scaled uniformly to fit the pixel grid and
//! centred, with the spare area left as letterbox.

use arcade_core::{Color, DrawCmd, Frame, Rect, TextAlign, TextSize};
use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color as CColor},
};
use std::io::{self, Write};

const LETTERBOX: Color = Color::rgb(16, 16, 16);

fn term_color(c: Color) -> CColor {
    CColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// A grid of pixels, two per terminal row
#[derive(Debug, Clone)]
pub struct PixelBuf {
    w: usize,
    h: usize,
    px: Vec<Color>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize, fill: Color) -> Self {
        Self {
            w,
            h,
            px: vec![fill; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, LETTERBOX);
    }

    pub fn fill(&mut self, c: Color) {
        self.px.iter_mut().for_each(|p| *p = c);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.px[y * self.w + x]
    }

    /// Fill the half-open pixel range `[x0, x1) x [y0, y1)`, clipped
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Color) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.w as i32);
        let y1 = y1.min(self.h as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.px[y as usize * self.w + x as usize] = c;
            }
        }
    }

    /// Write the buffer starting at the top-left cell
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = None;
        let mut prev_bg = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if prev_bg != Some(bot) {
                    queue!(out, style::SetBackgroundColor(term_color(bot)))?;
                    prev_bg = Some(bot);
                }
                if top == bot {
                    queue!(out, style::Print(' '))?;
                } else {
                    if prev_fg != Some(top) {
                        queue!(out, style::SetForegroundColor(term_color(top)))?;
                        prev_fg = Some(top);
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                prev_fg = None;
                prev_bg = None;
            }
        }
        queue!(out, style::ResetColor)
    }
}

/// Uniform world-to-pixel mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Viewport {
    /// Largest scale that fits `world` inside `buf`, centred
    pub fn fit(world_w: i32, world_h: i32, buf_w: usize, buf_h: usize) -> Self {
        if world_w <= 0 || world_h <= 0 {
            return Self {
                scale: 1.0,
                offset_x: 0,
                offset_y: 0,
            };
        }
        let scale = (buf_w as f64 / world_w as f64).min(buf_h as f64 / world_h as f64);
        let used_w = (world_w as f64 * scale).floor() as i32;
        let used_h = (world_h as f64 * scale).floor() as i32;
        Self {
            scale,
            offset_x: (buf_w as i32 - used_w) / 2,
            offset_y: (buf_h as i32 - used_h) / 2,
        }
    }

    pub fn x(&self, x: i32) -> i32 {
        self.offset_x + (x as f64 * self.scale).floor() as i32
    }

    pub fn y(&self, y: i32) -> i32 {
        self.offset_y + (y as f64 * self.scale).floor() as i32
    }

    /// Pixel bounds `(x0, y0, x1, y1)` of a world rectangle. A non-empty
    /// rectangle always covers at least one pixel.
    pub fn rect(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let x0 = self.x(rect.x);
        let y0 = self.y(rect.y);
        let x1 = self.x(rect.right()).max(x0 + 1);
        let y1 = self.y(rect.bottom()).max(y0 + 1);
        (x0, y0, x1, y1)
    }
}

/// A text command resolved to a terminal cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub color: Color,
    pub bold: bool,
}

/// Presents frames on the terminal
#[derive(Debug)]
pub struct Surface {
    buf: PixelBuf,
    cols: u16,
    rows: u16,
    /// Pixel bounds of the world, `(x0, y0, x1, y1)` half-open
    clip: (i32, i32, i32, i32),
}

impl Surface {
    /// Surface covering `cols` x `rows` terminal cells
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            buf: PixelBuf::new(cols as usize, rows as usize * 2, LETTERBOX),
            cols,
            rows,
            clip: (0, 0, 0, 0),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.buf.resize(cols as usize, rows as usize * 2);
    }

    pub fn buffer(&self) -> &PixelBuf {
        &self.buf
    }

    /// Paint all shapes into the pixel buffer and return the text to overlay
    pub fn rasterize(&mut self, frame: &Frame) -> Vec<TextSpan> {
        let view = Viewport::fit(frame.width, frame.height, self.buf.width(), self.buf.height());
        self.buf.fill(LETTERBOX);
        self.clip = view.rect(&Rect::new(0, 0, frame.width, frame.height));
        let (x0, y0, x1, y1) = self.clip;
        self.buf.fill_rect(x0, y0, x1, y1, frame.background);

        let mut spans = Vec::new();
        for cmd in frame.cmds() {
            match cmd {
                DrawCmd::FillRect { rect, color } => {
                    if !rect.is_empty() {
                        self.fill_rect(view.rect(rect), *color);
                    }
                }
                DrawCmd::FillOval { rect, color } => {
                    if !rect.is_empty() {
                        self.fill_oval(view.rect(rect), *color);
                    }
                }
                DrawCmd::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                } => self.line(view.x(*x1), view.y(*y1), view.x(*x2), view.y(*y2), *color),
                DrawCmd::Text {
                    text,
                    x,
                    y,
                    size,
                    align,
                    color,
                } => {
                    let span = self.place_text(&view, text, *x, *y, *size, *align, *color);
                    spans.extend(span);
                }
            }
        }
        spans
    }

    /// Shapes never leave the world; the letterbox stays untouched
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        let (cx0, cy0, cx1, cy1) = self.clip;
        if (cx0..cx1).contains(&x) && (cy0..cy1).contains(&y) {
            self.buf.set(x, y, color);
        }
    }

    fn fill_rect(&mut self, (x0, y0, x1, y1): (i32, i32, i32, i32), color: Color) {
        let (cx0, cy0, cx1, cy1) = self.clip;
        self.buf
            .fill_rect(x0.max(cx0), y0.max(cy0), x1.min(cx1), y1.min(cy1), color);
    }

    fn fill_oval(&mut self, (x0, y0, x1, y1): (i32, i32, i32, i32), color: Color) {
        let rx = (x1 - x0) as f64 / 2.0;
        let ry = (y1 - y0) as f64 / 2.0;
        if rx <= 1.0 || ry <= 1.0 {
            self.fill_rect((x0, y0, x1, y1), color);
            return;
        }
        let cx = x0 as f64 + rx;
        let cy = y0 as f64 + ry;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = (px as f64 + 0.5 - cx) / rx;
                let dy = (py as f64 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.plot(px, py, color);
                }
            }
        }
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.plot(x1, y1, color);
            return;
        }
        for i in 0..=steps {
            let x = x1 as f64 + dx as f64 * i as f64 / steps as f64;
            let y = y1 as f64 + dy as f64 * i as f64 / steps as f64;
            self.plot(x.round() as i32, y.round() as i32, color);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn place_text(
        &self,
        view: &Viewport,
        text: &str,
        x: i32,
        y: i32,
        size: TextSize,
        align: TextAlign,
        color: Color,
    ) -> Option<TextSpan> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        let text = match size {
            TextSize::Large => text.to_uppercase(),
            _ => text.to_string(),
        };
        let len = text.chars().count() as i32;
        let anchor = view.x(x);
        let col = match align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - len / 2,
        };
        let max_col = (self.cols as i32 - len).max(0);
        // baseline pixel row -> the cell just above it
        let row = ((view.y(y) - 1) / 2).clamp(0, self.rows as i32 - 1);

        let visible: String = text.chars().take(self.cols as usize).collect();
        Some(TextSpan {
            col: col.clamp(0, max_col) as u16,
            row: row as u16,
            text: visible,
            color,
            bold: size != TextSize::Small,
        })
    }

    /// Rasterise `frame` and write it to `out`
    pub fn present(&mut self, frame: &Frame, out: &mut impl Write) -> io::Result<()> {
        let spans = self.rasterize(frame);
        self.buf.render(out)?;

        for span in &spans {
            queue!(
                out,
                cursor::MoveTo(span.col, span.row),
                style::SetForegroundColor(term_color(span.color))
            )?;
            if span.bold {
                queue!(out, style::SetAttribute(Attribute::Bold))?;
            }
            for (i, ch) in span.text.chars().enumerate() {
                let col = span.col as usize + i;
                let bg = self.buf.get(col.min(self.buf.width() - 1), span.row as usize * 2 + 1);
                queue!(out, style::SetBackgroundColor(term_color(bg)), style::Print(ch))?;
            }
            queue!(out, style::SetAttribute(Attribute::Reset), style::ResetColor)?;
        }
        out.flush()
    }
}
