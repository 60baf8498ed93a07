use crate::render::Canvas;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Pixels across one terminal character
pub const DOTS_PER_COL: u16 = 2;

/// Pixels down one terminal character
pub const DOTS_PER_ROW: u16 = 4;

/// A monochrome pixel buffer printed to the terminal as braille, so every terminal character
/// holds a 2x4 block of pixels.
pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the framebuffer
    w: usize,

    /// Height of the framebuffer
    h: usize,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // Let `w` and `h` refer to width and height of the cell buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        // (that is, not accounting for the trailing newlines expected at the end of each line).
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        Self {
            cb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
        }
    }

    /// A camera covering `cols` x `rows` terminal characters
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(
            cols as usize * DOTS_PER_COL as usize,
            rows as usize * DOTS_PER_ROW as usize,
        )
    }

    /// Turns on every pixel of the rectangle `[x0, x1) x [y0, y1)` that lands on the framebuffer
    fn fill_clipped(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let clip = |v: i64, max: usize| v.clamp(0, max as i64) as usize;

        let (x0, x1) = (clip(x0, self.w), clip(x1, self.w));
        let (y0, y1) = (clip(y0, self.h), clip(y1, self.h));

        if x0 >= x1 {
            return;
        }

        for y in y0..y1 {
            let row = self.xy_from(0, y);
            self.cb[row + x0..row + x1].fill(true);
        }
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?".
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every sum of dots stays within the braille block
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

impl Canvas for Camera {
    fn clear(&mut self) {
        self.reset();
    }

    fn vline(&mut self, x: i64) {
        self.fill_clipped(x, 0, x + 1, self.h as i64);
    }

    fn hline(&mut self, y: i64) {
        self.fill_clipped(0, y, self.w as i64, y + 1);
    }

    fn fill_square(&mut self, x: i64, y: i64, side: i64) {
        self.fill_clipped(x, y, x.saturating_add(side), y.saturating_add(side));
    }
}
