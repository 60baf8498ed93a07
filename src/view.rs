use std::ops::Add;
use std::ops::AddAssign;
use std::ops::RangeInclusive;

use tracing::trace;

use crate::cell::Cell;
use crate::cell::Coord;

/// Side length, in pixels, of a cell at zoom `1.0`
pub const BASE_CELL_SIZE: u32 = 10;

/// Each scroll step scales the zoom by `1 + ZOOM_SPEED`
pub const ZOOM_SPEED: f64 = 0.1;

/// A screen position, or a difference of two screen positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub x: i64,
    pub y: i64,
}

impl Pixel {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Pixel {
    type Output = Pixel;

    fn add(self, rhs: Self) -> Self::Output {
        Pixel::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Pixel {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// The affine map between grid cells and screen pixels.
///
/// ```notrust
/// screen = cell * cell_size + offset + viewport / 2
/// cell   = floor((screen - viewport / 2 - offset) / cell_size)
/// ```
///
/// With a zero offset the grid origin sits at the center of the viewport. Neither the zoom nor the
/// offset are clamped; a zoom too small to give cells at least one pixel only turns rendering and
/// picking off.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// multiplier on `base_cell_size`
    zoom: f64,

    /// When zooming in or out, the zoom is multiplied or divided by `1 + zoom_speed`
    zoom_speed: f64,

    /// Side of a cell in pixels when `zoom` is `1.0`
    base_cell_size: u32,

    /// Accumulated pan, in pixels
    offset: Pixel,

    /// Width of the viewport in pixels
    width: u32,

    /// Height of the viewport in pixels
    height: u32,
}

impl ViewState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            zoom: 1.0,
            zoom_speed: ZOOM_SPEED,
            base_cell_size: BASE_CELL_SIZE,
            offset: Pixel::default(),
            width,
            height,
        }
    }

    pub fn with_base_cell_size(mut self, base_cell_size: u32) -> Self {
        self.base_cell_size = base_cell_size;
        self
    }

    pub fn with_zoom_speed(mut self, zoom_speed: f64) -> Self {
        self.zoom_speed = zoom_speed;
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_offset(mut self, offset: Pixel) -> Self {
        self.offset = offset;
        self
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> Pixel {
        self.offset
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Side of a cell on screen: `floor(base_cell_size * zoom)`. Anything below `1` means the
    /// grid is too zoomed out to draw.
    pub fn cell_size_pixels(&self) -> i64 {
        (self.base_cell_size as f64 * self.zoom).floor() as i64
    }

    /// The cell size, if cells are at least one pixel wide
    fn drawable_cell_size(&self) -> Option<i64> {
        let cs = self.cell_size_pixels();

        (cs >= 1).then_some(cs)
    }

    /// Screen position of the top left corner of `cell`
    pub fn grid_to_screen(&self, cell: Cell) -> Pixel {
        let cs = self.cell_size_pixels();

        // zoom is unbounded, so far away cells pin to the edge of the pixel range
        let axis = |c: Coord, offset: i64, half: i64| {
            c.saturating_mul(cs).saturating_add(offset).saturating_add(half)
        };

        Pixel::new(
            axis(cell.x, self.offset.x, self.half_width()),
            axis(cell.y, self.offset.y, self.half_height()),
        )
    }

    /// The cell whose screen square contains `pixel`. `None` when the zoom is degenerate.
    pub fn screen_to_grid(&self, pixel: Pixel) -> Option<Cell> {
        let cs = self.drawable_cell_size()?;

        // `div_euclid` with a positive divisor is floor division
        let axis = |p: i64, offset: i64, half: i64| {
            p.saturating_sub(half).saturating_sub(offset).div_euclid(cs)
        };

        let x = axis(pixel.x, self.offset.x, self.half_width());
        let y = axis(pixel.y, self.offset.y, self.half_height());

        Some(Cell::new(x, y))
    }

    /// Indices of the vertical and horizontal grid lines that land inside the viewport, borders
    /// included. Line `i` runs along the left (resp. top) edge of column (resp. row) `i`.
    pub fn visible_grid_lines(&self) -> Option<(RangeInclusive<Coord>, RangeInclusive<Coord>)> {
        let cs = self.drawable_cell_size()?;

        let xs = Self::lines_within(self.width, self.offset.x, cs);
        let ys = Self::lines_within(self.height, self.offset.y, cs);

        Some((xs, ys))
    }

    /// Solve `0 <= i * cs + offset + dim / 2 <= dim` for `i`
    fn lines_within(dim: u32, offset: i64, cs: i64) -> RangeInclusive<Coord> {
        let dim = dim as i64;
        let bias = offset.saturating_add(dim / 2);

        // ceil(-bias / cs) == -floor(bias / cs)
        let start = bias.div_euclid(cs).saturating_neg();
        let end = dim.saturating_sub(bias).div_euclid(cs);

        start..=end
    }

    pub fn zoom_in(&mut self) {
        self.zoom *= 1.0 + self.zoom_speed;

        trace!(zoom = self.zoom, "zoom in");
    }

    pub fn zoom_out(&mut self) {
        self.zoom /= 1.0 + self.zoom_speed;

        trace!(zoom = self.zoom, "zoom out");
    }

    pub fn pan(&mut self, delta: Pixel) {
        self.offset += delta;

        trace!(x = self.offset.x, y = self.offset.y, "pan");
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Back to zoom `1.0` with the origin at the center of the viewport
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset = Pixel::default();
    }

    fn half_width(&self) -> i64 {
        self.width as i64 / 2
    }

    fn half_height(&self) -> i64 {
        self.height as i64 / 2
    }
}
