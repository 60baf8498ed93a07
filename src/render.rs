use crate::cell::Cell;
use crate::cell::LiveSet;
use crate::view::ViewState;

/// A pixel surface a frame can be painted on. Coordinates may fall outside the surface; it is up
/// to the implementation to clip.
pub trait Canvas {
    /// Fill the whole surface with the background
    fn clear(&mut self);

    /// Vertical line spanning the full height at column `x`
    fn vline(&mut self, x: i64);

    /// Horizontal line spanning the full width at row `y`
    fn hline(&mut self, y: i64);

    /// Filled square with its top left corner at `(x, y)`
    fn fill_square(&mut self, x: i64, y: i64, side: i64);
}

/// Paint `cells` as seen through `view`.
///
/// The background is always cleared. When the zoom is too small for a cell to cover a pixel,
/// nothing else is drawn and `false` is returned.
pub fn draw_frame<C: Canvas>(
    canvas: &mut C,
    cells: &LiveSet,
    view: &ViewState,
    gridlines: bool,
) -> bool {
    canvas.clear();

    let cs = view.cell_size_pixels();
    if cs < 1 {
        return false;
    }

    let Some((xs, ys)) = view.visible_grid_lines() else {
        return false;
    };

    if gridlines {
        for i in xs.clone() {
            canvas.vline(view.grid_to_screen(Cell::new(i, 0)).x);
        }

        for i in ys.clone() {
            canvas.hline(view.grid_to_screen(Cell::new(0, i)).y);
        }
    }

    // cell `i` spans from line `i` to line `i + 1`, so one column and row before the first
    // visible line can still show
    let on_screen = |cell: &Cell| {
        (xs.start().saturating_sub(1)..=*xs.end()).contains(&cell.x)
            && (ys.start().saturating_sub(1)..=*ys.end()).contains(&cell.y)
    };

    for cell in cells.iter().filter(|c| on_screen(*c)) {
        let p = view.grid_to_screen(*cell);
        canvas.fill_square(p.x, p.y, cs);
    }

    true
}
