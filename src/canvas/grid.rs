// Character canvas with bounds-checked plotting

use super::raster::Plot;
use thiserror::Error;

/// Character written by plot operations until `CHAR` changes it
pub const DEFAULT_DRAW_CHAR: char = '*';

/// Character every cell holds after `GRID` or `CLEAR`
pub const BLANK: char = ' ';

/// Largest width or height accepted by `GRID` unless configured otherwise
pub const DEFAULT_MAX_DIMENSION: usize = 1024;

/// Errors raised by canvas lifecycle operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// Drawing, clearing or displaying before `GRID` ran
    #[error("Grid isn't initialized")]
    NotInitialized,

    /// `GRID` ran a second time
    #[error("Grid has already been initialized")]
    AlreadyInitialized,

    /// Zero or negative width/height
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Width or height above the configured maximum
    #[error("Grid dimensions {width}x{height} exceed the maximum of {max}x{max}")]
    DimensionsTooLarge { width: i32, height: i32, max: usize },
}

/// Allocation limits applied by [`Canvas::initialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_dimension: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// The drawing surface.
///
/// Cells are stored row-major in a single buffer indexed `y * width + x`. Both
/// [`Canvas::in_bounds`] and the storage agree that `x` runs over `0..width` and
/// `y` over `0..height`, so a `w x h` grid always holds exactly `w * h` cells.
#[derive(Debug, Clone)]
pub struct Canvas {
    cells: Vec<char>,
    draw_char: char,
    width: usize,
    height: usize,
    initialized: bool,
    limits: Limits,
}

impl Canvas {
    /// Create an uninitialized canvas with the default limits
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Canvas {
            cells: Vec::new(),
            draw_char: DEFAULT_DRAW_CHAR,
            width: 0,
            height: 0,
            initialized: false,
            limits,
        }
    }

    /// Allocate a blank `width x height` grid.
    ///
    /// Runs at most once: a second call fails with [`CanvasError::AlreadyInitialized`]
    /// and leaves the existing buffer untouched.
    pub fn initialize(&mut self, width: i32, height: i32) -> Result<(), CanvasError> {
        if self.initialized {
            return Err(CanvasError::AlreadyInitialized);
        }

        if width <= 0 || height <= 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let max = self.limits.max_dimension;
        if width as usize > max || height as usize > max {
            return Err(CanvasError::DimensionsTooLarge { width, height, max });
        }

        self.width = width as usize;
        self.height = height as usize;
        self.cells = vec![BLANK; self.width * self.height];
        self.initialized = true;

        tracing::debug!(width = self.width, height = self.height, "grid initialized");
        Ok(())
    }

    /// Reset every cell to blank, keeping dimensions and draw character
    pub fn clear(&mut self) -> Result<(), CanvasError> {
        self.require_initialized()?;
        self.cells.fill(BLANK);
        Ok(())
    }

    pub fn set_draw_char(&mut self, c: char) {
        self.draw_char = c;
    }

    pub fn draw_char(&self) -> char {
        self.draw_char
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn require_initialized(&self) -> Result<(), CanvasError> {
        if self.initialized {
            Ok(())
        } else {
            Err(CanvasError::NotInitialized)
        }
    }

    /// Whether `(x, y)` addresses a cell of the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Read one cell; `None` when out of bounds or not yet initialized
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells.get(self.index(x, y)).copied()
    }

    /// Number of cells that hold something other than blank
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != BLANK).count()
    }

    /// Iterate over the grid one row string at a time, top row (`y = 0`) first
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect())
    }

    /// Render the grid as text.
    ///
    /// Each row `y` is prefixed with its ruler digit and a space; a final ruler line
    /// carries one digit per column behind a single leading space. The ruler counts
    /// down from 9 and wraps, independently of the grid size.
    pub fn render(&self) -> Result<String, CanvasError> {
        self.require_initialized()?;

        let mut out = String::with_capacity((self.width + 3) * (self.height + 1));
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            out.push(ruler_digit(y));
            out.push(' ');
            out.extend(row.iter());
            out.push('\n');
        }

        out.push(' ');
        out.extend((0..self.width).map(ruler_digit));
        out.push('\n');

        Ok(out)
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Plot for Canvas {
    /// Write the draw character at `(x, y)`; points off the grid are dropped
    fn plot(&mut self, x: i32, y: i32) {
        if !self.in_bounds(x, y) {
            return;
        }
        let index = self.index(x, y);
        self.cells[index] = self.draw_char;
    }

    /// Nothing is visible before `GRID`, so shapes are skipped outright
    fn extent(&self) -> Option<(i32, i32)> {
        let clamp = |n: usize| i32::try_from(n).unwrap_or(i32::MAX);
        Some((clamp(self.width), clamp(self.height)))
    }
}

/// Ruler digit for row or column `i`: `((9 - i) mod 10 + 10) mod 10`
pub fn ruler_digit(i: usize) -> char {
    let wrap = 10i64;
    let digit = ((9 - i as i64) % wrap + wrap) % wrap;
    char::from_digit(digit as u32, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: i32, height: i32) -> Canvas {
        let mut canvas = Canvas::new();
        canvas.initialize(width, height).unwrap();
        canvas
    }

    #[test]
    fn test_new_canvas_is_uninitialized() {
        let canvas = Canvas::new();
        assert!(!canvas.is_initialized());
        assert_eq!(canvas.draw_char(), '*');
        assert_eq!(canvas.render(), Err(CanvasError::NotInitialized));
    }

    #[test]
    fn test_initialize_fills_blank() {
        let canvas = grid(4, 3);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.filled_cells(), 0);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.get(x, y), Some(' '));
            }
        }
    }

    #[test]
    fn test_second_initialize_is_rejected() {
        let mut canvas = grid(5, 5);
        canvas.plot(1, 1);

        assert_eq!(
            canvas.initialize(8, 8),
            Err(CanvasError::AlreadyInitialized)
        );
        assert_eq!(canvas.width(), 5);
        assert_eq!(canvas.height(), 5);
        assert_eq!(canvas.get(1, 1), Some('*'));
    }

    #[test]
    fn test_initialize_rejects_bad_dimensions() {
        let mut canvas = Canvas::new();
        assert_eq!(
            canvas.initialize(0, 5),
            Err(CanvasError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            canvas.initialize(5, -1),
            Err(CanvasError::InvalidDimensions {
                width: 5,
                height: -1
            })
        );
        assert!(!canvas.is_initialized());

        let mut small = Canvas::with_limits(Limits { max_dimension: 16 });
        assert!(matches!(
            small.initialize(17, 4),
            Err(CanvasError::DimensionsTooLarge { max: 16, .. })
        ));
        assert!(small.initialize(16, 16).is_ok());
    }

    #[test]
    fn test_plot_clips_out_of_bounds() {
        let mut canvas = grid(3, 2);
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (i32::MAX, i32::MIN)] {
            canvas.plot(x, y);
        }
        assert_eq!(canvas.filled_cells(), 0);

        canvas.plot(2, 1);
        assert_eq!(canvas.get(2, 1), Some('*'));
        assert_eq!(canvas.filled_cells(), 1);
    }

    #[test]
    fn test_non_square_grid_uses_both_bounds() {
        // A wide grid must accept x up to width-1 even though height is smaller.
        let mut canvas = grid(7, 2);
        canvas.plot(6, 1);
        canvas.plot(1, 6);
        assert_eq!(canvas.get(6, 1), Some('*'));
        assert_eq!(canvas.get(1, 6), None);
        assert_eq!(canvas.filled_cells(), 1);
    }

    #[test]
    fn test_clear_keeps_dimensions_and_char() {
        let mut canvas = grid(4, 4);
        canvas.set_draw_char('#');
        for i in 0..4 {
            canvas.plot(i, i);
        }
        canvas.clear().unwrap();

        assert_eq!(canvas.filled_cells(), 0);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.draw_char(), '#');
    }

    #[test]
    fn test_clear_requires_initialized() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.clear(), Err(CanvasError::NotInitialized));
    }

    #[test]
    fn test_render_layout() {
        let mut canvas = grid(3, 2);
        canvas.plot(0, 0);
        canvas.plot(2, 1);

        assert_eq!(canvas.render().unwrap(), "9 *  \n8   *\n 987\n");
    }

    #[test]
    fn test_ruler_wraps() {
        let digits: String = (0..12).map(ruler_digit).collect();
        assert_eq!(digits, "987654321098");
    }

    #[test]
    fn test_rows() {
        let mut canvas = grid(2, 2);
        canvas.set_draw_char('x');
        canvas.plot(1, 0);
        let rows: Vec<String> = canvas.rows().collect();
        assert_eq!(rows, vec![" x".to_string(), "  ".to_string()]);
    }

    #[test]
    fn test_extent_follows_grid() {
        assert_eq!(Canvas::new().extent(), Some((0, 0)));
        assert_eq!(grid(7, 3).extent(), Some((7, 3)));
    }

    #[test]
    fn test_huge_shapes_on_small_grid() {
        use crate::canvas::raster;

        let mut canvas = grid(10, 10);
        raster::line(&mut canvas, i32::MIN, 0, i32::MAX, 0);
        raster::circle(&mut canvas, 5, 5, i32::MAX);

        assert_eq!(canvas.filled_cells(), 10);
        assert_eq!(canvas.rows().next().unwrap(), "*".repeat(10));
    }
}
