//! Square grid of paintable cells.

use super::color::{Color, WHITE};

/// A single paintable square of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Currently displayed fill
    pub color: Color,
    /// How many times progressive shading has been applied (0-10)
    pub shade_level: u8,
    /// Whether the faint outline of an untouched cell is shown
    pub outlined: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// An unpainted cell: white, unshaded, outlined.
    pub const fn blank() -> Self {
        Self {
            color: WHITE,
            shade_level: 0,
            outlined: true,
        }
    }

    /// Fills the cell with a flat color. The shade level is left untouched.
    pub fn fill(&mut self, color: Color) {
        self.color = color;
        self.outlined = false;
    }

    /// Restores the unpainted look and clears the shade level.
    pub fn erase(&mut self) {
        *self = Self::blank();
    }
}

/// An `n × n` collection of cells laid out row-major over a square canvas.
///
/// Resizing is never incremental: every size change rebuilds all cells.
#[derive(Debug, Clone)]
pub struct Grid {
    size: u32,
    extent: f64,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a `size × size` grid covering `extent` pixels per side.
    ///
    /// A size of zero is raised to one.
    pub fn new(size: u32, extent: f64) -> Self {
        let size = size.max(1);
        Self {
            size,
            extent,
            cells: vec![Cell::blank(); size as usize * size as usize],
        }
    }

    /// Replaces every cell with a fresh `size × size` layout, discarding prior drawing state.
    pub fn rebuild(&mut self, size: u32) {
        *self = Self::new(size, self.extent);
        log::info!(
            "Rebuilt grid at {0}x{0} ({1:.2}px cells)",
            self.size,
            self.cell_edge()
        );
    }

    /// Repaints every existing cell as blank without changing dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::blank());
    }

    /// Cells per side.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Canvas side length in pixels.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Edge length of one cell in pixels (`extent / size`).
    pub fn cell_edge(&self) -> f64 {
        self.extent / self.size as f64
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Returns true when no cell has been touched since the last build or reset.
    pub fn is_pristine(&self) -> bool {
        self.cells.iter().all(|cell| *cell == Cell::blank())
    }

    /// Maps canvas-local coordinates to a cell index, or `None` outside the canvas.
    pub fn index_at(&self, x: f64, y: f64) -> Option<usize> {
        if !(0.0..self.extent).contains(&x) || !(0.0..self.extent).contains(&y) {
            return None;
        }
        let edge = self.cell_edge();
        let size = self.size as usize;
        let col = ((x / edge).floor() as usize).min(size - 1);
        let row = ((y / edge).floor() as usize).min(size - 1);
        Some(row * size + col)
    }

    /// Canvas-local `(x, y, width, height)` of a cell.
    pub fn cell_bounds(&self, index: usize) -> Option<(f64, f64, f64, f64)> {
        if index >= self.cells.len() {
            return None;
        }
        let edge = self.cell_edge();
        let size = self.size as usize;
        let col = (index % size) as f64;
        let row = (index / size) as f64;
        Some((col * edge, row * edge, edge, edge))
    }
}
