//! Screen geometry for the application card: title, control panel and canvas.
//!
//! Everything here is pure arithmetic over the surface size so hit testing and
//! rendering agree without a live Wayland surface.

use super::panel::PanelLayout;
use crate::draw::{Color, Grid};
use crate::util::Rect;

/// Inner padding of the card.
pub const CARD_PADDING: f64 = 24.0;
/// Height reserved for the "Pixel Studio" heading.
pub const TITLE_HEIGHT: f64 = 48.0;
/// Width of the control panel column.
pub const PANEL_WIDTH: f64 = 220.0;
/// Horizontal space between the panel and the canvas.
pub const COLUMN_GAP: f64 = 32.0;
/// Height of the "Canvas" caption above the grid.
pub const CANVAS_TITLE_HEIGHT: f64 = 32.0;

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Integer damage rectangle covering these bounds with a 1px margin.
    pub fn to_rect(&self) -> Option<Rect> {
        Rect::covering(self.x, self.y, self.width, self.height, 1)
    }

    /// Tuple form accepted by the label renderers.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }
}

/// Placement of every top-level region for one surface size.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub card: Bounds,
    pub title: Bounds,
    pub panel: PanelLayout,
    pub canvas_title: Bounds,
    pub canvas: Bounds,
}

impl AppLayout {
    /// Centers the card on a `screen_width × screen_height` surface.
    ///
    /// When the surface is smaller than the card, the card is pinned to the top-left corner.
    pub fn compute(
        screen_width: u32,
        screen_height: u32,
        extent: f64,
        palette: &[Color],
        size_range: (u32, u32),
    ) -> Self {
        let content_height =
            PanelLayout::content_height(palette.len()).max(CANVAS_TITLE_HEIGHT + extent);
        let card_width = CARD_PADDING * 2.0 + PANEL_WIDTH + COLUMN_GAP + extent;
        let card_height = CARD_PADDING * 2.0 + TITLE_HEIGHT + content_height;

        // Whole pixels keep cell edges crisp.
        let card_x = ((screen_width as f64 - card_width) / 2.0).max(0.0).floor();
        let card_y = ((screen_height as f64 - card_height) / 2.0).max(0.0).floor();
        let card = Bounds::new(card_x, card_y, card_width, card_height);

        let title = Bounds::new(
            card.x + CARD_PADDING,
            card.y + CARD_PADDING,
            card_width - CARD_PADDING * 2.0,
            TITLE_HEIGHT,
        );

        let panel = PanelLayout::compute(title.x, title.bottom(), palette, size_range);

        let canvas_title = Bounds::new(
            title.x + PANEL_WIDTH + COLUMN_GAP,
            title.bottom(),
            extent,
            CANVAS_TITLE_HEIGHT,
        );
        let canvas = Bounds::new(canvas_title.x, canvas_title.bottom(), extent, extent);

        Self {
            card,
            title,
            panel,
            canvas_title,
            canvas,
        }
    }

    /// Converts surface coordinates to canvas-local coordinates when inside the canvas.
    pub fn canvas_local(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.canvas
            .contains(x, y)
            .then(|| (x - self.canvas.x, y - self.canvas.y))
    }

    /// Surface damage rectangle for one grid cell.
    pub fn cell_rect(&self, grid: &Grid, index: usize) -> Option<Rect> {
        let (x, y, w, h) = grid.cell_bounds(index)?;
        Rect::covering(self.canvas.x + x, self.canvas.y + y, w, h, 1)
    }
}
