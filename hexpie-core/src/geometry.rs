//! Grid <-> display coordinate mapping
//!
//! The board is drawn as a parallelogram of flat-top hexagons: each column
//! shifts right by 1.5 side lengths and each step down a column shifts by
//! half a row height. Nothing here touches game state; the engine is
//! renderer-agnostic and callers hit-test through [`Layout`] only.

use serde::{Deserialize, Serialize};

/// Display geometry for an N x N hex grid.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Layout {
    /// Hexagon side length in display units
    pub hex_size: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Hit-test radius as a multiple of `hex_size`
    pub proximity: f32,
}

const SQRT_3: f32 = 1.732_050_8;

impl Default for Layout {
    fn default() -> Self {
        Self {
            hex_size: 20.0,
            offset_x: 100.0,
            offset_y: 50.0,
            proximity: 1.2,
        }
    }
}

impl Layout {
    /// Display-space center of cell (row, col).
    pub fn center(&self, row: usize, col: usize) -> (f32, f32) {
        let x = self.offset_x + self.hex_size * 1.5 * col as f32;
        let y = self.offset_y + self.hex_size * SQRT_3 * (row as f32 + col as f32 / 2.0);
        (x, y)
    }

    /// Nearest cell to a display-space point, or `None` when the point is
    /// farther than the proximity threshold from every cell center.
    pub fn cell_at_point(&self, board_size: usize, x: f32, y: f32) -> Option<(usize, usize)> {
        let mut closest: Option<(usize, usize)> = None;
        let mut closest_dist = f32::INFINITY;

        for row in 0..board_size {
            for col in 0..board_size {
                let (cx, cy) = self.center(row, col);
                let dist = ((cx - x).powi(2) + (cy - y).powi(2)).sqrt();
                if dist < closest_dist {
                    closest_dist = dist;
                    closest = Some((row, col));
                }
            }
        }

        if closest_dist <= self.hex_size * self.proximity {
            closest
        } else {
            None
        }
    }

    /// Recompute hex size and offsets so an N x N board fills and centers
    /// in a viewport, capped at the default side length.
    pub fn fit(&mut self, board_size: usize, width: f32, height: f32) {
        let n = board_size as f32;
        let max_width = width - 2.0 * self.offset_x;
        let max_height = height - 2.0 * self.offset_y;

        let width_constraint = max_width / (n * 1.5);
        let height_constraint = max_height / (n * SQRT_3);
        self.hex_size = width_constraint.min(height_constraint).min(30.0);

        let board_width = self.hex_size * 1.5 * n;
        let board_height = self.hex_size * SQRT_3 * n;
        self.offset_x = (width - board_width) / 2.0 + self.hex_size;
        self.offset_y = (height - board_height) / 2.0 + self.hex_size;
    }
}
