//! Pointer-to-grid mapping.

use crate::types::{CellCoord, Dimensions, DisplayRect};

/// Surface geometry needed to resolve a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGeometry {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    pub cell_size: u32,
    pub dims: Dimensions,
}

/// Map a click at display position `(x, y)` to the grid cell under it.
///
/// The click is rescaled from displayed pixels to surface pixels per axis,
/// divided by the cell pitch and clamped into the grid, so the result is
/// always a valid cell even for clicks on the border or outside `rect`.
pub fn pointer_to_cell(x: f64, y: f64, rect: DisplayRect, geometry: SurfaceGeometry) -> CellCoord {
    let scale_x = axis_scale(geometry.width, rect.width);
    let scale_y = axis_scale(geometry.height, rect.height);

    let surface_x = (x - rect.left) * scale_x;
    let surface_y = (y - rect.top) * scale_y;

    let pitch = (geometry.cell_size + 1) as f64;
    let row = clamp_axis((surface_y / pitch).floor(), geometry.dims.height);
    let col = clamp_axis((surface_x / pitch).floor(), geometry.dims.width);
    CellCoord::new(row, col)
}

/// Resolve a click that must land on the displayed surface.
///
/// Returns `None` for clicks outside `rect` (HUD rows, margins) or when
/// nothing is displayed; otherwise the cell from [`pointer_to_cell`].
pub fn hit_cell(x: f64, y: f64, rect: DisplayRect, geometry: SurfaceGeometry) -> Option<CellCoord> {
    rect.contains(x, y).then(|| pointer_to_cell(x, y, rect, geometry))
}

fn axis_scale(surface_px: u32, displayed_px: f64) -> f64 {
    if displayed_px > 0.0 {
        surface_px as f64 / displayed_px
    } else {
        1.0
    }
}

fn clamp_axis(value: f64, len: u32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    (value as u64).min(len.saturating_sub(1) as u64) as u32
}
