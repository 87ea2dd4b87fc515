//! Packed bit-grid decoding.
//!
//! The engine exposes its cells as a byte slice holding 8 cells per byte,
//! most-significant bit first, row-major. This module only reads that slice.

use crate::types::Dimensions;

/// Whether bit `index` of a packed MSB-first buffer is set.
///
/// `index` must be below `8 * buffer.len()`; callers derive it from
/// `row * width + col` over in-range coordinates.
#[inline(always)]
pub fn is_alive(buffer: &[u8], index: usize) -> bool {
    let byte = buffer[index / 8];
    let mask = 1u8 << (7 - (index % 8));
    byte & mask != 0
}

/// Borrowed read-only view of one generation.
///
/// The view borrows the engine's buffer, so it cannot be held across a
/// mutating call on the engine. Acquire a fresh one per frame.
#[derive(Debug, Clone, Copy)]
pub struct BitGridView<'a> {
    bytes: &'a [u8],
    dims: Dimensions,
}

impl<'a> BitGridView<'a> {
    pub fn new(bytes: &'a [u8], dims: Dimensions) -> Self {
        debug_assert!(
            bytes.len() >= dims.byte_len(),
            "packed buffer too short: {} < {}",
            bytes.len(),
            dims.byte_len()
        );
        Self { bytes, dims }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline(always)]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        is_alive(self.bytes, self.dims.index(row, col))
    }

    /// Number of live cells, ignoring padding bits in the last byte.
    pub fn live_count(&self) -> usize {
        let cells = self.dims.cell_count();
        let full = cells / 8;
        let mut count: usize = self.bytes[..full]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum();
        for index in full * 8..cells {
            if is_alive(self.bytes, index) {
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_is_first_cell() {
        let buf = [0b1000_0000u8];
        assert!(is_alive(&buf, 0));
        for i in 1..8 {
            assert!(!is_alive(&buf, i));
        }
    }

    #[test]
    fn lsb_is_eighth_cell() {
        let buf = [0b0000_0001u8, 0b0100_0000];
        assert!(is_alive(&buf, 7));
        assert!(!is_alive(&buf, 8));
        assert!(is_alive(&buf, 9));
    }

    #[test]
    fn view_maps_rows_and_columns() {
        // 3x3 grid, cells (0,2) and (2,0) alive: bits 2 and 6.
        let buf = [0b0010_0010u8, 0];
        let view = BitGridView::new(&buf, Dimensions::new(3, 3));
        assert!(view.is_alive(0, 2));
        assert!(view.is_alive(2, 0));
        assert!(!view.is_alive(1, 1));
        assert_eq!(view.live_count(), 2);
    }

    #[test]
    fn live_count_ignores_padding_bits() {
        // 3x3 uses 9 bits; the remaining 7 bits of byte 1 are padding.
        let buf = [0xFFu8, 0xFF];
        let view = BitGridView::new(&buf, Dimensions::new(3, 3));
        assert_eq!(view.live_count(), 9);
    }
}
