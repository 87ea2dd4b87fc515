//! Stamp patterns: fixed offsets applied relative to a clicked cell.

/// A named set of `(row, col)` offsets relative to an anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [(i32, i32)],
}

impl Pattern {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// South-east travelling glider, anchored on its top-middle neighbour row.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    offsets: &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)],
};

/// Period-3 pulsar centred on the anchor cell.
///
/// Four 3-cell bars in each quadrant: rows ±1/±6 over columns ±2..±4, and the
/// transpose. The anchor itself stays dead.
#[rustfmt::skip]
pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    offsets: &[
        // Horizontal bars, top half.
        (-6, -4), (-6, -3), (-6, -2), (-6, 2), (-6, 3), (-6, 4),
        (-1, -4), (-1, -3), (-1, -2), (-1, 2), (-1, 3), (-1, 4),
        // Horizontal bars, bottom half.
        (1, -4), (1, -3), (1, -2), (1, 2), (1, 3), (1, 4),
        (6, -4), (6, -3), (6, -2), (6, 2), (6, 3), (6, 4),
        // Vertical bars, left half.
        (-4, -6), (-3, -6), (-2, -6), (2, -6), (3, -6), (4, -6),
        (-4, -1), (-3, -1), (-2, -1), (2, -1), (3, -1), (4, -1),
        // Vertical bars, right half.
        (-4, 1), (-3, 1), (-2, 1), (2, 1), (3, 1), (4, 1),
        (-4, 6), (-3, 6), (-2, 6), (2, 6), (3, 6), (4, 6),
    ],
};
