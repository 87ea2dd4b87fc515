use bitvec::prelude::*;
use tui_life::core::{is_alive, BitGridView, SimpleRng, Simulation, Universe};
use tui_life::types::Dimensions;

fn random_buffer(len: usize, seed: u32) -> Vec<u8> {
    let mut rng = SimpleRng::new(seed);
    (0..len).map(|_| (rng.next_u32() >> 24) as u8).collect()
}

#[test]
fn is_alive_agrees_with_msb_first_reference_unpacking() {
    for (w, h, seed) in [(1, 1, 1), (3, 5, 2), (8, 8, 3), (13, 7, 4), (64, 33, 5)] {
        let dims = Dimensions::new(w, h);
        let buf = random_buffer(dims.byte_len(), seed);
        let reference = BitSlice::<u8, Msb0>::from_slice(&buf);

        for index in 0..dims.cell_count() {
            assert_eq!(is_alive(&buf, index), reference[index], "{w}x{h} index {index}");
        }
    }
}

#[test]
fn view_is_row_major() {
    let dims = Dimensions::new(13, 7);
    let buf = random_buffer(dims.byte_len(), 9);
    let reference = BitSlice::<u8, Msb0>::from_slice(&buf);
    let view = BitGridView::new(&buf, dims);

    for row in 0..dims.height {
        for col in 0..dims.width {
            let n = (row * dims.width + col) as usize;
            assert_eq!(view.is_alive(row, col), reference[n]);
        }
    }
}

#[test]
fn universe_buffer_decodes_to_its_own_cells() {
    let universe = Universe::new(37, 11, 1234);
    let view = BitGridView::new(universe.cells(), universe.dims());
    for row in 0..11 {
        for col in 0..37 {
            assert_eq!(view.is_alive(row, col), universe.is_alive(row, col));
        }
    }
    assert_eq!(view.live_count(), universe.live_count());
}
