use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use tui_life::core::Universe;
use tui_life::engine::{FpsCounter, GameConfig, GameController, NoHeapMetric};
use tui_life::term::{FrameBuffer, LifeView, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn step_repaint_and_view_are_allocation_free_after_warmup() {
    let config = GameConfig::default();
    let mut game = GameController::with_heap_metric(
        Universe::new(config.width, config.height, 7),
        FpsCounter::new(),
        NoHeapMetric,
        &config,
        Instant::now(),
    );
    game.pause();

    let mut view = LifeView::new();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Warm-up (framebuffer sizing, HUD line capacity).
    for _ in 0..200 {
        game.tick();
        view.render_into(game.surface(), &game.hud(), viewport, &mut fb);
    }

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            game.tick();
            view.render_into(game.surface(), &game.hud(), viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
