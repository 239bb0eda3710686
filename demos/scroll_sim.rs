//! Example: Simulate a touch scroll and a column resize against the pure
//! interaction state, printing each committed step.
//!
//! Run with: cargo run --example scroll_sim

#![allow(clippy::expect_used, clippy::indexing_slicing)]

use gridview::gesture::{DragSession, ResizeStep, TouchMemo};
use gridview::layout::ColumnSizes;
use gridview::{Coalescer, ScrollState};

fn main() {
    // A 100px-tall viewport over 500px of virtual content.
    let mut state = ScrollState {
        scroll_left: 0.0,
        scroll_top: 0.0,
        client_width: 300.0,
        client_height: 100.0,
        virtual_width: 300.0,
        virtual_height: 500.0,
    };

    println!("touch gesture (start at y=300):");
    let memo = TouchMemo::capture(300.0, 300.0, &state);
    for y in [280.0, 150.0, 50.0, -200.0] {
        let (left, top) = memo.target(300.0, y, &state);
        state.scroll_left = left;
        state.scroll_top = top;
        println!("  move to y={y:>6}: committed top = {top}");
    }

    println!("\nresize drag (column at 80px, pointer down at x=100):");
    let mut sizes = ColumnSizes::new();
    sizes.set_auto(4, 90.0);
    let drag = DragSession {
        size_key: 4,
        header_x: 4,
        start_x: 100.0,
        start_width: 80.0,
    };

    // Moves arrive faster than the (simulated) redraw resolves; the
    // coalescer decides which ones actually run.
    let mut slot = Coalescer::new();
    let pointer = [70.0, 60.0, 110.0, 130.0];
    let mut ran = Vec::new();
    for x in pointer {
        if let Some(x) = slot.offer(x) {
            ran.push(x);
        }
    }
    while let Some(x) = slot.complete() {
        ran.push(x);
    }

    for x in ran {
        let step = drag.step(x, sizes.auto_width(drag.size_key));
        sizes.set_override(drag.size_key, drag.candidate_width(x));
        match step {
            ResizeStep::Redraw { width } => {
                println!("  move to x={x:>5}: width {width} (redraw, preserve widths)");
            }
            ResizeStep::InPlace { width, clipped } => {
                println!("  move to x={x:>5}: width {width} (in place, clipped={clipped})");
            }
        }
    }

    let redraw = sizes.commit(drag.size_key);
    println!(
        "release: committed width = {:?}, redraw = {redraw}",
        sizes.committed_width(drag.size_key)
    );
}
