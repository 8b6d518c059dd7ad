//! Checks that building then dropping a tree and its dataset releases every
//! allocation. Lives in its own test binary because it installs a counting
//! global allocator.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use dectree_core::tree::{build_dec_tree, TreeConfig};
use dectree_core::utils::testing::{dataset_from, image_lit};

struct CountingAllocator;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE_BYTES.try_with(|c| c.set(c.get() + layout.size() as isize));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE_BYTES.try_with(|c| c.set(c.get() - layout.size() as isize));
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn live_bytes() -> isize {
    LIVE_BYTES.with(|c| c.get())
}

#[test]
fn test_build_and_drop_releases_all_memory() {
    let before = live_bytes();
    {
        let items = (0..200usize)
            .map(|i| {
                let lit: Vec<usize> = (0..i % 50).map(|p| p * 13 % 784).collect();
                (image_lit(&lit), (i * 7 % 10) as u8)
            })
            .collect();
        let dataset = dataset_from(items);
        let tree = build_dec_tree(&dataset, &TreeConfig::new().with_threshold_ratio(1.0))
            .expect("build should succeed");
        assert!(tree.node_count() >= 1);
        assert!(live_bytes() > before);
        drop(tree);
        drop(dataset);
    }
    assert_eq!(live_bytes(), before);
}
