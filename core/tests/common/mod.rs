//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

use allocator_api2::alloc::{AllocError, Allocator, Global};
use holdall_core::Item;

/// An item that records how many times instances of it have been dropped.
///
/// Equality only compares `key`, so two tracked items with the same key but
/// different `id`s are equal yet distinguishable.
#[derive(Debug)]
pub struct Tracked {
    pub key: u32,
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Hands out [`Tracked`] items sharing one drop counter.
#[derive(Default)]
pub struct Tracker {
    drops: Rc<Cell<usize>>,
    next_id: Cell<u32>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self, key: u32) -> Tracked {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Tracked {
            key,
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    pub fn boxed(&self, key: u32) -> Box<dyn Item> {
        Box::new(self.item(key))
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// Ids of every tracked item in the array, `None` for sparse slots.
pub fn ids<A: Allocator>(array: &holdall_core::Array<A>) -> Vec<Option<u32>> {
    array
        .iter()
        .map(|slot| slot.and_then(|item| item.downcast_ref::<Tracked>()).map(|t| t.id))
        .collect()
}

/// Wraps `Global`, counting allocations and refusing them while `failing`.
#[derive(Default)]
pub struct FlakyAllocator {
    failing: Cell<bool>,
    allocations: Cell<usize>,
}

impl FlakyAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }
}

unsafe impl Allocator for FlakyAllocator {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if self.failing.get() {
            return Err(AllocError);
        }
        self.allocations.set(self.allocations.get() + 1);
        Global.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Global.deallocate(ptr, layout) }
    }
}
