//! Array: a growable, ownership-carrying container of polymorphic items.
//!
//! The array stores `Box<dyn Item>` values in a contiguous buffer of slots.
//! A slot is either empty or exclusively owns one item. Capacity starts at
//! [`DEFAULT_CAPACITY`] and only ever doubles; removing items never shrinks
//! it.
//!
//! Writing past the current end is allowed: the length jumps to `index + 1`
//! and every slot in between becomes an empty, readable hole ("sparse fill").
//!
//! Slots at or beyond `len()` are always empty. Interior insertion and
//! removal rotate slots rather than moving items, so every item keeps its
//! heap identity for as long as it lives in the array.

use crate::error::{ArrayError, InsertError};
use crate::item::Item;
use crate::{Box, fmt};
use allocator_api2::alloc::{Allocator, Global};
use allocator_api2::vec::Vec;

/// Number of slots allocated by a freshly created array.
pub const DEFAULT_CAPACITY: usize = 16;

type Slot = Option<Box<dyn Item>>;

// An empty slot costs nothing beyond the fat pointer.
static_assertions::assert_eq_size!(Slot, [usize; 2]);

pub struct Array<A: Allocator = Global> {
    // `slots.len()` is the capacity; every slot past `len` is `None`.
    slots: Vec<Slot, A>,
    len: usize,
}

impl Array {
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<A: Allocator> Array<A> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots in `alloc`.
    ///
    /// Aborts on allocation failure, like `Vec::with_capacity_in`. Use
    /// [`Array::try_new_in`] to observe the failure instead.
    pub fn new_in(alloc: A) -> Self {
        let mut slots = Vec::with_capacity_in(DEFAULT_CAPACITY, alloc);
        slots.resize_with(DEFAULT_CAPACITY, || None);
        Self { slots, len: 0 }
    }

    pub fn try_new_in(alloc: A) -> Result<Self, ArrayError> {
        let mut slots = Vec::new_in(alloc);
        slots
            .try_reserve_exact(DEFAULT_CAPACITY)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: DEFAULT_CAPACITY,
            })?;
        slots.resize_with(DEFAULT_CAPACITY, || None);
        Ok(Self { slots, len: 0 })
    }

    /// Number of logical slots, including sparse (empty) ones.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always a power of two.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn allocator(&self) -> &A {
        self.slots.allocator()
    }

    /// Makes sure at least `min_slots` slots are allocated.
    ///
    /// Capacity doubles until it reaches `min_slots`. New slots are empty.
    /// On failure nothing changes: the buffer, its items, the length and the
    /// capacity are all left as they were.
    pub fn ensure_capacity(&mut self, min_slots: usize) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        if min_slots <= capacity {
            return Ok(());
        }

        let new_capacity = grown_capacity(capacity, min_slots)
            .ok_or(ArrayError::CapacityOverflow { minimum: min_slots })?;
        self.slots
            .try_reserve_exact(new_capacity - capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: new_capacity,
            })?;
        self.slots.resize_with(new_capacity, || None);

        tracing::debug!(from = capacity, to = new_capacity, "array grew");
        Ok(())
    }

    /// Stores `item` at index `len()`.
    ///
    /// On failure the item is handed back inside the error.
    pub fn append(&mut self, item: Box<dyn Item>) -> Result<(), InsertError> {
        let index = self.len;
        let Some(min_slots) = index.checked_add(1) else {
            return Err(InsertError::new(
                item,
                ArrayError::CapacityOverflow { minimum: index },
            ));
        };
        if let Err(error) = self.ensure_capacity(min_slots) {
            return Err(InsertError::new(item, error));
        }

        self.slots[index] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Stores `item` at `index`.
    ///
    /// Inside the array, the items from `index` onwards move one slot to the
    /// right. Past the end, the array is extended to `index + 1` and the
    /// slots in between are left empty.
    pub fn insert(&mut self, index: usize, item: Box<dyn Item>) -> Result<(), InsertError> {
        let end = if index < self.len { self.len } else { index };
        let Some(min_slots) = end.checked_add(1) else {
            return Err(InsertError::new(
                item,
                ArrayError::CapacityOverflow { minimum: end },
            ));
        };
        if let Err(error) = self.ensure_capacity(min_slots) {
            return Err(InsertError::new(item, error));
        }

        if index < self.len {
            // slots[len] is empty, rotating brings it into place at `index`
            self.slots[index..=self.len].rotate_right(1);
            self.slots[index] = Some(item);
            self.len += 1;
        } else {
            self.slots[index] = Some(item);
            self.len = index + 1;
        }
        Ok(())
    }

    /// Replaces the item at `index`, returning whatever the slot held.
    ///
    /// Past the end this behaves like [`Array::insert`] and returns `None`.
    /// A failed insert is only reported as a warning and the rejected item is
    /// dropped; use [`Array::try_set`] to get it back instead.
    pub fn set(&mut self, index: usize, item: Box<dyn Item>) -> Option<Box<dyn Item>> {
        match self.try_set(index, item) {
            Ok(previous) => previous,
            Err(rejected) => {
                tracing::warn!(index, error = %rejected.error(), "unable to set item at array index");
                None
            }
        }
    }

    pub fn try_set(
        &mut self,
        index: usize,
        item: Box<dyn Item>,
    ) -> Result<Option<Box<dyn Item>>, InsertError> {
        if index < self.len {
            return Ok(self.slots[index].replace(item));
        }
        self.insert(index, item).map(|()| None)
    }

    /// Removes the slot at `index` and hands its item (if any) to the caller.
    ///
    /// Later slots move one position to the left. Capacity is unchanged.
    pub fn take(&mut self, index: usize) -> Result<Option<Box<dyn Item>>, ArrayError> {
        if index >= self.len {
            tracing::warn!(index, len = self.len, "the given index is out of bounds");
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let taken = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(taken)
    }

    /// Removes and drops the item at `index`.
    pub fn remove_by_index(&mut self, index: usize) -> Result<(), ArrayError> {
        self.take(index).map(drop)
    }

    /// Removes and drops the first item equal to `item`.
    pub fn remove_by_value(&mut self, item: &dyn Item) -> Result<(), ArrayError> {
        match self.index_of(item) {
            Some(index) => self.remove_by_index(index),
            None => {
                tracing::warn!(?item, "the given item could not be found in the array");
                Err(ArrayError::NotFound)
            }
        }
    }

    /// Drops every item and resets the length to zero, keeping the capacity.
    pub fn remove_all(&mut self) {
        let len = core::mem::replace(&mut self.len, 0);
        for slot in &mut self.slots[..len] {
            drop(slot.take());
        }
    }

    /// Borrows the item at `index`.
    ///
    /// Returns `None` past the end and for sparse slots.
    pub fn get(&self, index: usize) -> Option<&dyn Item> {
        self.slots[..self.len].get(index)?.as_deref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn Item> {
        self.slots[..self.len].get_mut(index)?.as_deref_mut()
    }

    /// Borrows the item at `index` as a `T`, if that is its concrete type.
    pub fn get_as<T: Item>(&self, index: usize) -> Option<&T> {
        self.get(index)?.downcast_ref::<T>()
    }

    /// Index of the first item equal to `item`. Sparse slots never match.
    pub fn index_of(&self, item: &dyn Item) -> Option<usize> {
        self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_deref().is_some_and(|held| held.equals(item)))
    }

    pub fn contains(&self, item: &dyn Item) -> bool {
        self.index_of(item).is_some()
    }

    /// Iterates over every logical slot, yielding `None` for sparse ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<&dyn Item>> + '_ {
        self.slots[..self.len].iter().map(|slot| slot.as_deref())
    }
}

/// Doubles `current` until it holds `minimum` slots.
fn grown_capacity(current: usize, minimum: usize) -> Option<usize> {
    let mut capacity = current.max(1);
    while capacity < minimum {
        capacity = capacity.checked_mul(2)?;
    }
    Some(capacity)
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Allocator> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
