//! The capability every element stored in an [`Array`](crate::Array) provides.
//!
//! The array never looks inside its items. It only needs to ask whether two
//! items are equal, which is what [`Item::equals`] answers. Any `'static` type
//! that is `PartialEq + Debug` is an `Item` through the blanket impl below, so
//! custom equality is expressed by implementing `PartialEq`.

use core::any::Any;
use core::fmt;

/// A polymorphic element that can be compared against other elements.
pub trait Item: Any + fmt::Debug + 'static {
    /// Returns `true` when `other` is logically equal to `self`.
    ///
    /// Items of different concrete types are never equal.
    fn equals(&self, other: &dyn Item) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> Item for T
where
    T: PartialEq + fmt::Debug + Any,
{
    fn equals(&self, other: &dyn Item) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline(always)]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn Item {
    /// Returns `true` if the concrete type behind this item is `T`.
    pub fn is<T: Item>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Item>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Item>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
