//! Reference cells: aliasable holders emulating language-level pointers

mod display;

use std::cell::RefCell;
use std::ops::Add;
use std::rc::Rc;

use crate::error::{RefcheckError, Result};

/// A mutable, aliasable holder of an optional value.
///
/// A `ReferenceCell` plays the role of a pointer variable. Every handle
/// produced by [`alias`](Self::alias) (or `Clone`) shares the same storage,
/// so a write through any of them is visible through all of them. Plain
/// values taken out with [`copy_value`](Self::copy_value) are detached.
///
/// Identity, not value, decides aliasing: two cells built independently
/// never alias even when they hold equal values. For that reason the type
/// does not implement `PartialEq`; use [`same_cell`](Self::same_cell).
///
/// # Example
///
/// ```
/// use refcheck::ReferenceCell;
///
/// let x = ReferenceCell::with(3);
/// let y = x.alias();
///
/// y.increment().unwrap();
/// assert_eq!(x.read().unwrap(), 4);
///
/// y.increment().unwrap();
/// assert_eq!(x.read().unwrap(), 5);
/// assert!(x.same_cell(&y));
/// ```
pub struct ReferenceCell<T> {
    /// Shared storage; `None` is the nil state
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> ReferenceCell<T> {
    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Create a cell in the nil state.
    pub fn nil() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Create a cell holding `value`.
    pub fn with(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value))),
        }
    }

    /// Return a second handle to the same storage.
    pub fn alias(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Identity
    // ═══════════════════════════════════════════════════════════════════

    /// Whether both handles share the same underlying storage.
    pub fn same_cell(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Number of live handles to this storage.
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.slot)
    }

    /// Address of the underlying storage.
    pub fn addr(&self) -> usize {
        Rc::as_ptr(&self.slot) as usize
    }

    // ═══════════════════════════════════════════════════════════════════
    // Access
    // ═══════════════════════════════════════════════════════════════════

    /// Whether the cell holds no value.
    pub fn is_nil(&self) -> bool {
        self.slot.borrow().is_none()
    }

    /// Store `value`, visible through every alias.
    pub fn write(&self, value: T) {
        *self.slot.borrow_mut() = Some(value);
    }

    /// Store `value` and return what was there before.
    pub fn replace(&self, value: T) -> Option<T> {
        self.slot.borrow_mut().replace(value)
    }

    /// Move the value out, leaving every alias nil.
    pub fn take(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }

    /// Run `f` against a shared borrow of the value.
    ///
    /// # Errors
    ///
    /// `NilDereference` if the cell is nil.
    pub fn with_ref<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R> {
        match self.slot.borrow().as_ref() {
            Some(value) => Ok(f(value)),
            None => Err(RefcheckError::nil_dereference::<T>()),
        }
    }

    /// Mutate the value in place and return whatever `f` returns.
    ///
    /// `f` must not touch this cell (or an alias of it) again.
    ///
    /// # Errors
    ///
    /// `NilDereference` if the cell is nil.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        match self.slot.borrow_mut().as_mut() {
            Some(value) => Ok(f(value)),
            None => Err(RefcheckError::nil_dereference::<T>()),
        }
    }
}

impl<T: Clone> ReferenceCell<T> {
    /// Read the current value.
    ///
    /// # Errors
    ///
    /// `NilDereference` if the cell is nil. Check [`is_nil`](Self::is_nil)
    /// first when nil is an expected state.
    pub fn read(&self) -> Result<T> {
        self.with_ref(T::clone)
    }

    /// Copy the value out into a plain, detached variable.
    ///
    /// Later writes to the cell never reach the copy.
    pub fn copy_value(&self) -> Result<T> {
        self.read()
    }
}

impl<T: Clone + Add<Output = T>> ReferenceCell<T> {
    /// Add `amount` to the stored value and return the new value.
    pub fn increment_by(&self, amount: T) -> Result<T> {
        self.update(|value| {
            *value = value.clone() + amount;
            value.clone()
        })
    }
}

impl<T: Clone + Add<Output = T> + From<u8>> ReferenceCell<T> {
    /// Add one to the stored value and return the new value.
    pub fn increment(&self) -> Result<T> {
        self.increment_by(T::from(1))
    }
}

/// Cloning a cell aliases it.
impl<T> Clone for ReferenceCell<T> {
    fn clone(&self) -> Self {
        self.alias()
    }
}

impl<T> Default for ReferenceCell<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> From<T> for ReferenceCell<T> {
    fn from(value: T) -> Self {
        Self::with(value)
    }
}
