//! Debug and Pointer formatting for ReferenceCell

use std::fmt;

use super::ReferenceCell;

impl<T: fmt::Debug> fmt::Debug for ReferenceCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.try_borrow() {
            Ok(slot) => match slot.as_ref() {
                Some(v) => write!(f, "ReferenceCell({:?})", v),
                None => write!(f, "ReferenceCell(nil)"),
            },
            // Mid-update; the value is not observable
            Err(_) => write!(f, "ReferenceCell(<borrowed>)"),
        }
    }
}

/// Formats the storage address, like printing a pointer.
impl<T> fmt::Pointer for ReferenceCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&std::rc::Rc::as_ptr(&self.slot), f)
    }
}
