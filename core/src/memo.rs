//! Single-slot memoization cell.
//!
//! # Design
//! `Memoized<T>` is owned by whatever value wants a lazily computed field
//! (for example `GithubOrgClient::org`). The first access runs the supplied
//! computation and stores the result; every later access returns the stored
//! value. It holds exactly one value, never evicts, and is not keyed.
//!
//! Fallible computations go through `get_or_try_init`: an `Err` is returned
//! to the caller and the cell stays empty, so the next access tries again.

use std::fmt;

use once_cell::sync::OnceCell;

pub struct Memoized<T> {
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the stored value, computing it with `f` on first access.
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(f)
    }

    /// Like `get_or_init`, but an error from `f` leaves the cell empty.
    pub fn get_or_try_init<F, E>(&self, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.cell.get_or_try_init(f)
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memoized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Memoized").field(value).finish(),
            None => f.write_str("Memoized(<uninit>)"),
        }
    }
}
