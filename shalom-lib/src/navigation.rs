//! Year cursor navigation.
//!
//! The cursor moves over the ascending distinct years of the catalog. It is
//! either unset or one of those years; every mutation below preserves that.

use crate::store::CatalogStore;

impl CatalogStore {
    /// Position of the cursor in [`years`](Self::years) together with the
    /// years themselves. `None` when the cursor is unset or not present.
    fn cursor_position(&self) -> Option<(usize, Vec<i32>)> {
        let current = self.current_year?;
        let years = self.years();
        let index = years.binary_search(&current).ok()?;
        Some((index, years))
    }

    pub fn has_next_year(&self) -> bool {
        self.next_year().is_some()
    }

    pub fn has_prev_year(&self) -> bool {
        self.prev_year().is_some()
    }

    /// The year after the cursor, if any.
    pub fn next_year(&self) -> Option<i32> {
        let (index, years) = self.cursor_position()?;
        years.get(index + 1).copied()
    }

    /// The year before the cursor, if any.
    pub fn prev_year(&self) -> Option<i32> {
        let (index, years) = self.cursor_position()?;
        index.checked_sub(1).map(|i| years[i])
    }

    /// Move the cursor to `year`. Returns false, leaving the cursor alone,
    /// when no record is dated `year`.
    pub fn set_year(&mut self, year: i32) -> bool {
        if self.items.iter().any(|r| r.year == Some(year)) {
            self.current_year = Some(year);
            true
        } else {
            false
        }
    }

    /// Step the cursor forward. Returns whether it moved.
    pub fn go_to_next_year(&mut self) -> bool {
        match self.next_year() {
            Some(year) => {
                self.current_year = Some(year);
                true
            }
            None => false,
        }
    }

    /// Step the cursor back. Returns whether it moved.
    pub fn go_to_prev_year(&mut self) -> bool {
        match self.prev_year() {
            Some(year) => {
                self.current_year = Some(year);
                true
            }
            None => false,
        }
    }
}
