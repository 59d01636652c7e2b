//! Native widget state.
//!
//! A [`Native`] cell holds the value a widget currently displays and counts
//! how many times it was written. Widgets compare against the held value
//! and only write on inequality, so the write count of a settled tree stays
//! flat across repeated render passes.

/// A displayed property plus the number of writes it has received
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Native<T> {
    value: T,
    writes: u64,
}

impl<T: PartialEq> Native<T> {
    pub fn new(value: T) -> Self {
        Self { value, writes: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unconditional write
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.writes += 1;
    }

    /// Write only if `value` differs from what is displayed.
    ///
    /// Returns whether a write happened.
    pub fn update(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.set(value);
        true
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl<T: Copy + PartialEq> Native<T> {
    pub fn value(&self) -> T {
        self.value
    }
}
