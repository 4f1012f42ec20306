//! The dual stack/queue container the interpreter operates on

use std::collections::{vec_deque, VecDeque};

use crate::error::MontyError;

/// Decides which end `push` inserts at. Removal is always at the front.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Mode {
    /// LIFO: insert at the front
    #[default]
    Stack,
    /// FIFO: insert at the back
    Queue,
}

/// Sequence of integers whose front is always the next element to be popped.
#[derive(Debug, Default)]
pub struct Stack {
    values: VecDeque<i32>,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            values: VecDeque::new(),
        }
    }

    /// Insert `value` at the end chosen by `mode`.
    pub fn push(&mut self, mode: Mode, value: i32) -> Result<(), MontyError> {
        match mode {
            Mode::Stack => self.push_front(value),
            Mode::Queue => self.push_back(value),
        }
    }

    pub fn push_front(&mut self, value: i32) -> Result<(), MontyError> {
        self.reserve()?;
        self.values.push_front(value);
        Ok(())
    }

    pub fn push_back(&mut self, value: i32) -> Result<(), MontyError> {
        self.reserve()?;
        self.values.push_back(value);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<i32> {
        self.values.pop_front()
    }

    pub fn front(&self) -> Option<i32> {
        self.values.front().copied()
    }

    /// The two front values as `(first, second)`
    pub fn front_pair(&self) -> Option<(i32, i32)> {
        Some((*self.values.front()?, *self.values.get(1)?))
    }

    /// Remove the front value and overwrite the new front with `f(second, first)`.
    /// Leaves the container untouched when it holds fewer than two values.
    pub fn fold_front<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(i32, i32) -> i32,
    {
        let Some((first, second)) = self.front_pair() else {
            return false;
        };
        self.values.pop_front();
        self.values[0] = f(second, first);
        true
    }

    /// Exchange the two front values. Returns false when there are fewer than two.
    pub fn swap_front(&mut self) -> bool {
        if self.values.len() < 2 {
            return false;
        }
        self.values.swap(0, 1);
        true
    }

    /// The front value moves to the back
    pub fn rotate_left(&mut self) {
        if self.values.len() > 1 {
            self.values.rotate_left(1);
        }
    }

    /// The back value moves to the front
    pub fn rotate_right(&mut self) {
        if self.values.len() > 1 {
            self.values.rotate_right(1);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from front to back
    pub fn iter(&self) -> vec_deque::Iter<'_, i32> {
        self.values.iter()
    }

    fn reserve(&mut self) -> Result<(), MontyError> {
        self.values
            .try_reserve(1)
            .map_err(|_| MontyError::OutOfMemory)
    }
}

impl<'s> IntoIterator for &'s Stack {
    type Item = &'s i32;
    type IntoIter = vec_deque::Iter<'s, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
