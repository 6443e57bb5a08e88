// Copyright (c) 2024, Pointer Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Generic pointer-tracking stack implementation.

use tracing::trace;

use crate::errors::{Error, Result};

/// A generic stack implemented using a Vec, paired with a movable cursor
/// ("pointer") referencing one of the stored items.
///
/// The cursor is `None` exactly when the stack is empty; otherwise it holds a
/// valid index into the items. Tail mutation (`push`, `pop`, `clear`) always
/// re-synchronizes the cursor, while [`set_pointer`](Self::set_pointer) moves
/// it freely within the valid range.
#[derive(Debug, Clone, Default)]
pub struct PointerStack<T> {
    items: Vec<T>,
    pointer: Option<usize>,
}

impl<T> PointerStack<T> {
    /// Creates a new empty stack.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pointer: None,
        }
    }

    /// Creates a new empty stack with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            pointer: None,
        }
    }

    /// Pushes an item onto the stack and moves the cursor to it.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.pointer = Some(self.items.len() - 1);
        trace!(len = self.items.len(), pointer = ?self.pointer, "push");
    }

    /// Pushes multiple items onto the stack; the cursor lands on the most
    /// recent item.
    pub fn push_many(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
        self.pointer = self.items.len().checked_sub(1);
        trace!(len = self.items.len(), pointer = ?self.pointer, "push_many");
    }

    /// Pops the top item off the stack and moves the cursor to the new top.
    /// Returns `None` if the stack is empty, leaving the cursor unset.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop();
        self.pointer = self.items.len().checked_sub(1);
        trace!(len = self.items.len(), pointer = ?self.pointer, "pop");
        item
    }

    /// Returns a reference to the top item on the stack without removing it.
    /// Returns `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the top item on the stack without
    /// removing it. Returns `None` if the stack is empty.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Returns a reference to the item under the cursor.
    /// Returns `None` if the cursor is unset.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.pointer?)
    }

    /// Advances the cursor by one and returns the newly referenced item.
    /// Returns `None` without moving the cursor if there is no next item.
    pub fn move_next(&mut self) -> Option<&T> {
        let next = match self.pointer {
            Some(index) => index + 1,
            None => 0,
        };
        if next >= self.items.len() {
            return None;
        }
        self.pointer = Some(next);
        self.items.get(next)
    }

    /// Moves the cursor back by one and returns the newly referenced item.
    /// Returns `None` without moving the cursor if the stack is empty or the
    /// cursor is already on the first item.
    pub fn move_prev(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let prev = self.pointer?.checked_sub(1)?;
        self.pointer = Some(prev);
        self.items.get(prev)
    }

    /// Moves the cursor to the given index.
    ///
    /// Returns [`Error::OutOfRange`] and leaves the cursor unchanged if the
    /// index does not reference a stored item. This cannot unset the cursor;
    /// only [`clear`](Self::clear), popping the last item, or empty
    /// construction produce that state.
    pub fn set_pointer(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.pointer = Some(index);
        trace!(index, "set_pointer");
        Ok(())
    }

    /// Returns the current cursor position, or `None` if it is unset.
    pub fn pointer(&self) -> Option<usize> {
        self.pointer
    }

    /// Returns the number of items in the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears the stack, removing all items and unsetting the cursor.
    pub fn clear(&mut self) {
        self.items.clear();
        self.pointer = None;
        trace!("clear");
    }
}

impl<T> From<Vec<T>> for PointerStack<T> {
    /// Seeds the stack from an existing sequence; the cursor lands on the last
    /// item, or stays unset when the sequence is empty.
    fn from(items: Vec<T>) -> Self {
        let pointer = items.len().checked_sub(1);
        Self { items, pointer }
    }
}

impl<T> FromIterator<T> for PointerStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}
