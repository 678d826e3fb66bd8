use crate::core::BodyHandle;
use crate::error::GameError;
use crate::Result;

/// Insertion-ordered storage for bodies.
///
/// Handles are never reused, so a handle to a removed body stays dead even
/// after the storage is cleared and refilled.
#[derive(Debug, Clone)]
pub struct BodyStorage<T> {
    items: Vec<(BodyHandle, T)>,
    next_id: u32,
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds an item at the end and returns its handle
    pub fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        self.items.push((handle, item));
        handle
    }

    fn position(&self, handle: BodyHandle) -> Option<usize> {
        // Handles are issued in increasing order and items are never reordered.
        self.items.binary_search_by_key(&handle, |(h, _)| *h).ok()
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.position(handle).map(|i| &self.items[i].1)
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        let index = self.position(handle)?;
        Some(&mut self.items[index].1)
    }

    /// Gets mutable references to two distinct items at once
    pub fn get_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut T, &mut T)> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        if i == j {
            return None;
        }

        if i < j {
            let (head, tail) = self.items.split_at_mut(j);
            Some((&mut head[i].1, &mut tail[0].1))
        } else {
            let (head, tail) = self.items.split_at_mut(i);
            Some((&mut tail[0].1, &mut head[j].1))
        }
    }

    /// Removes an item, keeping the order of the rest
    pub fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        let index = self.position(handle)?;
        Some(self.items.remove(index).1)
    }

    /// Whether the handle refers to a live item
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.position(handle).is_some()
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns all handles in insertion order
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.items.iter().map(|(h, _)| *h).collect()
    }

    /// Iterates over all items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    /// Iterates mutably over all items in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut T)> + '_ {
        self.items.iter_mut().map(|(h, item)| (*h, item))
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| GameError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| GameError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }
}
