// File: crates/chart-core/src/ring_buffer.rs
// Summary: FIFO circular buffer with explicit eviction, used as moving-average window state.
// Notes:
// - `enqueue` never drops samples. Callers that want a bounded window dequeue
//   first; a full buffer grows its storage instead.

use std::fmt;

#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, head: 0, len: 0 }
    }

    /// Number of samples the buffer holds before it has to grow.
    pub fn capacity(&self) -> usize { self.slots.len() }
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Append `value` as the newest sample.
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(value);
        self.len += 1;
    }

    /// Remove and return the oldest sample.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    /// Oldest sample.
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 { return None; }
        self.slots[self.head].as_ref()
    }

    /// Newest sample.
    pub fn peek_back(&self) -> Option<&T> {
        if self.len == 0 { return None; }
        self.slots[self.slot(self.len - 1)].as_ref()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Oldest-to-newest traversal. Each call starts over from the oldest sample.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { buffer: self, offset: 0 }
    }

    /// Visit every sample, oldest first.
    pub fn each<F: FnMut(&T)>(&self, mut visit: F) {
        for value in self.iter() {
            visit(value);
        }
    }

    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.slots.len()
    }

    // Unwraps the ring into a fresh, larger Vec so `head` returns to 0.
    fn grow(&mut self) {
        let new_capacity = (self.slots.len() * 2).max(4);
        let mut slots = Vec::with_capacity(new_capacity);
        for offset in 0..self.len {
            let index = self.slot(offset);
            slots.push(self.slots[index].take());
        }
        slots.resize_with(new_capacity, || None);
        self.slots = slots;
        self.head = 0;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Owned copy of the samples, oldest first.
    pub fn contents(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self { Self::new() }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 { f.write_str(" ")?; }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.buffer.len {
            return None;
        }
        let index = self.buffer.slot(self.offset);
        self.offset += 1;
        self.buffer.slots[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
