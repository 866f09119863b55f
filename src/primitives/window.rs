//! Windowing primitives for lazy sequences.
//!
//! ## Purpose
//!
//! This module provides the fixed-capacity rotating buffer and the pull-based
//! iterators built on it: sliding windows, non-overlapping chunks, and
//! pairwise tuples. They are the single-pass, bounded-memory core of the
//! windowing subsystem.
//!
//! ## Design notes
//!
//! * The buffer is a `VecDeque` with a hard capacity: push is O(1) and the
//!   oldest element is evicted once capacity is reached.
//! * Emitted windows are independent `Vec` snapshots; mutating one emitted
//!   window never affects another.
//! * All iterators pull upstream elements strictly on demand: taking the
//!   first `k` windows from an infinite upstream consumes only the prefix
//!   needed to produce them.
//!
//! ## Key concepts
//!
//! ### Sliding lifecycle
//! 1. **Fill**: upstream elements are appended until the buffer holds `size`.
//! 2. **Emit**: a snapshot of the buffer (oldest first) is yielded.
//! 3. **Slide**: the oldest element is dropped before the next pull.
//!
//! ### Chunk boundaries
//! Chunks never overlap; the final chunk may be short when the upstream
//! length is not a multiple of the chunk size. An empty upstream yields no
//! chunks.
//!
//! ## Invariants
//!
//! * Buffer length never exceeds the configured capacity.
//! * A sliding window is only emitted once the buffer has filled to capacity,
//!   so a finite upstream of length `n` yields `max(0, n - size + 1)` windows.
//! * No more than `size` upstream elements are live at any time.
//!
//! ## Non-goals
//!
//! * This module does not validate sizes; callers go through the engine's
//!   `Validator` before constructing these iterators.
//!
//! ## Visibility
//!
//! Internal detail of the engine; reached through `Sequence::window`,
//! `Sequence::chunk`, and `Sequence::pairwise`.

use std::collections::VecDeque;

// ============================================================================
// Window Buffer
// ============================================================================

/// Fixed-capacity rotating buffer holding the last `capacity` elements seen.
#[derive(Debug, Clone)]
pub struct WindowBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> WindowBuffer<T> {
    /// Create an empty buffer with the given capacity.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "WindowBuffer capacity must be at least 1");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an element, evicting the oldest when at capacity.
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(value);
    }

    /// Drop the oldest element (slide by one).
    pub fn slide(&mut self) {
        self.items.pop_front();
    }

    /// Returns the number of buffered elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` once the buffer has filled to capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }
}

impl<T: Clone> WindowBuffer<T> {
    /// Independent snapshot of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

// ============================================================================
// Sliding Windows
// ============================================================================

/// Pull-based iterator of overlapping fixed-size windows.
pub struct Windows<I: Iterator> {
    upstream: I,
    buffer: WindowBuffer<I::Item>,
}

impl<I: Iterator> Windows<I> {
    /// Build a sliding-window iterator of the given size over `upstream`.
    pub fn new(upstream: I, size: usize) -> Self {
        Self {
            upstream,
            buffer: WindowBuffer::new(size),
        }
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.buffer.is_full() {
            let value = self.upstream.next()?;
            self.buffer.push(value);
        }
        let snapshot = self.buffer.snapshot();
        self.buffer.slide();
        Some(snapshot)
    }
}

// ============================================================================
// Non-Overlapping Chunks
// ============================================================================

/// Pull-based iterator of consecutive non-overlapping groups.
pub struct Chunks<I: Iterator> {
    upstream: I,
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    /// Build a chunking iterator of the given size over `upstream`.
    pub fn new(upstream: I, size: usize) -> Self {
        debug_assert!(size >= 1, "Chunks size must be at least 1");
        Self { upstream, size }
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            match self.upstream.next() {
                Some(value) => chunk.push(value),
                None => break,
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}

// ============================================================================
// Pairwise
// ============================================================================

/// Pull-based iterator of consecutive element pairs.
///
/// Equivalent to a sliding window of size 2, specialized to emit tuples.
pub struct Pairwise<I: Iterator> {
    upstream: I,
    previous: Option<I::Item>,
}

impl<I: Iterator> Pairwise<I> {
    /// Build a pairwise iterator over `upstream`.
    pub fn new(upstream: I) -> Self {
        Self {
            upstream,
            previous: None,
        }
    }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.previous.is_none() {
            self.previous = Some(self.upstream.next()?);
        }
        let current = self.upstream.next()?;
        let previous = self.previous.replace(current.clone());
        previous.map(|p| (p, current))
    }
}
