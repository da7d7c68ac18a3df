use core::fmt::{self, Debug, Display};

use crate::debug;

/// Number of slots in a stack when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 20;

/// A last-in-first-out stack of `f32` values backed by a fixed array of `N`
/// slots. Never allocates.
///
/// Invalid operations are not errors: pushing onto a full stack discards the
/// value, and popping or peeking an empty stack yields `None`.
#[derive(Clone)]
pub struct BoundedStack<const N: usize = DEFAULT_CAPACITY> {
    values: [f32; N],
    /// Number of live values. The top of the stack is at `len - 1`.
    len: usize,
}

impl<const N: usize> BoundedStack<N> {
    pub const CAPACITY: usize = N;

    /// Returned by [`Self::pop_or_sentinel`] and [`Self::peek_or_sentinel`]
    /// when the stack is empty.
    pub const SENTINEL: f32 = 0.0;

    pub const fn new() -> Self {
        Self {
            values: [0.0; N],
            len: 0,
        }
    }

    /// Silently discards `value` if the stack is full.
    pub fn push(&mut self, value: f32) {
        self.try_push(value).ok();
    }

    /// Like `push`, but hands the value back if it was discarded.
    pub fn try_push(&mut self, value: f32) -> Result<(), Full> {
        let slot = self.values.get_mut(self.len).ok_or(Full(value))?;
        *slot = value;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<f32> {
        let top = self.len.checked_sub(1)?;
        let value = self.values.get(top).copied()?;
        // The old slot keeps its value, but it's no longer live.
        self.len = top;
        Some(value)
    }

    pub fn peek(&self) -> Option<f32> {
        self.as_slice().last().copied()
    }

    pub fn pop_or_sentinel(&mut self) -> f32 {
        self.pop().unwrap_or(Self::SENTINEL)
    }

    pub fn peek_or_sentinel(&self) -> f32 {
        self.peek().unwrap_or(Self::SENTINEL)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Buffer contents are left as they are; only the length is reset.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Live values, bottom of the stack first.
    pub fn as_slice(&self) -> &[f32] {
        self.values.get(..self.len).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f32> + '_ {
        self.as_slice().iter().copied()
    }
}

impl<const N: usize> Default for BoundedStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two stacks are equal if their live values are; stale slots don't count.
impl<const N: usize> PartialEq for BoundedStack<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Debug for BoundedStack<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.debug_list().entries(self.iter()).finish();
        }

        writeln!(f)?;
        debug::write_slots(f, self.as_slice(), N)
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for BoundedStack<N> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=usize}/{=usize} {=[?]}", self.len, N, self.as_slice())
    }
}

/// Returned by [`BoundedStack::try_push`] when there was no room for the value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Full(pub f32);

impl Display for Full {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack is full, discarded {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Full {}
