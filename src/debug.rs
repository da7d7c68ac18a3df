//! Helpers for Debug impls.

use core::fmt;

/// Write a `len/capacity` header, then one row per live slot, top first:
///
/// ```text
/// 3/20
///  2 | 30.9  <- top
///  1 | 20.7
///  0 | 10.5
/// ```
pub(crate) fn write_slots(f: &mut fmt::Formatter<'_>, live: &[f32], capacity: usize) -> fmt::Result {
    writeln!(f, "{}/{capacity}", live.len())?;

    if live.is_empty() {
        return writeln!(f, "(empty)");
    }

    // Pad indices to the widest one this stack could ever show.
    let width = decimal_digits(capacity.saturating_sub(1));
    let top = live.len().checked_sub(1);

    for (i, value) in live.iter().enumerate().rev() {
        write!(f, "{i:>width$} | {value}")?;
        if Some(i) == top {
            write!(f, "  <- top")?;
        }
        writeln!(f)?;
    }

    Ok(())
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Slots<'a>(&'a [f32], usize);

    impl fmt::Debug for Slots<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_slots(f, self.0, self.1)
        }
    }

    #[test]
    fn indices_are_padded_to_capacity() {
        let dump = format!("{:?}", Slots(&[10.5, 20.7, 30.9], 20));
        assert_eq!(dump, "3/20\n 2 | 30.9  <- top\n 1 | 20.7\n 0 | 10.5\n");
    }

    #[test]
    fn empty_stack() {
        assert_eq!(format!("{:?}", Slots(&[], 20)), "0/20\n(empty)\n");
    }

    #[test]
    fn digit_counts() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(19), 2);
        assert_eq!(decimal_digits(100), 3);
    }
}
