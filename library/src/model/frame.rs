use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Index of one output frame.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    pub const fn new(index: u64) -> Self {
        Frame(index)
    }

    pub const fn index(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Frame {
        Frame(self.0.saturating_add(1))
    }

    /// Previous frame; frame 0 stays at 0.
    pub fn prev(self) -> Frame {
        Frame(self.0.saturating_sub(1))
    }

    /// Absolute distance in frames.
    pub fn distance(self, other: Frame) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Frame {
    fn from(value: u64) -> Self {
        Frame(value)
    }
}

impl From<Frame> for u64 {
    fn from(value: Frame) -> Self {
        value.0
    }
}

impl Add<u64> for Frame {
    type Output = Frame;

    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl Add<Frame> for Frame {
    type Output = Frame;

    fn add(self, rhs: Frame) -> Frame {
        Frame(self.0 + rhs.0)
    }
}

impl AddAssign<u64> for Frame {
    fn add_assign(&mut self, rhs: u64) {
        self.0 += rhs;
    }
}

/// Saturates at frame 0.
impl Sub<u64> for Frame {
    type Output = Frame;

    fn sub(self, rhs: u64) -> Frame {
        Frame(self.0.saturating_sub(rhs))
    }
}

/// Saturates at frame 0.
impl Sub<Frame> for Frame {
    type Output = Frame;

    fn sub(self, rhs: Frame) -> Frame {
        Frame(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign<u64> for Frame {
    fn sub_assign(&mut self, rhs: u64) {
        self.0 = self.0.saturating_sub(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_index() {
        assert!(Frame(3) < Frame(4));
        assert_eq!(Frame(7).max(Frame(2)), Frame(7));
    }

    #[test]
    fn arithmetic_saturates_at_zero() {
        assert_eq!(Frame(5) - 10, Frame::ZERO);
        assert_eq!(Frame(0).prev(), Frame(0));
        assert_eq!(Frame(5) - Frame(2), Frame(3));
        assert_eq!(Frame(5) + 2, Frame(7));
    }

    #[test]
    fn assign_operators() {
        let mut f = Frame(10);
        f += 5;
        assert_eq!(f, Frame(15));
        f -= 20;
        assert_eq!(f, Frame::ZERO);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Frame(3).distance(Frame(10)), 7);
        assert_eq!(Frame(10).distance(Frame(3)), 7);
    }
}
