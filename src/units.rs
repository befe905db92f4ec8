//! This module defines the unit of mass used for minerals.
use serde::{Deserialize, Serialize};
use std::iter::Sum;

/// A whole number of kilograms.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Display,
)]
#[display("{_0} kg")]
#[serde(transparent)]
pub struct Kilograms(pub u32);

impl Kilograms {
    /// Zero kilograms
    pub const ZERO: Kilograms = Kilograms(0);

    /// Returns the value as a plain `u32`.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether this is zero kilograms
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Kilograms {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl Sum for Kilograms {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Kilograms::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Kilograms> for Kilograms {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
