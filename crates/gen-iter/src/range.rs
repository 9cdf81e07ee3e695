/**
 * @file range.rs
 * @author Krisna Pranav
 * @brief range
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use crate::{bridge::Iter, Error, Generator, Result};

fn begin() -> i64 {
    0
}

fn step() -> i64 {
    1
}

/// Serializable description of a range. `begin` defaults to 0 and `step` to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RangeConfig {
    #[serde(default = "begin")]
    pub begin: i64,

    pub end: i64,

    #[serde(default = "step")]
    pub step: i64,
}

impl RangeConfig {
    pub fn new(end: i64) -> Self {
        Self {
            begin: begin(),
            end,
            step: step(),
        }
    }
}

/// Arithmetic progression over the half-open interval `[begin, end)`.
///
/// The direction follows the sign of `step`; a negative step walks down
/// towards `end` and still excludes it.
#[derive(Debug)]
pub struct Range {
    val: i64,
    step: i64,
    sign: i128,
    signed_end: i128,
}

impl Range {
    pub fn try_new(begin: i64, end: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(Error::ZeroStep);
        }

        let sign = if step < 0 { -1 } else { 1 };
        tracing::trace!(begin, end, step, "range");

        Ok(Self {
            val: begin,
            step,
            sign,
            signed_end: i128::from(end) * sign,
        })
    }

    /// Panics when `step` is zero.
    pub fn new(begin: i64, end: i64, step: i64) -> Self {
        match Self::try_new(begin, end, step) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    fn remaining(&self) -> u128 {
        if !self.has_more() {
            return 0;
        }

        let distance = (self.signed_end - i128::from(self.val) * self.sign) as u128;
        let stride = i128::from(self.step).unsigned_abs();
        distance.div_ceil(stride)
    }
} // impl Range

impl Generator for Range {
    type Current<'a> = i64;
    type Output = i64;

    #[inline]
    fn current(&self) -> i64 {
        assert!(self.has_more(), "range read past its end");
        self.val
    }

    #[inline]
    fn advance(&mut self) {
        assert!(self.has_more(), "range advanced past its end");
        self.val = self.val.saturating_add(self.step);
    }

    #[inline]
    fn has_more(&self) -> bool {
        i128::from(self.val) * self.sign < self.signed_end
    }

    fn take(&mut self) -> i64 {
        let val = self.current();
        self.advance();
        val
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
} // impl Generator for Range

impl From<i64> for Range {
    fn from(end: i64) -> Self {
        Self::new(begin(), end, step())
    }
}

impl From<(i64, i64)> for Range {
    fn from((begin, end): (i64, i64)) -> Self {
        Self::new(begin, end, step())
    }
}

impl From<(i64, i64, i64)> for Range {
    fn from((begin, end, step): (i64, i64, i64)) -> Self {
        Self::new(begin, end, step)
    }
}

impl TryFrom<RangeConfig> for Range {
    type Error = Error;

    fn try_from(config: RangeConfig) -> Result<Self> {
        Self::try_new(config.begin, config.end, config.step)
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = Iter<Range>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// `range(end)`, `range((begin, end))` or `range((begin, end, step))`.
///
/// Panics when `step` is zero.
pub fn range(bounds: impl Into<Range>) -> Range {
    bounds.into()
}
