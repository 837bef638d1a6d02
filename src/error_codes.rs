// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2023.

//! The error codes reported by the calendar conversions.

/// Standard error codes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorCode {
    /// A date or time field is outside the range the conversions
    /// accept, for example a minute of 60, a day of 0, or February 29
    /// of a year the active leap year policy treats as a common year.
    InvalidDateTime,
    /// The year is before 1970 or after 2106, the span a 32-bit second
    /// count can reach.
    YearOutOfRange,
    /// The date is inside the supported year range but past the instant
    /// in early February 2106 where the 32-bit second count wraps.
    EpochOverflow,
}
