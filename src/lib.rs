// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2023.

//! # RTC Calendar
//!
//! Conversion between broken-down calendar time and a 32-bit count of
//! seconds since 1970-01-01T00:00:00Z, for real-time clock drivers.
//!
//! This crate was written for RTC drivers in the Tock kernel, but it is
//! hardware independent and `no_std`, so any embedded Rust project can
//! use it.
//!
//! RTC peripherals come in two flavors. Calendar hardware keeps
//! year/month/day/hour/minute/second registers and drivers need a way
//! to turn those into a scalar time and back. Counter hardware keeps a
//! free-running seconds count and drivers need the calendar math done
//! entirely in software. This crate serves both:
//!
//!  * [`epoch_from_date_time`] and [`date_time_from_epoch`] convert a
//!    [`DateTimeValues`] to and from epoch seconds, losslessly across
//!    the whole supported range (1970 through the 32-bit wrap point in
//!    February 2106).
//!  * [`CalendarClock`](counter::CalendarClock) extends a narrow
//!    free-running counter to the full epoch range and exposes it
//!    through the [`DateTime`] interface that calendar-hardware drivers
//!    implement directly.
//!  * [`register_image`] packs a `DateTimeValues` into the 32-bit
//!    date/time register word pair used by common calendar hardware.
//!
//! Counter silicon frequently implements the leap year rule as "the low
//! two bits of the year are zero", which wrongly makes 2100 a leap
//! year. Every conversion therefore takes a [`LeapYearPolicy`] so a
//! driver can match what its hardware actually does; see the
//! [`calendar`] module documentation.
//!
//! ## Usage
//!
//! ```rust
//! use rtc_calendar::{date_time_from_epoch, epoch_from_date_time};
//! use rtc_calendar::{DayOfWeek, LeapYearPolicy, Month};
//!
//! let date_time = date_time_from_epoch(1_078_012_800, LeapYearPolicy::Gregorian);
//! assert_eq!(date_time.year, 2004);
//! assert_eq!(date_time.month, Month::February);
//! assert_eq!(date_time.day, 29);
//! assert_eq!(date_time.day_of_week, DayOfWeek::Sunday);
//!
//! let epoch = epoch_from_date_time(&date_time, LeapYearPolicy::Gregorian);
//! assert_eq!(epoch, Ok(1_078_012_800));
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod calendar;
pub mod counter;
pub mod date_time;
pub mod error_codes;
pub mod register_image;

// Use this to generate nicer docs
#[doc(inline)]
pub use crate::calendar::{
    date_time_from_epoch, epoch_from_date_time, is_leap_year, LeapYearPolicy,
};
#[doc(inline)]
pub use crate::date_time::{DateTime, DateTimeValues, DayOfWeek, Month};
#[doc(inline)]
pub use crate::error_codes::ErrorCode;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
