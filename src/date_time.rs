// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2023.

//! Hardware-independent types for calendar date and time.
//!
//! RTC drivers read raw register fields, assemble a [`DateTimeValues`],
//! and hand it to the conversions in [`calendar`](crate::calendar);
//! in the other direction they take a `DateTimeValues` apart and write
//! the fields back into hardware, applying whatever encoding their
//! registers use (BCD, different weekday origins, and so on).
//!
//! The [`DateTime`] trait is the interface such drivers present to the
//! rest of the system, whether the hardware is real calendar silicon or
//! a bare counter extended in software by
//! [`CalendarClock`](crate::counter::CalendarClock).

use crate::error_codes::ErrorCode;

/// Months of the year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Month {
    /// January
    January,
    /// February
    February,
    /// March
    March,
    /// April
    April,
    /// May
    May,
    /// June
    June,
    /// July
    July,
    /// August
    August,
    /// September
    September,
    /// October
    October,
    /// November
    November,
    /// December
    December,
}

impl Month {
    /// The month numeral as date registers store it, 1 = January.
    pub fn into_u32(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    /// The month for a register numeral, 1 = January.
    pub fn try_from_u32(month_num: u32) -> Result<Month, ErrorCode> {
        match month_num {
            1 => Ok(Month::January),
            2 => Ok(Month::February),
            3 => Ok(Month::March),
            4 => Ok(Month::April),
            5 => Ok(Month::May),
            6 => Ok(Month::June),
            7 => Ok(Month::July),
            8 => Ok(Month::August),
            9 => Ok(Month::September),
            10 => Ok(Month::October),
            11 => Ok(Month::November),
            12 => Ok(Month::December),
            _ => Err(ErrorCode::InvalidDateTime),
        }
    }

    /// The number of days in this month. `leap_year` selects the
    /// February length.
    pub fn days(self, leap_year: bool) -> u8 {
        match self {
            Month::January => 31,
            Month::February => {
                if leap_year {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Zero-based index of this month, January = 0.
    pub(crate) fn index(self) -> usize {
        (self.into_u32() - 1) as usize
    }
}

/// Days of the week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayOfWeek {
    /// Sunday
    Sunday,
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
}

impl DayOfWeek {
    /// The weekday numeral as time registers store it, 0 = Sunday.
    pub fn into_u32(self) -> u32 {
        match self {
            DayOfWeek::Sunday => 0,
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
        }
    }

    /// The weekday for a register numeral, 0 = Sunday.
    pub fn try_from_u32(dotw_num: u32) -> Result<DayOfWeek, ErrorCode> {
        match dotw_num {
            0 => Ok(DayOfWeek::Sunday),
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            _ => Err(ErrorCode::InvalidDateTime),
        }
    }

    /// The weekday of a whole-day count since the epoch. Day 0,
    /// 1970-01-01, was a Thursday; the offset of 4 below is that anchor
    /// and must not change.
    pub fn from_days_since_epoch(days: u32) -> DayOfWeek {
        match (days + 4) % 7 {
            0 => DayOfWeek::Sunday,
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            _ => DayOfWeek::Saturday,
        }
    }
}

/// A date and time broken down into its calendar components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTimeValues {
    /// Calendar year, e.g. 2004. The conversions accept 1970 through
    /// 2106.
    pub year: u16,
    /// Month of the year.
    pub month: Month,
    /// Day of the month, starting at 1.
    pub day: u8,
    /// Day of the week. Derived when converting from epoch seconds;
    /// never consulted when converting a date to epoch seconds.
    pub day_of_week: DayOfWeek,
    /// Day of the year, 0 = January 1. Derived when converting from
    /// epoch seconds; never consulted in the other direction.
    pub day_of_year: u16,
    /// Hour of the day, 0-23.
    pub hour: u8,
    /// Minute of the hour, 0-59.
    pub minute: u8,
    /// Second of the minute, 0-59.
    pub seconds: u8,
}

/// Interface for devices that keep calendar time.
///
/// Drivers for calendar RTC hardware implement this directly over their
/// date and time registers. Drivers for bare counter hardware get an
/// implementation from [`CalendarClock`](crate::counter::CalendarClock).
pub trait DateTime {
    /// Returns the current date and time.
    fn get_date_time(&self) -> Result<DateTimeValues, ErrorCode>;

    /// Sets the current date and time.
    ///
    /// Only the calendar fields are meaningful; `day_of_week` and
    /// `day_of_year` are derived values and implementations must not
    /// let them influence the stored time.
    fn set_date_time(&self, date_time: DateTimeValues) -> Result<(), ErrorCode>;
}
