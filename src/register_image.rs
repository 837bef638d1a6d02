// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2023.

//! Packing of date and time values into 32-bit register words.
//!
//! Calendar RTC hardware commonly exposes its state as one date word
//! and one time word, and the same pair is a convenient fixed encoding
//! for carrying a [`DateTimeValues`] across register-width interfaces
//! (backup registers, mailboxes, system calls). The layout used here:
//!
//! date word (year, month, day of the month):
//!  - bits 0-4 store the day of the month
//!  - bits 5-8 store the month numeral, 1 = January
//!  - bits 9-20 store the year
//!
//! time word (day of the week, hour, minute, seconds):
//!  - bits 0-5 store the seconds
//!  - bits 6-11 store the minute
//!  - bits 12-16 store the hour
//!  - bits 17-19 store the weekday numeral, 0 = Sunday

use tock_registers::{register_bitfields, LocalRegisterCopy};

use crate::calendar::{self, LeapYearPolicy};
use crate::date_time::{DateTimeValues, DayOfWeek, Month};
use crate::error_codes::ErrorCode;

register_bitfields![u32,
    /// The date register word.
    DATE [
        /// Calendar year
        YEAR OFFSET(9) NUMBITS(12) [],
        /// Month numeral, 1 = January
        MONTH OFFSET(5) NUMBITS(4) [],
        /// Day of the month, starting at 1
        DAY OFFSET(0) NUMBITS(5) []
    ],
    /// The time register word.
    TIME [
        /// Weekday numeral, 0 = Sunday
        DOTW OFFSET(17) NUMBITS(3) [],
        /// Hour of the day
        HOUR OFFSET(12) NUMBITS(5) [],
        /// Minute of the hour
        MIN OFFSET(6) NUMBITS(6) [],
        /// Second of the minute
        SEC OFFSET(0) NUMBITS(6) []
    ]
];

/// Packs a date and time into its `(date, time)` register word pair.
///
/// Fails with [`ErrorCode::InvalidDateTime`] when a field does not fit
/// its register field, which for in-range dates only happens for years
/// above 4095. The derived `day_of_year` has no place in the words and
/// is dropped; `day_of_week` is carried verbatim.
pub fn date_time_as_words(date_time: &DateTimeValues) -> Result<(u32, u32), ErrorCode> {
    if date_time.year > 4095
        || date_time.day > 31
        || date_time.hour > 23
        || date_time.minute > 59
        || date_time.seconds > 59
    {
        return Err(ErrorCode::InvalidDateTime);
    }

    let mut date: LocalRegisterCopy<u32, DATE::Register> = LocalRegisterCopy::new(0);
    date.modify(DATE::YEAR.val(u32::from(date_time.year)));
    date.modify(DATE::MONTH.val(date_time.month.into_u32()));
    date.modify(DATE::DAY.val(u32::from(date_time.day)));

    let mut time: LocalRegisterCopy<u32, TIME::Register> = LocalRegisterCopy::new(0);
    time.modify(TIME::DOTW.val(date_time.day_of_week.into_u32()));
    time.modify(TIME::HOUR.val(u32::from(date_time.hour)));
    time.modify(TIME::MIN.val(u32::from(date_time.minute)));
    time.modify(TIME::SEC.val(u32::from(date_time.seconds)));

    Ok((date.get(), time.get()))
}

/// Unpacks a `(date, time)` register word pair.
///
/// The unused high bits of both words are ignored. The leap year policy
/// is needed to rebuild the derived `day_of_year` field. Fails with
/// [`ErrorCode::InvalidDateTime`] on a month or weekday numeral with no
/// calendar meaning, or a field outside its range (the day is checked
/// against the real month length under `policy`).
pub fn date_time_from_words(
    date_word: u32,
    time_word: u32,
    policy: LeapYearPolicy,
) -> Result<DateTimeValues, ErrorCode> {
    let date: LocalRegisterCopy<u32, DATE::Register> = LocalRegisterCopy::new(date_word);
    let time: LocalRegisterCopy<u32, TIME::Register> = LocalRegisterCopy::new(time_word);

    let year = date.read(DATE::YEAR) as u16;
    let month = Month::try_from_u32(date.read(DATE::MONTH))?;
    let day = date.read(DATE::DAY) as u8;
    let day_of_week = DayOfWeek::try_from_u32(time.read(TIME::DOTW))?;
    let hour = time.read(TIME::HOUR) as u8;
    let minute = time.read(TIME::MIN) as u8;
    let seconds = time.read(TIME::SEC) as u8;

    let leap_year = calendar::is_leap_year(year, policy);
    if day < 1 || day > month.days(leap_year) || hour > 23 || minute > 59 || seconds > 59 {
        return Err(ErrorCode::InvalidDateTime);
    }

    Ok(DateTimeValues {
        year,
        month,
        day,
        day_of_week,
        day_of_year: calendar::day_of_year(year, month, day, policy),
        hour,
        minute,
        seconds,
    })
}
