/*
    Module instantiating the classifier for the day-of-week example.

    Days are numbered 1 through 7; 1 through 5 select the work-day
    category, 6 and 7 the weekend category, and every other integer
    falls to the Invalid default.

    The Weekday enumeration keeps its ordinals as explicit, stated
    values rather than relying on declaration order, and the week
    length is a true compile-time constant so it can size the day
    number array.
*/

extern crate derive_more;
use derive_more::Display;

use super::classifier::Classifier;
use super::rule::rule;
use std::fmt;

pub const DAYS_PER_WEEK: usize = 7;

// Day numbers in the 1-through-7 input scheme; the first five are the
// work days, the last two the weekend.
pub const DAY_NUMBERS: [i64; DAYS_PER_WEEK] = [1, 2, 3, 4, 5, 6, 7];

custom_derive! {
    #[derive(Debug, PartialEq, Eq, Copy, Clone,
             IterVariants(DayKinds), IterVariantNames(DayKindNames))]
    pub enum DayKind {
        WorkDay,
        WeekendDay,
        Invalid,
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            DayKind::WorkDay => "it is a work day",
            DayKind::WeekendDay => "it is a weekend day",
            DayKind::Invalid => "do you live on earth?",
        };
        write!(f, "{}", label)
    }
}

// The classifier equivalent of the multi-label dispatch on day
// numbers: first five numbers to WorkDay, last two to WeekendDay,
// everything else to Invalid.
pub fn day_classifier() -> Classifier<DayKind> {
    Classifier::new(
        vec![
            rule(DayKind::WorkDay, &DAY_NUMBERS[..5]),
            rule(DayKind::WeekendDay, &DAY_NUMBERS[5..]),
        ],
        DayKind::Invalid,
    )
}

#[derive(Debug, Display, PartialEq, Eq, Copy, Clone)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub fn ordinal(self) -> i64 {
        self as i64
    }

    pub fn from_ordinal(n: i64) -> Option<Weekday> {
        match n {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    pub fn kind(self) -> DayKind {
        match self {
            Weekday::Saturday | Weekday::Sunday => DayKind::WeekendDay,
            _ => DayKind::WorkDay,
        }
    }
}

/*
    Unit Tests
*/
