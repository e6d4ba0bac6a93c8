//! Schedule arithmetic
//!
//! Pure calendar computations under the ISO-8601 week convention: weeks
//! run Monday through Sunday and week 1 is the week containing the year's
//! first Thursday. The order week changes over every Saturday at midnight,
//! and orders for the upcoming week close at the deadline, Thursday 15:00.
//!
//! Everything here takes its instant and time zone explicitly; only the
//! `current_*` conveniences consult the ambient clock and system zone.

use jiff::{
    Span, Timestamp, Zoned,
    civil::{Date, ISOWeekDate, Time, Weekday, time},
    tz::TimeZone,
};
use tracing::warn;

use crate::weeks::WeekIdentifier;

const CHANGEOVER_WEEKDAY: Weekday = Weekday::Saturday;
const CHANGEOVER_TIME: Time = time(0, 0, 0, 0);

const DEADLINE_WEEKDAY: Weekday = Weekday::Thursday;
const DEADLINE_TIME: Time = time(15, 0, 0, 0);

impl WeekIdentifier {
    /// The ISO week containing `timestamp`, evaluated in `tz`.
    ///
    /// Total: every representable instant falls in exactly one ISO week.
    #[must_use]
    pub fn from_timestamp(timestamp: Timestamp, tz: &TimeZone) -> Self {
        let iso = timestamp.to_zoned(tz.clone()).date().iso_week_date();

        Self::new(iso.year(), iso.week())
    }

    /// The ISO week containing the current instant, in the system zone.
    #[must_use]
    pub fn current() -> Self {
        Self::from_timestamp(Timestamp::now(), &TimeZone::system())
    }

    /// The week's first instant: its Monday at midnight in `tz`.
    ///
    /// Returns `None` when the pair is not a representable week, such as
    /// week 53 of a year with only 52 ISO weeks.
    #[must_use]
    pub fn start_instant(self, tz: &TimeZone) -> Option<Timestamp> {
        let monday = self.monday()?;
        let start = monday.to_zoned(tz.clone()).ok()?;

        Some(start.timestamp())
    }

    /// Shifts this week by `weeks` whole ISO weeks; negative shifts move
    /// backwards.
    ///
    /// Computed on the week's civil Monday, so the result is the same in
    /// every time zone. Returns `None` when this week is not representable
    /// or the shifted week leaves the supported date range.
    #[must_use]
    pub fn checked_add(self, weeks: i64) -> Option<Self> {
        let monday = self.monday()?;
        let span = Span::new().try_weeks(weeks).ok()?;
        let shifted = monday.checked_add(span).ok()?.iso_week_date();

        Some(Self::new(shifted.year(), shifted.week()))
    }

    /// Shifts this week backwards by `weeks` whole ISO weeks; the inverse
    /// of [`WeekIdentifier::checked_add`].
    #[must_use]
    pub fn checked_sub(self, weeks: i64) -> Option<Self> {
        self.checked_add(weeks.checked_neg()?)
    }

    fn monday(self) -> Option<Date> {
        let iso = ISOWeekDate::new(self.year, self.week, Weekday::Monday).ok()?;

        Some(iso.date())
    }
}

/// The next changeover, Saturday midnight, strictly after `after`, in
/// `after`'s own time zone.
///
/// An `after` exactly at a changeover yields the changeover one week
/// later. Returns `None` only when the occurrence cannot be resolved in
/// the zone's calendar.
#[must_use]
pub fn next_changeover(after: &Zoned) -> Option<Zoned> {
    next_weekday_at(after, CHANGEOVER_WEEKDAY, CHANGEOVER_TIME)
}

/// The next order deadline, Thursday 15:00, strictly after `after`, in
/// `after`'s own time zone.
///
/// An `after` exactly at a deadline yields the deadline one week later.
/// Returns `None` only when the occurrence cannot be resolved in the
/// zone's calendar.
#[must_use]
pub fn next_deadline(after: &Zoned) -> Option<Zoned> {
    next_weekday_at(after, DEADLINE_WEEKDAY, DEADLINE_TIME)
}

/// The next changeover after the current instant, in the system zone.
///
/// Falls back to returning the current instant unchanged when the search
/// fails, logging a warning.
#[must_use]
pub fn current_changeover() -> Zoned {
    let now = Zoned::now();

    match next_changeover(&now) {
        Some(changeover) => changeover,
        None => {
            warn!("no next changeover resolvable; falling back to the current instant");
            now
        }
    }
}

/// The next deadline after the current instant, in the system zone.
///
/// Falls back to returning the current instant unchanged when the search
/// fails, logging a warning.
#[must_use]
pub fn current_deadline() -> Zoned {
    let now = Zoned::now();

    match next_deadline(&now) {
        Some(deadline) => deadline,
        None => {
            warn!("no next deadline resolvable; falling back to the current instant");
            now
        }
    }
}

/// The first `weekday` at `at` strictly after `after`.
///
/// The same civil day only counts while its target time is still ahead;
/// at or past it, the occurrence is a full week later.
fn next_weekday_at(after: &Zoned, weekday: Weekday, at: Time) -> Option<Zoned> {
    let date = if after.date().weekday() == weekday && after.time() < at {
        after.date()
    } else {
        after.date().nth_weekday(1, weekday).ok()?
    };

    date.to_datetime(at)
        .to_zoned(after.time_zone().clone())
        .ok()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn week_of_a_known_instant() -> TestResult {
        // 2025-11-07 is a Friday in ISO week 45.
        let instant = date(2025, 11, 7).at(12, 0, 0, 0).to_zoned(TimeZone::UTC)?;

        assert_eq!(
            WeekIdentifier::from_timestamp(instant.timestamp(), &TimeZone::UTC),
            WeekIdentifier::new(2025, 45)
        );

        Ok(())
    }

    #[test]
    fn week_year_differs_from_civil_year_at_the_boundary() -> TestResult {
        // 2027-01-01 is a Friday; it belongs to ISO week 53 of 2026.
        let instant = date(2027, 1, 1).at(0, 0, 0, 0).to_zoned(TimeZone::UTC)?;

        assert_eq!(
            WeekIdentifier::from_timestamp(instant.timestamp(), &TimeZone::UTC),
            WeekIdentifier::new(2026, 53)
        );

        Ok(())
    }

    #[test]
    fn start_instant_is_the_weeks_monday_at_midnight() -> TestResult {
        let start = WeekIdentifier::new(2025, 45).start_instant(&TimeZone::UTC);
        let monday = date(2025, 11, 3).at(0, 0, 0, 0).to_zoned(TimeZone::UTC)?;

        assert_eq!(start, Some(monday.timestamp()));

        Ok(())
    }

    #[test]
    fn week_53_exists_only_in_long_years() {
        // 2026 has 53 ISO weeks; 2025 has 52.
        assert!(WeekIdentifier::new(2026, 53).start_instant(&TimeZone::UTC).is_some());
        assert!(WeekIdentifier::new(2025, 53).start_instant(&TimeZone::UTC).is_none());
    }

    #[test]
    fn round_trips_through_its_start_instant() {
        let weeks = [
            WeekIdentifier::new(2025, 1),
            WeekIdentifier::new(2025, 45),
            WeekIdentifier::new(2026, 53),
        ];

        for week in weeks {
            let start = week.start_instant(&TimeZone::UTC);

            assert!(start.is_some(), "{week} should have a start instant");

            if let Some(start) = start {
                assert_eq!(WeekIdentifier::from_timestamp(start, &TimeZone::UTC), week);
            }
        }
    }

    #[test]
    fn adding_weeks_crosses_year_boundaries() {
        let week = WeekIdentifier::new(2025, 52);

        assert_eq!(week.checked_add(1), Some(WeekIdentifier::new(2026, 1)));
        assert_eq!(
            WeekIdentifier::new(2026, 1).checked_sub(1),
            Some(WeekIdentifier::new(2025, 52))
        );
    }

    #[test]
    fn subtracting_undoes_adding() {
        let week = WeekIdentifier::new(2025, 45);

        for shift in [-104, -53, -1, 0, 1, 53, 104] {
            let there_and_back = week.checked_add(shift).and_then(|w| w.checked_sub(shift));

            assert_eq!(there_and_back, Some(week), "shift {shift}");
        }
    }

    #[test]
    fn adding_weeks_to_an_unrepresentable_week_is_none() {
        assert_eq!(WeekIdentifier::new(2025, 53).checked_add(1), None);
    }

    #[test]
    fn changeover_and_deadline_stay_in_the_input_zone() -> TestResult {
        let zone = TimeZone::fixed(jiff::tz::offset(2));
        let after = date(2025, 11, 4).at(9, 30, 0, 0).to_zoned(zone.clone())?;

        let changeover = next_changeover(&after);
        let deadline = next_deadline(&after);

        assert_eq!(
            changeover,
            Some(date(2025, 11, 8).at(0, 0, 0, 0).to_zoned(zone.clone())?)
        );
        assert_eq!(
            deadline,
            Some(date(2025, 11, 6).at(15, 0, 0, 0).to_zoned(zone)?)
        );

        Ok(())
    }
}
