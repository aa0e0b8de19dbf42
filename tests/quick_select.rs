mod common;

use calrange::ui::picker::QuickSelect;
use common::*;

#[test]
fn today_is_single_day() {
    assert_eq!(
        QuickSelect::Today.range(date(2024, 3, 15)),
        (date(2024, 3, 15), date(2024, 3, 15))
    );
}

#[test]
fn last_seven_days_includes_today() {
    assert_eq!(
        QuickSelect::Last7Days.range(date(2024, 3, 15)),
        (date(2024, 3, 9), date(2024, 3, 15))
    );
}

#[test]
fn last_fifteen_days_crosses_month() {
    assert_eq!(
        QuickSelect::Last15Days.range(date(2024, 3, 5)),
        (date(2024, 2, 20), date(2024, 3, 5))
    );
}

#[test]
fn this_month_in_leap_february() {
    assert_eq!(
        QuickSelect::ThisMonth.range(date(2024, 2, 10)),
        (date(2024, 2, 1), date(2024, 2, 29))
    );
    assert_eq!(
        QuickSelect::ThisMonth.range(date(2023, 2, 10)),
        (date(2023, 2, 1), date(2023, 2, 28))
    );
}

#[test]
fn last_three_months_starts_on_first() {
    assert_eq!(
        QuickSelect::Last3Months.range(date(2024, 3, 15)),
        (date(2023, 12, 1), date(2024, 3, 15))
    );
}

#[test]
fn this_year_spans_calendar_year() {
    assert_eq!(
        QuickSelect::ThisYear.range(date(2024, 3, 15)),
        (date(2024, 1, 1), date(2024, 12, 31))
    );
}

#[test]
fn ids_round_trip() {
    for preset in QuickSelect::ALL {
        assert_eq!(QuickSelect::from_id(preset.id()), Some(preset));
    }
    assert_eq!(QuickSelect::from_id("yesterday"), None);
}
