use chrono::{Datelike, Days, NaiveDate};

use crate::date::{add_months, first_of_month, last_of_month};

/// Named shortcuts relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickSelect {
    Today,
    Last7Days,
    Last15Days,
    ThisMonth,
    Last3Months,
    ThisYear,
}

impl QuickSelect {
    pub const ALL: [QuickSelect; 6] = [
        QuickSelect::Today,
        QuickSelect::Last7Days,
        QuickSelect::Last15Days,
        QuickSelect::ThisMonth,
        QuickSelect::Last3Months,
        QuickSelect::ThisYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickSelect::Today => "Today",
            QuickSelect::Last7Days => "Last 7 Days",
            QuickSelect::Last15Days => "Last 15 Days",
            QuickSelect::ThisMonth => "This Month",
            QuickSelect::Last3Months => "Last 3 Months",
            QuickSelect::ThisYear => "This Year",
        }
    }

    /// Stable identifier, also accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            QuickSelect::Today => "today",
            QuickSelect::Last7Days => "last7days",
            QuickSelect::Last15Days => "last15days",
            QuickSelect::ThisMonth => "thismonth",
            QuickSelect::Last3Months => "last3months",
            QuickSelect::ThisYear => "thisyear",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.id() == id)
    }

    /// Inclusive `(start, end)` for this preset.
    pub fn range(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let days_back = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(today);
        match self {
            QuickSelect::Today => (today, today),
            QuickSelect::Last7Days => (days_back(6), today),
            QuickSelect::Last15Days => (days_back(14), today),
            QuickSelect::ThisMonth => (first_of_month(today), last_of_month(today)),
            QuickSelect::Last3Months => (add_months(first_of_month(today), -3), today),
            QuickSelect::ThisYear => {
                let year = today.year();
                let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today);
                let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);
                (start, end)
            }
        }
    }
}
