use crate::model::session::WeekRecord;
use crate::model::stats::ActivityStats;

/// Sums the sessions logged under `activity` for one week.
/// An activity absent from the week yields all-zero stats.
pub fn summarize(week: &WeekRecord, activity: &str) -> ActivityStats {
    let mut total = ActivityStats::default();
    for session in week.sessions(activity) {
        total.add_session(session);
    }
    total
}
