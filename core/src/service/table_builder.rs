use std::collections::BTreeSet;

use log::debug;

use crate::error::StatsError;
use crate::model::session::{WeekRecord, WEEK_COMMENT, WEEK_FIRST_DAY};
use crate::model::stats::{ActivityStats, Stat};
use crate::model::table::{
    Cell, SportSummaryRow, SportSummaryTable, WeeklyTable, TOTAL_ACTIVITY, WEEK_TOTAL,
    WEEK_TOTAL_PREFIX,
};
use crate::service::summarizer::summarize;

const TIME_MIN_SUFFIX: &str = "_time_min";

/// Union of activity names over every week, sorted.
pub fn discover_activities(weeks: &[WeekRecord]) -> Vec<String> {
    let mut activities = BTreeSet::new();
    for week in weeks {
        activities.extend(week.activity_names().map(str::to_string));
    }
    activities.into_iter().collect()
}

/// Wide per-week table.
///
/// Activity columns are discovered over the whole input first, then each
/// row is built against that fixed schema so every week carries the same
/// columns. Rows keep input order.
pub fn build_weekly_table(weeks: &[WeekRecord]) -> WeeklyTable {
    if weeks.is_empty() {
        return WeeklyTable::default();
    }

    // Pass 1: schema
    let activities = discover_activities(weeks);
    debug!(
        "discovered {} activities across {} weeks",
        activities.len(),
        weeks.len()
    );

    // Each name gets one column; a later writer to the same name wins.
    let mut columns = Vec::with_capacity(activities.len() * 4 + 6);
    let first_day_slot = column_slot(&mut columns, WEEK_FIRST_DAY.to_string());
    let activity_slots: Vec<[usize; 4]> = activities
        .iter()
        .map(|activity| Stat::ALL.map(|stat| column_slot(&mut columns, stat.column(activity))))
        .collect();
    let total_slots = Stat::ALL.map(|stat| column_slot(&mut columns, stat.column(WEEK_TOTAL)));
    let comment_slot = column_slot(&mut columns, WEEK_COMMENT.to_string());

    // Pass 2: rows
    let rows = weeks
        .iter()
        .map(|week| {
            let mut row = vec![Cell::Empty; columns.len()];
            row[first_day_slot] = Cell::from(week.week_first_day.clone());

            let mut week_total = ActivityStats::default();
            for (activity, slots) in activities.iter().zip(&activity_slots) {
                let stats = summarize(week, activity);
                write_stats(&mut row, slots, &stats);
                week_total += stats;
            }
            write_stats(&mut row, &total_slots, &week_total);
            row[comment_slot] = Cell::Text(week.comment().to_string());
            row
        })
        .collect();

    WeeklyTable::from_parts(columns, rows)
}

fn column_slot(columns: &mut Vec<String>, name: String) -> usize {
    match columns.iter().position(|c| *c == name) {
        Some(idx) => idx,
        None => {
            columns.push(name);
            columns.len() - 1
        }
    }
}

fn write_stats(row: &mut [Cell], slots: &[usize; 4], stats: &ActivityStats) {
    for (&slot, stat) in slots.iter().zip(Stat::ALL) {
        row[slot] = Cell::Number(stats.get(stat));
    }
}

/// Activity names read back from a table's `<name>_time_min` columns,
/// skipping the week total columns.
pub fn table_activities(table: &WeeklyTable) -> Vec<String> {
    let names: BTreeSet<String> = table
        .columns()
        .iter()
        .filter(|column| !column.starts_with(WEEK_TOTAL_PREFIX))
        .filter_map(|column| column.strip_suffix(TIME_MIN_SUFFIX))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    names.into_iter().collect()
}

/// Long per-activity table derived from the columns of `table`.
///
/// A stat column missing from the table sums to 0. With `with_total`, a
/// final TOTAL row is appended unless no activity was found.
pub fn build_sport_summary(
    table: &WeeklyTable,
    with_total: bool,
) -> Result<SportSummaryTable, StatsError> {
    let mut rows = Vec::new();
    for activity in table_activities(table) {
        let mut stats = ActivityStats::default();
        for stat in Stat::ALL {
            stats.set(stat, table.column_sum(&stat.column(&activity))?);
        }
        rows.push(SportSummaryRow { activity, stats });
    }

    if with_total && !rows.is_empty() {
        let total = rows.iter().map(|r| &r.stats).sum();
        rows.push(SportSummaryRow {
            activity: TOTAL_ACTIVITY.to_string(),
            stats: total,
        });
    }

    Ok(SportSummaryTable::from_rows(rows))
}
