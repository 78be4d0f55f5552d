use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use trainlog_core::{Cell, SportSummaryTable, WeeklyTable};

pub const WEEKLY_HEADER: &str = "==== WEEKLY STATISTICS ====";
pub const SPORTS_HEADER: &str = "==== GLOBAL STATISTICS BY SPORT TYPE ====";

#[derive(Tabled)]
struct SportRow {
    #[tabled(rename = "activity")]
    activity: String,
    #[tabled(rename = "time_min")]
    time_min: String,
    #[tabled(rename = "distance_km")]
    distance_km: String,
    #[tabled(rename = "elevation_m")]
    elevation_m: String,
    #[tabled(rename = "load")]
    load: String,
}

/// Two decimals at most, trailing zeros dropped: 92.0 -> "92", 26.90 -> "26.9".
pub fn format_number(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Number(n) => format_number(*n),
        Cell::Text(s) => s.clone(),
        // absent values display as 0
        Cell::Empty => "0".to_string(),
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

pub fn render_weekly(table: &WeeklyTable) -> String {
    if table.is_empty() {
        return "No weeks found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(table.columns().iter().cloned());
    for row in table.rows() {
        builder.push_record(row.iter().map(format_cell));
    }
    styled(builder.build())
}

pub fn render_sports(table: &SportSummaryTable) -> String {
    if table.is_empty() {
        return "No activities found.".to_string();
    }

    let rows = table.rows().iter().map(|r| SportRow {
        activity: r.activity.clone(),
        time_min: format_number(r.stats.time_min),
        distance_km: format_number(r.stats.distance_km),
        elevation_m: format_number(r.stats.elevation_m),
        load: format_number(r.stats.load),
    });
    styled(Table::new(rows))
}

pub fn render_report(weekly: &WeeklyTable, sports: &SportSummaryTable) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        WEEKLY_HEADER,
        render_weekly(weekly),
        SPORTS_HEADER,
        render_sports(sports)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainlog_core::{build_sport_summary, build_weekly_table, Session, WeekRecord};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(92.0), "92");
        assert_eq!(format_number(16.5 + 10.4), "26.9");
        assert_eq!(format_number(0.126), "0.13");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_render_report_sections() {
        let weeks = vec![WeekRecord::new("2024-12-30")
            .with_sessions("trail_running", vec![Session::new(92.0, 16.5, 319.0, 189.0)])];
        let weekly = build_weekly_table(&weeks);
        let sports = build_sport_summary(&weekly, true).unwrap();

        let out = render_report(&weekly, &sports);

        assert!(out.contains(WEEKLY_HEADER));
        assert!(out.contains(SPORTS_HEADER));
        assert!(out.contains("2024-12-30"));
        assert!(out.contains("trail_running"));
        assert!(out.contains("TOTAL"));
        assert!(out.find(WEEKLY_HEADER) < out.find(SPORTS_HEADER));
    }

    #[test]
    fn test_empty_cells_render_as_zero() {
        let table = WeeklyTable::new(
            vec!["week_first_day".to_string(), "run_time_min".to_string()],
            vec![vec![Cell::from("2025-01-06"), Cell::Empty]],
        )
        .unwrap();

        let out = render_weekly(&table);
        assert!(out.contains("2025-01-06"));
        assert!(out.contains(" 0 "));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(render_weekly(&WeeklyTable::default()), "No weeks found.");
        assert_eq!(render_sports(&SportSummaryTable::default()), "No activities found.");
    }
}
