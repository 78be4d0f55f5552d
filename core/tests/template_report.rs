// tests/template_report.rs
use std::path::PathBuf;

use trainlog_core::{FileTrainingLogRepository, ReportUseCase, WEEK_COMMENT};

fn template_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("template.yml")
}

#[test]
fn test_template_report() {
    let repo = FileTrainingLogRepository::new(template_path());
    let report = ReportUseCase::new(&repo).build(true).expect("template should load");

    // Weeks keep document order
    assert_eq!(report.weekly.len(), 4);
    assert_eq!(report.weekly.number(2, "trail_running_time_min"), Some(876.0));
    assert_eq!(report.weekly.number(2, "footing_time_min"), Some(0.0));
    assert_eq!(
        report.weekly.cell(2, WEEK_COMMENT).and_then(|c| c.as_text()),
        Some("Raid")
    );
    assert_eq!(report.weekly.number(3, "week_total_time_min"), Some(154.0));

    let activities: Vec<_> = report.sports.rows().iter().map(|r| r.activity.as_str()).collect();
    assert_eq!(
        activities,
        vec!["footing", "interval_training", "others", "trail_running", "TOTAL"]
    );

    let trail = report.sports.get("trail_running").unwrap();
    assert_eq!(trail.time_min, 968.0);
    assert_eq!(trail.elevation_m, 4529.0);

    let total = report.sports.total().unwrap();
    assert_eq!(total.time_min, 92.0 + 61.0 + 54.0 + 876.0 + 69.0 + 85.0);
    assert_eq!(total.load, 189.0 + 127.0 + 1051.0 + 158.0 + 156.0);
}
