use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub const WEEK_FIRST_DAY: &str = "week_first_day";
pub const WEEK_COMMENT: &str = "week_comment";

/// One logged exercise instance. Absent numeric fields read as 0.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_description: Option<String>,
    #[serde(default)]
    pub time_min: f64,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub elevation_m: f64,
    #[serde(default)]
    pub load: f64,
}

impl Session {
    pub fn new(time_min: f64, distance_km: f64, elevation_m: f64, load: f64) -> Self {
        Self {
            session_description: None,
            time_min,
            distance_km,
            elevation_m,
            load,
        }
    }
}

/// A week of training: session lists keyed by activity name, plus the two
/// reserved metadata keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WeekRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_first_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_comment: Option<String>,
    #[serde(flatten, deserialize_with = "nullable_activities")]
    pub activities: BTreeMap<String, Vec<Session>>,
}

impl WeekRecord {
    pub fn new(week_first_day: impl Into<String>) -> Self {
        Self {
            week_first_day: Some(week_first_day.into()),
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.week_comment = Some(comment.into());
        self
    }

    pub fn with_sessions(mut self, activity: impl Into<String>, sessions: Vec<Session>) -> Self {
        self.activities.insert(activity.into(), sessions);
        self
    }

    /// Sessions logged for `activity`; an absent activity is an empty list.
    pub fn sessions(&self, activity: &str) -> &[Session] {
        self.activities
            .get(activity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn comment(&self) -> &str {
        self.week_comment.as_deref().unwrap_or("")
    }

    pub fn activity_names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }
}

// `footing:` with no value in YAML is null; treat it as no sessions.
fn nullable_activities<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<Session>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Option<Vec<Session>>> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, sessions)| (name, sessions.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_week_with_reserved_keys() {
        let json = r#"{
            "week_first_day": "2025-01-20",
            "week_comment": "Raid",
            "trail_running": [
                {"session_description": "Trail", "time_min": 876, "load": 1051}
            ],
            "footing": null
        }"#;
        let week: WeekRecord = serde_json::from_str(json).unwrap();

        assert_eq!(week.week_first_day.as_deref(), Some("2025-01-20"));
        assert_eq!(week.comment(), "Raid");
        assert_eq!(week.activity_names().collect::<Vec<_>>(), vec!["footing", "trail_running"]);
        assert!(week.sessions("footing").is_empty());

        let trail = &week.sessions("trail_running")[0];
        assert_eq!(trail.time_min, 876.0);
        assert_eq!(trail.distance_km, 0.0);
        assert_eq!(trail.session_description.as_deref(), Some("Trail"));
    }

    #[test]
    fn test_missing_comment_defaults_to_empty() {
        let week: WeekRecord = serde_json::from_str(r#"{"week_first_day": "2025-02-17"}"#).unwrap();
        assert_eq!(week.comment(), "");
        assert!(week.activities.is_empty());
    }

    #[test]
    fn test_non_numeric_session_field_is_rejected() {
        let json = r#"{"run": [{"time_min": "ninety"}]}"#;
        assert!(serde_json::from_str::<WeekRecord>(json).is_err());
    }
}
