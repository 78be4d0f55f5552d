pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use error::{LoadError, StatsError};
pub use model::session::{Session, WeekRecord, WEEK_COMMENT, WEEK_FIRST_DAY};
pub use model::stats::{ActivityStats, Stat};
pub use model::table::{Cell, SportSummaryRow, SportSummaryTable, WeeklyTable, TOTAL_ACTIVITY};
pub use repository::{DocumentFormat, FileTrainingLogRepository, TrainingLogRepository};
pub use service::summarizer::summarize;
pub use service::table_builder::{build_sport_summary, build_weekly_table};
pub use usecase::report::{Report, ReportUseCase};
