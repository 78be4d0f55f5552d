use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;

use crate::model::table::{SportSummaryTable, WeeklyTable};
use crate::repository::TrainingLogRepository;
use crate::service::table_builder::{build_sport_summary, build_weekly_table};

/// Both tables derived from one training log.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub weekly: WeeklyTable,
    pub sports: SportSummaryTable,
}

pub struct ReportUseCase<'a, R: TrainingLogRepository> {
    repo: &'a R,
}

impl<'a, R: TrainingLogRepository> ReportUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn build(&self, with_total: bool) -> Result<Report> {
        let weeks = self.repo.load().context("could not load training log")?;
        let weekly = build_weekly_table(&weeks);
        let sports = build_sport_summary(&weekly, with_total)
            .context("could not summarise weekly table")?;

        debug!(
            "report built: {} weekly rows, {} summary rows",
            weekly.len(),
            sports.len()
        );
        Ok(Report { weekly, sports })
    }
}
