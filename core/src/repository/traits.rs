use crate::error::LoadError;
use crate::model::session::WeekRecord;

pub trait TrainingLogRepository {
    /// Weeks in document order.
    fn load(&self) -> Result<Vec<WeekRecord>, LoadError>;
}
