pub mod file;
pub mod traits;

// Re-export
pub use file::{DocumentFormat, FileTrainingLogRepository};
pub use traits::TrainingLogRepository;
