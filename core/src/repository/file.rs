use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::LoadError;
use crate::model::session::WeekRecord;
use crate::repository::traits::TrainingLogRepository;

const DATA_FIELD: &str = "data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

#[derive(Deserialize)]
struct TrainingLogDocument {
    #[serde(default)]
    data: Option<Vec<WeekRecord>>,
}

#[derive(Debug, Clone)]
pub struct FileTrainingLogRepository {
    file_path: PathBuf,
}

impl FileTrainingLogRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    fn read_document(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.file_path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: self.file_path.clone(),
                }
            } else {
                LoadError::Io {
                    path: self.file_path.clone(),
                    source,
                }
            }
        })
    }

    fn parse_document(&self, content: &str) -> Result<Option<TrainingLogDocument>, LoadError> {
        let parse_error = |message: String| LoadError::Parse {
            path: self.file_path.clone(),
            message,
        };
        match DocumentFormat::from_path(&self.file_path) {
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}

impl TrainingLogRepository for FileTrainingLogRepository {
    fn load(&self) -> Result<Vec<WeekRecord>, LoadError> {
        let content = self.read_document()?;
        let weeks = self
            .parse_document(&content)?
            .and_then(|doc| doc.data)
            .ok_or_else(|| LoadError::MissingField {
                field: DATA_FIELD,
                path: self.file_path.clone(),
            })?;

        debug!(
            "loaded {} weeks from {}",
            weeks.len(),
            self.file_path.display()
        );
        Ok(weeks)
    }
}
