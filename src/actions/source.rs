use std::path::PathBuf;

use async_trait::async_trait;

use super::error::ActionError;
use crate::types::DataTypeDescriptor;

/// Where the report data type catalog comes from.
#[async_trait]
pub trait DataTypeSource: Send + Sync {
    async fn load(&self) -> Result<Vec<DataTypeDescriptor>, ActionError>;
}

/// Reads `report_data_map.json`: a JSON array of data type descriptors.
#[derive(Debug, Clone)]
pub struct FileDataTypeSource {
    path: PathBuf,
}

impl FileDataTypeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataTypeSource for FileDataTypeSource {
    async fn load(&self) -> Result<Vec<DataTypeDescriptor>, ActionError> {
        let catalog_error = |reason: String| ActionError::Catalog {
            path: self.path.clone(),
            reason,
        };

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| catalog_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| catalog_error(e.to_string()))
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticDataTypeSource {
    data_types: Vec<DataTypeDescriptor>,
}

impl StaticDataTypeSource {
    pub fn new(data_types: Vec<DataTypeDescriptor>) -> Self {
        Self { data_types }
    }
}

#[async_trait]
impl DataTypeSource for StaticDataTypeSource {
    async fn load(&self) -> Result<Vec<DataTypeDescriptor>, ActionError> {
        Ok(self.data_types.clone())
    }
}
