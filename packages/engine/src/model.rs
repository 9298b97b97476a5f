//! Pre-trained decision tree artifact
//!
//! The artifact wraps a [`linfa_trees::DecisionTree`] with the attribute layout it was
//! fitted on and, optionally, its class index → label mapping. It is stored either as
//! JSON or as MessagePack; the file extension decides which.

use crate::error::{InferenceError, InferenceResult};
use crate::schema::{self, CLASS_LABELS};
use crate::vector::FeatureVector;
use linfa::traits::Predict;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const ARTIFACT_VERSION: u8 = 1;

/// Extensions that are read as MessagePack instead of JSON
const MSGPACK_EXTENSIONS: &[&str] = &["msgpack", "mpk"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    MessagePack,
}

impl ArtifactFormat {
    pub fn from_path(path: &Path) -> Self {
        let is_msgpack = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                MSGPACK_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false);
        if is_msgpack {
            ArtifactFormat::MessagePack
        } else {
            ArtifactFormat::Json
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ClassEntry {
    id: usize,
    name: String,
}

/// Helper module to store the class mapping as a list of `{id, name}` entries ordered by id.
mod vec_as_map {
    use super::ClassEntry;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S>(
        classes: &Option<HashMap<usize, String>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = classes.as_ref().map(|classes| {
            let mut entries: Vec<ClassEntry> = classes
                .iter()
                .map(|(id, name)| ClassEntry {
                    id: *id,
                    name: name.clone(),
                })
                .collect();
            entries.sort_by_key(|entry| entry.id);
            entries
        });
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<HashMap<usize, String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries: Option<Vec<ClassEntry>> = Option::deserialize(deserializer)?;
        Ok(entries.map(|entries| {
            entries
                .into_iter()
                .map(|entry| (entry.id, entry.name))
                .collect()
        }))
    }
}

fn current_version() -> u8 {
    ARTIFACT_VERSION
}

/// # Decision tree fitted on the thyroid schema, plus the metadata needed to check it
#[derive(Debug, Serialize, Deserialize)]
pub struct ThyroidModel {
    #[serde(default = "current_version")]
    pub version: u8,
    /// Predictor attribute names in the column order the tree was fitted on
    pub attributes: Vec<String>,
    /// Optional mapping from class index → class name
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "vec_as_map")]
    pub classes: Option<HashMap<usize, String>>,
    pub model: DecisionTree<f64, usize>,
}

impl fmt::Display for ThyroidModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decision Tree Classification (v{}, {} attributes)",
            self.version,
            self.attributes.len()
        )
    }
}

impl ThyroidModel {
    /// Wrap a tree fitted on the schema's predictor columns
    pub fn new(model: DecisionTree<f64, usize>) -> Self {
        ThyroidModel {
            version: ARTIFACT_VERSION,
            attributes: schema::predictor_names().map(str::to_string).collect(),
            classes: Some(
                CLASS_LABELS
                    .iter()
                    .enumerate()
                    .map(|(id, name)| (id, name.to_string()))
                    .collect(),
            ),
            model,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> InferenceResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| InferenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = match ArtifactFormat::from_path(path) {
            ArtifactFormat::Json => Self::from_json_slice(&bytes)?,
            ArtifactFormat::MessagePack => Self::from_msgpack_slice(&bytes)?,
        };
        tracing::debug!("Loaded Machine Learning Model: {} from {}", model, path.display());
        Ok(model)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> InferenceResult<()> {
        let path = path.as_ref();
        let bytes = match ArtifactFormat::from_path(path) {
            ArtifactFormat::Json => self.to_json_vec()?,
            ArtifactFormat::MessagePack => self.to_msgpack_vec()?,
        };
        std::fs::write(path, bytes).map_err(|source| InferenceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_slice(bytes: &[u8]) -> InferenceResult<Self> {
        let model: ThyroidModel = serde_json::from_slice(bytes)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_msgpack_slice(bytes: &[u8]) -> InferenceResult<Self> {
        let model: ThyroidModel = rmp_serde::from_slice(bytes)?;
        model.validate()?;
        Ok(model)
    }

    pub fn to_json_vec(&self) -> InferenceResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self)?)
    }

    /// Field names are kept so optional fields may be skipped.
    pub fn to_msgpack_vec(&self) -> InferenceResult<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(&self)?)
    }

    /// Reject artifacts whose layout does not match the schema
    pub fn validate(&self) -> InferenceResult<()> {
        if self.version != ARTIFACT_VERSION {
            return Err(InferenceError::UnsupportedVersion(self.version));
        }

        let expected: Vec<&str> = schema::predictor_names().collect();
        if self.attributes.len() != expected.len() {
            return Err(InferenceError::SchemaMismatch {
                expected: expected.len(),
                actual: self.attributes.len(),
                detail: "attribute count differs".to_string(),
            });
        }
        if let Some((idx, (found, wanted))) = self
            .attributes
            .iter()
            .zip(expected.iter())
            .enumerate()
            .find(|(_, (found, wanted))| found.as_str() != **wanted)
        {
            return Err(InferenceError::SchemaMismatch {
                expected: expected.len(),
                actual: self.attributes.len(),
                detail: format!("column {idx} is `{found}`, expected `{wanted}`"),
            });
        }

        let width = expected.len();
        if let Some(column) = self.model.features().into_iter().find(|&f| f >= width) {
            return Err(InferenceError::SchemaMismatch {
                expected: width,
                actual: self.attributes.len(),
                detail: format!("tree splits on column {column}, which has no predictor"),
            });
        }

        match &self.classes {
            Some(classes) => {
                for (id, name) in classes {
                    let expected = CLASS_LABELS.get(*id).ok_or(InferenceError::UnknownClass {
                        index: *id,
                        labels: CLASS_LABELS,
                    })?;
                    if name != expected {
                        return Err(InferenceError::ClassMismatch {
                            index: *id,
                            expected: expected.to_string(),
                            found: name.clone(),
                        });
                    }
                }
            }
            None => tracing::warn!(
                "Model artifact carries no class mapping, assuming {:?}",
                CLASS_LABELS
            ),
        }
        Ok(())
    }

    /// Predict the class index of a single row
    pub fn classify(&self, vector: &FeatureVector) -> InferenceResult<usize> {
        let predictors = vector.predictors();
        let array = Array2::from_shape_vec((1, predictors.len()), predictors)?;
        let predictions: Array1<usize> = self.model.predict(&array);
        predictions
            .first()
            .copied()
            .ok_or(InferenceError::EmptyPrediction)
    }
}
