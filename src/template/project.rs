use super::conversion::IntoScreens;
use crate::error::DocumentError;
use crate::model::Screen;
use serde::{Deserialize, Serialize};
use std::fs;

/// The persisted design: `{"screens": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub screens: Vec<Screen>,
}

/// Either the wrapped object or a bare screens array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectShape {
    Wrapped(ProjectFile),
    Bare(Vec<Screen>),
}

impl ProjectFile {
    pub fn new(screens: Vec<Screen>) -> Self {
        Self { screens }
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(match serde_json::from_str(json)? {
            ProjectShape::Wrapped(project) => project,
            ProjectShape::Bare(screens) => Self { screens },
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &str) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &str) -> Result<(), DocumentError> {
        fs::write(path, self.to_json_pretty()?).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })
    }
}

impl IntoScreens for ProjectFile {
    fn into_screens(self) -> Result<Vec<Screen>, DocumentError> {
        Ok(self.screens)
    }
}
