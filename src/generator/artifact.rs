use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// The structural role of a generated file. Validation rules are selected
/// by this kind, not by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactKind {
    Schema,
    NodeModule,
    FlowModule,
    Test,
    Manifest,
    Doc,
}

/// One generated file, held in memory. Ownership passes to the filesystem
/// sink only after validation succeeds or the caller explicitly bypasses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileArtifact {
    pub relative_path: String,
    pub content: String,
    pub kind: ArtifactKind,
}

/// A complete generated scaffold: the ordered artifact sequence plus the
/// identifiers it was generated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldBundle {
    pub project_name: String,
    pub pattern_id: String,
    pub artifacts: Vec<FileArtifact>,
}

impl ScaffoldBundle {
    pub fn new(project_name: String, pattern_id: String, artifacts: Vec<FileArtifact>) -> Self {
        Self {
            project_name,
            pattern_id,
            artifacts,
        }
    }

    /// Saves the bundle to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes =
            encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            action: "create file",
            path: path.to_string(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            action: "write to file",
            path: path.to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// Loads a bundle from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|e| ArtifactError::Io {
            action: "read file",
            path: path.to_string(),
            source: e,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a bundle from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(bundle, _)| bundle)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }

    /// Writes every artifact under `root`, creating directories as needed.
    /// This is the filesystem sink: callers invoke it only after validation
    /// passes or is explicitly bypassed.
    pub fn write_to_dir(&self, root: &Path) -> Result<(), ArtifactError> {
        for artifact in &self.artifacts {
            let path = root.join(&artifact.relative_path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| ArtifactError::Io {
                    action: "create directory",
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }
            fs::write(&path, &artifact.content).map_err(|e| ArtifactError::Io {
                action: "write artifact",
                path: path.display().to_string(),
                source: e,
            })?;
        }
        Ok(())
    }
}
