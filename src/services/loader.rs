use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::core::classifier::{Model, ModelArtifact, ModelError};

/// Errors that can occur while loading the model artifact
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode model artifact: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(#[from] ModelError),
}

/// Decode an artifact from raw bytes
pub fn parse_model(bytes: &[u8]) -> Result<Model, LoadError> {
    let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
    Ok(Model::try_from(artifact)?)
}

/// Read and decode the model artifact at `path`
///
/// Called once at startup. The file is read as raw bytes before decoding.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model, LoadError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let model = parse_model(&bytes)?;

    tracing::info!(
        "Loaded {:?} model ({} kernel) from {}",
        model.kind(),
        model.kernel_name(),
        path.display()
    );

    Ok(model)
}
