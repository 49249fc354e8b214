//! JSON artifact writing.

use crate::error::{ErrorKind, Result};
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Pretty-prints a value as JSON (2-space indent, trailing newline) and
/// writes it to `path`, creating parent directories as needed.
///
/// Artifacts are independent: a later failure never rolls back files this
/// has already written in the same run.
pub async fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<()> {
    let path = path.as_ref();
    let mut body = serde_json::to_vec_pretty(value).map_err(|e| ErrorKind::Json(e.to_string()))?;
    body.push(b'\n');
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).await.map_err(ErrorKind::Io)?;
    }
    fs::write(path, body).await.map_err(ErrorKind::Io)?;
    info!(path = %path.display(), "wrote artifact");
    Ok(())
}
