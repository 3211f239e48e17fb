use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::model::library::Library;
use crate::domain::repository::LibraryRepository;

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSONファイルによるLibraryRepository実装。
/// 1 Library = 1 JSONファイル（Bookの配列）。
pub struct JsonLibraryRepository {
    path: PathBuf,
}

impl JsonLibraryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 4スペースインデントで整形する（既存のlibrary.txtと同じ体裁）。
    fn render(library: &Library) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        library.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl LibraryRepository for JsonLibraryRepository {
    type Error = JsonStoreError;

    fn load(&self) -> Result<Option<Library>, Self::Error> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let library: Library = serde_json::from_str(&content)?;
        Ok(Some(library))
    }

    fn save(&self, library: &Library) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = Self::render(library)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, &content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
