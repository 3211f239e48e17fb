use super::model::library::Library;

/// 永続化の抽象。Infra層が実装する。
pub trait LibraryRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// 保存先が存在しなければ `Ok(None)`。
    fn load(&self) -> Result<Option<Library>, Self::Error>;
    fn save(&self, library: &Library) -> Result<(), Self::Error>;

    /// 起動時のロード。欠損・破損はどちらも空のLibraryとして扱い、原因はログに残す。
    fn load_or_empty(&self) -> Library {
        match self.load() {
            Ok(Some(library)) => library,
            Ok(None) => {
                tracing::debug!("no library stored yet, starting empty");
                Library::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored library is unreadable, starting empty");
                Library::new()
            }
        }
    }
}
