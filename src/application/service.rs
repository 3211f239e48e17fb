use crate::domain::model::book::{AddBookRequest, Book, SearchField};
use crate::domain::model::library::Library;
use crate::domain::model::statistics::LibraryStatistics;
use crate::domain::repository::LibraryRepository;

use super::error::AppError;

/// 蔵書に対するユースケース。
/// 起動時に一度だけloadし、以降はメモリ上のLibraryを操作して変更のたびに全体をsaveする。
pub struct LibraryService<R: LibraryRepository> {
    repo: R,
    library: Library,
}

impl<R: LibraryRepository> LibraryService<R> {
    /// 保存済みの蔵書を読み込んでServiceを作る。読めなければ空から始める。
    pub fn open(repo: R) -> Self {
        let library = repo.load_or_empty();
        tracing::info!(count = library.len(), "library opened");
        Self { repo, library }
    }

    /// 本を追加して永続化する。
    pub fn add_book(&mut self, req: AddBookRequest) -> Result<Book, AppError> {
        let snapshot = self.library.clone();
        let book = self.library.add_book(req)?.clone();
        self.persist_or_rollback(snapshot)?;
        tracing::info!(title = book.title(), "book added");
        Ok(book)
    }

    /// タイトルが一致する最初の1件を削除して永続化する。
    pub fn remove_book(&mut self, title: &str) -> Result<Book, AppError> {
        let snapshot = self.library.clone();
        let removed = self.library.remove_book(title)?;
        self.persist_or_rollback(snapshot)?;
        tracing::info!(title = removed.title(), "book removed");
        Ok(removed)
    }

    pub fn search_books(&self, query: &str, field: SearchField) -> Vec<Book> {
        let results: Vec<Book> = self
            .library
            .search(query, field)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(query, ?field, count = results.len(), "search");
        results
    }

    pub fn list_books(&self) -> &[Book] {
        self.library.books()
    }

    pub fn compute_statistics(&self) -> LibraryStatistics {
        self.library.statistics()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    // --- private ---

    /// 保存に失敗したらメモリ上の変更も巻き戻し、ディスクと食い違わないようにする。
    fn persist_or_rollback(&mut self, snapshot: Library) -> Result<(), AppError> {
        if let Err(e) = self.repo.save(&self.library) {
            tracing::warn!(error = %e, "failed to save library, change rolled back");
            self.library = snapshot;
            return Err(AppError::Storage(Box::new(e)));
        }
        Ok(())
    }
}
