use serde::{Deserialize, Serialize};

use super::book::{normalize, AddBookRequest, Book, SearchField};
use super::statistics::LibraryStatistics;
use crate::domain::error::DomainError;

/// 蔵書一覧 — 集約ルート。挿入順を保持し、重複タイトルも許容する。
/// 保存形式はBookのJSON配列そのもの。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 検証してから末尾に追加する。
    pub fn add_book(&mut self, req: AddBookRequest) -> Result<&Book, DomainError> {
        let book = Book::from_request(req)?;
        self.books.push(book);
        let idx = self.books.len() - 1;
        Ok(&self.books[idx])
    }

    /// タイトルが一致する最初の1件だけを削除する。
    ///
    /// 同名タイトルが複数あっても後続は残す。キー付きマップに置き換えると
    /// この挙動が変わるので注意。
    pub fn remove_book(&mut self, title: &str) -> Result<Book, DomainError> {
        let query = normalize(title);
        let idx = self
            .books
            .iter()
            .position(|b| b.matches(SearchField::Title, &query))
            .ok_or_else(|| DomainError::BookNotFound(title.trim().to_string()))?;
        Ok(self.books.remove(idx))
    }

    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Book> {
        let query = normalize(query);
        self.books
            .iter()
            .filter(|b| b.matches(field, &query))
            .collect()
    }

    pub fn statistics(&self) -> LibraryStatistics {
        let read_count = self.books.iter().filter(|b| b.is_read()).count();
        LibraryStatistics::from_counts(self.books.len(), read_count)
    }
}
