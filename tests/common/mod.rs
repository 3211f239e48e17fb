//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use shelf_mcp::application::service::LibraryService;
use shelf_mcp::domain::model::book::AddBookRequest;
use shelf_mcp::domain::model::library::Library;
use shelf_mcp::domain::repository::LibraryRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

/// ファイルI/O不要のインメモリリポジトリ。`fail_saves` でsave失敗を再現できる。
pub struct InMemoryRepo {
    store: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
    saves: Cell<usize>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            store: RefCell::new(None),
            fail_saves: Cell::new(false),
            saves: Cell::new(0),
        }
    }

    /// 生の内容を持つリポジトリ（破損データの再現用）。
    pub fn with_raw(raw: &str) -> Self {
        let repo = Self::new();
        *repo.store.borrow_mut() = Some(raw.to_string());
        repo
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn stored(&self) -> Option<Library> {
        self.store
            .borrow()
            .as_deref()
            .map(|json| serde_json::from_str(json).unwrap())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InMemoryRepoError {
    #[error("in-memory store error")]
    Unavailable,
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LibraryRepository for InMemoryRepo {
    type Error = InMemoryRepoError;

    fn load(&self) -> Result<Option<Library>, Self::Error> {
        match self.store.borrow().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, library: &Library) -> Result<(), Self::Error> {
        if self.fail_saves.get() {
            return Err(InMemoryRepoError::Unavailable);
        }
        let json = serde_json::to_string(library)?;
        *self.store.borrow_mut() = Some(json);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn book(title: &str, author: &str, year: i32, genre: &str, read: bool) -> AddBookRequest {
    AddBookRequest {
        title: title.into(),
        author: author.into(),
        year: Some(year),
        genre: genre.into(),
        read,
    }
}

/// 標準的なテスト用蔵書:
/// ```text
/// 1. Dune — Frank Herbert (1965, SciFi, read)
/// 2. Emma — Jane Austen (1815, Romance, unread)
/// 3. Neuromancer — William Gibson (1984, SciFi, unread)
/// 4. Persuasion — Jane Austen (1817, Romance, unread)
/// ```
pub fn standard_library() -> Library {
    let mut library = Library::new();
    for req in [
        book("Dune", "Frank Herbert", 1965, "SciFi", true),
        book("Emma", "Jane Austen", 1815, "Romance", false),
        book("Neuromancer", "William Gibson", 1984, "SciFi", false),
        book("Persuasion", "Jane Austen", 1817, "Romance", false),
    ] {
        library.add_book(req).unwrap();
    }
    library
}

/// InMemoryRepoに蔵書を保存してLibraryServiceを返す。
pub fn service_with_library(library: &Library) -> LibraryService<InMemoryRepo> {
    let repo = InMemoryRepo::new();
    repo.save(library).unwrap();
    LibraryService::open(repo)
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
