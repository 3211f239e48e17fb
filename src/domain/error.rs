use std::fmt;

/// 入力必須のテキスト項目。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Genre,
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Genre => "genre",
        };
        f.write_str(name)
    }
}

/// add_book の入力検証エラー。どの制約に違反したかを保持する。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(BookField),

    #[error("year is required")]
    MissingYear,

    #[error("year {0} is outside the range 1000-9999")]
    YearOutOfRange(i32),
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid book: {0}")]
    Validation(#[from] ValidationError),

    #[error("book not found: '{0}'")]
    BookNotFound(String),
}
