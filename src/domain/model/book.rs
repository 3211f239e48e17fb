use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::error::{BookField, ValidationError};

pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

/// 本の追加リクエスト（未検証）
#[derive(Debug, Clone)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
    /// 未入力ならNone
    pub year: Option<i32>,
    pub genre: String,
    pub read: bool,
}

impl AddBookRequest {
    /// 全テキスト項目が空でなく、出版年が範囲内であることを検証する。
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            (BookField::Title, &self.title),
            (BookField::Author, &self.author),
            (BookField::Genre, &self.genre),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        match self.year {
            None | Some(0) => Err(ValidationError::MissingYear),
            Some(year) if !(MIN_YEAR..=MAX_YEAR).contains(&year) => {
                Err(ValidationError::YearOutOfRange(year))
            }
            Some(_) => Ok(()),
        }
    }
}

/// 検索対象の項目。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Author,
}

/// 蔵書1件。フィールド順がそのまま保存ファイルの順序になる。
///
/// 旧いファイルで欠けている項目や`null`の項目はデフォルト値で読み込む。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "null_as_default")]
    title: String,
    #[serde(deserialize_with = "null_as_default")]
    author: String,
    #[serde(deserialize_with = "null_as_default")]
    year: i32,
    #[serde(deserialize_with = "null_as_default")]
    genre: String,
    #[serde(deserialize_with = "null_as_default")]
    read: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    pub(crate) fn from_request(req: AddBookRequest) -> Result<Self, ValidationError> {
        req.validate()?;
        Ok(Self {
            title: req.title,
            author: req.author,
            year: req.year.unwrap_or_default(),
            genre: req.genre,
            read: req.read,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    /// 正規化済みの値で完全一致するか（部分一致ではない）。
    pub fn matches(&self, field: SearchField, normalized_query: &str) -> bool {
        let value = match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
        };
        normalize(value) == normalized_query
    }
}

/// 比較用の正規化: 前後の空白を除去して小文字化。
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
