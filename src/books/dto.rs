use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookCopyEntity;
use crate::core::library::CopyStatus;
use crate::utils::date::opt_serializer;

// BookCopyDto is a data transfer object for the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCopyDto {
    pub catalog_id: String,
    pub copy_number: u32,
    pub title: String,
    pub author: String,
    pub status: CopyStatus,
    pub holder_id: Option<String>,
    #[serde(with = "opt_serializer")]
    pub borrowed_at: Option<NaiveDateTime>,
}

impl BookCopyDto {
    pub fn new(catalog_id: &str, copy_number: u32, title: &str, author: &str) -> BookCopyDto {
        BookCopyDto {
            catalog_id: catalog_id.to_string(),
            copy_number,
            title: title.to_string(),
            author: author.to_string(),
            status: CopyStatus::Available,
            holder_id: None,
            borrowed_at: None,
        }
    }
}

impl From<&BookCopyEntity> for BookCopyDto {
    fn from(other: &BookCopyEntity) -> Self {
        BookCopyDto {
            catalog_id: other.catalog_id.to_string(),
            copy_number: other.copy_number(),
            title: other.title().to_string(),
            author: other.author.to_string(),
            status: other.status(),
            holder_id: other.holder_id().map(str::to_string),
            borrowed_at: other.borrowed_at,
        }
    }
}

impl From<&BookCopyDto> for BookCopyEntity {
    fn from(other: &BookCopyDto) -> Self {
        BookCopyEntity::new(other.catalog_id.as_str(), other.copy_number,
                            other.title.as_str(), other.author.as_str())
    }
}

// TitleSummaryDto reports availability of one title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSummaryDto {
    pub title: String,
    pub author: String,
    pub catalog_id: String,
    pub available: usize,
    pub total: usize,
    pub waiting: usize,
}

impl TitleSummaryDto {
    // summarize expects copies of a single title
    pub(crate) fn summarize(copies: &[BookCopyEntity]) -> Option<TitleSummaryDto> {
        let first = copies.first()?;
        Some(TitleSummaryDto {
            title: first.title().to_string(),
            author: first.author.to_string(),
            catalog_id: first.catalog_id.to_string(),
            available: copies.iter().filter(|c| c.status() == CopyStatus::Available).count(),
            total: copies.len(),
            waiting: 0,
        })
    }
}
