use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::CopyStatus;
use crate::utils::date::{opt_serializer, serializer};

// BookCopyEntity abstracts one physical copy of a title; copies of the same
// title share the catalog id and differ by copy number.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookCopyEntity {
    pub catalog_id: String,
    pub copy_number: u32,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub available: bool,
    pub holder_id: Option<String>,
    #[serde(with = "opt_serializer")]
    pub borrowed_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl BookCopyEntity {
    pub fn new(catalog_id: &str, copy_number: u32, title: &str, author: &str) -> Self {
        Self {
            catalog_id: catalog_id.to_string(),
            copy_number,
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            available: true,
            holder_id: None,
            borrowed_at: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn copy_id(catalog_id: &str, copy_number: u32) -> String {
        format!("{}-{}", catalog_id, copy_number)
    }

    // lend marks the copy as held by the requester
    pub fn lend(&mut self, requester_id: &str) {
        self.available = false;
        self.holder_id = Some(requester_id.to_string());
        self.borrowed_at = Some(Utc::now().naive_utc());
    }

    pub fn release(&mut self) {
        self.available = true;
        self.holder_id = None;
        self.borrowed_at = None;
    }

    pub fn is_held_by(&self, requester_id: &str) -> bool {
        self.holder_id.as_deref() == Some(requester_id)
    }
}

impl Identifiable for BookCopyEntity {
    fn id(&self) -> String {
        BookCopyEntity::copy_id(self.catalog_id.as_str(), self.copy_number)
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookCopyEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn copy_number(&self) -> u32 {
        self.copy_number
    }

    fn status(&self) -> CopyStatus {
        CopyStatus::from(self.available)
    }

    fn holder_id(&self) -> Option<&str> {
        self.holder_id.as_deref()
    }
}
