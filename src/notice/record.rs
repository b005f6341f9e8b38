use crate::notice::{ContentEntry, RawContentEntry};
use serde::Deserialize;

/// A single notice. Identified only by its position in the [`RecordStore`].
///
/// [`RecordStore`]: crate::notice::RecordStore
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "NoticeData")]
pub struct NoticeRecord {
    pub title: String,
    pub date: String,
    pub contents: Contents,
    /// Author or issuing department.
    pub from: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Contents {
    Raw(Vec<RawContentEntry>),
    Parsed(Vec<ContentEntry>),
}

impl Contents {
    pub fn parsed(&self) -> Option<&[ContentEntry]> {
        if let Self::Parsed(parsed) = self {
            Some(parsed)
        } else {
            None
        }
    }
}

/// On-disk shape of a notice.
#[derive(Deserialize)]
struct NoticeData {
    title: String,
    date: String,
    #[serde(default, alias = "content")]
    contents: Vec<RawContentEntry>,
    #[serde(default)]
    from: String,
}

impl From<NoticeData> for NoticeRecord {
    fn from(data: NoticeData) -> Self {
        Self {
            title: data.title,
            date: data.date,
            contents: Contents::Raw(data.contents),
            from: data.from,
        }
    }
}

impl NoticeRecord {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        contents: Vec<RawContentEntry>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            contents: Contents::Raw(contents),
            from: from.into(),
        }
    }
}
