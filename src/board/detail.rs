use crate::{notice::RecordStore, view::TextPost};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("notice contents haven't been parsed yet")]
    NotParsed,
    #[error("no notice at index {index} (have {count})")]
    OutOfRange { index: usize, count: usize },
}

/// Copies notice `index` onto the detail page. Nothing changes on error.
pub fn bind_detail(post: &TextPost, store: &RecordStore, index: usize) -> Result<(), BindError> {
    if !store.is_parsed() {
        return Err(BindError::NotParsed);
    }
    let notice = store.try_get(index).ok_or(BindError::OutOfRange {
        index,
        count: store.count(),
    })?;
    let contents = notice
        .contents
        .parsed()
        .ok_or(BindError::NotParsed)?
        .to_vec();

    post.set_title(notice.title.clone());
    post.set_subtitle(notice.date.clone());
    post.set_contents(contents);
    post.set_footer(notice.from.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{ContentEntry, NoticeRecord};
    use serde_json::json;

    fn store() -> RecordStore {
        RecordStore::new(vec![
            NoticeRecord::new("A", "d1", vec![json!("alpha")], "office"),
            NoticeRecord::new("B", "d2", vec![json!("# beta")], "desk"),
        ])
    }

    #[test]
    fn copies_every_field() {
        let mut store = store();
        store.parse_contents().unwrap();
        let post = TextPost::new();

        bind_detail(&post, &store, 1).unwrap();
        assert_eq!(post.title(), "B");
        assert_eq!(post.subtitle(), "d2");
        assert_eq!(
            post.contents(),
            vec![ContentEntry::Heading {
                text: "beta".into()
            }]
        );
        assert_eq!(post.footer(), "desk");
    }

    #[test]
    fn requires_parsed_store() {
        let store = store();
        let post = TextPost::new();
        assert_eq!(bind_detail(&post, &store, 0), Err(BindError::NotParsed));
        assert_eq!(post.title(), "");
    }

    #[test]
    fn rejects_out_of_range() {
        let mut store = store();
        store.parse_contents().unwrap();
        let post = TextPost::new();
        bind_detail(&post, &store, 0).unwrap();

        assert_eq!(
            bind_detail(&post, &store, 2),
            Err(BindError::OutOfRange { index: 2, count: 2 })
        );
        assert_eq!(post.title(), "A");
    }
}
