use crate::{error::Error, notice::NoticeRecord};
use std::{fs, path::Path};

/// Reads the notice list, a JSON array, in file order.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<NoticeRecord>, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    let records = serde_json::from_str::<Vec<NoticeRecord>>(&text).map_err(|source| {
        Error::Json {
            path: path.to_owned(),
            source,
        }
    })?;
    log::debug!("loaded {} notices from {}", records.len(), path.display());
    Ok(records)
}
