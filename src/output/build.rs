use crate::{
    board::{detail_file_name, MountedPage, DETAIL_ROUTE},
    error::Error,
    output::{render_html, AppProps},
};
use std::{fs, path::Path, time::Instant};

/// Writes every navigation state of the page into `output`: `index.html`
/// (the list, or `target` if given) and one detail file per notice, so row
/// links resolve without a server. Expects rows mounted with
/// [`RowLinks::Files`](crate::board::RowLinks::Files).
pub fn build(
    start: Instant,
    page: &MountedPage,
    target: Option<&str>,
    output: &str,
) -> Result<(), Error> {
    let output = Path::new(output);
    fs::create_dir_all(output).map_err(|source| Error::Write {
        path: output.to_owned(),
        source,
    })?;

    if let Some(board) = page.board() {
        board.navigate(target.unwrap_or("/"));
    }
    write_page(page, &output.join("index.html"))?;

    if let Some(board) = page.board() {
        let count = board.store().count();
        for index in 0..count {
            board.navigate(&format!("/{DETAIL_ROUTE}?index={index}"));
            write_page(page, &output.join(detail_file_name(index)))?;
        }
        log::info!(
            "({:.1}s) Saved {} detail pages",
            start.elapsed().as_secs_f32(),
            count
        );
    }

    log::info!(
        "({:.1}s) Saved page to {}",
        start.elapsed().as_secs_f32(),
        output.join("index.html").display()
    );
    Ok(())
}

fn write_page(page: &MountedPage, path: &Path) -> Result<(), Error> {
    let html = render_html(AppProps {
        document: page.document(),
        root: page.root(),
        lang: page.lang().clone(),
    });
    fs::write(path, html).map_err(|source| Error::Write {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{mount, RowLinks},
        config::BoardConfig,
        notice::NoticeRecord,
    };
    use serde_json::json;

    fn records() -> Vec<NoticeRecord> {
        vec![
            NoticeRecord::new("Holiday hours", "2021.10.01", vec![json!("Closed.")], ""),
            NoticeRecord::new("Fare change", "2021.09.01", vec![json!("- adults 1,300")], ""),
        ]
    }

    fn hrefs(html: &str) -> Vec<String> {
        html.split(r#"href=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn writes_list_and_every_detail() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("site");
        let config = BoardConfig::default();
        let page = mount(&config, records(), RowLinks::Files);

        build(Instant::now(), &page, None, site.to_str().unwrap()).unwrap();

        let index = fs::read_to_string(site.join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(index.contains("translateX(-0%)"), "{index}");

        let detail = fs::read_to_string(site.join("detail-1.html")).unwrap();
        assert!(detail.contains(&config.detail_title), "{detail}");
        assert!(detail.contains("adults 1,300"), "{detail}");
        assert!(detail.contains("translateX(-100%)"), "{detail}");
    }

    #[test]
    fn every_link_resolves_to_a_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let page = mount(&BoardConfig::default(), records(), RowLinks::Files);

        build(Instant::now(), &page, None, dir.path().to_str().unwrap()).unwrap();

        let mut checked = 0;
        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let html = fs::read_to_string(&path).unwrap();
            for href in hrefs(&html) {
                assert!(
                    dir.path().join(&href).is_file(),
                    "{} links to missing {href}",
                    path.display()
                );
                checked += 1;
            }
        }
        // Two rows on each of the three pages.
        assert_eq!(checked, 6);
    }

    #[test]
    fn target_sets_index_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::default();
        let page = mount(&config, records(), RowLinks::Files);

        build(
            Instant::now(),
            &page,
            Some("/detail?index=0"),
            dir.path().to_str().unwrap(),
        )
        .unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(&config.detail_title), "{html}");
        assert!(html.contains("Closed."), "{html}");
    }

    #[test]
    fn empty_board_writes_only_index() {
        let dir = tempfile::tempdir().unwrap();
        let page = mount(&BoardConfig::default(), Vec::new(), RowLinks::Files);

        build(Instant::now(), &page, None, dir.path().to_str().unwrap()).unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("empty-page-text"), "{html}");
    }
}
