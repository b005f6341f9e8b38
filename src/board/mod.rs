//! Page composition: wires the notice store, router, slider and the two
//! pages together.

use crate::{
    config::BoardConfig,
    notice::{NoticeRecord, RecordStore},
    router::{Dispatch, NavigationEvent, Query, Router, DEFAULT_ROUTE},
    view::{Document, EmptyPage, ListBoard, PageSlider, Root, TextPost},
};
use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};
use yew::{AttrValue, Callback};

mod detail;
mod list;

pub use detail::*;
pub use list::*;

pub const DETAIL_ROUTE: &str = "detail";
pub const LIST_SLOT: usize = 0;
pub const DETAIL_SLOT: usize = 1;

/// Where list rows link to when the page is viewed without script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowLinks {
    /// `/detail?index=N`, answered by the preview server.
    #[default]
    Query,
    /// Files written next to `index.html` by `build`.
    Files,
}

impl RowLinks {
    pub fn href(self, index: usize) -> String {
        match self {
            Self::Query => format!("/{DETAIL_ROUTE}?index={index}"),
            Self::Files => detail_file_name(index),
        }
    }
}

pub fn detail_file_name(index: usize) -> String {
    format!("{DETAIL_ROUTE}-{index}.html")
}

/// Handles to a mounted, non-empty board.
pub struct NoticeBoard {
    router: Rc<Router>,
    slider: Rc<PageSlider>,
    list: Rc<ListBoard>,
    detail: Rc<TextPost>,
    store: Rc<RefCell<RecordStore>>,
}

impl NoticeBoard {
    #[cfg(test)]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[cfg(test)]
    pub fn slider(&self) -> &PageSlider {
        &self.slider
    }

    #[cfg(test)]
    pub fn list(&self) -> &ListBoard {
        &self.list
    }

    #[cfg(test)]
    pub fn detail(&self) -> &TextPost {
        &self.detail
    }

    pub fn store(&self) -> Ref<'_, RecordStore> {
        self.store.borrow()
    }

    pub fn navigate(&self, target: &str) -> Dispatch {
        self.router.navigate(target)
    }
}

/// Builds the page into `root`.
///
/// With no notices only the empty placeholder is mounted and `None` comes
/// back: there is nothing to navigate between, so no router or slider exists.
pub fn init_page(
    root: &Root,
    document: &Rc<Document>,
    config: &BoardConfig,
    records: Vec<NoticeRecord>,
    links: RowLinks,
) -> Option<NoticeBoard> {
    let store = RecordStore::new(records);

    if store.is_empty() {
        log::info!("no notices, showing the empty page");
        root.append_child(Rc::new(EmptyPage::new(config.empty_text.clone())));
        return None;
    }

    let store = Rc::new(RefCell::new(store));
    let router = Rc::new(Router::new());
    let slider = Rc::new(PageSlider::new(
        config.slider_class.clone(),
        config.slide_duration_ms,
    ));

    let on_select = {
        let router = Rc::downgrade(&router);
        Callback::from(move |index: usize| {
            if let Some(router) = router.upgrade() {
                router.redirect("/detail", Query::new().with("index", index));
            }
        })
    };
    let list = Rc::new(build_list_page(
        config.list_class.clone(),
        &store.borrow(),
        on_select,
        links,
    ));
    let detail = Rc::new(TextPost::new());

    router.set_router_func(DETAIL_ROUTE, {
        let store = Rc::clone(&store);
        let detail = Rc::clone(&detail);
        let slider = Rc::clone(&slider);
        let document = Rc::clone(document);
        let title = config.detail_title.clone();
        move |nav: &NavigationEvent| {
            let index = match nav.query.get("index") {
                None => 0,
                Some(value) => match value.as_index() {
                    Some(index) => index,
                    None => {
                        log::warn!("ignoring {}: bad index {value:?}", nav.path);
                        return;
                    }
                },
            };
            if let Err(e) = bind_detail(&detail, &store.borrow(), index) {
                log::warn!("ignoring {}: {e}", nav.path);
                return;
            }
            document.set_title(title.clone());
            if let Err(e) = slider.move_page(DETAIL_SLOT) {
                log::warn!("{e}");
            }
        }
    });
    router.set_router_func(DEFAULT_ROUTE, {
        let slider = Rc::clone(&slider);
        let document = Rc::clone(document);
        let title = config.title.clone();
        move |_: &NavigationEvent| {
            document.set_title(title.clone());
            if let Err(e) = slider.move_page(LIST_SLOT) {
                log::warn!("{e}");
            }
        }
    });

    slider.add_page(list.clone());
    slider.add_page(detail.clone());
    root.append_child(slider.clone());

    if let Err(e) = store.borrow_mut().parse_contents() {
        log::warn!("{e}");
    }

    log::info!("mounted {} notices", store.borrow().count());

    Some(NoticeBoard {
        router,
        slider,
        list,
        detail,
        store,
    })
}

/// A root and document with the board (or the empty page) mounted in them.
pub struct MountedPage {
    root: Root,
    document: Rc<Document>,
    lang: AttrValue,
    board: Option<NoticeBoard>,
}

impl MountedPage {
    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn lang(&self) -> &AttrValue {
        &self.lang
    }

    pub fn board(&self) -> Option<&NoticeBoard> {
        self.board.as_ref()
    }
}

pub fn mount(config: &BoardConfig, records: Vec<NoticeRecord>, links: RowLinks) -> MountedPage {
    let root = Root::new();
    let document = Rc::new(Document::new(config.title.clone()));
    let board = init_page(&root, &document, config, records, links);
    MountedPage {
        root,
        document,
        lang: config.lang.clone().into(),
        board,
    }
}
