use crate::{
    board::RowLinks,
    notice::RecordStore,
    view::{more_right, ListBoard},
};
use yew::{html, AttrValue, Callback, Html};

const MORE_ICON_SIZE: u32 = 16;
const MORE_ICON_COLOR: &str = "#E5E5E5";

/// One row per notice: title, date and a chevron. Only titles and dates are
/// read, so the store may still hold raw contents.
pub fn build_list_page(
    class_name: impl Into<AttrValue>,
    store: &RecordStore,
    on_select: Callback<usize>,
    links: RowLinks,
) -> ListBoard {
    let items = store
        .iter()
        .map(|notice| {
            html! {
                <div class="header-custom-content row">
                    <div class="header-custom-text">
                        <p class="font-text-body1 font-medium font-color-dark">
                            {notice.title.clone()}
                        </p>
                        <p class="font-number-body3 font-color-regular">
                            {notice.date.clone()}
                        </p>
                    </div>
                    {more_right(MORE_ICON_SIZE, MORE_ICON_COLOR)}
                </div>
            }
        })
        .collect::<Vec<Html>>();

    ListBoard::new(class_name, items, on_select, move |index| links.href(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{notice::NoticeRecord, output::render_fragment, view::View};
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn rows_follow_store_order() {
        let store = RecordStore::new(vec![
            NoticeRecord::new("A", "d1", Vec::new(), ""),
            NoticeRecord::new("B", "d2", Vec::new(), ""),
        ]);
        let selected = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&selected);
        let list = build_list_page(
            "notice-board",
            &store,
            Callback::from(move |index| s.borrow_mut().push(index)),
            RowLinks::Files,
        );

        assert_eq!(list.len(), 2);
        let html = render_fragment(list.view());
        let a = html.find(">A<").unwrap();
        let b = html.find(">B<").unwrap();
        assert!(a < b, "{html}");
        assert!(html.contains("d2"), "{html}");
        assert_eq!(html.matches("icon-more-right").count(), 2, "{html}");
        assert!(html.contains(r#"href="detail-1.html""#), "{html}");

        list.select(1);
        assert_eq!(*selected.borrow(), vec![1]);
    }
}
