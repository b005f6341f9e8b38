use crate::view::View;
use yew::{classes, events::MouseEvent, html, AttrValue, Callback, Html};

/// A scrollable column of clickable rows. Clicking row `i` emits `i`; the
/// row's link, from `href(i)`, is what's followed without script.
pub struct ListBoard {
    class_name: AttrValue,
    items: Vec<Html>,
    on_select: Callback<usize>,
    href: Box<dyn Fn(usize) -> String>,
}

impl ListBoard {
    pub fn new(
        class_name: impl Into<AttrValue>,
        items: Vec<Html>,
        on_select: Callback<usize>,
        href: impl Fn(usize) -> String + 'static,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            items,
            on_select,
            href: Box::new(href),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Same as clicking row `index`.
    pub fn select(&self, index: usize) {
        if index < self.len() {
            self.on_select.emit(index);
        } else {
            log::warn!("{}: no row {index}", self.class_name);
        }
    }
}

impl View for ListBoard {
    fn view(&self) -> Html {
        html! {
            <ul class={classes!("list-board", self.class_name.to_string())}>
                {for self.items.iter().enumerate().map(|(index, item)| {
                    let on_select = self.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                    html! {
                        <li class="list-board-item" data-index={index.to_string()}>
                            <a href={(self.href)(index)} {onclick}>
                                {item.clone()}
                            </a>
                        </li>
                    }
                })}
            </ul>
        }
    }
}
