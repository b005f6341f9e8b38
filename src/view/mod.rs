use std::{cell::RefCell, rc::Rc};
use yew::{html, Html};

mod empty;
mod icon;
mod list_board;
mod slider;
mod text_post;

pub use empty::*;
pub use icon::*;
pub use list_board::*;
pub use slider::*;
pub use text_post::*;

/// Anything that can be mounted and drawn.
pub trait View {
    fn view(&self) -> Html;
}

/// The mount point top-level views are appended to.
#[derive(Default)]
pub struct Root {
    children: RefCell<Vec<Rc<dyn View>>>,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_child(&self, child: Rc<dyn View>) {
        self.children.borrow_mut().push(child);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }
}

impl View for Root {
    fn view(&self) -> Html {
        let children = self.children.borrow();
        html! {
            <div class="root">
                {for children.iter().map(|child| child.view())}
            </div>
        }
    }
}

/// Document-level state outside the root, i.e. the title.
#[derive(Debug, Default)]
pub struct Document {
    title: RefCell<String>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: RefCell::new(title.into()),
        }
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.borrow_mut() = title.into();
    }
}
