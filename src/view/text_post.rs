use crate::{notice::ContentEntry, output::content_html, view::View};
use std::cell::RefCell;
use yew::{html, Html};

/// Article page whose fields are filled in after construction.
#[derive(Debug, Default)]
pub struct TextPost {
    title: RefCell<String>,
    subtitle: RefCell<String>,
    contents: RefCell<Vec<ContentEntry>>,
    footer: RefCell<String>,
}

impl TextPost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.borrow_mut() = title.into();
    }

    pub fn subtitle(&self) -> String {
        self.subtitle.borrow().clone()
    }

    pub fn set_subtitle(&self, subtitle: impl Into<String>) {
        *self.subtitle.borrow_mut() = subtitle.into();
    }

    pub fn contents(&self) -> Vec<ContentEntry> {
        self.contents.borrow().clone()
    }

    pub fn set_contents(&self, contents: Vec<ContentEntry>) {
        *self.contents.borrow_mut() = contents;
    }

    pub fn footer(&self) -> String {
        self.footer.borrow().clone()
    }

    pub fn set_footer(&self, footer: impl Into<String>) {
        *self.footer.borrow_mut() = footer.into();
    }
}

impl View for TextPost {
    fn view(&self) -> Html {
        let footer = self.footer();
        html! {
            <article class="text-post">
                <header class="text-post-header">
                    <h2 class="text-post-title font-text-title font-color-dark">
                        {self.title()}
                    </h2>
                    <p class="text-post-subtitle font-number-body3 font-color-regular">
                        {self.subtitle()}
                    </p>
                </header>
                <div class="text-post-contents font-text-body2 font-color-dark">
                    {content_html(&self.contents())}
                </div>
                if !footer.is_empty() {
                    <footer class="text-post-footer font-text-body3 font-color-light">
                        {footer}
                    </footer>
                }
            </article>
        }
    }
}
