use crate::view::{empty_alarm_image, View};
use yew::{html, AttrValue, Html};

/// Static placeholder shown instead of the board when there are no notices.
pub struct EmptyPage {
    text: AttrValue,
}

impl EmptyPage {
    pub fn new(text: impl Into<AttrValue>) -> Self {
        Self { text: text.into() }
    }
}

impl View for EmptyPage {
    fn view(&self) -> Html {
        html! {
            <div class="empty-page">
                {empty_alarm_image()}
                <div class="font-text-body1 font-color-light empty-page-text">
                    {self.text.clone()}
                </div>
            </div>
        }
    }
}
