use crate::view::View;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use thiserror::Error;
use yew::{classes, html, AttrValue, Html};

/// Horizontal strip of pages, one of which is visible at a time. Moving
/// translates the strip so the target page lines up with the viewport.
pub struct PageSlider {
    class_name: AttrValue,
    pages: RefCell<Vec<Rc<dyn View>>>,
    active: Cell<usize>,
    slide_duration_ms: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("slot {index} out of range for {count} pages")]
    OutOfRange { index: usize, count: usize },
}

impl PageSlider {
    pub fn new(class_name: impl Into<AttrValue>, slide_duration_ms: u32) -> Self {
        Self {
            class_name: class_name.into(),
            pages: RefCell::new(Vec::new()),
            active: Cell::new(0),
            slide_duration_ms,
        }
    }

    /// Appends a page, returning its slot.
    pub fn add_page(&self, page: Rc<dyn View>) -> usize {
        let mut pages = self.pages.borrow_mut();
        pages.push(page);
        pages.len() - 1
    }

    pub fn move_page(&self, index: usize) -> Result<(), SlotError> {
        let count = self.len();
        if index >= count {
            return Err(SlotError::OutOfRange { index, count });
        }
        let previous = self.active.replace(index);
        if previous != index {
            log::debug!("{} slot {previous} -> {index}", self.class_name);
        }
        Ok(())
    }

    pub fn active(&self) -> usize {
        self.active.get()
    }

    pub fn is_active(&self, index: usize) -> bool {
        index < self.len() && index == self.active()
    }

    pub fn len(&self) -> usize {
        self.pages.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pages.borrow().is_empty()
    }
}

impl View for PageSlider {
    fn view(&self) -> Html {
        let pages = self.pages.borrow();
        let active = self.active();
        let track_style = format!(
            "transform: translateX(-{}%); transition: transform {}ms ease-in-out;",
            active * 100,
            self.slide_duration_ms
        );

        html! {
            <div class={classes!("page-slider", self.class_name.to_string())}>
                <div class="page-slider-track" style={track_style}>
                    {for pages.iter().enumerate().map(|(index, page)| html! {
                        <section
                            class={classes!("page-slider-page", self.is_active(index).then_some("active"))}
                            aria-hidden={(!self.is_active(index)).to_string()}
                            data-slot={index.to_string()}
                        >
                            {page.view()}
                        </section>
                    })}
                </div>
            </div>
        }
    }
}
