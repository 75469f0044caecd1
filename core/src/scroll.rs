use crate::page::{Page, VISIBLE};
use serde::Serialize;

/// Scroll offset past which the scroll-to-top button shows.
pub const SCROLL_THRESHOLD: f64 = 240.0;

/// Scroll the window should perform on the page's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub smooth: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollTopController;

impl ScrollTopController {
    pub fn activate(page: &mut Page) -> Option<Self> {
        page.scroll_top.as_ref()?;
        let controller = Self;
        controller.update(page);
        Some(controller)
    }

    pub fn on_scroll(&self, page: &mut Page, scroll_y: f64) {
        page.scroll_y = scroll_y;
        self.update(page);
    }

    pub fn on_click(&self) -> ScrollRequest {
        ScrollRequest {
            top: 0.0,
            smooth: true,
        }
    }

    fn update(&self, page: &mut Page) {
        let visible = page.scroll_y > SCROLL_THRESHOLD;
        if let Some(button) = page.scroll_top.as_mut() {
            button.classes.toggle(VISIBLE, visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ScrollTopButton;

    fn is_visible(page: &Page) -> bool {
        page.scroll_top.as_ref().unwrap().classes.contains(VISIBLE)
    }

    #[test]
    fn follows_threshold() {
        let mut p = Page {
            scroll_top: Some(ScrollTopButton::default()),
            scroll_y: 500.0,
            ..Page::default()
        };
        let scroll = ScrollTopController::activate(&mut p).unwrap();
        assert!(is_visible(&p));
        scroll.on_scroll(&mut p, SCROLL_THRESHOLD);
        assert!(!is_visible(&p));
        scroll.on_scroll(&mut p, 241.0);
        assert!(is_visible(&p));
        assert_eq!(scroll.on_click(), ScrollRequest { top: 0.0, smooth: true });
    }

    #[test]
    fn absent_button() {
        assert!(ScrollTopController::activate(&mut Page::default()).is_none());
    }
}
