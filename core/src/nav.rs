use crate::page::{Page, OPEN};
use tracing::debug;

/// Opens and closes the navigation menu from its toggle button.
#[derive(Debug, Clone, Copy)]
pub struct NavController;

impl NavController {
    /// Requires both the toggle button and the menu.
    pub fn activate(page: &Page) -> Option<Self> {
        page.nav_toggle.as_ref()?;
        page.nav_menu.as_ref()?;
        Some(Self)
    }

    /// Flip `aria-expanded` on the toggle and `is-open` on the menu.
    pub fn on_toggle(&self, page: &mut Page) {
        let (Some(toggle), Some(menu)) = (page.nav_toggle.as_mut(), page.nav_menu.as_mut()) else {
            return;
        };
        let expanded = toggle.is_expanded();
        toggle.aria_expanded = Some((!expanded).to_string());
        let open = menu.classes.flip(OPEN);
        debug!(expanded = !expanded, open, "nav toggled");
    }

    /// Following a menu link collapses an open menu. A menu without links has
    /// nothing to follow.
    pub fn on_link_click(&self, page: &mut Page) {
        let (Some(toggle), Some(menu)) = (page.nav_toggle.as_mut(), page.nav_menu.as_mut()) else {
            return;
        };
        if menu.links > 0 && menu.classes.contains(OPEN) {
            menu.classes.remove(OPEN);
            toggle.aria_expanded = Some("false".to_string());
        }
    }
}
