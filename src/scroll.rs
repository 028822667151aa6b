//! Navbar scroll behaviour: tracking the scroll threshold and smooth-scrolling
//! to a section with the fixed navbar's height taken into account.
//!
//! Everything here is independent of the DOM. The browser side lives behind
//! the [`Viewport`] trait so the navigation rules can be exercised without a
//! rendering surface.

use thiserror::Error;

/// Vertical offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Height of the fixed navbar (px), subtracted from every navigation target.
pub const NAVBAR_OFFSET: f64 = 80.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    #[error("No global window available")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Couldn't read scroll position: {0}")]
    ScrollPosition(String),
}

/// The parts of the display surface navigation needs.
pub trait Viewport {
    /// Current vertical page scroll offset.
    fn scroll_y(&self) -> Result<f64, ViewportError>;

    /// Top edge of the element with the given id, relative to the visible
    /// area. `Ok(None)` when no such element exists.
    fn section_top(&self, id: &str) -> Result<Option<f64>, ViewportError>;

    /// Request an animated scroll to `top`. Returns immediately; a later
    /// request supersedes one still in flight.
    fn smooth_scroll_to(&self, top: f64) -> Result<(), ViewportError>;
}

pub fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Absolute scroll offset that puts a section just below the navbar.
pub fn scroll_target(section_top: f64, scroll_y: f64) -> f64 {
    section_top + scroll_y - NAVBAR_OFFSET
}

/// Transient navbar state. Only changes through [`NavState::on_scroll`],
/// [`NavState::toggle_menu`] and [`NavState::navigate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns whether the threshold flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = past_threshold(scroll_y);
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scrolls the viewport to section `id` and closes the mobile menu.
    ///
    /// The menu is closed whatever the outcome. Returns the requested offset,
    /// or `None` if there is no section with that id.
    pub fn navigate(
        &mut self,
        viewport: &impl Viewport,
        id: &str,
    ) -> Result<Option<f64>, ViewportError> {
        let res = request_scroll(viewport, id);
        self.menu_open = false;
        res
    }
}

fn request_scroll(viewport: &impl Viewport, id: &str) -> Result<Option<f64>, ViewportError> {
    let Some(top) = viewport.section_top(id)? else {
        log::debug!("no section `{id}`, skipping scroll");
        return Ok(None);
    };
    let target = scroll_target(top, viewport.scroll_y()?);
    viewport.smooth_scroll_to(target)?;
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(20.0));
        assert!(past_threshold(20.5));
        assert!(past_threshold(21.0));
        assert!(!past_threshold(-5.0));
    }

    #[test]
    fn test_on_scroll_reports_changes() {
        let mut state = NavState::default();
        assert!(!state.on_scroll(10.0));
        assert!(!state.scrolled());

        assert!(state.on_scroll(21.0));
        assert!(state.scrolled());
        assert!(!state.on_scroll(500.0));
        assert!(state.scrolled());

        assert!(state.on_scroll(20.0));
        assert!(!state.scrolled());
    }

    #[test]
    fn test_on_scroll_leaves_menu_alone() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.on_scroll(300.0);
        assert!(state.menu_open());
        state.on_scroll(0.0);
        assert!(state.menu_open());
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = NavState::default();
        assert!(!state.menu_open());
        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(400.0, 0.0), 320.0);
        assert_eq!(scroll_target(400.0, 1000.0), 1320.0);
        // section above the current position
        assert_eq!(scroll_target(-600.0, 1000.0), 320.0);
        assert_eq!(scroll_target(0.0, 0.0), -NAVBAR_OFFSET);
    }
}
