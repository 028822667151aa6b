use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use portfolio_site::content::NAV_ITEMS;
use portfolio_site::scroll::{NavState, Viewport, ViewportError, NAVBAR_OFFSET};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Records every scroll request instead of animating anything.
#[derive(Default)]
struct RecordingViewport {
    scroll_y: Cell<f64>,
    sections: HashMap<&'static str, f64>,
    requests: RefCell<Vec<f64>>,
    broken: bool,
}

impl RecordingViewport {
    fn with_sections(sections: &[(&'static str, f64)]) -> Self {
        Self {
            sections: sections.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn requests(&self) -> Vec<f64> {
        self.requests.borrow().clone()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_y(&self) -> Result<f64, ViewportError> {
        if self.broken {
            return Err(ViewportError::ScrollPosition("detached".to_string()));
        }
        Ok(self.scroll_y.get())
    }

    fn section_top(&self, id: &str) -> Result<Option<f64>, ViewportError> {
        // bounding box tops are relative to the visible area
        Ok(self.sections.get(id).map(|top| top - self.scroll_y.get()))
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), ViewportError> {
        self.requests.borrow_mut().push(top);
        Ok(())
    }
}

fn page() -> RecordingViewport {
    RecordingViewport::with_sections(&[
        ("about", 900.0),
        ("skills", 1500.0),
        ("experience", 2200.0),
        ("projects", 3400.0),
        ("contact", 4300.0),
    ])
}

#[test]
fn navigate_scrolls_below_navbar() {
    setup();
    let viewport = page();
    let mut state = NavState::default();

    let target = state.navigate(&viewport, "skills").unwrap();
    assert_eq!(target, Some(1500.0 - NAVBAR_OFFSET));
    assert_eq!(viewport.requests(), [1420.0]);
}

#[test]
fn navigate_accounts_for_current_scroll() {
    setup();
    let viewport = page();
    viewport.scroll_y.set(2000.0);
    let mut state = NavState::default();

    // same absolute target whether the section is above or below
    state.navigate(&viewport, "about").unwrap();
    state.navigate(&viewport, "contact").unwrap();
    assert_eq!(viewport.requests(), [820.0, 4220.0]);
}

#[test]
fn navigate_closes_open_menu() {
    setup();
    let viewport = page();
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open());

    state.navigate(&viewport, "projects").unwrap();
    assert!(!state.menu_open());
}

#[test]
fn navigate_keeps_closed_menu_closed() {
    setup();
    let viewport = page();
    let mut state = NavState::default();

    state.navigate(&viewport, "projects").unwrap();
    assert!(!state.menu_open());
}

#[test]
fn navigate_to_missing_section_is_silent() {
    setup();
    let viewport = page();
    let mut state = NavState::default();
    state.toggle_menu();

    let target = state.navigate(&viewport, "services").unwrap();
    assert_eq!(target, None);
    assert!(viewport.requests().is_empty());
    assert!(!state.menu_open());
}

#[test]
fn navigate_closes_menu_when_viewport_fails() {
    setup();
    let viewport = RecordingViewport {
        broken: true,
        ..page()
    };
    let mut state = NavState::default();
    state.toggle_menu();

    let res = state.navigate(&viewport, "about");
    assert!(matches!(res, Err(ViewportError::ScrollPosition(_))));
    assert!(viewport.requests().is_empty());
    assert!(!state.menu_open());
}

#[test]
fn navigate_every_nav_item() {
    setup();
    let viewport = page();
    let mut state = NavState::default();

    for item in NAV_ITEMS {
        assert!(state.navigate(&viewport, item.id).unwrap().is_some());
    }
    assert_eq!(viewport.requests().len(), NAV_ITEMS.len());
}

#[test]
fn navigate_does_not_touch_scroll_flag() {
    setup();
    let viewport = page();
    let mut state = NavState::default();
    state.on_scroll(400.0);

    state.navigate(&viewport, "about").unwrap();
    assert!(state.scrolled());
}

#[test]
fn scroll_sequence_toggles_style() {
    setup();
    let mut state = NavState::default();
    let changes = [0.0, 10.0, 20.0, 21.0, 300.0, 19.0, 25.0]
        .into_iter()
        .map(|y| (state.on_scroll(y), state.scrolled()))
        .collect::<Vec<_>>();
    assert_eq!(
        changes,
        [
            (false, false),
            (false, false),
            (false, false),
            (true, true),
            (false, true),
            (true, false),
            (true, true),
        ]
    );
}
