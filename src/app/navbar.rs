use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

use super::icons::{CloseIcon, MenuIcon};
use crate::content::{NAV_ITEMS, PROFILE};
use crate::scroll::{NavState, Viewport, ViewportError};

/// [`Viewport`] backed by the browser window.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserViewport;

impl BrowserViewport {
    fn window() -> Result<web_sys::Window, ViewportError> {
        web_sys::window().ok_or(ViewportError::NoWindow)
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> Result<f64, ViewportError> {
        Self::window()?
            .scroll_y()
            .map_err(|e| ViewportError::ScrollPosition(format!("{e:?}")))
    }

    fn section_top(&self, id: &str) -> Result<Option<f64>, ViewportError> {
        let document = Self::window()?
            .document()
            .ok_or(ViewportError::NoDocument)?;
        Ok(document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top()))
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), ViewportError> {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        Self::window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}

/// Handle to the navbar state shared by the bar and its link lists.
#[derive(Debug, Clone, Copy)]
struct NavController {
    state: RwSignal<NavState>,
}

impl NavController {
    fn new() -> Self {
        Self {
            state: RwSignal::new(NavState::default()),
        }
    }

    fn scrolled(&self) -> bool {
        self.state.with(NavState::scrolled)
    }

    fn menu_open(&self) -> bool {
        self.state.with(NavState::menu_open)
    }

    fn on_scroll(&self) {
        match BrowserViewport.scroll_y() {
            Ok(y) => self.state.maybe_update(|s| s.on_scroll(y)),
            Err(e) => log::warn!("scroll listener: {e}"),
        }
    }

    fn toggle_menu(&self) {
        self.state.update(NavState::toggle_menu);
    }

    fn navigate(&self, id: &str) {
        let mut res = Ok(None);
        self.state.maybe_update(|s| {
            let before = *s;
            res = s.navigate(&BrowserViewport, id);
            *s != before
        });
        if let Err(e) = res {
            log::warn!("couldn't scroll to section `{id}`: {e}");
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = NavController::new();

    // removed again when the owner is cleaned up
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| nav.on_scroll(),
        UseEventListenerOptions::default().passive(true),
    );

    view! {
        <nav class=move || {
            if nav.scrolled() {
                "fixed w-full z-50 transition-all duration-300 bg-white/80 backdrop-blur-lg shadow-lg"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto px-6">
                <div class="relative flex items-center justify-between h-20">
                    <div class="flex-shrink-0">
                        <span class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            {PROFILE.monogram}
                        </span>
                    </div>

                    <div class="hidden md:flex md:items-center md:space-x-8">
                        <NavLinks
                            nav
                            class="text-gray-700 hover:text-blue-600 px-3 py-2 text-sm font-medium transition-colors duration-300"
                        />
                    </div>

                    <div class="md:hidden">
                        <button
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-700 hover:text-blue-600 focus:outline-none"
                            aria-label="Toggle navigation"
                            aria-expanded=move || nav.menu_open().to_string()
                            on:click=move |_| nav.toggle_menu()
                        >
                            {move || {
                                if nav.menu_open() {
                                    Either::Left(view! { <CloseIcon /> })
                                } else {
                                    Either::Right(view! { <MenuIcon /> })
                                }
                            }}
                        </button>
                    </div>
                </div>

                <Show when=move || nav.menu_open()>
                    <div class="md:hidden absolute top-full left-0 w-full bg-white/95 backdrop-blur-lg shadow-lg py-4 slide-in">
                        <div class="px-4 space-y-2">
                            <NavLinks
                                nav
                                class="block w-full text-left px-4 py-3 text-gray-700 hover:bg-gray-50 hover:text-blue-600 transition-colors duration-300"
                            />
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavLinks(nav: NavController, class: &'static str) -> impl IntoView {
    NAV_ITEMS
        .iter()
        .map(|item| {
            let id = item.id;
            view! {
                <button data-section=id class=class on:click=move |_| nav.navigate(id)>
                    {item.label}
                </button>
            }
        })
        .collect_view()
}
