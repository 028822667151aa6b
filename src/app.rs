mod homepage;
mod icons;
mod navbar;
mod project_card;
mod timeline;

use homepage::{Footer, HomePage};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use navbar::Navbar;

use crate::content::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=format!("{} - {}", PROFILE.name, PROFILE.role) />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title: String| {
            if title.is_empty() {
                PROFILE.name.to_string()
            } else {
                format!("{} - {title}", PROFILE.name)
            }
        } />

        <Router>
            <div class="min-h-screen bg-gray-50">
                <Navbar />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <section class="min-h-screen flex flex-col items-center justify-center gap-6">
            <h1 class="text-4xl font-bold text-gray-800">"Page not found."</h1>
            <a href="/" class="text-blue-600 hover:text-purple-600 transition-colors duration-300">
                "Back to the homepage"
            </a>
        </section>
    }
}
