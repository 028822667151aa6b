use leptos::prelude::*;

#[component]
fn IconSvg(size: u32, class: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn GithubIcon(#[prop(default = 24)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg size class>
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </IconSvg>
    }
}

#[component]
pub fn LinkedinIcon(#[prop(default = 24)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg size class>
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect width="4" height="12" x="2" y="9" />
            <circle cx="4" cy="4" r="2" />
        </IconSvg>
    }
}

#[component]
pub fn MailIcon(#[prop(default = 24)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg size class>
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </IconSvg>
    }
}

#[component]
pub fn ExternalLinkIcon(#[prop(default = 24)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg size class>
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        </IconSvg>
    }
}

#[component]
pub fn MenuIcon(#[prop(default = 24)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg size class>
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </IconSvg>
    }
}

#[component]
pub fn CloseIcon(#[prop(default = 24)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg size class>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </IconSvg>
    }
}

#[component]
pub fn CalendarIcon(#[prop(default = 24)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg size class>
            <rect width="18" height="18" x="3" y="4" rx="2" ry="2" />
            <line x1="16" x2="16" y1="2" y2="6" />
            <line x1="8" x2="8" y1="2" y2="6" />
            <line x1="3" x2="21" y1="10" y2="10" />
        </IconSvg>
    }
}

#[component]
pub fn MapPinIcon(#[prop(default = 24)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg size class>
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        </IconSvg>
    }
}
