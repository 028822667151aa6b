use leptos::prelude::*;
use leptos_meta::Title;

use super::icons::{GithubIcon, LinkedinIcon, MailIcon};
use super::project_card::ProjectCard;
use super::timeline::Timeline;
use crate::content::{copyright_year, PROFILE, PROJECTS, SKILLS};

const HEADING_CLASS: &str = "text-4xl font-bold text-center mb-16 bg-gradient-to-r from-gray-900 to-gray-700 bg-clip-text text-transparent";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=PROFILE.role />
        <Hero />
        <Section id="about" title="About Me" class="bg-white">
            <div class="max-w-3xl mx-auto glass-effect p-8 rounded-2xl">
                <p class="text-lg text-gray-600 leading-relaxed">{PROFILE.about}</p>
            </div>
        </Section>
        <Section id="skills" title="Skills" class="bg-gray-50">
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6 max-w-4xl mx-auto">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="glass-effect rounded-xl p-6 text-center transform transition-all duration-300 hover:scale-105 hover:shadow-xl">
                                <p class="font-medium text-gray-800">{*skill}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
        <Section id="experience" title="Experience" class="bg-white">
            <Timeline />
        </Section>
        <Section id="projects" title="Featured Projects" class="bg-gray-50">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </div>
        </Section>
        <Section id="contact" title="Get In Touch" class="bg-white">
            <Contact />
        </Section>
    }
}

#[component]
fn Section(
    id: &'static str,
    title: &'static str,
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("py-24 {class}")>
            <div class="container mx-auto px-6">
                <h2 class=HEADING_CLASS>{title}</h2>
                {children()}
            </div>
        </section>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-900 via-gray-800 to-black text-white overflow-hidden">
            <div class="container mx-auto px-6 py-20 text-center relative z-10">
                <div class="animate-float">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500 animate-gradient">
                        {PROFILE.name}
                    </h1>
                    <p class="text-xl md:text-2xl mb-8 bg-clip-text text-transparent bg-gradient-to-r from-blue-200 to-purple-200">
                        {PROFILE.role}
                    </p>
                </div>
                <div class="flex justify-center space-x-6 mt-12">
                    <a
                        href=PROFILE.github_url
                        class="glass-effect p-4 rounded-lg hover:scale-110 transition-transform duration-300"
                        aria-label="GitHub Profile"
                    >
                        <GithubIcon />
                    </a>
                    <a
                        href=PROFILE.linkedin_url
                        class="glass-effect p-4 rounded-lg hover:scale-110 transition-transform duration-300"
                        aria-label="LinkedIn Profile"
                    >
                        <LinkedinIcon />
                    </a>
                    <a
                        href=PROFILE.mailto()
                        class="glass-effect p-4 rounded-lg hover:scale-110 transition-transform duration-300"
                        aria-label="Email"
                    >
                        <MailIcon />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <div class="max-w-lg mx-auto glass-effect p-8 rounded-2xl">
            <div class="flex flex-col space-y-6 items-center">
                <a
                    href=PROFILE.mailto()
                    class="flex items-center space-x-3 text-gray-700 hover:text-blue-600 transition-colors duration-300"
                >
                    <MailIcon />
                    <span class="text-lg font-medium">{PROFILE.email}</span>
                </a>
                <div class="flex space-x-6">
                    <a
                        href=PROFILE.github_url
                        class="text-gray-700 hover:text-gray-900 transition-colors duration-300 transform hover:scale-110"
                        aria-label="GitHub Profile"
                    >
                        <GithubIcon size=28 />
                    </a>
                    <a
                        href=PROFILE.linkedin_url
                        class="text-gray-700 hover:text-blue-600 transition-colors duration-300 transform hover:scale-110"
                        aria-label="LinkedIn Profile"
                    >
                        <LinkedinIcon size=28 />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-r from-gray-900 to-black text-white py-8">
            <div class="container mx-auto px-6 text-center">
                <p class="text-gray-300">
                    {format!("© {} {}. All rights reserved.", copyright_year(), PROFILE.name)}
                </p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{EXPERIENCE, NAV_ITEMS};
    use leptos_meta::provide_meta_context;

    fn render() -> String {
        Owner::new().with(|| {
            provide_meta_context();
            view! { <HomePage /> }.to_html()
        })
    }

    #[test]
    fn test_every_nav_target_exists_in_order() {
        let html = render();
        let positions = NAV_ITEMS
            .iter()
            .map(|item| {
                html.find(&format!("id=\"{}\"", item.id))
                    .unwrap_or_else(|| panic!("missing section {}", item.id))
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sections_render_content() {
        let html = render();
        for skill in SKILLS {
            assert!(html.contains(&format!(">{skill}<")));
        }
        for entry in EXPERIENCE {
            assert!(html.contains(entry.company));
        }
        for project in PROJECTS {
            assert!(html.contains(project.title));
        }
        assert!(html.contains("href=\"mailto:john@example.com\""));
    }

    #[test]
    fn test_footer_copyright() {
        let html = Owner::new().with(|| view! { <Footer /> }.to_html());
        assert!(html.contains(&format!("{} {}. All rights reserved.", copyright_year(), PROFILE.name)));
    }
}
