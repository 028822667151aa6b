use leptos::prelude::*;

use super::icons::{ExternalLinkIcon, GithubIcon};
use crate::content::Project;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group bg-white rounded-xl shadow-lg overflow-hidden hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-2">
            <div class="p-8">
                <h3 class="text-2xl font-bold mb-3 bg-gradient-to-r from-gray-900 to-gray-700 bg-clip-text text-transparent">
                    {project.title}
                </h3>
                <p class="text-gray-600 mb-6 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-4 py-1.5 bg-gradient-to-r from-blue-50 to-purple-50 text-gray-700 rounded-full text-sm font-medium">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-6">
                    <a
                        href=project.github_url
                        class="flex items-center text-gray-700 hover:text-blue-600 transition-colors duration-300"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <GithubIcon size=20 class="mr-2" />
                        <span class="font-medium">"Code"</span>
                    </a>
                    <a
                        href=project.live_url
                        class="flex items-center text-gray-700 hover:text-purple-600 transition-colors duration-300"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <ExternalLinkIcon size=20 class="mr-2" />
                        <span class="font-medium">"Live Demo"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}
