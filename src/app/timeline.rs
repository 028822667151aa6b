use leptos::prelude::*;

use super::icons::{CalendarIcon, MapPinIcon};
use crate::content::{Experience, EXPERIENCE};

#[component]
fn TimelineItem(entry: &'static Experience) -> impl IntoView {
    view! {
        <div class="mb-12 flex gap-8 group">
            <div class="flex flex-col items-center">
                <div class="w-4 h-4 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full group-hover:scale-125 transition-transform duration-300"></div>
                <div class="w-0.5 h-full bg-gradient-to-b from-blue-500/50 to-purple-500/20"></div>
            </div>
            <div class="flex-1 glass-effect rounded-2xl p-8 transform transition-all duration-300 hover:scale-[1.02] slide-in">
                <div class="flex items-center gap-3 text-sm text-gray-500 mb-2">
                    <CalendarIcon size=16 class="text-blue-500" />
                    <span class="font-medium">{entry.date}</span>
                    <MapPinIcon size=16 class="ml-2 text-purple-500" />
                    <span class="font-medium">{entry.location}</span>
                </div>
                <h3 class="text-2xl font-bold bg-gradient-to-r from-gray-900 to-gray-700 bg-clip-text text-transparent mb-1">
                    {entry.title}
                </h3>
                <p class="text-lg text-gray-600 mb-4 font-medium">{entry.company}</p>
                <ul class="space-y-2">
                    {entry
                        .description
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="flex items-start text-gray-600">
                                    <span class="w-1.5 h-1.5 mt-2 mr-3 bg-gradient-to-r from-blue-400 to-purple-400 rounded-full"></span>
                                    {*item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// Career history as a vertical rail, in declared order.
#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto">
            {EXPERIENCE.iter().map(|entry| view! { <TimelineItem entry /> }).collect_view()}
        </div>
    }
}
