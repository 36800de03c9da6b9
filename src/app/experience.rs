use leptos::prelude::*;

use crate::content::{Job, JOBS};
use crate::shell::SectionId;

const GRID_BACKDROP: &str = "background-image: repeating-linear-gradient(0deg, transparent, transparent 50px, rgba(163,230,53,0.1) 50px, rgba(163,230,53,0.1) 51px), repeating-linear-gradient(90deg, transparent, transparent 50px, rgba(163,230,53,0.1) 50px, rgba(163,230,53,0.1) 51px);";

#[component]
pub fn Experience() -> impl IntoView {
    let section = SectionId::Experience;
    view! {
        <section id=section.anchor() class="py-32 bg-black text-white relative overflow-hidden">
            <div class="absolute inset-0 opacity-5">
                <div class="absolute top-0 left-0 w-full h-full" style=GRID_BACKDROP />
            </div>

            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <div class="flex items-center gap-4 mb-16">
                    <span class="text-lime-400 font-mono font-bold">{section.heading_label()}</span>
                    <div class="flex-1 h-px bg-gray-800" />
                </div>

                <h2 class="text-4xl md:text-6xl font-black mb-16">
                    "Where I've " <span class="text-lime-400">"worked"</span>
                </h2>

                <div class="space-y-8">
                    {JOBS.iter().map(|job| view! { <JobCard job /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn JobCard(job: &'static Job) -> impl IntoView {
    view! {
        <div class="group relative bg-gray-900 p-8 border border-gray-800 hover:border-lime-400 transition-all duration-300">
            <div class=format!("absolute top-0 left-0 w-2 h-full {}", job.accent.bg_class()) />

            <div class="flex flex-col md:flex-row justify-between items-start mb-6">
                <div>
                    <h3 class="text-2xl md:text-3xl font-black group-hover:text-lime-400 transition-colors">
                        {job.company}
                    </h3>
                    <p class="text-gray-400 font-medium">{job.role}</p>
                </div>
                <div class="mt-2 md:mt-0 text-right">
                    <p class="font-mono text-lime-400">{job.period}</p>
                    <p class="text-sm text-gray-500">{job.location}</p>
                </div>
            </div>

            <ul class="grid md:grid-cols-2 gap-3">
                {job
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <li class="flex items-start gap-2 text-gray-300">
                                <span class="text-lime-400 flex-shrink-0">"⚡"</span>
                                {*achievement}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
