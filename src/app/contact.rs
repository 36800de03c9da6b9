use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{copyright_line, PROFILE};
use crate::shell::SectionId;

#[component]
pub fn Contact() -> impl IntoView {
    let section = SectionId::Contact;
    view! {
        <section id=section.anchor() class="py-32 px-6 bg-lime-400">
            <div class="max-w-7xl mx-auto text-center">
                <span class="font-mono font-bold text-black/60">{section.heading_label()}</span>

                <h2 class="text-4xl md:text-7xl font-black mt-4 mb-8">
                    "Let's Build Something "
                    <span class="underline decoration-wavy decoration-black underline-offset-8">
                        "Amazing"
                    </span>
                </h2>

                <p class="text-xl text-black/70 max-w-2xl mx-auto mb-12">
                    "Currently open to freelance projects and remote opportunities. Have an idea? Let's make it happen!"
                </p>

                <div class="flex flex-col md:flex-row items-center justify-center gap-6">
                    <a
                        href=PROFILE.mailto()
                        class="group bg-lime-500 text-black px-10 py-5 font-bold text-xl flex items-center gap-3 border-2 border-black hover:bg-lime-400 transition-all duration-300 shadow-[6px_6px_0px_#000] hover:shadow-[8px_8px_0px_#000] hover:translate-x-1 hover:-translate-y-1"
                    >
                        <span class="group-hover:rotate-12 transition-transform">"✉"</span>
                        "Say Hello"
                    </a>

                    <div class="flex gap-4">
                        <a
                            href=PROFILE.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-4 bg-lime-500 text-black border-2 border-black hover:bg-lime-400 transition-all duration-300 text-3xl"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain" />
                        </a>
                        <a
                            href=PROFILE.linkedin_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-4 bg-lime-500 text-black border-2 border-black hover:bg-lime-400 transition-all duration-300 text-3xl"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain" />
                        </a>
                    </div>
                </div>

                <p class="mt-12 font-mono text-sm text-black/50">
                    {format!("{} • {}", PROFILE.email, PROFILE.location)}
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    view! {
        <footer class="bg-black text-white py-8 px-6">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center gap-4">
                <div class="flex items-center gap-2">
                    <span class="font-mono text-lime-400">">_"</span>
                    <span class="font-mono text-sm text-gray-400">
                        {copyright_line(year)}
                    </span>
                </div>
                <div class="font-mono text-sm text-gray-500">
                    "Made with " <span class="text-lime-400">"♥"</span> " and lots of ☕"
                </div>
            </div>
        </footer>
    }
}
