mod about;
mod contact;
mod cursor;
mod decor;
mod experience;
mod hero;
mod homepage;
mod loading;
mod nav;
mod skills;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{person_json_ld, PROFILE};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
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

    let structured_data = match person_json_ld() {
        Ok(json) => Some(view! { <Script type_="application/ld+json">{json}</Script> }),
        Err(e) => {
            log::error!("couldn't serialize profile: {e}");
            None
        }
    };

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.full_name()) />
        <Meta
            name="description"
            content=format!(
                "{} - {} based in {}.",
                PROFILE.full_name(),
                PROFILE.job_title,
                PROFILE.location,
            )
        />
        {structured_data}

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
