mod about;
mod clock;
mod contact;
mod footer;
mod hero;
mod hooks;
mod navbar;
mod projects;
mod skills;
mod teaching;
mod theme_toggle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{OWNER, TAGLINE};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use teaching::Teaching;
use theme_toggle::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Router>
            <Navbar />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=TAGLINE />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Teaching />
        <Contact />
    }
}

/// Class list for an element that slides in once its section is revealed.
fn reveal_class(base: &str, visible: bool, hidden: &str, shown: &str) -> String {
    if visible {
        format!("{base} opacity-100 {shown}")
    } else {
        format!("{base} opacity-0 {hidden}")
    }
}
