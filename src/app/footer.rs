use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{NAV_LINKS, OWNER, TAGLINE};

const FOOTER_LINKS: [&str; 4] = ["Home", "About", "Projects", "Contact"];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    let built = env!("BUILD_TIME");

    let scroll_to_top = move |_| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    view! {
        <footer class="py-10 border-t border-border">
            <div class="container">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-6 md:mb-0">
                        <p class="text-center md:text-left">
                            <span class="font-medium">{OWNER}</span>
                            <span class="text-muted-foreground">" \u{2022} " {TAGLINE}</span>
                        </p>
                        <p
                            class="text-sm text-muted-foreground mt-1 text-center md:text-left"
                            title=format!("Built {built}")
                        >
                            "\u{00A9} " {year} " All rights reserved."
                        </p>
                    </div>
                    <div class="flex flex-col sm:flex-row items-center gap-4 sm:gap-8">
                        <div class="flex items-center gap-4">
                            {NAV_LINKS
                                .iter()
                                .filter(|link| FOOTER_LINKS.contains(&link.name))
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            class="text-foreground/80 hover:text-foreground text-sm transition-colors"
                                        >
                                            {link.name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            on:click=scroll_to_top
                            class="p-2 rounded-full bg-accent hover:bg-accent/80 transition-colors"
                            aria-label="Scroll to top"
                        >
                            <i class="extra-arrow-up" />
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
