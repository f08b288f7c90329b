use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{is_scrolled, NAV_LINKS, OWNER};

use super::theme_toggle::ThemeToggle;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 ease-in-out py-3 glass shadow-sm border-b border-border/50"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 ease-in-out py-5 bg-transparent"
            }
        }>
            <div class="container flex items-center justify-between">
                <a
                    href="#home"
                    class="text-xl font-semibold flex items-center gap-2 transition-transform duration-300 hover:scale-[1.02]"
                >
                    <span class="bg-gradient-to-r from-primary to-primary/80 clip-text font-bold">
                        {OWNER}
                    </span>
                </a>

                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-sm font-medium text-foreground/80 hover:text-foreground transition-all duration-200"
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle />
                </nav>

                <div class="flex items-center gap-4 md:hidden">
                    <ThemeToggle />
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="rounded-full p-2 text-foreground/80 hover:text-foreground hover:bg-accent transition-colors"
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        <i class=move || if menu_open.get() { "extra-close" } else { "extra-menu" } />
                    </button>
                </div>
            </div>

            <div class=move || {
                if menu_open.get() {
                    "fixed inset-x-0 top-[57px] z-40 origin-top bg-background border-b border-border md:hidden transition-all duration-300 ease-in-out opacity-100 scale-y-100 translate-y-0"
                } else {
                    "fixed inset-x-0 top-[57px] z-40 origin-top bg-background border-b border-border md:hidden transition-all duration-300 ease-in-out opacity-0 scale-y-90 -translate-y-5 pointer-events-none"
                }
            }>
                <div class="container py-4 flex flex-col space-y-4">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-foreground/80 hover:text-foreground py-2 text-lg font-medium transition-colors"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}
