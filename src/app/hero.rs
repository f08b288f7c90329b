use leptos::prelude::*;

use crate::content::{OWNER, TAGLINE};

use super::{hooks::use_mount_reveal, reveal_class};

#[component]
pub fn Hero() -> impl IntoView {
    let loaded = use_mount_reveal();
    let rise = move |base: &'static str| {
        move || reveal_class(base, loaded.get(), "translate-y-10", "translate-y-0")
    };
    let line = move |delay_ms: u32| {
        move || {
            let shown = if loaded.get() { "opacity-100" } else { "opacity-0" };
            format!("block animate-text-reveal {shown} [animation-delay:{delay_ms}ms]")
        }
    };

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-accent/50 to-background -z-10" />
            <div class="container px-4 sm:px-6 py-12 flex flex-col items-center text-center">
                <div class="max-w-3xl space-y-8">
                    <div class=rise("transition-all duration-700 ease-out delay-100")>
                        <span class="inline-block py-1 px-3 text-xs sm:text-sm font-medium bg-accent text-primary rounded-full mb-4">
                            {TAGLINE}
                        </span>
                    </div>
                    <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold tracking-tight overflow-hidden">
                        <div class="overflow-hidden">
                            <span class=line(150)>
                                "Hi, I'm "
                                <span class="bg-gradient-to-r from-primary to-primary/80 clip-text">
                                    {OWNER}
                                </span>
                            </span>
                        </div>
                        <div class="overflow-hidden mt-2">
                            <span class=line(300)>"Building Smart Web Solutions"</span>
                        </div>
                        <div class="overflow-hidden mt-2">
                            <span class=line(450)>"with AI & Code"</span>
                        </div>
                    </h1>
                    <p class=rise(
                        "text-lg sm:text-xl text-foreground/80 max-w-2xl mx-auto transition-all duration-700 ease-out delay-[600ms]",
                    )>
                        "Full-stack developer specializing in Python, Django, and JavaScript with a passion for AI automation and creating elegant, efficient web solutions."
                    </p>
                    <div class=rise(
                        "flex flex-col sm:flex-row gap-4 justify-center pt-4 transition-all duration-700 ease-out delay-[750ms]",
                    )>
                        <a
                            href="#contact"
                            class="px-6 py-3 rounded-full bg-foreground text-background font-medium hover:shadow-lg transform hover:-translate-y-1 transition-all duration-300"
                        >
                            "Let's Collaborate"
                        </a>
                        <a
                            href="#projects"
                            class="px-6 py-3 rounded-full border border-border bg-background/50 backdrop-blur-sm font-medium hover:bg-accent transition-all duration-300"
                        >
                            "See My Work"
                        </a>
                    </div>
                </div>
                <a
                    href="#about"
                    class=rise(
                        "absolute bottom-8 animate-bounce transition-all duration-700 ease-out delay-[900ms]",
                    )
                    aria-label="Scroll to about section"
                >
                    <i class="extra-arrow-down" />
                </a>
            </div>
        </section>
    }
}
