use leptos::{html, prelude::*};

use crate::{
    content::{ABOUT_HIGHLIGHTS, OWNER, TAGLINE},
    reveal::ABOUT_THRESHOLD,
};

use super::{hooks::use_reveal, reveal_class};

#[component]
pub fn About() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, ABOUT_THRESHOLD);

    view! {
        <section id="about" node_ref=section class="py-20 relative">
            <div class="absolute inset-0 -z-10 overflow-hidden">
                <div
                    class="absolute -right-[40%] -top-[10%] w-[70%] h-[70%] rounded-full bg-accent/30 blur-[100px] dark:bg-accent/10"
                    aria-hidden="true"
                />
            </div>
            <div class="section-container">
                <div class="flex flex-col lg:flex-row gap-12 lg:gap-20 items-center">
                    <div class=move || {
                        reveal_class(
                            "lg:w-5/12 transition-all duration-1000",
                            visible.get(),
                            "-translate-x-10",
                            "translate-x-0",
                        )
                    }>
                        <div class="relative rounded-2xl overflow-hidden aspect-square">
                            <div class="absolute inset-0 bg-gradient-to-br from-accent to-background/20 opacity-80 z-10"></div>
                            <div class="absolute inset-0 bg-[url('https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=1961&auto=format&fit=crop')] bg-cover bg-center"></div>
                            <div class="absolute inset-0 flex items-center justify-center z-20">
                                <div class="glass p-4 sm:p-6 rounded-xl text-center max-w-[80%]">
                                    <h3 class="text-xl sm:text-2xl font-semibold mb-2">{OWNER}</h3>
                                    <p class="text-sm sm:text-base text-muted-foreground">
                                        {TAGLINE}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class=move || {
                        reveal_class(
                            "lg:w-7/12 transition-all duration-1000 delay-300",
                            visible.get(),
                            "translate-x-10",
                            "translate-x-0",
                        )
                    }>
                        <div class="space-y-6">
                            <div>
                                <h2 class="text-3xl sm:text-4xl font-bold mb-6">"About Me"</h2>
                                <p class="text-lg text-foreground/80 leading-relaxed">
                                    "I'm a versatile tech professional with over 8 years of experience in web development, AI automation, and backend management. My passion lies in creating elegant solutions that bridge the gap between complex technology and user-friendly experiences."
                                </p>
                                <p class="text-lg text-foreground/80 leading-relaxed mt-4">
                                    "With expertise across multiple programming languages and frameworks, I bring a holistic approach to every project, whether it's developing robust web applications, designing AI-powered automation workflows, or managing complex backend systems."
                                </p>
                            </div>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 pt-2">
                                {ABOUT_HIGHLIGHTS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class="glass-card p-4 rounded-xl flex items-start gap-3 transition-all hover:shadow-md duration-300 hover:-translate-y-1">
                                                <div class="p-2 rounded-lg bg-accent text-foreground">
                                                    <i class=item.icon />
                                                </div>
                                                <div>
                                                    <h3 class="font-medium">{item.title}</h3>
                                                    <p class="text-sm text-muted-foreground">{item.desc}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
