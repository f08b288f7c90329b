use leptos::{html, prelude::*};

use crate::{
    content::{MAX_SKILL_LEVEL, SKILLS},
    filter::{categories, CategoryFilter, StagedReveal},
    reveal::SECTION_THRESHOLD,
};

use super::{
    clock,
    hooks::{use_reveal, use_timed},
    reveal_class,
};

#[component]
pub fn Skills() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, SECTION_THRESHOLD);
    let (filter, set_filter) = signal(CategoryFilter::All);
    let staged = RwSignal::new(StagedReveal::new());
    use_timed(staged);

    // restage whenever the filter changes or the section first shows
    Effect::new(move |_| {
        let current = filter.get();
        let is_visible = visible.get();
        staged.update(|s| {
            s.reset(current.apply(SKILLS).into_iter().map(|skill| skill.name));
            if is_visible {
                s.start(clock::now());
            }
        });
    });

    let buttons = categories(SKILLS)
        .into_iter()
        .map(|category| {
            let label = category.to_string();
            let selected = category.clone();
            view! {
                <button
                    on:click=move |_| set_filter.set(selected.clone())
                    class=move || {
                        if filter.get() == category {
                            "px-4 py-2 rounded-full text-sm transition-all duration-300 bg-foreground text-background font-medium"
                        } else {
                            "px-4 py-2 rounded-full text-sm transition-all duration-300 bg-background hover:bg-background/80"
                        }
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="skills" node_ref=section class="py-20 bg-accent/30 dark:bg-accent/10">
            <div class="section-container">
                <h2 class=move || {
                    reveal_class(
                        "section-title transition-all duration-700",
                        visible.get(),
                        "translate-y-10",
                        "translate-y-0",
                    )
                }>"Skills & Expertise"</h2>
                <div class=move || {
                    reveal_class(
                        "flex flex-wrap justify-center gap-2 mb-12 transition-all duration-700 delay-200",
                        visible.get(),
                        "translate-y-10",
                        "translate-y-0",
                    )
                }>{buttons}</div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">
                    {move || {
                        filter
                            .get()
                            .apply(SKILLS)
                            .into_iter()
                            .map(|skill| {
                                let shown = move || staged.with(|s| s.is_shown(skill.name));
                                view! {
                                    <div class=move || {
                                        reveal_class(
                                            "glass-card p-5 rounded-xl transition-all duration-500",
                                            shown(),
                                            "translate-y-4",
                                            "translate-y-0",
                                        )
                                    }>
                                        <div class="flex items-center gap-3 mb-3">
                                            <div class="p-2 rounded-lg bg-accent text-foreground">
                                                <i class=skill.icon />
                                            </div>
                                            <h3 class="font-medium">{skill.name}</h3>
                                        </div>
                                        <div class="flex gap-1" aria-label=format!("level {} of {MAX_SKILL_LEVEL}", skill.level)>
                                            {(0..MAX_SKILL_LEVEL)
                                                .map(|i| {
                                                    let pip = if i < skill.level {
                                                        "h-1.5 flex-1 rounded-full bg-primary"
                                                    } else {
                                                        "h-1.5 flex-1 rounded-full bg-muted"
                                                    };
                                                    view! { <span class=pip /> }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
