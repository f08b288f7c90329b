use leptos::prelude::*;

use crate::theme::{Theme, ThemeController, ThemeError, ThemeHost, DARK_CLASS};

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The live page: localStorage, the `prefers-color-scheme` media query and
/// the class list on `<html>`.
struct BrowserHost;

fn local_storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

impl ThemeHost for BrowserHost {
    fn read_preference(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = local_storage()
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }

    fn prefers_dark(&self) -> bool {
        window()
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }

    fn set_dark_marker(&mut self, dark: bool) {
        let Some(root) = document().document_element() else {
            log::warn!("no document element to mark");
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
            log::warn!("couldn't update {DARK_CLASS} class: {e:?}");
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    controller: StoredValue<Option<ThemeController<BrowserHost>>>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self
            .controller
            .try_update_value(|c| c.as_mut().map(ThemeController::toggle))
            .flatten();
        if let Some(next) = next {
            self.set_theme.set(next);
        }
    }
}

/// Install the page-wide theme controller. Call once from the app root.
pub fn provide_theme() {
    let (theme, set_theme) = signal(Theme::default());
    let controller = StoredValue::new(None::<ThemeController<BrowserHost>>);

    // browser only: resolves storage or OS preference and marks the document
    Effect::new(move |_| {
        let ctl = ThemeController::init(BrowserHost);
        set_theme.set(ctl.theme());
        controller.set_value(Some(ctl));
    });

    provide_context(ThemeContext {
        theme,
        set_theme,
        controller,
    });
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    view! {
        <button
            on:click=move |_| ctx.toggle()
            class="rounded-full p-2 text-foreground/80 hover:text-foreground transition-colors hover:bg-accent"
            aria-label="Toggle theme"
        >
            <i class=move || {
                if ctx.theme().is_dark() { "extra-sun" } else { "extra-moon" }
            } />
        </button>
    }
}
