use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::{
    reveal::{IntersectionSample, RevealController, Watch},
    timing::Timed,
};

use super::clock;

/// Handle to a live intersection observer; calling it stops observation.
struct ObserverWatch(Box<dyn Fn() + Send + Sync>);

impl Watch for ObserverWatch {
    fn unobserve(&mut self) {
        (self.0)()
    }
}

/// Flip to `true` the first time `target` is at least `threshold` visible.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let controller = StoredValue::new(RevealController::<ObserverWatch>::new(threshold));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            for entry in entries {
                let sample =
                    IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio());
                let revealed = controller
                    .try_update_value(|c| c.observe(sample))
                    .unwrap_or(false);
                if revealed {
                    set_visible.set(true);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        let found = target.get().is_some();
        let stop = stop.clone();
        controller.update_value(|c| c.attach(found.then(|| ObserverWatch(Box::new(stop)))));
    });

    on_cleanup(move || {
        controller.try_update_value(|c| c.detach());
    });

    visible
}

/// Mount-driven reveal used by the hero banner.
pub fn use_mount_reveal() -> ReadSignal<bool> {
    let (loaded, set_loaded) = signal(false);
    let controller = StoredValue::new(RevealController::<ObserverWatch>::new(0.0));
    Effect::new(move |_| {
        if controller
            .try_update_value(|c| c.reveal_now())
            .unwrap_or(false)
        {
            set_loaded.set(true);
        }
    });
    loaded
}

/// Keep a single timeout armed for the machine's next deadline.
///
/// The timeout is replaced whenever the machine changes and cleared when the
/// owning component unmounts.
pub fn use_timed<T>(machine: RwSignal<T>)
where
    T: Timed + Send + Sync + 'static,
{
    let handle = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let deadline = machine.with(|m| m.next_deadline());
        handle.update_value(|h| {
            if let Some(old) = h.take() {
                old.clear();
            }
        });
        let Some(at) = deadline else {
            return;
        };
        let delay = at.saturating_sub(clock::now());
        match set_timeout_with_handle(
            move || {
                machine.try_update(|m| m.poll(clock::now()));
            },
            delay,
        ) {
            Ok(h) => handle.set_value(Some(h)),
            Err(e) => log::warn!("couldn't schedule timer: {e:?}"),
        }
    });

    on_cleanup(move || {
        handle.try_update_value(|h| {
            if let Some(old) = h.take() {
                old.clear();
            }
        });
    });
}
