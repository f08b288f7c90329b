use std::{fmt, time::Duration};

use crate::timing::{Timed, STAGGER_DELAY, STAGGER_STEP};

pub const ALL_LABEL: &str = "All";

/// Items that belong to exactly one named category.
pub trait Categorized {
    fn category(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(c) => c,
        }
    }

    pub fn matches<T: Categorized + ?Sized>(&self, item: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => item.category() == c,
        }
    }

    /// Keep the matching items, preserving their order.
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// "All" followed by each distinct category in first-seen order.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<CategoryFilter> {
    let mut out = vec![CategoryFilter::All];
    for item in items {
        let seen = out
            .iter()
            .any(|c| matches!(c, CategoryFilter::Only(name) if name == item.category()));
        if !seen {
            out.push(CategoryFilter::Only(item.category().to_string()));
        }
    }
    out
}

/// Sequential, timer-paced appearance of a list of names.
#[derive(Debug, Clone, Default)]
pub struct StagedReveal {
    pending: Vec<String>,
    shown: Vec<String>,
    next_at: Option<Duration>,
}

impl StagedReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new list and forget everything already shown.
    ///
    /// Staging stops until [`StagedReveal::start`] is called again.
    pub fn reset<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending = names.into_iter().map(Into::into).collect();
        self.shown.clear();
        self.next_at = None;
    }

    /// Begin staging the current list from `now`.
    pub fn start(&mut self, now: Duration) {
        self.shown.clear();
        self.next_at = if self.pending.is_empty() {
            None
        } else {
            Some(now + STAGGER_DELAY)
        };
    }

    pub fn is_shown(&self, name: &str) -> bool {
        self.shown.iter().any(|n| n == name)
    }

    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    pub fn is_done(&self) -> bool {
        self.shown.len() == self.pending.len()
    }
}

impl Timed for StagedReveal {
    fn next_deadline(&self) -> Option<Duration> {
        self.next_at
    }

    fn poll(&mut self, now: Duration) {
        while let Some(at) = self.next_at {
            if at > now {
                break;
            }
            let name = self.pending[self.shown.len()].clone();
            self.shown.push(name);
            self.next_at = if self.is_done() {
                None
            } else {
                Some(at + STAGGER_STEP)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        category: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.category
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "a", category: "Web" },
            Item { name: "b", category: "AI" },
            Item { name: "c", category: "Web" },
            Item { name: "d", category: "Backend" },
            Item { name: "e", category: "AI" },
        ]
    }

    fn names(filtered: &[&Item]) -> Vec<&'static str> {
        filtered.iter().map(|i| i.name).collect()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn categories_in_first_seen_order() {
        let labels = categories(&items())
            .iter()
            .map(|c| c.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "Web", "AI", "Backend"]);
    }

    #[test]
    fn all_keeps_everything() {
        let items = items();
        assert_eq!(CategoryFilter::All.apply(&items).len(), items.len());
    }

    #[test]
    fn concrete_category_keeps_order() {
        let items = items();
        let filtered = CategoryFilter::from("AI").apply(&items);
        assert_eq!(names(&filtered), vec!["b", "e"]);
    }

    #[test]
    fn unknown_category_is_empty() {
        let items = items();
        assert!(CategoryFilter::from("Design").apply(&items).is_empty());
    }

    #[test]
    fn all_label_parses_to_sentinel() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("Web").to_string(), "Web");
    }

    #[test]
    fn staged_reveal_appends_in_order() {
        let mut staged = StagedReveal::new();
        staged.reset(["x", "y", "z"]);
        assert_eq!(staged.next_deadline(), None);

        staged.start(ms(1000));
        staged.poll(ms(1299));
        assert!(staged.shown().is_empty());

        staged.poll(ms(1300));
        assert_eq!(staged.shown(), ["x"]);
        assert_eq!(staged.next_deadline(), Some(ms(1400)));

        staged.poll(ms(1550));
        assert_eq!(staged.shown(), ["x", "y"]);
        assert!(staged.is_shown("y"));
        assert!(!staged.is_shown("z"));

        staged.poll(ms(5000));
        assert!(staged.is_done());
        assert_eq!(staged.next_deadline(), None);
    }

    #[test]
    fn reset_clears_and_restart_stages_new_list() {
        let mut staged = StagedReveal::new();
        staged.reset(["x", "y"]);
        staged.start(ms(0));
        staged.poll(ms(300));
        assert_eq!(staged.shown(), ["x"]);

        staged.reset(["q"]);
        assert!(staged.shown().is_empty());
        staged.start(ms(400));
        staged.poll(ms(699));
        assert!(staged.shown().is_empty());
        staged.poll(ms(700));
        assert_eq!(staged.shown(), ["q"]);
    }

    #[test]
    fn empty_list_never_schedules() {
        let mut staged = StagedReveal::new();
        staged.start(ms(0));
        assert_eq!(staged.next_deadline(), None);
        assert!(staged.is_done());
    }
}
