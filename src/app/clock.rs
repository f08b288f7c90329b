use std::{sync::LazyLock, time::Duration};

use chrono::{DateTime, Utc};

static ORIGIN: LazyLock<DateTime<Utc>> = LazyLock::new(Utc::now);

/// Time since the page clock was first read.
pub fn now() -> Duration {
    (Utc::now() - *ORIGIN).to_std().unwrap_or_default()
}
