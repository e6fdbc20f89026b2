use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Every resource lives under this prefix, both on the server and in the
/// URLs the remote client builds.
pub const API_PREFIX: &str = "/api";

/// Remote requests are abandoned after this long.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Backend URL values that mean "no backend". Placeholder strings show up
/// when a deploy pipeline stringifies an unset environment variable.
pub const BACKEND_URL_PLACEHOLDERS: &[&str] = &["", "undefined", "null"];

/// Site hosts that imply a static deployment with no backend behind them.
pub const STATIC_HOST_SUFFIXES: &[&str] =
    &["netlify.app", "github.io", "vercel.app", "pages.dev"];
