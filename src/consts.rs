//! Shared defaults for timings, thresholds, and user-facing strings.

// ── Toasts ──────────────────────────────────────────────────────

/// How long a toast stays up before it starts leaving, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Delay between mounting a toast and showing it, so the enter transition runs.
pub const TOAST_ENTER_DELAY_MS: u32 = 100;

/// Time between a toast starting to leave and its removal from the container.
pub const TOAST_EXIT_MS: u32 = 300;

// ── Forms ───────────────────────────────────────────────────────

/// Simulated send latency for form submission.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

/// Submit button label while a submission is in flight.
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

/// Toast shown once a submission completes.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

// ── Scrolling ───────────────────────────────────────────────────

/// Vertical scroll position past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Space left above an anchor target when smooth-scrolling to it (sticky header).
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0;

// ── Lazy images ─────────────────────────────────────────────────

/// Intersection observer root margin used for lazy images.
pub const LAZY_ROOT_MARGIN: &str = "50px 0px";

/// Intersection ratio at which a lazy image starts loading.
pub const LAZY_THRESHOLD: f64 = 0.01;

// ── Misc ────────────────────────────────────────────────────────

/// Service worker script registered on window load.
pub const SERVICE_WORKER_URL: &str = "/sw.js";

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Element id of the optional embedded JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-enhance-config";

/// Elements that participate in keyboard focus order.
pub const FOCUSABLE_SELECTOR: &str = r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;
