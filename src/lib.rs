//! Progressive enhancement for a static website.
//!
//! This crate is compiled natively for tests and to WebAssembly for the
//! browser. Every behavior lives in a browser-independent core type that owns
//! its state and decisions; the `hydrate`-gated [`browser`] module only wires
//! DOM events into those types and mirrors their output back into the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`form`] | Field validation and the submission lifecycle ([`form::FormPipeline`]) |
//! | [`notify`] | Auto-dismissing toast notifications ([`notify::Notifier`]) |
//! | [`scheduler`] | Deferred-task seam with a virtual clock for tests |
//! | [`timing`] | Debounce and throttle wrappers over a scheduler |
//! | [`events`] | Ordered, removable handler lists per event kind |
//! | [`theme`] | Light/dark preference and its persistence |
//! | [`scroll`] | Back-to-top, anchor offsets, progress bar, frame coalescing |
//! | [`menu`] | Mobile navigation open/close rules |
//! | [`a11y`] | Keyboard focus wrap-around |
//! | [`lazy`] | Deferred image loading, once per image |
//! | [`lightbox`] | Gallery overlay state |
//! | [`perf`] | Page-load timing report |
//! | [`config`] | Runtime configuration with defaults from [`consts`] |
//! | [`error`] | Error types shared across modules |
//! | `browser` | DOM binding (`hydrate` feature only) |

pub mod a11y;
pub mod config;
pub mod consts;
pub mod error;
pub mod events;
pub mod form;
pub mod lazy;
pub mod lightbox;
pub mod menu;
pub mod notify;
pub mod perf;
pub mod scheduler;
pub mod scroll;
pub mod theme;
pub mod timing;

#[cfg(feature = "hydrate")]
pub mod browser;
