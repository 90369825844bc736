//! Page-load timing report.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

/// Load-event timestamps from a navigation timing entry, in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationTiming {
    pub load_event_start: f64,
    pub load_event_end: f64,
}

impl NavigationTiming {
    /// Duration of the load event. `None` while the event has not finished
    /// or when the entry is inconsistent.
    #[must_use]
    pub fn load_time_ms(&self) -> Option<f64> {
        if self.load_event_end <= 0.0 {
            return None;
        }
        let elapsed = self.load_event_end - self.load_event_start;
        (elapsed.is_finite() && elapsed >= 0.0).then_some(elapsed)
    }
}

/// Human-readable line logged once the page finished loading.
#[must_use]
pub fn load_report(timing: &NavigationTiming) -> Option<String> {
    timing.load_time_ms().map(|ms| format!("Page load time: {ms:.0}ms"))
}

/// Emit the load report through `log`. Returns whether anything was logged.
pub fn report_load(timing: &NavigationTiming) -> bool {
    match load_report(timing) {
        Some(line) => {
            log::info!("{line}");
            true
        }
        None => {
            log::debug!("perf: navigation timing not available yet");
            false
        }
    }
}
