//! Work deferred to the window `load` event: service worker registration and
//! the page-load timing report.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{DocumentReadyState, PerformanceNavigationTiming, ServiceWorkerRegistration, Window};

use super::Page;
use super::dom;
use crate::error::BindError;
use crate::events::EventKind;
use crate::perf::{NavigationTiming, report_load};
use crate::scheduler::Scheduler;

/// Run `task` on window load, or right away if the page already loaded.
fn after_load(page: &Page, task: impl Fn() + 'static) {
    if page.document.ready_state() == DocumentReadyState::Complete {
        task();
    } else {
        page.on(EventKind::Load, move |_| task());
    }
}

fn navigation_timing(window: &Window) -> Option<NavigationTiming> {
    let entries = window.performance()?.get_entries_by_type("navigation");
    let entry = entries.get(0).dyn_ref::<PerformanceNavigationTiming>().cloned()?;
    Some(NavigationTiming {
        load_event_start: entry.load_event_start(),
        load_event_end: entry.load_event_end(),
    })
}

/// Log the load-event duration once it is final.
pub fn install_perf(page: &Page) -> Result<(), BindError> {
    let (window, scheduler) = (page.window.clone(), page.scheduler.clone());
    after_load(page, move || {
        let window = window.clone();
        // loadEventEnd is only filled in after the load handlers return.
        scheduler.schedule(
            0,
            Box::new(move || match navigation_timing(&window) {
                Some(timing) => {
                    report_load(&timing);
                }
                None => log::debug!("navigation timing unsupported"),
            }),
        );
    });
    Ok(())
}

async fn register(window: Window, url: String) {
    let promise = window.navigator().service_worker().register(&url);
    match JsFuture::from(promise).await {
        Ok(value) => match value.dyn_into::<ServiceWorkerRegistration>() {
            Ok(registration) => log::info!("service worker registered: {}", registration.scope()),
            Err(other) => log::info!("service worker registered: {other:?}"),
        },
        Err(e) => log::warn!("service worker registration failed: {}", dom::js_message(&e)),
    }
}

/// Register the configured service worker script once the page has loaded.
pub fn install_service_worker(page: &Page) -> Result<(), BindError> {
    let Some(url) = page.config.service_worker_url.clone() else {
        log::debug!("service worker disabled by config");
        return Ok(());
    };
    let navigator = page.window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .map_err(dom::dom_err("Reflect.has"))?;
    if !supported {
        log::info!("service workers unsupported");
        return Ok(());
    }
    let window = page.window.clone();
    after_load(page, move || spawn_local(register(window.clone(), url.clone())));
    Ok(())
}
