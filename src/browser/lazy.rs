//! `IntersectionObserver`-driven loading for `img[data-src]`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Page;
use super::dom;
use crate::error::BindError;
use crate::lazy::LazyLoader;

fn load(image: &Element, src: &str, observer: &IntersectionObserver) {
    dom::set_attr(image, "src", src);
    dom::set_class(image, "loaded", true);
    observer.unobserve(image);
}

/// Observe every deferred image. Without `IntersectionObserver` support the
/// images are left untouched.
pub fn install(page: &Page) -> Result<(), BindError> {
    let supported = Reflect::has(&page.window, &JsValue::from_str("IntersectionObserver"))
        .map_err(dom::dom_err("Reflect.has"))?;
    if !supported {
        log::info!("lazy images: IntersectionObserver unsupported");
        return Ok(());
    }

    let images = dom::query_document(&page.document, "img[data-src]")?;
    let mut loader = LazyLoader::new();
    for (key, image) in images.iter().enumerate() {
        loader.register(key, &image.get_attribute("data-src").unwrap_or_default());
    }
    let loader = Rc::new(RefCell::new(loader));

    let observed = images.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(key) = observed.iter().position(|image| *image == target) else {
                continue;
            };
            if let Some(action) = loader.borrow_mut().intersect(key, entry.is_intersecting()) {
                load(&target, &action.src, &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&page.config.lazy_root_margin);
    options.set_threshold(&JsValue::from_f64(page.config.lazy_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::dom_err("IntersectionObserver"))?;
    callback.forget();

    for image in &images {
        observer.observe(image);
    }
    log::debug!("lazy images observed: {}", images.len());
    Ok(())
}
