//! Page title
//!
//! The document title is global and every page overwrites it when it mounts.
//! Nothing restores the previous title on unmount.

use std::sync::Arc;

use leptos::prelude::*;

/// Somewhere a page title can be written.
pub trait PageTitle {
    fn set_title(&self, title: &str);
}

/// Writes `document.title`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTitle;

impl PageTitle for DocumentTitle {
    fn set_title(&self, title: &str) {
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => {
                log::debug!("Setting page title: {}", title);
                document.set_title(title);
            }
            None => log::warn!("No document available, page title not set: {}", title),
        }
    }
}

/// The [`PageTitle`] pages write to, shared through context.
#[derive(Clone)]
pub struct TitleSink(Arc<dyn PageTitle + Send + Sync>);

impl TitleSink {
    pub fn new(sink: Arc<dyn PageTitle + Send + Sync>) -> Self {
        Self(sink)
    }
}

impl Default for TitleSink {
    fn default() -> Self {
        Self(Arc::new(DocumentTitle))
    }
}

pub fn provide_title_sink(sink: TitleSink) {
    provide_context(sink);
}

/// Set the page title once, after the calling component has mounted.
///
/// Writes to the [`TitleSink`] in context, or to the document when there is
/// none. Reads no signals, so the effect never re-runs for the lifetime of
/// the component.
pub fn use_page_title(title: &'static str) {
    let sink = use_context::<TitleSink>().unwrap_or_default();
    Effect::new(move || sink.0.set_title(title));
}
