//! Browser [`LinkHost`]: a hidden `<a>` appended to `<body>`, clicked, removed.
//!
//! The click goes through a catching JS call so a refusal from the browser or
//! OS (no registered mail handler) surfaces as a [`LaunchError`] instead of
//! aborting the WASM module. Requires a browser environment.

use inquiry::{LaunchError, LinkHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlAnchorElement};

/// Launches `mailto:` links through the current document.
pub struct DocumentLinkHost {
    document: Document,
}

impl DocumentLinkHost {
    /// Host bound to `window.document`, if there is one.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

fn js_error(context: &str, value: &JsValue) -> LaunchError {
    let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
    LaunchError::new(format!("{context}: {detail}"))
}

impl LinkHost for DocumentLinkHost {
    type Link = HtmlAnchorElement;

    fn attach(&mut self, href: &str) -> Result<Self::Link, LaunchError> {
        let body = self.document.body().ok_or_else(|| LaunchError::new("document has no body"))?;
        let link = self
            .document
            .create_element("a")
            .map_err(|e| js_error("create <a>", &e))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| LaunchError::new("created element is not an anchor"))?;
        link.set_href(href);
        link.style()
            .set_property("display", "none")
            .map_err(|e| js_error("hide link", &e))?;
        body.append_child(&link).map_err(|e| js_error("append link", &e))?;
        Ok(link)
    }

    fn activate(&mut self, link: &Self::Link) -> Result<(), LaunchError> {
        let click = js_sys::Reflect::get(link, &JsValue::from_str("click"))
            .map_err(|e| js_error("lookup click", &e))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| LaunchError::new("anchor has no click()"))?;
        click.call0(link).map_err(|e| js_error("click", &e))?;
        Ok(())
    }

    fn detach(&mut self, link: Self::Link) {
        link.remove();
    }
}
