//! Browser side effects shared by the views.
//!
//! - **User feedback**: transient toast notifications, also echoed to the
//!   console when they report an error.
//! - **Downloads**: turning a workbook byte buffer into a file save.
//! - **Formatting**: numbers as they appear in tables and stat cards.

use gloo_console::error;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, HtmlElement, Url};

use common::view_state::{notice_for, Notice, NoticeKind, Resolution};

/// Displays a temporary notification at the bottom of the screen. The toast
/// removes itself after three seconds.
pub fn show_toast(notice: &Notice) {
    if notice.kind == NoticeKind::Error {
        error!(notice.message.clone());
    }

    let background = match notice.kind {
        NoticeKind::Success => "rgba(27, 94, 32, 0.92)",
        NoticeKind::Error => "rgba(183, 28, 28, 0.92)",
    };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(&notice.message));
            let html_toast: HtmlElement = toast.unchecked_into();
            let style = html_toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "20px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", background).ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();
            style.set_property("font-family", "Arial, sans-serif").ok();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}

/// Shows the toast a resolved fetch calls for, if any.
pub fn report(resolution: &Resolution, success: Option<&str>, failure: &str) {
    if let Some(notice) = notice_for(resolution, success, failure) {
        show_toast(&notice);
    }
}

/// Offers `bytes` to the user as a file named `file_name`.
///
/// Object URL, synthetic anchor click, then the URL is revoked.
pub fn save_blob(bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.style().set_property("display", "none")?;

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)
}

/// Saves a downloaded workbook and tells the user how it went.
pub fn deliver_workbook(bytes: &[u8], file_name: &str) {
    match save_blob(bytes, file_name) {
        Ok(()) => show_toast(&Notice::success(format!("Downloaded {}", file_name))),
        Err(err) => {
            error!(err);
            show_toast(&Notice::error("Could not save the workbook"));
        }
    }
}

pub fn format_gpa(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_count(value: usize) -> String {
    value.to_formatted_string(&Locale::en)
}

pub fn format_credits(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
