use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use shared::constants::SHARE_DIAGNOSTIC_EVENT;
use shared::device::is_mobile_device;
use shared::{ShareDiagnostic, ShareError, ShareTarget, SharedFile};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, CustomEvent, CustomEventInit, File, FilePropertyBag, HtmlAnchorElement, Navigator};

pub fn detect_mobile() -> bool {
    window()
        .map(|w| w.navigator())
        .map(|nav| {
            let user_agent = nav.user_agent().unwrap_or_default();
            is_mobile_device(&user_agent, nav.max_touch_points())
        })
        .unwrap_or(false)
}

fn platform_error(err: JsValue) -> ShareError {
    ShareError::Platform(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn navigator() -> Result<Navigator, ShareError> {
    window()
        .map(|w| w.navigator())
        .ok_or_else(|| ShareError::Platform("no window".to_string()))
}

/// Looks up a navigator method that older browsers may not expose.
fn navigator_method(navigator: &Navigator, name: &str) -> Option<Function> {
    Reflect::get(navigator, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn to_js_file(file: &SharedFile) -> Result<File, JsValue> {
    let bytes = Uint8Array::from(file.bytes.as_slice());
    let options = FilePropertyBag::new();
    options.set_type(&file.mime_type);
    File::new_with_u8_array_sequence_and_options(&Array::of1(&bytes), &file.name, &options)
}

fn share_data(file: &File, title: Option<&str>, text: Option<&str>) -> Result<Object, JsValue> {
    let data = Object::new();
    Reflect::set(&data, &JsValue::from_str("files"), &Array::of1(file))?;
    if let Some(title) = title {
        Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title))?;
    }
    if let Some(text) = text {
        Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(text))?;
    }
    Ok(data)
}

pub fn emit_diagnostic(diagnostic: &ShareDiagnostic) {
    log::warn!("[{}] {}", diagnostic.code(), diagnostic);

    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        let detail_json = serde_json::json!({
            "code": diagnostic.code(),
            "message": diagnostic.to_string(),
        });
        let detail = match JsValue::from_serde(&detail_json) {
            Ok(val) => val,
            Err(e) => {
                log::error!("Failed to serialize diagnostic detail: {:?}", e);
                JsValue::NULL
            }
        };
        event_init.set_detail(&detail);
        if let Ok(event) = CustomEvent::new_with_event_init_dict(SHARE_DIAGNOSTIC_EVENT, &event_init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// Delivers snapshots through the Web Share API or an anchor download.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowserShareTarget {
    mobile: bool,
}

impl BrowserShareTarget {
    pub fn new(mobile: bool) -> Self {
        Self { mobile }
    }

    pub fn detect() -> Self {
        Self::new(detect_mobile())
    }
}

impl ShareTarget for BrowserShareTarget {
    fn is_mobile(&self) -> bool {
        self.mobile
    }

    fn can_share(&self, file: &SharedFile) -> bool {
        let Ok(navigator) = navigator() else {
            return false;
        };
        let Some(can_share) = navigator_method(&navigator, "canShare") else {
            return false;
        };
        to_js_file(file)
            .and_then(|file| share_data(&file, None, None))
            .and_then(|data| can_share.call1(&navigator, &data))
            .map(|result| result.is_truthy())
            .unwrap_or(false)
    }

    fn share(&self, file: SharedFile, title: &str, text: &str) -> Result<(), ShareError> {
        let navigator = navigator()?;
        let share = navigator_method(&navigator, "share")
            .ok_or_else(|| ShareError::Platform("navigator.share is unavailable".to_string()))?;
        let js_file = to_js_file(&file).map_err(platform_error)?;
        let data = share_data(&js_file, Some(title), Some(text)).map_err(platform_error)?;
        let promise = share
            .call1(&navigator, &data)
            .map_err(platform_error)?
            .dyn_into::<Promise>()
            .map_err(platform_error)?;

        let name = file.name;
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::info!("Shared {}", name),
                // Dismissing the share sheet rejects the promise
                Err(e) => log::debug!("Share of {} not completed: {:?}", name, e),
            }
        });
        Ok(())
    }

    fn download(&self, data_url: &str, filename: &str) -> Result<(), ShareError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| ShareError::Platform("no document".to_string()))?;
        let link = document
            .create_element("a")
            .map_err(platform_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| ShareError::Platform("anchor element expected".to_string()))?;
        link.set_download(filename);
        link.set_href(data_url);
        link.click();
        log::info!("Downloaded {}", filename);
        Ok(())
    }

    fn report(&self, diagnostic: &ShareDiagnostic) {
        emit_diagnostic(diagnostic);
    }
}
