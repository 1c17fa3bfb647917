use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_events::EventListener;
use shared::constants::SNAPSHOT_MIME_TYPE;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, HtmlImageElement};
use yew::NodeRef;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotOptions {
    pub pixel_ratio: f64,
    pub cache_bust: bool,
}

#[derive(Debug)]
pub enum CaptureError {
    EmptyRegion,
    ImageLoad,
    Js(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRegion => write!(f, "Snapshot region has no size"),
            Self::ImageLoad => write!(f, "Rendered snapshot failed to load"),
            Self::Js(msg) => write!(f, "Browser error during capture: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<JsValue> for CaptureError {
    fn from(err: JsValue) -> Self {
        Self::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

fn js_error(context: &str) -> CaptureError {
    CaptureError::Js(context.to_string())
}

/// Rasterizes the element behind `node_ref` into a PNG data URL.
///
/// Returns `Ok(None)` when the ref is not attached to a mounted element.
pub async fn capture(node_ref: &NodeRef, options: SnapshotOptions) -> Result<Option<String>, CaptureError> {
    match node_ref.cast::<HtmlElement>() {
        Some(node) => to_png(&node, options).await.map(Some),
        None => Ok(None),
    }
}

pub async fn to_png(node: &HtmlElement, options: SnapshotOptions) -> Result<String, CaptureError> {
    let rect = node.get_bounding_client_rect();
    let (width, height) = (rect.width(), rect.height());
    if width <= 0.0 || height <= 0.0 {
        return Err(CaptureError::EmptyRegion);
    }

    let clone = node
        .clone_node_with_deep(true)?
        .dyn_into::<Element>()
        .map_err(|_| js_error("cloned node is not an element"))?;
    inline_styles(node, &clone)?;
    if options.cache_bust {
        cache_bust_images(&clone)?;
    }

    let markup = web_sys::XmlSerializer::new()?.serialize_to_string(&clone)?;
    let svg = format!(
        r#"<svg xmlns="{ns}" width="{w}" height="{h}"><foreignObject x="0" y="0" width="100%" height="100%">{markup}</foreignObject></svg>"#,
        ns = SVG_NS,
        w = width,
        h = height,
        markup = markup,
    );
    let svg_url = format!(
        "data:image/svg+xml;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(&svg))
    );

    let image = load_image(&svg_url).await?;

    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| js_error("no document"))?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_error("canvas element expected"))?;
    canvas.set_width((width * options.pixel_ratio).ceil() as u32);
    canvas.set_height((height * options.pixel_ratio).ceil() as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| js_error("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| js_error("2d context expected"))?;
    context.scale(options.pixel_ratio, options.pixel_ratio)?;
    context.draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, width, height)?;

    Ok(canvas.to_data_url_with_type(SNAPSHOT_MIME_TYPE)?)
}

async fn load_image(src: &str) -> Result<HtmlImageElement, CaptureError> {
    let image = HtmlImageElement::new()?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = tx.clone();
        EventListener::once(&image, "load", move |_| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = EventListener::once(&image, "error", move |_| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });

    image.set_src(src);
    let loaded = rx.await.unwrap_or(false);
    drop(on_load);
    drop(on_error);

    if loaded {
        Ok(image)
    } else {
        Err(CaptureError::ImageLoad)
    }
}

/// Copies the computed style of every element in `source` onto the matching
/// element of `target`. Stylesheets do not reach into an SVG image, so the
/// clone has to carry its own styles.
fn inline_styles(source: &Element, target: &Element) -> Result<(), CaptureError> {
    let window = window().ok_or_else(|| js_error("no window"))?;
    let mut pairs = vec![(source.clone(), target.clone())];

    while let Some((src, dst)) = pairs.pop() {
        if let Some(style) = window.get_computed_style(&src)? {
            let mut css = String::new();
            for i in 0..style.length() {
                let name = style.item(i);
                let value = style.get_property_value(&name)?;
                let priority = style.get_property_priority(&name);
                css.push_str(&name);
                css.push(':');
                css.push_str(&value);
                if !priority.is_empty() {
                    css.push_str(" !");
                    css.push_str(&priority);
                }
                css.push(';');
            }
            dst.set_attribute("style", &css)?;
        }

        let mut src_child = src.first_element_child();
        let mut dst_child = dst.first_element_child();
        while let (Some(s), Some(d)) = (src_child, dst_child) {
            src_child = s.next_element_sibling();
            dst_child = d.next_element_sibling();
            pairs.push((s, d));
        }
    }

    Ok(())
}

// Images inside a foreignObject rendered as an SVG image never load external
// URLs, so a busted `<img>` still renders blank. The share card draws its
// artwork as inline SVG and has no `<img>` for this to touch.
fn cache_bust_images(root: &Element) -> Result<(), CaptureError> {
    let images = root.query_selector_all("img")?;
    let stamp = js_sys::Date::now() as u64;

    for i in 0..images.length() {
        let Some(image) = images.item(i).and_then(|n| n.dyn_into::<HtmlImageElement>().ok()) else {
            continue;
        };
        let src = image.src();
        if src.is_empty() || src.starts_with("data:") {
            continue;
        }
        let separator = if src.contains('?') { '&' } else { '?' };
        image.set_src(&format!("{}{}t={}", src, separator, stamp));
    }

    Ok(())
}
