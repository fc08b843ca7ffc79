#![cfg(target_arch = "wasm32")]

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlCanvasElement, HtmlElement};

use site_fx::config::{ContextOptions, TypeConfig, CANVAS_ID};
use site_fx::web::{render, typewriter};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn page_size() -> (u32, u32) {
    let dpr = web_sys::window().unwrap().device_pixel_ratio();
    let root = document().document_element().unwrap();
    (
        (dpr * root.client_width() as f64) as u32,
        (dpr * root.client_height() as f64) as u32,
    )
}

fn page_canvas() -> HtmlCanvasElement {
    let canvas = canvas();
    canvas.set_id(CANVAS_ID);
    // keep the canvas out of the flow so resizing it cannot change the page size
    canvas
        .set_attribute("style", "position: fixed; width: 1px; height: 1px")
        .unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn typed_element(html: &str) -> Element {
    let el = document().create_element("p").unwrap();
    el.set_inner_html(html);
    document().body().unwrap().append_child(&el).unwrap();
    el
}

fn canvas() -> HtmlCanvasElement {
    document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn shaders_compile_and_link() {
    let gl = render::context(&canvas(), &ContextOptions::default()).unwrap();
    gl.get_extension("OES_standard_derivatives").unwrap();
    let linked = render::link_program(&gl).unwrap();
    assert!(linked.diagnostics.is_empty(), "{:?}", linked.diagnostics);
}

#[wasm_bindgen_test]
fn sketch_starts_on_page_canvas() {
    let canvas = page_canvas();
    site_fx::web::sketch().unwrap();
    assert_eq!((canvas.width(), canvas.height()), page_size());
    canvas.remove();
}

#[wasm_bindgen_test]
fn window_resize_restores_canvas_size() {
    let canvas = page_canvas();
    site_fx::web::sketch().unwrap();

    canvas.set_width(1);
    canvas.set_height(1);
    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&Event::new("resize").unwrap())
        .unwrap();
    assert_eq!((canvas.width(), canvas.height()), page_size());
    canvas.remove();
}

#[wasm_bindgen_test]
fn unknown_variant_is_an_error() {
    let canvas = page_canvas();
    canvas.set_attribute("data-variant", "spiral").unwrap();
    assert!(site_fx::web::sketch().is_err());
    canvas.remove();
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    if let Some(el) = document().get_element_by_id(CANVAS_ID) {
        el.remove();
    }
    assert!(site_fx::web::sketch().is_err());
}

#[wasm_bindgen_test]
async fn flat_reveal_restores_text() {
    let el = document()
        .create_element("p")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    el.set_inner_text("typed out");
    document().body().unwrap().append_child(&el).unwrap();

    let config = TypeConfig {
        delay_ms: 1,
        ..TypeConfig::default()
    };
    typewriter::type_element(&el, &config).unwrap();
    assert_eq!(el.inner_text(), "");

    sleep(100).await;
    assert_eq!(el.inner_text(), "typed out");
    el.remove();
}

#[wasm_bindgen_test]
async fn tree_reveal_keeps_markup() {
    let el = document().create_element("p").unwrap();
    el.set_inner_html("one <em>two</em> three");
    el.set_attribute("data-reveal", "tree").unwrap();
    document().body().unwrap().append_child(&el).unwrap();

    let config = TypeConfig {
        delay_ms: 1,
        ..TypeConfig::default()
    };
    typewriter::type_element(&el, &config).unwrap();
    assert_eq!(el.text_content().unwrap(), "");

    sleep(200).await;
    assert_eq!(el.inner_html(), "one <em>two</em> three");
    el.remove();
}

#[wasm_bindgen_test]
async fn bad_reveal_mode_does_not_stop_other_elements() {
    let bad = typed_element("left alone");
    bad.set_class_name("typed-batch");
    bad.set_attribute("data-reveal", "bogus").unwrap();
    let good = typed_element("still typed");
    good.set_class_name("typed-batch");

    let config = TypeConfig {
        marker_class: "typed-batch",
        delay_ms: 1,
        ..TypeConfig::default()
    };
    assert_eq!(typewriter::type_all(&document(), &config), 1);
    assert_eq!(bad.text_content().unwrap(), "left alone");
    assert_eq!(good.text_content().unwrap(), "");

    sleep(100).await;
    assert_eq!(good.text_content().unwrap(), "still typed");
    bad.remove();
    good.remove();
}

#[wasm_bindgen_test]
async fn tree_reveal_skips_scripts_and_indentation() {
    let html = "\n  <span>hi</span>\n  <style>p { color: red; }</style>";
    let el = typed_element(html);
    el.set_attribute("data-reveal", "tree").unwrap();

    let config = TypeConfig {
        delay_ms: 1,
        ..TypeConfig::default()
    };
    typewriter::type_element(&el, &config).unwrap();
    // only the span text is cleared
    assert_eq!(
        el.inner_html(),
        "\n  <span></span>\n  <style>p { color: red; }</style>"
    );

    sleep(100).await;
    assert_eq!(el.inner_html(), html);
    el.remove();
}
