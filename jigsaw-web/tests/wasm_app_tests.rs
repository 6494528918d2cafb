#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use yew::Renderer;

use jigsaw_web::app::App;
use jigsaw_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
async fn app_boots_into_level_select_with_tutorial() {
    jigsaw_web::i18n::set_lang("en");
    let root = ensure_app_root();
    Renderer::<App>::with_root(root.clone()).render();
    dom_settle().await;

    let html = root.inner_html();
    assert!(html.contains("level-grid"), "{html}");
    assert!(html.contains("Welcome to the Puzzle Game!"), "{html}");
    assert!(html.contains(jigsaw_web::a11y::STATUS_REGION_ID), "{html}");
}

#[wasm_bindgen_test]
fn object_urls_round_trip() {
    let url = dom::create_object_url(&[1, 2, 3], "image/jpeg").expect("object url");
    assert!(url.starts_with("blob:"));
    dom::revoke_object_url(&url);
}

async fn dom_settle() {
    let promise = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
