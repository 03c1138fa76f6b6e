//! Plotly バインディング
//!
//! 図は共通ライブラリでJSONとして組み立て、描画だけJavaScript側に委譲する。

use sentiment_common::Figure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/plotly-bridge.js")]
extern "C" {
    /// 要素IDの中身を図で置き換える
    #[wasm_bindgen(js_name = "newPlot", catch)]
    fn new_plot_js(element_id: &str, data_json: &str, layout_json: &str) -> Result<(), JsValue>;

    /// 図を消して案内文だけにする
    #[wasm_bindgen(js_name = "showPlaceholder", catch)]
    fn show_placeholder_js(element_id: &str, message: &str) -> Result<(), JsValue>;
}

pub fn new_plot(element_id: &str, figure: &Figure) -> Result<(), String> {
    let data = serde_json::to_string(&figure.data)
        .map_err(|e| format!("Figure data serialization failed: {}", e))?;
    let layout = serde_json::to_string(&figure.layout)
        .map_err(|e| format!("Figure layout serialization failed: {}", e))?;

    new_plot_js(element_id, &data, &layout)
        .map_err(|e| format!("Plotly.newPlot failed for {}: {:?}", element_id, e))
}

pub fn show_placeholder(element_id: &str, message: &str) -> Result<(), String> {
    show_placeholder_js(element_id, message)
        .map_err(|e| format!("placeholder failed for {}: {:?}", element_id, e))
}
