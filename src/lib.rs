/// Cassidy Image Downloader - Chrome extension popup
/// Built with Rust + WASM + Yew

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod message;
pub mod schedule;
pub mod state;
pub mod tab_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
