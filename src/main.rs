#[cfg(feature = "yew")]
fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting GM Explorer");

    yew::Renderer::<gm_explorer::App>::new().render();
}

#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the app.");
}
