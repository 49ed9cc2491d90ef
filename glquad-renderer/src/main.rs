use glquad_renderer::{Error, QuadApp, QuadScene};
use web_sys::console;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    if let Err(e) = run() {
        console::error_1(&format!("glquad failed to start: {e}").into());
    }
}

fn run() -> Result<(), Error> {
    let scene = QuadScene::builder("#glCanvas").build()?;
    let app = QuadApp::start(scene)?;

    // listeners and the frame callback must outlive `main`
    std::mem::forget(app);

    Ok(())
}
