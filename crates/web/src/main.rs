// =============================================================================
// CaseDesk Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

use casedesk_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // Ignore the error if `mount` already installed a logger
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting CaseDesk dashboard...");

    leptos::mount::mount_to_body(App);
}
