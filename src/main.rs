//! CSR entry point: mounts the root `App` to the document body.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(sherpa_client::app::App);
    }
}
