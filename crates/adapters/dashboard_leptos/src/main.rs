//! Browser entry point.

fn main() {
    console_error_panic_hook::set_once();

    match sensorboard_dashboard::start() {
        Ok(dashboard) => std::mem::forget(dashboard),
        Err(err) => {
            leptos::logging::error!("sensorboard failed to start: {err}");
            panic!("sensorboard failed to start: {err}");
        }
    }
}
