//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting DrawFlow");

    if let Err(e) = drawflow_app::run(std::env::args().skip(1)) {
        log::error!("{e}");
        eprintln!("drawflow: {e}");
        std::process::exit(1);
    }
}
