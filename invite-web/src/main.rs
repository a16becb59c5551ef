use invite_core::config::Config;
use invite_core::datastore;
use tracing::info;

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("Failed to initialize logger");

    let config = Config::load().expect("Datastore configuration missing");
    datastore::install(&config).expect("Failed to create datastore client");
    info!("Starting invitation site");

    dioxus::launch(invite_web::App);
}
