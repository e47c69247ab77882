use std::io::Result;

use folio::{
    core::{
        data::load_catalog,
        settings::{Settings, SETTINGS_PATH},
    },
    logger::init_logger,
    server::start_server,
};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<()> {
    init_logger();

    let settings = Settings::load(SETTINGS_PATH)?;
    let catalog = load_catalog(&settings)?;
    info!("Serving {} project(s)", catalog.len());

    start_server(settings.addr(), catalog).await
}
