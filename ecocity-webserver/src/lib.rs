#[macro_use]
extern crate log;

use ecocity_core::gateways::{geocode::GeoCodingGateway, notify::NotificationGateway};
use ecocity_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    geo_gw: Box<dyn GeoCodingGateway + Send + Sync>,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
) {
    web::run(connections.into(), enable_cors, cfg, geo_gw, notify_gw).await;
}
