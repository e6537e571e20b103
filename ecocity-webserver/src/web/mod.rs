use ecocity_core::{
    gateways::{geocode::GeoCodingGateway, notify::NotificationGateway},
    usecases,
};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


/// Deployment-specific settings shared with the request handlers.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Base URL of the public frontend, used to build the
    /// confirmation and password reset links sent by e-mail.
    pub public_url: String,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { geocoding, notify } = gateways;

    info!("Deleting expired user e-mail tokens...");
    usecases::delete_expired_user_tokens(&db.exclusive().unwrap()).unwrap();

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);
    let notify_gw = guards::Notify(notify);

    let mut instance = r.manage(db).manage(geo_gw).manage(notify_gw).manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { geocoding, notify };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
