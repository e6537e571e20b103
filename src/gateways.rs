use crate::cfg::Cfg;
use ecocity_core::gateways::email::EmailGateway;
use ecocity_entities::email::{EmailAddress, EmailContent};
use ecocity_gateways::{notify::Notify, opencage::OpenCage, sendmail::Sendmail};

pub fn notification_gateway(cfg: &Cfg) -> Notify {
    if let Some(gw) = sendmail_gw(cfg) {
        log::info!("Use sendmail gateway");
        Notify::new(gw)
    } else {
        log::warn!("No e-mail gateway was configured");
        Notify::new(DummyMailGw)
    }
}

pub fn geocoding_gateway(cfg: &Cfg) -> OpenCage {
    OpenCage::new(cfg.opencage_api_key.clone())
}

fn sendmail_gw(cfg: &Cfg) -> Option<Sendmail> {
    let from = cfg.mail_gateway_sender_address.as_deref()?;
    match from.parse::<EmailAddress>() {
        Ok(from) => Some(Sendmail::new(from)),
        Err(err) => {
            log::warn!("Invalid MAIL_GATEWAY_SENDER_ADDRESS '{from}': {err}");
            None
        }
    }
}

struct DummyMailGw;

impl EmailGateway for DummyMailGw {
    fn compose_and_send(&self, _recipients: &[EmailAddress], _email: &EmailContent) {
        log::debug!("Cannot send e-mails because no e-mail gateway was configured");
    }
}
