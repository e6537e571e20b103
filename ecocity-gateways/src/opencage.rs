use ecocity_core::gateways::geocode::GeoCodingGateway;
use geocoding::{Forward, Opencage};

/// Forward geocoding backed by the OpenCage API.
///
/// Without an API key every lookup resolves to `None`.
pub struct OpenCage {
    api_key: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            warn!("No OpenCage API key found");
        }
        Self { api_key }
    }
}

fn oc_resolve_address_lat_lng(oc_api_key: String, addr: &str) -> Option<(f64, f64)> {
    let oc_req = Opencage::new(oc_api_key);
    match oc_req.forward(addr) {
        Ok(res) => {
            if let Some(point) = res.first() {
                debug!("Resolved address location '{}': {:?}", addr, point);
                return Some((point.y(), point.x()));
            }
        }
        Err(err) => {
            warn!("Failed to resolve address location '{}': {}", addr, err);
        }
    }
    None
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)> {
        if addr.trim().is_empty() {
            return None;
        }
        self.api_key
            .as_ref()
            .and_then(|key| oc_resolve_address_lat_lng(key.clone(), addr))
    }
}
