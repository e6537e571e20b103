pub mod prelude {

    pub use ecocity_core::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use crate::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    use ecocity_core::gateways::{
        geocode::GeoCodingGateway,
        notify::{NotificationEvent, NotificationGateway},
    };

    pub struct DummyNotifyGW;

    impl NotificationGateway for DummyNotifyGW {
        fn notify(&self, _: NotificationEvent) {}
    }

    /// Resolves every address to a fixed position in Lisbon.
    pub struct MockGeoGw;

    impl GeoCodingGateway for MockGeoGw {
        fn resolve_address_lat_lng(&self, _: &str) -> Option<(f64, f64)> {
            Some((38.7167, -9.1393))
        }
    }

    pub struct FailingGeoGw;

    impl GeoCodingGateway for FailingGeoGw {
        fn resolve_address_lat_lng(&self, _: &str) -> Option<(f64, f64)> {
            None
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub geo: MockGeoGw,
        pub notify: DummyNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            ecocity_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            );
            Self {
                db_connections,
                geo: MockGeoGw,
                notify: DummyNotifyGW,
            }
        }

        pub fn create_user(&self, email: &str, role: Option<Role>) {
            let email: EmailAddress = email.parse().unwrap();
            {
                let db = self.db_connections.exclusive().unwrap();
                usecases::create_new_user(
                    &db,
                    usecases::NewUser {
                        email: email.clone(),
                        password: "secret123".into(),
                        name: "Test User".into(),
                    },
                )
                .unwrap();
            }
            let mut user = self.try_get_user(email.as_str()).unwrap();
            user.email_confirmed = true;
            if let Some(role) = role {
                user.role = role;
            }
            let db = self.db_connections.exclusive().unwrap();
            db.update_user(&user).unwrap();
        }

        pub fn try_get_user(&self, email: &str) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user_by_email(&email.parse().unwrap())
                .unwrap()
        }

        pub fn create_point_request(&self, created_by: &str, name: &str) -> String {
            let request = flows::create_point_request(
                &self.db_connections,
                created_by.parse().unwrap(),
                usecases::NewPointRequest {
                    name: name.into(),
                    category: "recycling-point".into(),
                    address: "Rua das Flores 1, Lisboa".into(),
                    description: "Recolha de vidro e papel".into(),
                    impact: String::new(),
                },
            )
            .unwrap();
            request.id.into()
        }

        pub fn create_event_request(&self, created_by: &str, title: &str) -> String {
            let request = flows::create_event_request(
                &self.db_connections,
                created_by.parse().unwrap(),
                usecases::NewEventRequest {
                    title: title.into(),
                    description: "Limpeza comunitaria do parque".into(),
                    date: "2026-10-03".into(),
                    time: Some("09:30".into()),
                    address: "Parque da Cidade, Lisboa".into(),
                    organizer: "Grupo EcoCidade".into(),
                },
            )
            .unwrap();
            request.id.into()
        }
    }
}
