pub use ecocity_entities::{
    category::*, email::*, event::*, geo::*, id::*, nonce::*, password::*, point::*, request::*,
    time::*, user::*,
};
