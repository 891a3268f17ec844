pub mod matching;
pub mod models;

pub use matching::{
    bidirectional_contains, city_key, is_night_hour, message_mentions_night, wants_fare_info,
    wants_safety_info,
};
pub use models::*;
