mod fares;
mod ranks;
mod routes;
mod safety;
mod store;

pub use fares::{FareEstimator, FareInfo};
pub use ranks::RankLocator;
pub use routes::RouteMatcher;
pub use safety::SafetyAdvisor;
pub use store::{KnowledgeStore, LoadError, StoreStatus};
