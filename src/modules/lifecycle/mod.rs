pub mod model;
pub mod service;

pub use model::EntityKind;
pub use service::LifecycleService;
