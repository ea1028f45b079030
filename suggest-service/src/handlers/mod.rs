pub mod health;
pub mod metrics;
pub mod suggest;

pub use health::health_check;
pub use metrics::metrics;
pub use suggest::suggest_plan;
