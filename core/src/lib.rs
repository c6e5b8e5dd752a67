pub mod answer;
pub mod config;
pub mod gateway;
pub mod ids;
pub mod lifecycle;
pub mod logger;

// Re-exports for convenience
pub use answer::{tokenize, Segment};
pub use config::Config;
pub use lifecycle::{LifecycleController, RequestState};
