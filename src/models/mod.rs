pub mod config;

pub use config::{AnalysisConfig, AppConfig, FetchConfig, ServerConfig};
