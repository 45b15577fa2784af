pub mod config;
pub mod logging;
pub mod pipeline;

pub use config::load_config;
pub use logging::init_logging;
pub use pipeline::build_pipeline;
