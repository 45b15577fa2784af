// Pipeline stages around the answer cache and the primary upstream

pub mod cache_stage;
pub mod capture;
pub mod forward_stage;

pub use cache_stage::CacheStage;
pub use capture::CaptureWriter;
pub use forward_stage::ForwardStage;
