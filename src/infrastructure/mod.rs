pub mod export;
pub mod telemetry;
pub mod utils;
