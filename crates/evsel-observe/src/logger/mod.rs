mod config;
mod error;
mod format;
mod level;
mod subscriber;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use subscriber::init_logger;
