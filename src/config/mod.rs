//! 配置模块
pub mod scan;

pub use self::scan::{CustomConfigBuilder, ScanConfig};
