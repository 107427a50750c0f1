//! 工具模块：提供通用工具函数
pub mod detection_updater;
pub mod extractor;
pub mod preview;

pub use self::detection_updater::DetectionUpdater;
pub use self::preview::preview_compact;
