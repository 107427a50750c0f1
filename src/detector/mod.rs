//! 检测模块：追踪器分类核心逻辑
pub mod detector;

// 导出核心接口
pub use self::detector::{analyze_html, classify, Classifier};
