//! trackscope - 网页第三方追踪器 / 像素 / 站点验证标签识别库

pub mod analyzer;
pub mod config;
pub mod detector;
pub mod error;
pub mod report;
pub mod rule;
pub mod utils;

// 导出全局错误类型
pub use self::error::{TrackscopeError, TsResult};

// 导出配置模块核心结构体与构建器
pub use crate::config::{CustomConfigBuilder, ScanConfig};

// 导出规则模块核心接口与数据结构
pub use crate::rule::{
    Classification, Detection, MatchScope, MetaDescriptor, RawRule, ScriptDescriptor,
    SignatureCatalog, SignatureRule, TagManagerRecord,
};

// 导出页面扫描工具核心接口
pub use crate::utils::extractor::{HtmlExtractor, ScannedPage};

// 导出检测模块核心接口
pub use crate::detector::{analyze_html, classify, Classifier};

// 导出报告模块
pub use crate::report::{PageReport, Presenter};
