//! 规则模块：签名规则模型、内置规则库、输入与结果数据结构
pub mod catalog;
pub mod core;

pub use self::catalog::{builtin_raw_rules, SignatureCatalog, GTM_LOADER_PATTERN};
pub use self::core::{
    Classification, Detection, MatchScope, MetaDescriptor, RawRule, RuleMatcher, ScriptDescriptor,
    SignatureRule, TagManagerRecord,
};
