use crate::rule::{SignatureCatalog, SignatureRule};
use crate::utils::DetectionUpdater;

pub mod common;
pub mod meta;
pub mod script;
pub mod tag_manager;

/// 所有分析器的通用抽象特质
/// 泛型约束：D-单条输入项类型（脚本描述 / meta 描述）
pub trait Analyzer<D> {
    /// 分析器类型名称，用于日志标准化输出
    const TYPE_NAME: &'static str;

    /// 单条规则对单条输入的匹配逻辑，命中时返回 detail
    fn match_logic(rule: &SignatureRule, item: &D) -> Option<String>;

    /// 通用分析执行骨架：输入项 × 规则（按规则库顺序），所有命中规则独立生效
    fn analyze(catalog: &SignatureCatalog, items: &[D], detected: &mut DetectionUpdater)
    where
        Self: Sized,
    {
        for item in items {
            for rule in catalog.rules() {
                if let Some(detail) = Self::match_logic(rule, item) {
                    common::handle_match_success(Self::TYPE_NAME, rule, detail, detected);
                }
            }
        }
    }
}
