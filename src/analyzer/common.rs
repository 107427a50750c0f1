use log::debug;

use crate::rule::SignatureRule;
use crate::utils::{preview_compact, DetectionUpdater};

/// 匹配成功通用处理器 - 标准日志输出+检测结果更新
#[inline(always)]
pub fn handle_match_success(
    analyzer_type: &str,
    rule: &SignatureRule,
    detail: String,
    detected: &mut DetectionUpdater,
) {
    debug!(
        "[{}]匹配成功 | 追踪器: {} | 内容: {} | 规则: {}",
        analyzer_type,
        rule.label,
        preview_compact(&detail, 96),
        rule.matcher.describe()
    );
    if !detected.update(&rule.label, detail) {
        debug!("[{}]重复结果已忽略 | 追踪器: {}", analyzer_type, rule.label);
    }
}
