use crate::analyzer::Analyzer;
use crate::rule::core::INLINE_SNIPPET;
use crate::rule::{RuleMatcher, ScriptDescriptor, SignatureRule};

// Script 分析器（外链地址规则 + 内联内容规则）
pub struct ScriptAnalyzer;

impl Analyzer<ScriptDescriptor> for ScriptAnalyzer {
    const TYPE_NAME: &'static str = "Script";

    fn match_logic(rule: &SignatureRule, script: &ScriptDescriptor) -> Option<String> {
        let source = script.usable_source();
        let hit = match &rule.matcher {
            RuleMatcher::ScriptSource(_) => source.is_some_and(|s| rule.matches_source(s)),
            RuleMatcher::InlineContent(_) => {
                !script.inline_text.is_empty() && rule.matches_inline(&script.inline_text)
            }
            RuleMatcher::MetaKey(_) => false,
        };
        hit.then(|| source.unwrap_or(INLINE_SNIPPET).to_string())
    }
}
