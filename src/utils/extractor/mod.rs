//! 提取模块：从原始 HTML 中提取分类所需信息
pub mod html_extractor;
pub mod html_input_guard;

pub use self::html_extractor::{
    HtmlExtractor, LinkTag, MetaTag, NoScriptBlock, NoScriptLocation, ScannedPage, ScriptSummary,
    INLINE_SCRIPT_SRC,
};
pub use self::html_input_guard::HtmlInputGuard;
