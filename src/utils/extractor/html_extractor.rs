//! HTML 页面扫描器
//! 负责从 HTML 中提取 script / meta / link / title / noscript 等页面数据
use lol_html::{element, text, HtmlRewriter, Settings};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use url::Url;

use super::html_input_guard::HtmlInputGuard;
use crate::config::ScanConfig;
use crate::rule::{MetaDescriptor, ScriptDescriptor};

/// 未声明 type 的脚本默认类型
pub const DEFAULT_SCRIPT_TYPE: &str = "text/javascript";
/// 脚本清单中内联脚本的占位
pub const INLINE_SCRIPT_SRC: &str = "inline";
const JSON_LD_TYPE: &str = "application/ld+json";

/// 原始 meta 标签（name 取 name 或 property 属性，保留原始大小写）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: Option<String>,
    pub content: Option<String>,
}

/// <head> 中的 link 标签
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTag {
    pub rel: Option<String>,
    pub href: Option<String>,
}

/// <head> 中的脚本清单条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSummary {
    pub src: String,
    #[serde(rename = "type")]
    pub script_type: String,
}

/// noscript 所在位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoScriptLocation {
    Head,
    Body,
}

/// noscript 回退内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoScriptBlock {
    pub location: NoScriptLocation,
    pub html: String,
}

/// 扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedPage {
    pub title: Option<String>,
    pub canonical: Option<String>,
    pub meta_tags: Vec<MetaTag>,
    pub link_tags: Vec<LinkTag>,
    /// 全部脚本（分类器输入）
    pub scripts: Vec<ScriptDescriptor>,
    /// 仅 <head> 内脚本
    pub head_scripts: Vec<ScriptSummary>,
    pub json_ld: Vec<String>,
    pub no_scripts: Vec<NoScriptBlock>,
}

impl ScannedPage {
    /// 转换为分类器的 meta 输入（无 name 的 meta 跳过）
    pub fn meta_descriptors(&self) -> Vec<MetaDescriptor> {
        self.meta_tags
            .iter()
            .filter_map(|tag| {
                let name = tag.name.as_deref()?;
                Some(MetaDescriptor::new(
                    name.to_ascii_lowercase(),
                    tag.content.clone().unwrap_or_default(),
                ))
            })
            .collect()
    }
}

/// 扫描中的脚本元素，文本随流式解析逐块追加
#[derive(Debug, Default)]
struct PendingScript {
    src: Option<String>,
    script_type: Option<String>,
    attrs: Vec<(String, String)>,
    text: String,
    in_head: bool,
}

impl PendingScript {
    /// 重建元素标记
    fn raw_markup(&self) -> String {
        let mut raw = String::with_capacity(self.text.len() + 64);
        raw.push_str("<script");
        push_attrs(&mut raw, &self.attrs);
        raw.push('>');
        raw.push_str(&self.text);
        raw.push_str("</script>");
        raw
    }

    fn is_json_ld(&self) -> bool {
        self.script_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case(JSON_LD_TYPE))
    }
}

#[derive(Debug, Default)]
struct ScanState {
    // 以 <head> 开始、<body> 开始作为边界
    in_head: bool,
    title_count: usize,
    title: Option<String>,
    canonical: Option<String>,
    meta_tags: Vec<MetaTag>,
    link_tags: Vec<LinkTag>,
    scripts: Vec<PendingScript>,
    no_scripts: Vec<NoScriptBlock>,
}

impl ScanState {
    fn finish(self) -> ScannedPage {
        let mut page = ScannedPage {
            title: self.title.map(|t| t.trim().to_string()),
            canonical: self.canonical,
            meta_tags: self.meta_tags,
            link_tags: self.link_tags,
            no_scripts: self
                .no_scripts
                .into_iter()
                .map(|mut block| {
                    block.html = block.html.trim().to_string();
                    block
                })
                .collect(),
            ..ScannedPage::default()
        };

        for script in self.scripts {
            if script.in_head {
                page.head_scripts.push(ScriptSummary {
                    src: script.src.clone().unwrap_or_else(|| INLINE_SCRIPT_SRC.to_string()),
                    script_type: script
                        .script_type
                        .clone()
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| DEFAULT_SCRIPT_TYPE.to_string()),
                });
            }
            if script.is_json_ld() {
                page.json_ld.push(script.text.clone());
            }
            page.scripts.push(ScriptDescriptor {
                raw_markup: script.raw_markup(),
                source: script.src,
                inline_text: script.text,
            });
        }

        page
    }
}

/// 对外暴露的页面扫描器
#[derive(Debug, Default, Clone)]
pub struct HtmlExtractor {
    config: ScanConfig,
}

impl HtmlExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// 流式解析HTML，畸形输入不会失败，解析错误仅记录日志并返回已提取部分
    pub fn extract(&self, html: &str) -> ScannedPage {
        let html = HtmlInputGuard::guard(html, self.config.max_html_len);
        let state = RefCell::new(ScanState::default());
        let base = self.config.base_url.as_ref();

        {
            let settings = Settings {
                element_content_handlers: vec![
                    element!("head", |_el| {
                        state.borrow_mut().in_head = true;
                        Ok(())
                    }),
                    element!("body", |_el| {
                        state.borrow_mut().in_head = false;
                        Ok(())
                    }),
                    element!("title", |_el| {
                        state.borrow_mut().title_count += 1;
                        Ok(())
                    }),
                    // 只取第一个 <title>
                    text!("title", |t| {
                        let mut st = state.borrow_mut();
                        if st.title_count == 1 {
                            st.title.get_or_insert_with(String::new).push_str(t.as_str());
                        }
                        Ok(())
                    }),
                    element!("meta", |el| {
                        // 空 name 视为缺失，回退到 property
                        let name = el
                            .get_attribute("name")
                            .filter(|n| !n.is_empty())
                            .or_else(|| el.get_attribute("property").filter(|p| !p.is_empty()));
                        let content = el.get_attribute("content");
                        state.borrow_mut().meta_tags.push(MetaTag { name, content });
                        Ok(())
                    }),
                    element!("link", |el| {
                        let rel = el.get_attribute("rel");
                        let href = el.get_attribute("href");
                        let mut st = state.borrow_mut();
                        let is_canonical = rel
                            .as_deref()
                            .is_some_and(|r| r.split_ascii_whitespace().any(|v| v.eq_ignore_ascii_case("canonical")));
                        if is_canonical && st.canonical.is_none() {
                            st.canonical = href.as_deref().map(|h| resolve_url(base, h));
                        }
                        if st.in_head {
                            st.link_tags.push(LinkTag { rel, href });
                        }
                        Ok(())
                    }),
                    element!("script", |el| {
                        let src = el
                            .get_attribute("src")
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .map(|s| resolve_url(base, &s));
                        let attrs = el
                            .attributes()
                            .iter()
                            .map(|a| (a.name(), a.value()))
                            .collect();
                        let mut st = state.borrow_mut();
                        let in_head = st.in_head;
                        st.scripts.push(PendingScript {
                            src,
                            script_type: el.get_attribute("type"),
                            attrs,
                            text: String::new(),
                            in_head,
                        });
                        Ok(())
                    }),
                    text!("script", |t| {
                        if let Some(script) = state.borrow_mut().scripts.last_mut() {
                            script.text.push_str(t.as_str());
                        }
                        Ok(())
                    }),
                    element!("noscript", |_el| {
                        let mut st = state.borrow_mut();
                        let location = if st.in_head {
                            NoScriptLocation::Head
                        } else {
                            NoScriptLocation::Body
                        };
                        st.no_scripts.push(NoScriptBlock {
                            location,
                            html: String::new(),
                        });
                        Ok(())
                    }),
                    // noscript 内部元素按起始标签重建
                    element!("noscript *", |el| {
                        let attrs: Vec<(String, String)> = el
                            .attributes()
                            .iter()
                            .map(|a| (a.name(), a.value()))
                            .collect();
                        let tag_name = el.tag_name();
                        if let Some(block) = state.borrow_mut().no_scripts.last_mut() {
                            block.html.push('<');
                            block.html.push_str(&tag_name);
                            push_attrs(&mut block.html, &attrs);
                            block.html.push('>');
                        }
                        Ok(())
                    }),
                    text!("noscript", |t| {
                        if let Some(block) = state.borrow_mut().no_scripts.last_mut() {
                            block.html.push_str(t.as_str());
                        }
                        Ok(())
                    }),
                ],
                ..Settings::default()
            };

            // 只提取不修改，空输出接收器
            let mut rewriter = HtmlRewriter::new(settings, |_: &[u8]| {});
            if let Err(e) = rewriter.write(html.as_bytes()) {
                log::warn!("HTML 流式解析中断，返回已提取部分 | 错误: {}", e);
            } else if let Err(e) = rewriter.end() {
                log::warn!("HTML 流式解析收尾失败 | 错误: {}", e);
            }
        }

        let page = state.into_inner().finish();
        log::debug!(
            "页面扫描完成 | script: {} | meta: {} | link: {} | json-ld: {} | noscript: {}",
            page.scripts.len(),
            page.meta_tags.len(),
            page.link_tags.len(),
            page.json_ld.len(),
            page.no_scripts.len()
        );
        page
    }
}

/// 按页面地址解析相对链接，无基准或解析失败时保留原值
fn resolve_url(base: Option<&Url>, href: &str) -> String {
    match base {
        Some(base) => base
            .join(href)
            .map(String::from)
            .unwrap_or_else(|_| href.to_string()),
        None => href.to_string(),
    }
}

fn push_attrs(out: &mut String, attrs: &[(String, String)]) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&value.replace('"', "&quot;"));
        out.push('"');
    }
}
