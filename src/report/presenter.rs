//! 纯文本展示

use std::fmt::Write;

use super::page_report::PageReport;
use crate::rule::core::{CONTAINER_ID_MISSING, GTM_NOT_FOUND};
use crate::utils::extractor::{NoScriptLocation, INLINE_SCRIPT_SRC};

pub const EMPTY_META: &str = "No meta tags found in <head>.";
pub const EMPTY_TRACKERS: &str = "No pixels or trackers detected in <head>.";
pub const EMPTY_SCRIPTS: &str = "No scripts found in <head>.";
pub const EMPTY_JSON_LD: &str = "No JSON-LD detected.";
pub const EMPTY_NOSCRIPT: &str = "No noscript fallbacks found.";
pub const GTM_NO_LOADER: &str = "No GTM loader script found on this page.";
pub const GTM_NO_SNIPPET: &str = "GTM present (snippet unavailable)";
/// 脚本清单最多展示条数
pub const MAX_SCRIPTS_SHOWN: usize = 12;

pub struct Presenter;

impl Presenter {
    pub fn render_text(report: &PageReport) -> String {
        let mut out = String::with_capacity(1024);
        // String 写入不会失败
        let _ = Self::write_report(&mut out, report);
        out
    }

    /// 概要：标题、canonical 与各类计数
    fn write_summary(out: &mut String, report: &PageReport) -> std::fmt::Result {
        writeln!(out, "Title: {}", report.title.as_deref().unwrap_or("No title"))?;
        writeln!(out, "Canonical: {}", report.canonical.as_deref().unwrap_or("Not set"))?;
        writeln!(
            out,
            "Meta: {} meta tags read | Links: {} links",
            report.meta_tags.len(),
            report.link_tags.len()
        )?;

        let tracker_count = report.trackers.len();
        let tracker_hint = if tracker_count > 0 {
            "Pixels or analytics detected"
        } else {
            "No trackers in head"
        };
        writeln!(out, "Trackers: {} ({})", tracker_count, tracker_hint)?;

        let ns_count = report.no_scripts.len();
        let ns_hint = if ns_count > 0 { "Fallback present" } else { "No noscripts found" };
        writeln!(out, "Noscript: {} ({})", ns_count, ns_hint)
    }

    fn write_report(out: &mut String, report: &PageReport) -> std::fmt::Result {
        Self::write_summary(out, report)?;

        writeln!(out, "\n== Meta tags ==")?;
        if report.meta_tags.is_empty() {
            writeln!(out, "{}", EMPTY_META)?;
        }
        for tag in &report.meta_tags {
            writeln!(
                out,
                "{}: {}",
                tag.name.as_deref().unwrap_or("(unnamed)"),
                tag.content.as_deref().unwrap_or("—")
            )?;
        }

        writeln!(out, "\n== Trackers ==")?;
        if report.trackers.is_empty() {
            writeln!(out, "{}", EMPTY_TRACKERS)?;
        }
        for tracker in &report.trackers {
            writeln!(out, "{}", tracker)?;
        }

        writeln!(out, "\n== Google Tag Manager ==")?;
        let gtm = &report.gtm;
        if gtm.found {
            writeln!(out, "Detected")?;
            match gtm.container_id.as_deref() {
                Some(id) => writeln!(out, "Container: {}", id)?,
                None => writeln!(out, "{}", CONTAINER_ID_MISSING)?,
            }
            let details = gtm
                .snippet
                .as_deref()
                .or(gtm.source.as_deref())
                .unwrap_or(GTM_NO_SNIPPET);
            writeln!(out, "{}", details)?;
        } else {
            writeln!(out, "Not found")?;
            writeln!(out, "{}", GTM_NOT_FOUND)?;
            writeln!(out, "{}", GTM_NO_LOADER)?;
        }

        writeln!(out, "\n== Scripts ==")?;
        if report.scripts.is_empty() {
            writeln!(out, "{}", EMPTY_SCRIPTS)?;
        }
        for script in report.scripts.iter().take(MAX_SCRIPTS_SHOWN) {
            let name = if script.src == INLINE_SCRIPT_SRC {
                "Inline script"
            } else {
                script.src.as_str()
            };
            writeln!(out, "{}", name)?;
            writeln!(out, "  Type: {}", script.script_type)?;
        }
        if report.scripts.len() > MAX_SCRIPTS_SHOWN {
            writeln!(out, "… {} more", report.scripts.len() - MAX_SCRIPTS_SHOWN)?;
        }

        writeln!(out, "\n== JSON-LD ==")?;
        if report.json_ld.is_empty() {
            writeln!(out, "{}", EMPTY_JSON_LD)?;
        }
        for block in &report.json_ld {
            writeln!(out, "{}", block.trim())?;
        }

        writeln!(out, "\n== Noscript ==")?;
        if report.no_scripts.is_empty() {
            writeln!(out, "{}", EMPTY_NOSCRIPT)?;
        }
        for block in &report.no_scripts {
            let location = match block.location {
                NoScriptLocation::Head => "head",
                NoScriptLocation::Body => "body",
            };
            writeln!(out, "Location: {}", location)?;
            let html = if block.html.is_empty() { "(empty noscript)" } else { block.html.as_str() };
            writeln!(out, "  {}", html)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Detection, TagManagerRecord};
    use crate::utils::extractor::{NoScriptBlock, ScriptSummary};

    #[test]
    fn test_empty_report() {
        let text = Presenter::render_text(&PageReport::default());
        assert!(text.contains(EMPTY_META));
        assert!(text.contains(EMPTY_TRACKERS));
        assert!(text.contains(EMPTY_SCRIPTS));
        assert!(text.contains("No JSON-LD detected."));
        assert!(text.contains("No noscript fallbacks found."));
        assert!(text.contains("No GTM container detected"));
        assert!(text.contains(GTM_NO_LOADER));
        assert!(text.contains("Title: No title"));
        assert!(text.contains("Canonical: Not set"));
        assert!(text.contains("Trackers: 0 (No trackers in head)"));
        assert!(text.contains("Noscript: 0 (No noscripts found)"));
        assert!(text.contains("0 meta tags read"));
    }

    #[test]
    fn test_populated_report() {
        let report = PageReport {
            trackers: vec![Detection::new("Facebook Domain Verification", "content: abc")],
            gtm: TagManagerRecord {
                found: true,
                source: Some("https://www.googletagmanager.com/gtm.js".into()),
                container_id: None,
                snippet: None,
            },
            scripts: (0..15)
                .map(|i| ScriptSummary {
                    src: if i == 0 { INLINE_SCRIPT_SRC.into() } else { format!("/js/{}.js", i) },
                    script_type: "module".into(),
                })
                .collect(),
            no_scripts: vec![NoScriptBlock {
                location: NoScriptLocation::Head,
                html: String::new(),
            }],
            ..PageReport::default()
        };
        let text = Presenter::render_text(&report);
        assert!(text.contains("Facebook Domain Verification (content: abc)"));
        assert!(text.contains("Trackers: 1 (Pixels or analytics detected)"));
        assert!(text.contains("Noscript: 1 (Fallback present)"));
        assert!(text.contains("Container id not in URL"));
        // 无代码片段时回退到加载器地址
        assert!(text.contains("\nhttps://www.googletagmanager.com/gtm.js\n"));
        assert!(text.contains("Inline script\n  Type: module"));
        assert!(text.contains("/js/11.js"));
        assert!(!text.contains("/js/12.js"));
        assert!(text.contains("… 3 more"));
        assert!(text.contains("Location: head\n  (empty noscript)"));
    }

    #[test]
    fn test_gtm_without_snippet_or_source() {
        let report = PageReport {
            gtm: TagManagerRecord {
                found: true,
                source: None,
                container_id: Some("GTM-AB12".into()),
                snippet: None,
            },
            ..PageReport::default()
        };
        let text = Presenter::render_text(&report);
        assert!(text.contains("Container: GTM-AB12"));
        assert!(text.contains(GTM_NO_SNIPPET));
    }
}
