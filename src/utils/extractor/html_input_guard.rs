/// HTML 输入守卫：进入流式解析前限制输入长度
pub struct HtmlInputGuard;

impl HtmlInputGuard {
    /// 超长截断（UTF-8 边界安全，零拷贝）
    #[inline(always)]
    pub fn guard(html: &str, max_len: usize) -> &str {
        if html.len() <= max_len {
            return html;
        }

        let mut cut = max_len;
        while !html.is_char_boundary(cut) {
            cut -= 1;
        }
        log::warn!("HTML 超出长度上限，已截断 | 原长度: {} | 截断后: {}", html.len(), cut);
        &html[..cut]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_truncates_on_char_boundary() {
        let html = "<title>页面</title>";
        assert_eq!(HtmlInputGuard::guard(html, 1024), html);
        // "<title>页" 占 10 字节，切在第 9 字节时回退到字符边界
        assert_eq!(HtmlInputGuard::guard(html, 9), "<title>");
    }
}
