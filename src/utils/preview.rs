use std::fmt::{self, Write};

// ======================== 输出截断工具函数 ========================
/// 空白字符折叠 + 截断，日志预览用，不产生堆分配
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl<'a> fmt::Display for CompactView<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.trim().chars() {
                if char_count >= self.max_length {
                    f.write_str("…")?;
                    break;
                }

                if ch.is_whitespace() {
                    if !last_was_whitespace {
                        f.write_str(" ")?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_compact() {
        assert_eq!(preview_compact("  gtag('js',\n\n   new Date());  ", 64).to_string(), "gtag('js', new Date());");
        assert_eq!(preview_compact("abcdef", 3).to_string(), "abc…");
    }
}
