use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 문자열을 최대 너비에 맞춰 끝에서 자른다. ("long_na...")
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.len() {
        return take_prefix_by_width(text, max_width);
    }
    let mut result = take_prefix_by_width(text, max_width - ELLIPSIS.len());
    result.push_str(ELLIPSIS);
    result
}

/// 항목 라벨을 자르되 끝의 `(N)` 라벨 수는 남긴다.
///
/// "very_long_name.txt (120)" → "very_lo... (120)"
pub fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }

    let suffix = match label.rfind(" (") {
        Some(pos) if label.ends_with(')') => &label[pos..],
        _ => "",
    };
    let name = &label[..label.len() - suffix.len()];
    let suffix_width = suffix.width();

    // 이름 자리가 "x..." 만큼도 안 되면 통째로 자른다
    if suffix.is_empty() || suffix_width + ELLIPSIS.len() + 1 > max_width {
        return truncate_end(label, max_width);
    }

    let mut result = truncate_end(name, max_width - suffix_width);
    result.push_str(suffix);
    result
}

/// 경로 표시: HOME은 `~`로, 길면 앞부분을 `...`로 생략
pub fn display_path(path: &Path, max_width: usize) -> String {
    let text = shorten_home(&path.to_string_lossy());
    if text.width() <= max_width {
        return text;
    }
    if max_width <= ELLIPSIS.len() {
        return take_prefix_by_width(&text, max_width);
    }
    format!(
        "{}{}",
        ELLIPSIS,
        take_suffix_by_width(&text, max_width - ELLIPSIS.len())
    )
}

fn shorten_home(path: &str) -> String {
    let home = dirs::home_dir()
        .map(|dir| dir.to_string_lossy().to_string())
        .unwrap_or_default();
    if home.is_empty() {
        return path.to_string();
    }

    match path.strip_prefix(&home) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{}", rest),
        _ => path.to_string(),
    }
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

fn take_suffix_by_width(text: &str, max_width: usize) -> String {
    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("short", 10), "short");
        assert_eq!(truncate_end("abcdefghij", 8), "abcde...");
        assert_eq!(truncate_end("abcdefghij", 2), "ab");
    }

    #[test]
    fn test_truncate_end_wide_chars() {
        // 한글은 2칸
        let truncated = truncate_end("라벨데이터파일", 9);
        assert_eq!(truncated, "라벨데...");
        assert!(truncated.width() <= 9);
    }

    #[test]
    fn test_truncate_label_keeps_count() {
        assert_eq!(truncate_label("a.txt (5)", 20), "a.txt (5)");
        assert_eq!(
            truncate_label("very_long_name.txt (120)", 16),
            "very_lo... (120)"
        );
    }

    #[test]
    fn test_truncate_label_without_room() {
        let truncated = truncate_label("name.txt (12345)", 6);
        assert_eq!(truncated, "nam...");
    }

    #[test]
    fn test_display_path_truncates_front() {
        let shown = display_path(Path::new("/srv/labels/2026/october/batch"), 16);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("batch"));
        assert_eq!(shown.width(), 16);
    }
}
