//! Telegram caption for a book, rendered with HTML parse mode.
//!
//! Telegram counts caption length in visible chars (after entity parsing), capped at
//! [`MAX_CAPTION_CHARS`]. Author and status are cut to [`MAX_FIELD_CHARS`], the tag line keeps only
//! the tags that fit in [`MAX_TAG_LINE_CHARS`], and the synopsis gets whatever budget is left.

use std::fmt::Write;

use teloxide::utils::html::escape;

use crate::book::{Book, Tag};

/// Telegram's photo caption limit, in visible chars.
pub const MAX_CAPTION_CHARS: usize = 1024;

/// Author, status and each tag name are cut to this many chars.
pub const MAX_FIELD_CHARS: usize = 64;

/// Visible length of the whole tag line, `标签：` and the trailing space included.
pub const MAX_TAG_LINE_CHARS: usize = 256;

const TAG_LINE_PREFIX: &str = "标签：";

/// Builds the caption: synopsis, then an author/status/word-count line, then a tag line when tags exist.
///
/// Word count is shown in units of 万 (10,000 words) using truncating integer division.
pub fn format_caption(book: &Book) -> String {
    let info = format!(
        "作者: {}  状态: {} 字数: {} 万",
        truncate_chars(&book.author, MAX_FIELD_CHARS),
        truncate_chars(&book.status, MAX_FIELD_CHARS),
        book.words / 10_000
    );
    let tag_line = (!book.tags.is_empty()).then(|| tag_line(&book.tags));

    // one newline after each line
    let used = 1
        + info.chars().count()
        + 1
        + tag_line.as_ref().map_or(0, |line| line.chars().count() + 1);
    let synopsis = truncate_chars(&book.synopsis, MAX_CAPTION_CHARS.saturating_sub(used));

    let mut caption = String::new();
    let _ = writeln!(caption, "{}", escape(&synopsis));
    let _ = writeln!(caption, "<pre>{}</pre>", escape(&info));
    if let Some(line) = tag_line {
        let _ = writeln!(caption, "<pre>{}</pre>", escape(&line));
    }
    caption
}

/// `标签： a b c ` with as many tags (in order) as fit in [`MAX_TAG_LINE_CHARS`]. The first tag always fits.
fn tag_line(tags: &[Tag]) -> String {
    let mut line = TAG_LINE_PREFIX.to_string();
    let mut len = TAG_LINE_PREFIX.chars().count() + 1;

    for tag in tags {
        let name = truncate_chars(&tag.name, MAX_FIELD_CHARS);
        let name_len = name.chars().count() + 1;
        if len + name_len > MAX_TAG_LINE_CHARS {
            break;
        }
        line.push(' ');
        line.push_str(&name);
        len += name_len;
    }

    line.push(' ');
    line
}

/// Cuts `text` to at most `max_chars` chars, the last one being `…` when anything was dropped.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}
