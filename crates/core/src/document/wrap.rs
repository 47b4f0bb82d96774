//! Greedy word wrap for report text.

/// Maximum characters on one page line.
pub const PAGE_LINE_WIDTH: usize = 80;

/// Wraps `text` into lines of at most `width` characters.
///
/// Input line breaks are kept. A line that already fits is emitted as is,
/// blank lines included. Longer lines are packed greedily: words are joined
/// with single spaces while the result stays below `width`, and the line is
/// broken as soon as the next word would reach it. A word that could never
/// fit is cut into pieces of `width - 1` characters. Widths are counted in
/// characters, not bytes.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(2);
    let mut out = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        wrap_line(line, width, &mut out);
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if char_len(line) <= width {
        out.push(line.to_string());
        return;
    }

    let emitted = out.len();
    let mut buffer = String::new();
    let mut buffer_len = 0;

    for word in line.split_whitespace() {
        for piece in pieces(word, width - 1) {
            let piece_len = char_len(piece);
            let candidate = if buffer.is_empty() {
                piece_len
            } else {
                buffer_len + 1 + piece_len
            };

            if candidate < width {
                if !buffer.is_empty() {
                    buffer.push(' ');
                }
                buffer.push_str(piece);
                buffer_len = candidate;
            } else {
                out.push(std::mem::take(&mut buffer));
                buffer.push_str(piece);
                buffer_len = piece_len;
            }
        }
    }

    let rest = buffer.trim_end();
    if !rest.is_empty() {
        out.push(rest.to_string());
    }

    // An over-long run of whitespace is still a blank line.
    if out.len() == emitted {
        out.push(String::new());
    }
}

/// Splits `word` into chunks of at most `max` characters.
fn pieces(word: &str, max: usize) -> Vec<&str> {
    if char_len(word) <= max {
        return vec![word];
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in word.char_indices() {
        if count == max {
            chunks.push(&word[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&word[start..]);
    chunks
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
