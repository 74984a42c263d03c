//! Text measurement and fitting helpers (plotters cannot measure text without a loaded font).

/// Average glyph width as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.60;

/// Heuristic pixel width of `text` at `font_px`.
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * GLYPH_WIDTH_RATIO).ceil() as u32
}

fn max_chars(font_px: u32, max_px: u32) -> usize {
    ((max_px as f32) / ((font_px.max(1) as f32) * GLYPH_WIDTH_RATIO)).floor() as usize
}

/// Shorten `text` to fit `max_px`, ending with an ellipsis when something was cut.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    let limit = max_chars(font_px, max_px);
    if text.chars().count() <= limit {
        return text.to_string();
    }
    if limit == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(limit - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap to `max_px`. Words longer than a line are truncated.
pub fn wrap_text_to_width(text: &str, font_px: u32, max_px: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        let candidate = if cur.is_empty() {
            word.to_string()
        } else {
            format!("{cur} {word}")
        };
        if estimate_text_width_px(&candidate, font_px) <= max_px {
            cur = candidate;
            continue;
        }
        if !cur.is_empty() {
            lines.push(std::mem::take(&mut cur));
        }
        cur = truncate_to_width(word, font_px, max_px);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Word wrap, keeping at most `max_lines`; the last kept line gets an ellipsis if text was dropped.
pub fn wrap_limited(text: &str, font_px: u32, max_px: u32, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text_to_width(text, font_px, max_px);
    if max_lines > 0 && lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let mut kept = format!("{last} ");
            while !kept.is_empty() && estimate_text_width_px(&format!("{kept}…"), font_px) > max_px
            {
                kept.pop();
            }
            *last = format!("{kept}…");
        }
    }
    lines
}
