//! Utility functions for visualization: locale mapping, tick and percent formatting, gutters.

use num_format::{Locale, ToFormattedString};

use super::text::estimate_text_width_px;

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `pt_BR`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Y tick label: grouped integers from 1000 up, otherwise 0-2 decimals depending on magnitude.
pub fn format_tick(v: f64, locale_tag: &str) -> String {
    let (locale, dec_sep) = map_locale(locale_tag);
    let a = v.abs();
    if a >= 1000.0 {
        return (v.round() as i64).to_formatted_string(locale);
    }
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    let s = format!("{:.*}", prec, v);
    if dec_sep == '.' {
        s
    } else {
        s.replace('.', &dec_sep.to_string())
    }
}

/// Slice label percentage with one decimal, e.g. `33.3%`.
pub fn format_percent(pct: f64, locale_tag: &str) -> String {
    let (_, dec_sep) = map_locale(locale_tag);
    let s = format!("{pct:.1}%");
    if dec_sep == '.' {
        s
    } else {
        s.replace('.', &dec_sep.to_string())
    }
}

/// Left label area width (pixels) that fits the widest Y tick label.
///
/// Samples the same number of tick positions as requested from plotters and
/// clamps the result to a sensible range.
pub fn compute_left_label_area_px(
    ymin: f64,
    ymax: f64,
    ticks: usize,
    font_px: u32,
    locale_tag: &str,
) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let v = ymin + (ymax - ymin) * t;
        max_px = max_px.max(estimate_text_width_px(&format_tick(v, locale_tag), font_px));
    }
    // tick marks, axis description and some breathing room
    max_px.saturating_add(40).clamp(60, 160)
}
