// crates/clipdeck-ui/src/helpers/format.rs
//
// UI-layer string and color utilities that don't belong in clipdeck-core.
//
// Time formatting lives in clipdeck_core::helpers::time — use those for
// anything involving seconds. This module holds utilities that are purely
// about rendering in the UI (truncation, CSS color parsing) and have no
// meaning outside of a display context.

use egui::Color32;

/// Truncate a clip title to roughly `max_px` of 11px proportional text,
/// ending in "…" when cut. Width is estimated at 6.5 px per character so
/// the card layout never needs a `&mut Fonts` handle for measurement.
pub fn fit_label(text: &str, max_px: f32) -> String {
    const AVG_CHAR_PX: f32 = 6.5;
    let budget = (max_px / AVG_CHAR_PX).max(0.0) as usize;
    if budget == 0 {
        return String::new();
    }
    if text.chars().count() <= budget {
        return text.to_owned();
    }
    // Last slot goes to the ellipsis.
    let mut out: String = text.chars().take(budget - 1).collect();
    out.push('…');
    out
}

/// Parse the CSS color notations the preset catalog uses — `#RGB`,
/// `#RRGGBB`, and `rgba(r,g,b,a)` — into a Color32. Anything else renders
/// as white rather than failing the paint pass.
pub fn parse_css_color(s: &str) -> Color32 {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(Color32::WHITE);
    }
    if let Some(body) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() == 4 {
            let r = parts[0].parse::<u8>().ok();
            let g = parts[1].parse::<u8>().ok();
            let b = parts[2].parse::<u8>().ok();
            let a = parts[3].parse::<f32>().ok().map(|a| (a.clamp(0.0, 1.0) * 255.0) as u8);
            if let (Some(r), Some(g), Some(b), Some(a)) = (r, g, b, a) {
                return Color32::from_rgba_unmultiplied(r, g, b, a);
            }
        }
    }
    Color32::WHITE
}

fn parse_hex(hex: &str) -> Option<Color32> {
    match hex.len() {
        // #RGB — each nibble doubled, CSS short form.
        3 => {
            let v = u16::from_str_radix(hex, 16).ok()?;
            let r = ((v >> 8) & 0xF) as u8;
            let g = ((v >> 4) & 0xF) as u8;
            let b = (v & 0xF) as u8;
            Some(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            Some(Color32::from_rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
        }
        _ => None,
    }
}

/// Inverse of `parse_css_color` for the brand editor round trip — the
/// backend stores colors as `#RRGGBB` strings.
pub fn color_to_hex(c: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_within_the_width_are_untouched() {
        assert_eq!(fit_label("Hook about pricing", 200.0), "Hook about pricing");
        assert_eq!(fit_label("", 40.0), "");
    }

    #[test]
    fn long_titles_are_cut_and_end_in_an_ellipsis() {
        let out = fit_label("Why the Q3 launch slipped a full quarter", 80.0);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= (80.0_f32 / 6.5) as usize);
    }

    #[test]
    fn multibyte_titles_are_cut_on_char_boundaries() {
        let out = fit_label("дуже довга назва кліпу яка не вміщається", 40.0);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= (40.0_f32 / 6.5) as usize);
    }

    #[test]
    fn zero_width_yields_an_empty_label() {
        assert_eq!(fit_label("anything", 0.0), "");
    }

    #[test]
    fn parses_long_hex() {
        assert_eq!(parse_css_color("#FFE600"), Color32::from_rgb(255, 230, 0));
        assert_eq!(parse_css_color("#000000"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(parse_css_color("#FFF"), Color32::from_rgb(255, 255, 255));
        assert_eq!(parse_css_color("#F00"), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn parses_rgba_with_alpha() {
        let c = parse_css_color("rgba(0,0,0,0.7)");
        assert_eq!((c.r(), c.g(), c.b()), (0, 0, 0));
        assert_eq!(c.a(), 178);
    }

    #[test]
    fn garbage_falls_back_to_white() {
        assert_eq!(parse_css_color("not-a-color"), Color32::WHITE);
        assert_eq!(parse_css_color("#XYZ"), Color32::WHITE);
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(color_to_hex(Color32::from_rgb(255, 176, 32)), "#FFB020");
        assert_eq!(parse_css_color(&color_to_hex(Color32::from_rgb(1, 2, 3))),
            Color32::from_rgb(1, 2, 3));
    }
}
