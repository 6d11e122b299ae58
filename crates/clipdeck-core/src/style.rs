// crates/clipdeck-core/src/style.rs
//
// Subtitle presets, the font catalog, the brand template override layer,
// and the style resolver that merges them.
//
// Style resolution is a fixed allow-list, not a deep merge: brand identity
// controls typeface and colors, layout geometry (size, margins, alignment,
// wrap) stays preset-governed for readability.

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::store::KvStore;

// ── Subtitle style ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// A complete, fully-populated subtitle style. One immutable instance per
/// preset; the resolver copies it and overrides the brand-controlled fields.
/// Serialized camelCase — this struct is the `subtitleStyle` export payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleStyle {
    pub font_family:   String,
    pub font_size:     u32,
    pub primary_color: String,
    pub outline_color: String,
    pub outline:       f32,
    pub shadow:        f32,
    pub alignment:     Alignment,
    pub margin_l:      u32,
    pub margin_r:      u32,
    pub margin_v:      u32,
    /// ASS wrap style: 0 smart, 1 end-of-line, 2 none.
    pub wrap_style:    u8,
}

// ── Preset catalog ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubtitlePresetId {
    TiktokPop,
    TiktokBar,
    YtDefault,
    Cinematic,
    Accessible,
}

impl SubtitlePresetId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TiktokPop  => "TIKTOK_POP",
            Self::TiktokBar  => "TIKTOK_BAR",
            Self::YtDefault  => "YT_DEFAULT",
            Self::Cinematic  => "CINEMATIC",
            Self::Accessible => "ACCESSIBLE",
        }
    }
}

impl Default for SubtitlePresetId {
    fn default() -> Self {
        Self::TiktokPop
    }
}

pub struct SubtitlePreset {
    pub id:          SubtitlePresetId,
    pub label:       &'static str,
    pub description: &'static str,
    pub style:       SubtitleStyle,
}

fn build_catalog() -> Vec<SubtitlePreset> {
    vec![
        SubtitlePreset {
            id:          SubtitlePresetId::TiktokPop,
            label:       "TikTok — Bold Yellow",
            description: "Big yellow text with black outline for 9:16 shorts.",
            style: SubtitleStyle {
                font_family:   "Inter Semi Bold".into(),
                font_size:     30,
                primary_color: "#FFE600".into(),
                outline_color: "#000000".into(),
                outline:       3.0,
                shadow:        1.0,
                alignment:     Alignment::Center,
                margin_l:      80,
                margin_r:      80,
                margin_v:      80,
                wrap_style:    2,
            },
        },
        SubtitlePreset {
            id:          SubtitlePresetId::TiktokBar,
            label:       "TikTok — White on dark",
            description: "White text on a dark bar, readable on busy video.",
            style: SubtitleStyle {
                font_family:   "Inter Semi Bold".into(),
                font_size:     26,
                primary_color: "#FFF".into(),
                outline_color: "rgba(0,0,0,0.7)".into(),
                outline:       2.0,
                shadow:        0.0,
                alignment:     Alignment::Center,
                margin_l:      60,
                margin_r:      60,
                margin_v:      70,
                wrap_style:    2,
            },
        },
        SubtitlePreset {
            id:          SubtitlePresetId::YtDefault,
            label:       "YouTube — Standard",
            description: "Broadcast-style subtitles for 16:9.",
            style: SubtitleStyle {
                font_family:   "Inter Medium".into(),
                font_size:     22,
                primary_color: "#FFFFFF".into(),
                outline_color: "#000000".into(),
                outline:       2.0,
                shadow:        1.0,
                alignment:     Alignment::Center,
                margin_l:      100,
                margin_r:      100,
                margin_v:      40,
                wrap_style:    2,
            },
        },
        SubtitlePreset {
            id:          SubtitlePresetId::Cinematic,
            label:       "Cinematic — Subtle",
            description: "Small and subtle, for more filmic content.",
            style: SubtitleStyle {
                font_family:   "Inter Light".into(),
                font_size:     18,
                primary_color: "#F5F5F5".into(),
                outline_color: "rgba(0,0,0,0.7)".into(),
                outline:       1.0,
                shadow:        0.0,
                alignment:     Alignment::Center,
                margin_l:      120,
                margin_r:      120,
                margin_v:      60,
                wrap_style:    2,
            },
        },
        SubtitlePreset {
            id:          SubtitlePresetId::Accessible,
            label:       "High contrast (pro)",
            description: "Maximum readability for e-learning / corporate.",
            style: SubtitleStyle {
                font_family:   "Inter Semi Bold".into(),
                font_size:     24,
                primary_color: "#000000".into(),
                outline_color: "#FFFFFF".into(),
                outline:       3.0,
                shadow:        0.0,
                alignment:     Alignment::Center,
                margin_l:      90,
                margin_r:      90,
                margin_v:      50,
                wrap_style:    2,
            },
        },
    ]
}

/// The fixed catalog of built-in presets. First entry is the fallback.
pub fn preset_catalog() -> &'static [SubtitlePreset] {
    static CATALOG: OnceLock<Vec<SubtitlePreset>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Total lookup: unknown ids resolve to the first catalog entry.
pub fn resolve_preset(id: &str) -> &'static SubtitlePreset {
    let catalog = preset_catalog();
    catalog
        .iter()
        .find(|p| p.id.as_str() == id)
        .unwrap_or(&catalog[0])
}

pub fn preset_by_id(id: SubtitlePresetId) -> &'static SubtitlePreset {
    let catalog = preset_catalog();
    catalog.iter().find(|p| p.id == id).unwrap_or(&catalog[0])
}

// ── Font catalog ──────────────────────────────────────────────────────────────

/// A renderable font choice: `ass` is the name the render backend embeds in
/// the subtitle track, `css` the stack used for on-screen preview.
pub struct SubtitleFont {
    pub id:    &'static str,
    pub label: &'static str,
    pub ass:   &'static str,
    pub css:   &'static str,
}

pub const DEFAULT_FONT_ID: &str = "roboto";

pub const SUBTITLE_FONTS: &[SubtitleFont] = &[
    SubtitleFont { id: "roboto",     label: "Roboto",     ass: "Roboto",     css: "Roboto, sans-serif" },
    SubtitleFont { id: "inter",      label: "Inter",      ass: "Inter",      css: "Inter, sans-serif" },
    SubtitleFont { id: "montserrat", label: "Montserrat", ass: "Montserrat", css: "Montserrat, sans-serif" },
    SubtitleFont { id: "bebas",      label: "Bebas Neue", ass: "Bebas Neue", css: "'Bebas Neue', sans-serif" },
    SubtitleFont { id: "oswald",     label: "Oswald",     ass: "Oswald",     css: "Oswald, sans-serif" },
];

/// Exact lookup; None for unknown ids.
pub fn find_font(id: &str) -> Option<&'static SubtitleFont> {
    SUBTITLE_FONTS.iter().find(|f| f.id == id)
}

/// Total lookup: unknown ids resolve to the default (roboto) descriptor.
pub fn resolve_font(id: &str) -> &'static SubtitleFont {
    find_font(id)
        .or_else(|| find_font(DEFAULT_FONT_ID))
        .unwrap_or(&SUBTITLE_FONTS[0])
}

// ── Aspect ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aspect {
    #[serde(rename = "16:9")]
    Wide,      // YouTube / HD
    #[serde(rename = "9:16")]
    Vertical,  // TikTok / Reels / Shorts
    #[serde(rename = "1:1")]
    Square,    // Instagram square
}

impl Aspect {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wide     => "16:9",
            Self::Vertical => "9:16",
            Self::Square   => "1:1",
        }
    }

    pub fn ratio(&self) -> f32 {
        match self {
            Self::Wide     => 16.0 / 9.0,
            Self::Vertical => 9.0 / 16.0,
            Self::Square   => 1.0,
        }
    }
}

impl Default for Aspect {
    fn default() -> Self {
        Self::Vertical
    }
}

// ── Brand template ────────────────────────────────────────────────────────────

/// User-authored override layer applied on top of a subtitle preset.
/// All subtitle fields are optional — absence means the preset value wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandTemplate {
    pub layout:                 Option<Aspect>,
    pub brand_primary_color:    String,
    pub brand_secondary_color:  String,
    pub brand_logo_path:        Option<PathBuf>,
    pub subtitle_font_id:       Option<String>,
    pub subtitle_primary_color: Option<String>,
    pub subtitle_outline_color: Option<String>,
    pub subtitle_outline_width: Option<f32>,
}

impl Default for BrandTemplate {
    fn default() -> Self {
        Self {
            layout:                 None,
            brand_primary_color:    "#FFB020".into(),
            brand_secondary_color:  "#FFFFFF".into(),
            brand_logo_path:        None,
            subtitle_font_id:       None,
            subtitle_primary_color: None,
            subtitle_outline_color: None,
            subtitle_outline_width: None,
        }
    }
}

pub const BRAND_DRAFT_KEY:  &str = "brandTemplate.v1";
pub const BRAND_ACTIVE_KEY: &str = "brandTemplate.active";

/// Wrapper persisted under BRAND_ACTIVE_KEY when a template is applied to a
/// project.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveBrand {
    pub project_id: String,
    pub tpl:        BrandTemplate,
    /// Unix seconds at apply time.
    pub at:         u64,
}

pub fn load_brand_draft(store: &dyn KvStore) -> Option<BrandTemplate> {
    let raw = store.get(BRAND_DRAFT_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn save_brand_draft(store: &dyn KvStore, tpl: &BrandTemplate) {
    if let Ok(raw) = serde_json::to_string(tpl) {
        store.set(BRAND_DRAFT_KEY, &raw);
    }
}

pub fn load_active_brand(store: &dyn KvStore) -> Option<ActiveBrand> {
    let raw = store.get(BRAND_ACTIVE_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn apply_brand_to_project(store: &dyn KvStore, project_id: &str, tpl: &BrandTemplate) {
    let at = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let active = ActiveBrand { project_id: project_id.to_owned(), tpl: tpl.clone(), at };
    if let Ok(raw) = serde_json::to_string(&active) {
        store.set(BRAND_ACTIVE_KEY, &raw);
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Layer a brand template over a preset style.
///
/// Exactly four fields can be overridden: font family (via font-id lookup,
/// keeping the preset's font when the id is unset *or* unknown), primary
/// color, outline color, outline width. Everything else is preset-governed.
pub fn effective_style(preset: &SubtitlePreset, brand: Option<&BrandTemplate>) -> SubtitleStyle {
    let mut style = preset.style.clone();
    let Some(tpl) = brand else {
        return style;
    };

    if let Some(font) = tpl.subtitle_font_id.as_deref().and_then(find_font) {
        style.font_family = font.ass.to_owned();
    }
    if let Some(c) = &tpl.subtitle_primary_color {
        style.primary_color = c.clone();
    }
    if let Some(c) = &tpl.subtitle_outline_color {
        style.outline_color = c.clone();
    }
    if let Some(w) = tpl.subtitle_outline_width {
        style.outline = w;
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    #[test]
    fn catalog_has_five_presets_and_stable_order() {
        let catalog = preset_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].id, SubtitlePresetId::TiktokPop);
    }

    #[test]
    fn unknown_preset_id_falls_back_to_first_entry() {
        assert_eq!(resolve_preset("NOT_A_REAL_ID").id, SubtitlePresetId::TiktokPop);
        assert_eq!(resolve_preset("YT_DEFAULT").id, SubtitlePresetId::YtDefault);
    }

    #[test]
    fn unknown_font_id_falls_back_to_roboto() {
        assert_eq!(resolve_font("unknown").id, "roboto");
        assert_eq!(resolve_font("bebas").ass, "Bebas Neue");
    }

    #[test]
    fn brand_overrides_only_the_allow_listed_fields() {
        let preset = preset_by_id(SubtitlePresetId::YtDefault);
        let brand = BrandTemplate {
            subtitle_primary_color: Some("#123456".into()),
            ..BrandTemplate::default()
        };

        let style = effective_style(preset, Some(&brand));
        assert_eq!(style.primary_color, "#123456");
        // Layout geometry is untouched.
        assert_eq!(style.font_size, 22);
        assert_eq!(style.alignment, Alignment::Center);
        assert_eq!(style.margin_v, 40);
        assert_eq!(style.font_family, "Inter Medium");
    }

    #[test]
    fn absent_brand_returns_the_preset_style_unchanged() {
        let preset = preset_by_id(SubtitlePresetId::Cinematic);
        assert_eq!(effective_style(preset, None), preset.style);
    }

    #[test]
    fn unknown_brand_font_keeps_the_preset_font() {
        let preset = preset_by_id(SubtitlePresetId::TiktokPop);
        let brand = BrandTemplate {
            subtitle_font_id: Some("papyrus".into()),
            ..BrandTemplate::default()
        };
        assert_eq!(effective_style(preset, Some(&brand)).font_family, "Inter Semi Bold");
    }

    #[test]
    fn known_brand_font_overrides_via_ass_name() {
        let preset = preset_by_id(SubtitlePresetId::TiktokPop);
        let brand = BrandTemplate {
            subtitle_font_id: Some("montserrat".into()),
            subtitle_outline_width: Some(5.0),
            ..BrandTemplate::default()
        };
        let style = effective_style(preset, Some(&brand));
        assert_eq!(style.font_family, "Montserrat");
        assert_eq!(style.outline, 5.0);
    }

    #[test]
    fn style_serializes_camel_case_for_the_export_payload() {
        let style = &preset_by_id(SubtitlePresetId::YtDefault).style;
        let v = serde_json::to_value(style).unwrap();
        assert_eq!(v["fontFamily"], "Inter Medium");
        assert_eq!(v["fontSize"], 22);
        assert_eq!(v["alignment"], "center");
        assert_eq!(v["marginL"], 100);
        assert_eq!(v["wrapStyle"], 2);
    }

    #[test]
    fn active_brand_round_trips_through_the_store() {
        let store = MemStore::new();
        let tpl = BrandTemplate {
            layout: Some(Aspect::Vertical),
            subtitle_outline_color: Some("#101010".into()),
            ..BrandTemplate::default()
        };
        apply_brand_to_project(&store, "1", &tpl);

        let active = load_active_brand(&store).unwrap();
        assert_eq!(active.project_id, "1");
        assert_eq!(active.tpl, tpl);
    }

    #[test]
    fn malformed_active_brand_reads_as_none() {
        let store = MemStore::new();
        store.set(BRAND_ACTIVE_KEY, "{broken");
        assert!(load_active_brand(&store).is_none());
    }

    #[test]
    fn aspect_serializes_as_ratio_strings() {
        assert_eq!(serde_json::to_string(&Aspect::Vertical).unwrap(), "\"9:16\"");
        let a: Aspect = serde_json::from_str("\"1:1\"").unwrap();
        assert_eq!(a, Aspect::Square);
    }
}
