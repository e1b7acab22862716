//! Page contract: selectors, element ids, timings and strings.
//!
//! `FxConfig::default()` matches the markup shipped with the portfolio page.
//! With the `serde` feature a partial JSON object can override any field.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inert frame address used whenever the preview closes.
pub const BLANK_FRAME: &str = "about:blank";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FxConfig {
    // --- Reveal ---
    /// Selectors collected for reveal, in order.
    pub reveal_selectors: Vec<String>,
    pub reveal_class: String,
    pub reveal_visible_class: String,
    /// Fraction of the element that must be visible (0..=1).
    pub reveal_threshold: f64,

    // --- Preview modal ---
    pub modal_id: String,
    pub modal_frame_selector: String,
    pub modal_close_selector: String,
    pub modal_backdrop_selector: String,
    pub thumbnail_selector: String,
    pub blank_frame: String,
    pub default_title: String,
    pub default_thumbnail_title: String,
    pub long_press_ms: u32,

    // --- Ambient audio ---
    pub ambient_audio_id: String,
    pub unmute_button_id: String,
    pub ambient_volume: f64,
    pub settle_delay_ms: u32,

    // --- Chimes ---
    pub chime_audio_id: String,
    pub chime_volume: f64,
    pub hover_media_query: String,
    pub hover_targets: Vec<String>,
    pub tap_targets: Vec<String>,
    pub button_selector: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            reveal_selectors: owned(&[".section", ".card", ".tag", ".reason"]),
            reveal_class: "reveal".into(),
            reveal_visible_class: "reveal-visible".into(),
            reveal_threshold: 0.15,

            modal_id: "preview-modal".into(),
            modal_frame_selector: ".preview-frame-wrap iframe".into(),
            modal_close_selector: ".preview-close".into(),
            modal_backdrop_selector: ".preview-backdrop".into(),
            thumbnail_selector: ".portfolio-image".into(),
            blank_frame: BLANK_FRAME.into(),
            default_title: "Vista previa".into(),
            default_thumbnail_title: "Vista previa del proyecto".into(),
            long_press_ms: 350,

            ambient_audio_id: "ambient-audio".into(),
            unmute_button_id: "audio-unmute-btn".into(),
            ambient_volume: 0.06,
            settle_delay_ms: 300,

            chime_audio_id: "sfx-hover".into(),
            chime_volume: 0.08,
            hover_media_query: "(hover: hover) and (pointer: fine)".into(),
            // .tag and .reason are reveal targets only; they stay silent.
            hover_targets: owned(&[
                ".btn",
                ".card",
                ".portfolio-image",
                ".preview-close",
                ".hero-accent",
            ]),
            tap_targets: owned(&[".btn", ".portfolio-image", ".preview-close", ".card"]),
            button_selector: ".btn".into(),
        }
    }
}

impl FxConfig {
    /// Comma-joined selector list usable with `querySelectorAll` / `matches`.
    pub fn hover_selector(&self) -> String {
        self.hover_targets.join(",")
    }

    pub fn tap_selector(&self) -> String {
        self.tap_targets.join(",")
    }

    /// Parse a (possibly partial) JSON override; absent fields keep defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
