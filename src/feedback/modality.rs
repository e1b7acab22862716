//! Input modality classification, decided once at startup.

/// Raw device signals read from the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceSignals {
    /// `(hover: hover) and (pointer: fine)` matches.
    pub hover_media: bool,
    /// `ontouchstart` exists on the window.
    pub touch_event_surface: bool,
    /// `navigator.maxTouchPoints`.
    pub max_touch_points: i32,
}

impl DeviceSignals {
    pub fn has_touch(&self) -> bool {
        self.touch_event_surface || self.max_touch_points > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modality {
    /// Precise pointer with hover and no touch input at all.
    HoverCapable,
    /// Everything else, hybrids included.
    TouchOnly,
}

impl Modality {
    /// Both heuristics must agree before hover chimes are used; a laptop with a
    /// touchscreen is treated as touch-only.
    pub fn classify(signals: DeviceSignals) -> Self {
        if signals.hover_media && !signals.has_touch() {
            Modality::HoverCapable
        } else {
            Modality::TouchOnly
        }
    }

    pub fn can_hover(self) -> bool {
        self == Modality::HoverCapable
    }
}
