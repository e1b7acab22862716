//! Which triggers chime on which targets.
//!
//! The plan is a static table built once from the modality. The only change it
//! ever sees is the one-shot consent upgrade on touch devices, which appends
//! bindings and never removes any.

use super::modality::Modality;

/// Target groups, each a selector list in `FxConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// `.btn, .card, .portfolio-image, .preview-close, .hero-accent`
    HoverTargets,
    /// Hover targets minus the hero accent.
    TapTargets,
    /// `.btn`
    Buttons,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    PointerEnter,
    PointerDown,
    FocusIn,
}

impl Trigger {
    pub fn event_name(self) -> &'static str {
        match self {
            Trigger::PointerEnter => "pointerenter",
            Trigger::PointerDown => "pointerdown",
            Trigger::FocusIn => "focusin",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Chime,
    /// Subscribed but intentionally quiet.
    Silent,
}

/// Scopes a single element belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Membership {
    pub hover_target: bool,
    pub tap_target: bool,
    pub button: bool,
}

impl Membership {
    pub fn contains(&self, scope: Scope) -> bool {
        match scope {
            Scope::HoverTargets => self.hover_target,
            Scope::TapTargets => self.tap_target,
            Scope::Buttons => self.button,
        }
    }

    pub fn any(&self) -> bool {
        self.hover_target || self.tap_target || self.button
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub scope: Scope,
    pub trigger: Trigger,
    pub action: Action,
}

impl Binding {
    const fn new(scope: Scope, trigger: Trigger, action: Action) -> Self {
        Self { scope, trigger, action }
    }

    /// Does this binding play the chime for `trigger` on an element with
    /// `membership`? Secondary pointers never do; focus has no pointer.
    pub fn fires(&self, membership: Membership, trigger: Trigger, is_primary: bool) -> bool {
        self.action == Action::Chime
            && self.trigger == trigger
            && membership.contains(self.scope)
            && (is_primary || trigger == Trigger::FocusIn)
    }
}

const HOVER_ENTER: Binding = Binding::new(Scope::HoverTargets, Trigger::PointerEnter, Action::Chime);
const HOVER_FOCUS: Binding = Binding::new(Scope::HoverTargets, Trigger::FocusIn, Action::Chime);
const TAP_SILENT: Binding = Binding::new(Scope::TapTargets, Trigger::PointerDown, Action::Silent);
// Applies on every device: buttons chime on press as well as on hover.
const BUTTON_PRESS: Binding = Binding::new(Scope::Buttons, Trigger::PointerDown, Action::Chime);

#[derive(Clone, Debug)]
pub struct FeedbackPlan {
    modality: Modality,
    bindings: Vec<Binding>,
    upgraded: bool,
}

impl FeedbackPlan {
    pub fn for_modality(modality: Modality) -> Self {
        let bindings = match modality {
            Modality::HoverCapable => vec![HOVER_ENTER, HOVER_FOCUS, BUTTON_PRESS],
            Modality::TouchOnly => vec![TAP_SILENT, BUTTON_PRESS],
        };
        Self { modality, bindings, upgraded: false }
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn is_upgraded(&self) -> bool {
        self.upgraded
    }

    /// Explicit audio consent on a touch device adds hover-enter chimes.
    /// Returns the bindings added by this call (empty after the first).
    pub fn grant_consent(&mut self) -> Vec<Binding> {
        if self.modality != Modality::TouchOnly || self.upgraded {
            return Vec::new();
        }
        self.upgraded = true;
        self.bindings.push(HOVER_ENTER);
        vec![HOVER_ENTER]
    }

    /// How many chime plays one event causes on one element.
    pub fn chimes_for(&self, membership: Membership, trigger: Trigger, is_primary: bool) -> usize {
        self.bindings
            .iter()
            .filter(|b| b.fires(membership, trigger, is_primary))
            .count()
    }
}
