//! Entrance animations as plain state, independent of the view layer.
//!
//! Every animated unit owns a [`Reveal`]: a one-way `Hidden -> Visible` machine whose
//! trigger is either the first frame after mount or the first viewport intersection.
//! [`FadeUp`] turns a state into the Tailwind classes and transition timing to apply.

use std::time::Duration;

pub const HERO_FADE: Duration = Duration::from_millis(800);
pub const SECTION_FADE: Duration = Duration::from_millis(600);
pub const STAGGER_STEP: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Self::Reduced
        } else {
            Self::Full
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    OnLoad,
    OnViewportEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    trigger: RevealTrigger,
    state: RevealState,
}

impl Reveal {
    pub fn new(trigger: RevealTrigger, motion: MotionPreference) -> Self {
        let state = match motion {
            MotionPreference::Full => RevealState::Hidden,
            MotionPreference::Reduced => RevealState::Visible,
        };
        Self { trigger, state }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Returns true only for the call that made the unit visible.
    pub fn on_load(&mut self) -> bool {
        match self.trigger {
            RevealTrigger::OnLoad => self.show(),
            RevealTrigger::OnViewportEntry => false,
        }
    }

    /// Returns true only for the call that made the unit visible.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        match self.trigger {
            RevealTrigger::OnViewportEntry if intersecting => self.show(),
            _ => false,
        }
    }

    /// Jump to the final state, e.g. when reduced motion is reported after mount.
    pub fn settle(&mut self) -> bool {
        self.show()
    }

    fn show(&mut self) -> bool {
        match self.state {
            RevealState::Hidden => {
                self.state = RevealState::Visible;
                true
            }
            RevealState::Visible => false,
        }
    }
}

/// Fade in while sliding up 40px.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeUp {
    pub duration: Duration,
    pub delay: Duration,
}

impl FadeUp {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
        }
    }

    /// The `index`th child of a staggered container.
    pub fn staggered(index: usize) -> Self {
        Self {
            duration: SECTION_FADE,
            delay: stagger_delay(index),
        }
    }

    pub fn class(&self, state: RevealState, motion: MotionPreference) -> &'static str {
        match (motion, state) {
            (MotionPreference::Reduced, _) => "",
            (MotionPreference::Full, RevealState::Hidden) => {
                "transition ease-out opacity-0 translate-y-10"
            }
            (MotionPreference::Full, RevealState::Visible) => {
                "transition ease-out opacity-100 translate-y-0"
            }
        }
    }

    pub fn style(&self, motion: MotionPreference) -> Option<String> {
        match motion {
            MotionPreference::Reduced => None,
            MotionPreference::Full => Some(format!(
                "transition-duration: {}ms; transition-delay: {}ms;",
                self.duration.as_millis(),
                self.delay.as_millis()
            )),
        }
    }
}

/// How a section enters: fading itself, or staggering its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Fade(FadeUp),
    Stagger,
}

pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_reveal_fires_once() {
        let mut reveal = Reveal::new(RevealTrigger::OnViewportEntry, MotionPreference::Full);
        assert_eq!(reveal.state(), RevealState::Hidden);

        assert!(!reveal.on_intersection(false));
        assert!(!reveal.is_visible());

        assert!(reveal.on_intersection(true));
        assert!(reveal.is_visible());

        // scroll away and back
        assert!(!reveal.on_intersection(false));
        assert!(reveal.is_visible());
        assert!(!reveal.on_intersection(true));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_viewport_reveal_ignores_load() {
        let mut reveal = Reveal::new(RevealTrigger::OnViewportEntry, MotionPreference::Full);
        assert!(!reveal.on_load());
        assert_eq!(reveal.state(), RevealState::Hidden);
    }

    #[test]
    fn test_hero_visible_on_load_without_intersection() {
        let mut hero = Reveal::new(RevealTrigger::OnLoad, MotionPreference::Full);
        let mut about = Reveal::new(RevealTrigger::OnViewportEntry, MotionPreference::Full);

        assert!(!hero.on_intersection(false));
        assert!(hero.on_load());
        assert!(!about.on_load());

        assert!(hero.is_visible());
        assert!(!about.is_visible());
        assert!(!hero.on_load());
    }

    #[test]
    fn test_hero_ignores_intersection() {
        let mut hero = Reveal::new(RevealTrigger::OnLoad, MotionPreference::Full);
        assert!(!hero.on_intersection(true));
        assert!(!hero.is_visible());
    }

    #[test]
    fn test_reduced_motion_starts_visible() {
        for trigger in [RevealTrigger::OnLoad, RevealTrigger::OnViewportEntry] {
            let mut reveal = Reveal::new(trigger, MotionPreference::Reduced);
            assert!(reveal.is_visible());
            assert!(!reveal.on_load());
            assert!(!reveal.on_intersection(true));
        }
    }

    #[test]
    fn test_settle_is_one_way() {
        let mut reveal = Reveal::new(RevealTrigger::OnViewportEntry, MotionPreference::Full);
        assert!(reveal.settle());
        assert!(!reveal.settle());
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_reduced_motion_is_identity() {
        let fade = FadeUp::new(HERO_FADE);
        assert_eq!(fade.class(RevealState::Hidden, MotionPreference::Reduced), "");
        assert_eq!(fade.class(RevealState::Visible, MotionPreference::Reduced), "");
        assert_eq!(fade.style(MotionPreference::Reduced), None);
    }

    #[test]
    fn test_fade_classes() {
        let fade = FadeUp::new(SECTION_FADE);
        let hidden = fade.class(RevealState::Hidden, MotionPreference::Full);
        let visible = fade.class(RevealState::Visible, MotionPreference::Full);
        assert!(hidden.contains("opacity-0") && hidden.contains("translate-y-10"));
        assert!(visible.contains("opacity-100") && visible.contains("translate-y-0"));
        assert_eq!(
            fade.style(MotionPreference::Full).as_deref(),
            Some("transition-duration: 600ms; transition-delay: 0ms;")
        );
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(1), Duration::from_millis(150));
        assert_eq!(stagger_delay(4), Duration::from_millis(600));
        assert_eq!(
            FadeUp::staggered(2).style(MotionPreference::Full).as_deref(),
            Some("transition-duration: 600ms; transition-delay: 300ms;")
        );
    }
}
