use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{
    Entrance, FadeUp, MotionPreference, Reveal, RevealState, RevealTrigger, SECTION_FADE,
};

/// Reduced-motion preference, provided once by `App`.
#[derive(Debug, Clone, Copy)]
pub struct MotionContext(pub Signal<MotionPreference>);

/// State of the enclosing [`RevealSection`], read by [`StaggerItem`]s.
#[derive(Debug, Clone, Copy)]
pub struct RevealContext(pub Signal<RevealState>);

pub fn use_motion_preference() -> Signal<MotionPreference> {
    use_context::<MotionContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::stored(MotionPreference::Full))
}

fn use_reveal_state() -> Signal<RevealState> {
    use_context::<RevealContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::stored(RevealState::Visible))
}

#[component]
pub fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(default = RevealTrigger::OnViewportEntry)] trigger: RevealTrigger,
    #[prop(default = Entrance::Fade(FadeUp::new(SECTION_FADE)))] entrance: Entrance,
    children: Children,
) -> impl IntoView {
    let motion = use_motion_preference();
    let reveal = RwSignal::new(Reveal::new(trigger, motion.get_untracked()));
    let state = Signal::derive(move || reveal.with(Reveal::state));
    provide_context(RevealContext(state));

    let section_ref = NodeRef::<html::Section>::new();
    let in_view = use_element_visibility(section_ref);

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| {
        request_animation_frame(move || {
            if reveal.try_update(Reveal::on_load).unwrap_or(false) {
                log::debug!("section {id} revealed on load");
            }
        });
    });

    Effect::new(move |_| {
        let intersecting = in_view.get();
        if reveal
            .try_update(|r| r.on_intersection(intersecting))
            .unwrap_or(false)
        {
            log::debug!("section {id} entered viewport");
        }
    });

    Effect::new(move |_| {
        if motion.get() == MotionPreference::Reduced {
            reveal.update(|r| {
                r.settle();
            });
        }
    });

    let fade = match entrance {
        Entrance::Fade(fade) => Some(fade),
        Entrance::Stagger => None,
    };

    view! {
        <section
            id=id
            node_ref=section_ref
            class=move || match fade {
                Some(fade) => format!("reveal {class} {}", fade.class(state.get(), motion.get())),
                None => class.to_string(),
            }
            style=move || fade.and_then(|fade| fade.style(motion.get()))
        >
            {children()}
        </section>
    }
}

/// Child of a staggered [`RevealSection`]; fades in `index` steps after the first.
#[component]
pub fn StaggerItem(index: usize, children: Children) -> impl IntoView {
    let state = use_reveal_state();
    let motion = use_motion_preference();
    let fade = FadeUp::staggered(index);

    view! {
        <div
            class=move || format!("reveal {}", fade.class(state.get(), motion.get()))
            style=move || fade.style(motion.get())
        >
            {children()}
        </div>
    }
}
