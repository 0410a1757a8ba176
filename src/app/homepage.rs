use leptos::prelude::*;

use super::{
    experience::ExperienceSection,
    icons::{Icon, IconKind},
    reveal::RevealSection,
    skills::SkillsSection,
};
use crate::{
    config::site_path,
    content::{Education, Profile, ABOUT, CONTACT_PITCH, EDUCATION, EXPERIENCE, PROFILE, SKILLS},
    motion::{Entrance, FadeUp, RevealTrigger, HERO_FADE},
    theme::ThemeTokens,
};

/// Every section of the page, in display order.
#[component]
pub fn HomePage(tokens: Signal<&'static ThemeTokens>) -> impl IntoView {
    view! {
        <Hero profile=&PROFILE tokens />
        <About />
        <ExperienceSection entries=EXPERIENCE tokens />
        <SkillsSection groups=SKILLS tokens />
        <EducationSection education=&EDUCATION tokens />
        <Contact profile=&PROFILE tokens />
    }
}

#[component]
fn Hero(profile: &'static Profile, tokens: Signal<&'static ThemeTokens>) -> impl IntoView {
    view! {
        <RevealSection
            id="hero"
            class="flex flex-col items-center justify-center text-center min-h-screen px-6"
            trigger=RevealTrigger::OnLoad
            entrance=Entrance::Fade(FadeUp::new(HERO_FADE))
        >
            <h1 class="text-5xl md:text-6xl font-bold break-words">{profile.name}</h1>
            <p class="mt-4 text-xl max-w-3xl break-words">{profile.headline()}</p>
            <div class="flex flex-wrap justify-center gap-6 mt-6">
                {profile
                    .social_links()
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href.clone()
                                target=link.target()
                                rel=link.rel()
                                aria-label=link.label()
                            >
                                <Icon kind=IconKind::from(link.network) />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <a
                href=site_path(profile.resume)
                download=profile.resume_file_name()
                class=move || {
                    format!(
                        "mt-8 inline-flex items-center gap-2 px-6 py-3 rounded-xl {}",
                        tokens.get().button,
                    )
                }
            >
                <Icon kind=IconKind::Download size=18 />
                "Download Resume"
            </a>
        </RevealSection>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <RevealSection id="about" class="max-w-5xl mx-auto px-4 sm:px-6 py-20">
            <h2 class="text-3xl font-semibold mb-6">"About Me"</h2>
            <p class="leading-relaxed max-w-4xl break-words">{ABOUT}</p>
        </RevealSection>
    }
}

#[component]
fn EducationSection(
    education: &'static Education,
    tokens: Signal<&'static ThemeTokens>,
) -> impl IntoView {
    view! {
        <RevealSection id="education" class="py-20 px-4 sm:px-6">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-3xl font-semibold mb-6">"Education"</h2>
                <p class=move || format!("{} break-words", tokens.get().body)>
                    <strong>{education.degree}</strong>
                    <br />
                    {education.institution}
                    <br />
                    {format!("{} | {}", education.score, education.years)}
                </p>
            </div>
        </RevealSection>
    }
}

#[component]
fn Contact(profile: &'static Profile, tokens: Signal<&'static ThemeTokens>) -> impl IntoView {
    view! {
        <RevealSection id="contact" class="text-center py-20 px-4 sm:px-6">
            <h2 class="text-3xl font-semibold mb-4">"Contact"</h2>
            <p class=move || {
                format!("{} mb-6 break-words", tokens.get().muted)
            }>{CONTACT_PITCH}</p>
            <a
                href=profile.mailto()
                class=move || format!("px-6 py-3 rounded-xl {}", tokens.get().button)
            >
                "Get In Touch"
            </a>
        </RevealSection>
    }
}
