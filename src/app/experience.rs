use leptos::prelude::*;

use super::reveal::{RevealSection, StaggerItem};
use crate::{content::ExperienceEntry, motion::Entrance, theme::ThemeTokens};

#[component]
pub fn ExperienceSection(
    entries: &'static [ExperienceEntry],
    tokens: Signal<&'static ThemeTokens>,
) -> impl IntoView {
    view! {
        <RevealSection id="experience" class="py-20" entrance=Entrance::Stagger>
            <div class="max-w-5xl mx-auto px-4 sm:px-6">
                <h2 class="text-3xl font-semibold mb-10">"Experience"</h2>
                <div class="space-y-12">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <StaggerItem index>
                                    <ExperienceItem entry tokens />
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ExperienceItem(
    entry: &'static ExperienceEntry,
    tokens: Signal<&'static ThemeTokens>,
) -> impl IntoView {
    view! {
        <div class=move || tokens.get().body>
            <h3 class="text-xl font-semibold break-words">{entry.role}</h3>
            <p class="break-words">{format!("{} | {}", entry.company, entry.duration)}</p>
            <ul class="list-disc pl-6 mt-4 space-y-2">
                {entry
                    .points
                    .iter()
                    .map(|point| view! { <li class="break-words">{*point}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
