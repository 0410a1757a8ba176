use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::{content::SkillGroup, theme::ThemeTokens};

#[component]
pub fn SkillsSection(
    groups: &'static [SkillGroup],
    tokens: Signal<&'static ThemeTokens>,
) -> impl IntoView {
    view! {
        <RevealSection id="skills" class="max-w-5xl mx-auto px-4 sm:px-6 py-20">
            <h2 class="text-3xl font-semibold mb-8">"Skills"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                {groups.iter().map(|group| view! { <SkillBlock group tokens /> }).collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn SkillBlock(group: &'static SkillGroup, tokens: Signal<&'static ThemeTokens>) -> impl IntoView {
    view! {
        <div class=move || format!("{} p-6 rounded-2xl", tokens.get().card)>
            <h3 class=move || {
                format!("{} font-semibold mb-2 break-words", tokens.get().card_title)
            }>{group.title}</h3>
            <div class="flex flex-wrap gap-2 text-sm">
                {group
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <span class=move || {
                                format!("{} px-2 py-1 rounded-lg break-words", tokens.get().chip)
                            }>{*item}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
