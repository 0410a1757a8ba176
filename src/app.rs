mod experience;
mod homepage;
mod icons;
mod reveal;
mod skills;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_use::use_media_query;

use crate::{
    config::{site_path, BASE_PATH},
    content::{person_json_ld, PROFILE, SKILLS},
    motion::MotionPreference,
    theme::{Theme, ThemeTokens},
};
use homepage::HomePage;
use icons::{Icon, IconKind};
use reveal::MotionContext;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let structured_data = person_json_ld(&PROFILE, SKILLS).unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options root=BASE_PATH />
                <meta name="color-scheme" content="dark light" />
                <link rel="stylesheet" id="leptos" href=site_path("/pkg/portfolio-site.css") />
                <script type="application/ld+json" inner_html=structured_data></script>
                <RevealFallback />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Session theme, starting dark, and the callback that flips it.
fn theme_state() -> (ReadSignal<Theme>, Callback<()>) {
    let (theme, set_theme) = signal(Theme::default());
    let toggle_theme = Callback::new(move |_: ()| {
        set_theme.update(Theme::toggle);
        log::debug!("theme switched to {:?}", theme.get_untracked());
    });
    (theme, toggle_theme)
}

/// Un-hides `.reveal` sections when the hydration bundle never runs.
#[component]
fn RevealFallback() -> impl IntoView {
    let style = "<style>.reveal{opacity:1;transform:none;translate:none}</style>";
    view! { <noscript inner_html=style></noscript> }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, toggle_theme) = theme_state();
    let tokens = Signal::derive(move || theme.get().tokens());

    let prefers_reduced = use_media_query("(prefers-reduced-motion: reduce)");
    provide_context(MotionContext(Signal::derive(move || {
        MotionPreference::from_reduced(prefers_reduced.get())
    })));

    view! {
        <Title text=format!("{} | Portfolio", PROFILE.name) />
        <Meta name="description" content=PROFILE.headline() />

        <div
            class=move || {
                format!(
                    "{} min-h-screen font-sans transition-colors duration-500",
                    tokens.get().page,
                )
            }
            style:color-scheme=move || tokens.get().color_scheme
        >
            <ThemeToggle theme on_toggle=toggle_theme />
            <main>
                <HomePage tokens />
            </main>
            <Footer tokens />
        </div>
    }
}

#[component]
fn ThemeToggle(#[prop(into)] theme: Signal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="fixed top-4 right-4 z-50 cursor-pointer"
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| on_toggle.run(())
        >
            {move || {
                let kind = if theme.get().is_dark() { IconKind::Sun } else { IconKind::Moon };
                view! { <Icon kind size=24 /> }
            }}
        </button>
    }
}

#[component]
fn Footer(tokens: Signal<&'static ThemeTokens>) -> impl IntoView {
    let year = chrono::Utc::now().year();
    view! {
        <footer class=move || format!("{} text-center py-6", tokens.get().footer)>
            {format!("© {year} {}", PROFILE.name)}
        </footer>
    }
}
