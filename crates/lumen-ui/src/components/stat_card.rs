use leptos::prelude::*;
use lumen_types::{StatDisplay, StatTone};

/// Dark card showing one headline number with an icon marker.
///
/// While `display` is `Loading` the icon and the value are replaced by
/// skeleton blocks; the title stays visible in both states.
#[component]
pub fn StatCard(
    /// Caption at the top of the card
    #[prop(into)]
    title: String,
    /// Loading placeholder or the value to show
    #[prop(into)]
    display: Signal<StatDisplay>,
    /// Marker glyph rendered inside the icon badge
    #[prop(optional, into)]
    icon: String,
    /// Colour variant of the icon badge
    #[prop(optional)]
    tone: StatTone,
) -> impl IntoView {
    let iconStyle = format!(
        "color: {}; background-color: {}",
        tone.color(),
        tone.background()
    );
    let iconClass = format!("stat-card-icon {}", tone.class_name());

    let iconSlot = move || match display.get() {
        StatDisplay::Loading => {
            view! { <div class="skeleton skeleton-icon"></div> }.into_any()
        }
        StatDisplay::Loaded(_) => {
            view! {
                <div class=iconClass.clone() style=iconStyle.clone()>
                    {icon.clone()}
                </div>
            }
                .into_any()
        }
    };

    let valueSlot = move || match display.get() {
        StatDisplay::Loading => {
            view! { <div class="skeleton skeleton-text"></div> }.into_any()
        }
        StatDisplay::Loaded(value) => {
            view! { <div class="stat-card-value">{value.to_string()}</div> }.into_any()
        }
    };

    view! {
        <div class="card stat-card">
            <div class="stat-card-header">
                <div class="card-title">{title}</div>
                {iconSlot}
            </div>
            {valueSlot}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use lumen_types::StatValue;

    fn render(display: StatDisplay) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <StatCard
                    title="Open issues"
                    display=display
                    icon="\u{25CB}"
                    tone=StatTone::Primary
                />
            }
                .to_html()
        })
    }

    #[test]
    fn should_render_placeholders_instead_of_content_while_loading() {
        let html = render(StatDisplay::Loading);
        assert!(html.contains("Open issues"));
        assert!(html.contains("skeleton-icon"));
        assert!(html.contains("skeleton-text"));
        assert!(!html.contains("stat-card-icon"));
        assert!(!html.contains("stat-card-value"));
        assert!(!html.contains("\u{25CB}"));
    }

    #[test]
    fn should_render_icon_and_value_once_loaded() {
        let html = render(StatDisplay::Loaded(StatValue::Count(42)));
        assert!(html.contains("Open issues"));
        assert!(html.contains("stat-card-icon tone-primary"));
        assert!(html.contains("\u{25CB}"));
        assert!(html.contains("stat-card-value"));
        assert!(html.contains("42"));
        assert!(!html.contains("skeleton"));
    }

    #[test]
    fn should_follow_display_signal_from_loading_to_loaded() {
        let owner = Owner::new();
        owner.with(|| {
            let display = RwSignal::new(StatDisplay::Loading);
            let render = move || {
                view! {
                    <StatCard
                        title="Closed"
                        display=display
                        icon="\u{2713}"
                        tone=StatTone::Success
                    />
                }
                    .to_html()
            };

            let loading = render();
            assert!(loading.contains("skeleton-icon"));
            assert!(!loading.contains("stat-card-value"));

            display.set(StatDisplay::Loaded(StatValue::Count(7)));

            let loaded = render();
            assert!(loaded.contains("stat-card-icon tone-success"));
            assert!(loaded.contains("\u{2713}"));
            assert!(loaded.contains("stat-card-value"));
            assert!(loaded.contains('7'));
            assert!(!loaded.contains("skeleton"));
        });
    }

    #[test]
    fn should_style_icon_with_tone_tokens() {
        let html = render(StatDisplay::loaded("n/a"));
        assert!(html.contains(StatTone::Primary.color()));
        assert!(html.contains(StatTone::Primary.background()));
    }
}
