use crate::shared::icons::icon;
use leptos::prelude::*;

/// Clickable summary card. The value arrives pre-formatted; a click reports
/// the card's metric through `on_select`.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Accent color applied to the icon box and the selected border
    accent: &'static str,
    /// Pre-formatted value, e.g. "$187,345"
    #[prop(into)]
    value: Signal<String>,
    /// Whether this card's metric is the highlighted one
    #[prop(into)]
    selected: Signal<bool>,
    /// Fired when the card is clicked
    on_select: Callback<()>,
) -> impl IntoView {
    let card_class = move || {
        if selected.get() {
            "stat-card stat-card--selected"
        } else {
            "stat-card"
        }
    };

    view! {
        <div
            class=card_class
            style=format!("--stat-card-accent: {}", accent)
            on:click=move |_| on_select.run(())
        >
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}
