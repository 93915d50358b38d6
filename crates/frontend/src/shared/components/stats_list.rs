use leptos::prelude::*;

/// One row of a [`StatsList`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: u32,
    /// Main line, e.g. a title
    pub primary: String,
    /// Right-aligned value, e.g. "$435.50" or "32%"
    pub secondary: String,
    /// Muted line under the title, e.g. "2 hours ago"
    pub meta: Option<String>,
    /// Signed trend, e.g. "+5%"; a leading '+' renders as an upward trend
    pub growth: Option<String>,
}

/// Titled list of label/value rows used by the side panels.
#[component]
pub fn StatsList(
    /// Panel heading
    title: &'static str,
    /// Rows in display order
    entries: Vec<ListEntry>,
) -> impl IntoView {
    view! {
        <div class="panel stats-list">
            <h3 class="panel__title">{title}</h3>
            <ul class="stats-list__items">
                {entries
                    .into_iter()
                    .map(|entry| {
                        let growth_view = entry.growth.map(|growth| {
                            let growth_class = if growth.starts_with('+') {
                                "stats-list__growth stats-list__growth--up"
                            } else {
                                "stats-list__growth stats-list__growth--down"
                            };
                            view! { <span class=growth_class>{growth}</span> }
                        });
                        let meta_view = entry
                            .meta
                            .map(|meta| view! { <div class="stats-list__meta">{meta}</div> });
                        view! {
                            <li class="stats-list__item">
                                <div class="stats-list__text">
                                    <div class="stats-list__primary">{entry.primary}</div>
                                    {meta_view}
                                </div>
                                <div class="stats-list__value">
                                    {entry.secondary}
                                    {growth_view}
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
