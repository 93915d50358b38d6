use contracts::dashboards::sales_overview::TimeRange;
use leptos::prelude::*;

/// Row of trailing-window buttons: 24H / 7D / 30D.
#[component]
pub fn TimeRangePicker(
    /// Currently selected range
    #[prop(into)]
    value: Signal<TimeRange>,
    /// Fired with the clicked range
    on_change: Callback<TimeRange>,
) -> impl IntoView {
    view! {
        <div class="time-range" role="group" aria-label="Time range">
            {TimeRange::all()
                .into_iter()
                .map(|range| {
                    let btn_class = move || {
                        if value.get() == range {
                            "time-range__btn time-range__btn--active"
                        } else {
                            "time-range__btn"
                        }
                    };
                    view! {
                        <button class=btn_class on:click=move |_| on_change.run(range)>
                            {range.button_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
