use crate::dashboards::SalesOverviewDashboard;
use crate::dashboards::sales_overview::data;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The dashboard consumes an injected dataset; the bundled fixture is the
    // only data source in this build.
    let dataset = data::sales_dataset();

    view! {
        <SalesOverviewDashboard dataset=dataset />
    }
}
