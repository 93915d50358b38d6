use crate::shared::icons::icon;
use contracts::dashboards::sales_overview::ProductRanking;
use contracts::shared::format::{format_currency, format_percent};
use leptos::prelude::*;

/// Ranking panel: product name, revenue and growth per row.
#[component]
pub fn TopProducts(
    /// Rows in display order
    products: Vec<ProductRanking>,
) -> impl IntoView {
    view! {
        <div class="panel top-products">
            <h3 class="panel__title">"Top Products"</h3>
            <div class="top-products__row top-products__row--head">
                <span>"Product"</span>
                <span class="top-products__num">"Sales"</span>
                <span class="top-products__num">"Growth"</span>
            </div>
            <div class="top-products__body">
                {products
                    .into_iter()
                    .map(|product| {
                        view! {
                            <div class="top-products__row">
                                <span class="top-products__name">{product.name}</span>
                                <span class="top-products__num">{format_currency(product.sales)}</span>
                                <span class="top-products__num top-products__growth">
                                    {icon("trending-up")}
                                    {format_percent(product.growth)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
