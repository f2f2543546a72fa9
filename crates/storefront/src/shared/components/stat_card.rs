use leptos::prelude::*;

use crate::shared::format::format_growth;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Already formatted value
    value: String,
    /// Change % relative to the previous period
    growth: Option<f64>,
    #[prop(optional)]
    loading: bool,
) -> impl IntoView {
    let change_view = format_growth(growth).map(|text| {
        let cls = match growth {
            Some(p) if p > 0.0 => "stat-card__change stat-card__change--up",
            Some(p) if p < 0.0 => "stat-card__change stat-card__change--down",
            _ => "stat-card__change stat-card__change--flat",
        };
        view! { <span class=cls>{text}</span> }
    });

    let value = if loading { "…".to_string() } else { value };

    view! {
        <div class="stat-card" class:stat-card--loading=loading>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {(!loading).then_some(change_view).flatten()}
                </div>
            </div>
        </div>
    }
}
