//! Card for one A/B copy variant.

#[cfg(test)]
#[path = "variant_card_test.rs"]
mod variant_card_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::progress::Progress;
use crate::net::types::Variant;
use crate::util::format::format_percent;

/// CTR that fills the bar completely.
pub const FULL_BAR_CTR: f64 = 10.0;

/// Bar fill for a CTR, as a 0..=100 percentage of [`FULL_BAR_CTR`].
#[must_use]
pub fn ctr_bar_percent(ctr: f64) -> f64 {
    crate::components::progress::clamp_percent(ctr / FULL_BAR_CTR * 100.0)
}

#[component]
pub fn VariantComparisonCard(variant: Variant, #[prop(optional)] leader: bool) -> impl IntoView {
    let fill = ctr_bar_percent(variant.ctr);
    view! {
        <Card class=if leader { "variant-card variant-card--leader" } else { "variant-card" }>
            <CardHeader>
                <CardTitle>{variant.headline}</CardTitle>
                <Show when=move || leader>
                    <Badge class="badge--success">"Leader"</Badge>
                </Show>
            </CardHeader>
            <CardContent>
                <p class="variant-card__ctr">
                    <span class="variant-card__label">"CTR"</span>
                    <span class="variant-card__value">{format_percent(variant.ctr)}</span>
                </p>
                <Progress value=fill/>
            </CardContent>
        </Card>
    }
}
