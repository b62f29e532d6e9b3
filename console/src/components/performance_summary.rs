//! Aggregate CTR statistics across a campaign's variants.

#[cfg(test)]
#[path = "performance_summary_test.rs"]
mod performance_summary_test;

use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::skeleton::Skeleton;
use crate::net::types::Variant;
use crate::util::format::format_percent;

/// Derived numbers shown in the summary strip.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantSummary {
    pub count: usize,
    /// Id of the highest-CTR variant (first one wins ties).
    pub leader_id: String,
    pub best_ctr: f64,
    pub average_ctr: f64,
    /// Improvement of best over worst CTR, in percent. Zero when the worst is zero.
    pub lift: f64,
}

/// Summarize `variants`; `None` when there are none.
#[must_use]
pub fn summarize(variants: &[Variant]) -> Option<VariantSummary> {
    let first = variants.first()?;
    let mut leader = first;
    let mut worst = first.ctr;
    let mut total = 0.0;
    for variant in variants {
        if variant.ctr > leader.ctr {
            leader = variant;
        }
        worst = worst.min(variant.ctr);
        total += variant.ctr;
    }
    #[allow(clippy::cast_precision_loss)]
    let average_ctr = total / variants.len() as f64;
    let lift = if worst > 0.0 { (leader.ctr - worst) / worst * 100.0 } else { 0.0 };
    Some(VariantSummary {
        count: variants.len(),
        leader_id: leader.id.clone(),
        best_ctr: leader.ctr,
        average_ctr,
        lift,
    })
}

#[component]
pub fn PerformanceSummary(
    #[prop(into)] variants: Signal<Vec<Variant>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let summary = Memo::new(move |_| variants.with(|v| summarize(v)));

    view! {
        <Card class="performance-summary">
            <CardHeader>
                <CardTitle>"Performance Summary"</CardTitle>
            </CardHeader>
            <CardContent>
                {move || {
                    if loading.get() {
                        return view! { <Skeleton class="skeleton--h16"/> }.into_any();
                    }
                    match summary.get() {
                        Some(s) => {
                            view! {
                                <dl class="performance-summary__stats">
                                    <div class="performance-summary__stat">
                                        <dt>"Variants"</dt>
                                        <dd>{s.count}</dd>
                                    </div>
                                    <div class="performance-summary__stat">
                                        <dt>"Best CTR"</dt>
                                        <dd>{format_percent(s.best_ctr)}</dd>
                                    </div>
                                    <div class="performance-summary__stat">
                                        <dt>"Average CTR"</dt>
                                        <dd>{format_percent(s.average_ctr)}</dd>
                                    </div>
                                    <div class="performance-summary__stat">
                                        <dt>"Lift"</dt>
                                        <dd>{format_percent(s.lift)}</dd>
                                    </div>
                                </dl>
                            }
                                .into_any()
                        }
                        None => {
                            view! { <p class="performance-summary__empty">"No variant data yet."</p> }
                                .into_any()
                        }
                    }
                }}
            </CardContent>
        </Card>
    }
}
