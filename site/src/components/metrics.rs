use leptos::prelude::*;

use crate::catalog::MetricItem;

/// Band of headline figures. Each block is keyed by its label.
#[component]
pub fn MetricsSection(
    /// Figures, in display order
    metrics: Vec<MetricItem>,
) -> impl IntoView {
    view! {
        <section class="metrics" data-section="metrics">
            <div class="container metrics-grid">
                {metrics
                    .into_iter()
                    .map(|metric| {
                        let key = metric.label.clone();
                        view! {
                            <div class="metric reveal" data-key=key>
                                <div class="metric-value">{metric.value}</div>
                                <div class="metric-label">{metric.label}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
