use dioxus::prelude::*;

/// Accent used for a metric's value
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MetricTone {
    Accent,
    Success,
    Warning,
    Error,
    Neutral,
}

impl MetricTone {
    fn color(&self) -> &'static str {
        match self {
            MetricTone::Accent => "var(--accent-primary)",
            MetricTone::Success => "var(--success)",
            MetricTone::Warning => "var(--warning)",
            MetricTone::Error => "var(--error)",
            MetricTone::Neutral => "var(--text-primary)",
        }
    }
}

/// Small labelled value tile used across the results views
#[component]
pub fn MetricCard(title: String, value: String, description: String, tone: MetricTone) -> Element {
    let color = tone.color();

    rsx! {
        div {
            class: "p-4 rounded-xl bg-white/[0.03] border border-[var(--border-subtle)] flex flex-col gap-1",
            span {
                class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                "{title}"
            }
            if !value.is_empty() {
                span {
                    class: "text-xl font-semibold truncate",
                    style: "color: {color};",
                    "{value}"
                }
            }
            span { class: "text-xs text-[var(--text-secondary)]", "{description}" }
        }
    }
}
