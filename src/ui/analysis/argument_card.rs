use crate::format::{format_score, ScoreBand};
use crate::types::analysis::{Argument, LogicalFrameworkStep};
use dioxus::prelude::*;

/// One identified argument with its evidence and structure
#[component]
pub fn ArgumentCard(argument: Argument, index: usize) -> Element {
    let band = ScoreBand::from_score(argument.confidence_score);
    let color = band.color_var();
    let band_label = band.label();
    let confidence = format_score(argument.confidence_score);
    let number = index + 1;

    rsx! {
        div {
            class: "p-5 rounded-xl bg-white/[0.03] border border-[var(--border-subtle)] flex flex-col gap-4",
            style: "border-left: 3px solid {color};",

            div {
                class: "flex items-start justify-between gap-4",
                div {
                    class: "flex flex-col gap-1 min-w-0",
                    span {
                        class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                        "Argument {number}"
                    }
                    p { class: "text-sm font-medium text-[var(--text-primary)]", "{argument.argument}" }
                }
                div {
                    class: "flex flex-col items-end gap-1 flex-shrink-0",
                    span {
                        class: "px-2 py-0.5 rounded-full text-[10px] font-semibold",
                        style: "color: {color}; border: 1px solid {color};",
                        "{band_label} Confidence"
                    }
                    span { class: "text-xs font-mono text-[var(--text-secondary)]", "{confidence} confidence" }
                }
            }

            if !argument.supporting_claims.is_empty() {
                ClaimList { title: "Supporting Claims", items: argument.supporting_claims.clone() }
            }
            if !argument.qualifiers.is_empty() {
                ClaimList { title: "Qualifiers", items: argument.qualifiers.clone() }
            }
            if !argument.logical_framework.is_empty() {
                LogicalFramework { steps: argument.logical_framework.clone() }
            }

            if !argument.model_assessment.is_empty() {
                div {
                    class: "p-3 rounded-lg bg-[var(--bg-subtle)] border border-[var(--border-subtle)]",
                    span {
                        class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                        "AI Assessment"
                    }
                    p { class: "mt-1 text-xs text-[var(--text-secondary)] whitespace-pre-wrap", "{argument.model_assessment}" }
                }
            }
        }
    }
}

#[component]
fn ClaimList(title: &'static str, items: Vec<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-1",
            span {
                class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                "{title}"
            }
            ul {
                class: "list-disc pl-5 flex flex-col gap-1",
                for (i, item) in items.iter().enumerate() {
                    li { key: "{i}", class: "text-xs text-[var(--text-secondary)]", "{item}" }
                }
            }
        }
    }
}

#[component]
fn LogicalFramework(steps: Vec<LogicalFrameworkStep>) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-1",
            span {
                class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                "Logical Framework"
            }
            div {
                class: "flex flex-col gap-1 p-3 rounded-lg bg-[var(--bg-subtle)] font-mono",
                for (i, step) in steps.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "flex gap-3 text-xs",
                        span { class: "w-6 flex-shrink-0 text-right text-[var(--accent-primary)]", "{step.step_number}" }
                        span { class: "text-[var(--text-primary)]", "{step.statement}" }
                    }
                }
            }
        }
    }
}
