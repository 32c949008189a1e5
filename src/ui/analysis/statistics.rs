//! Performance statistics for a completed analysis

use crate::format::{
    format_duration, format_number, format_percentage, format_timestamp,
    format_tokens_per_second,
};
use crate::types::analysis::AnalysisStatistics;
use crate::ui::components::{MetricCard, MetricTone};
use dioxus::prelude::*;

/// One segment of the response timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePhase {
    pub name: &'static str,
    pub duration: i64,
    /// Share of the total duration, in percent
    pub share: f64,
    pub color: &'static str,
}

/// Split the total duration into its phases, skipping empty ones
pub fn timeline_phases(stats: &AnalysisStatistics) -> Vec<TimelinePhase> {
    let total = stats.total_duration;
    let phases = [
        ("Model Loading", stats.load_duration, "var(--warning)"),
        ("Prompt Processing", stats.prompt_eval_duration, "var(--accent-secondary)"),
        ("Response Generation", stats.eval_duration, "var(--accent-primary)"),
        ("Overhead", stats.overhead_time, "var(--text-tertiary)"),
    ];

    phases
        .into_iter()
        .filter(|(_, duration, _)| *duration > 0)
        .map(|(name, duration, color)| TimelinePhase {
            name,
            duration,
            share: if total > 0 {
                duration as f64 / total as f64 * 100.0
            } else {
                0.0
            },
            color,
        })
        .collect()
}

#[component]
pub fn StatisticsDashboard(
    statistics: Option<AnalysisStatistics>,
    model_used: String,
    timestamp: String,
) -> Element {
    let Some(stats) = statistics else {
        return rsx! {
            div {
                class: "flex flex-col items-center justify-center py-12 text-center gap-2",
                h3 { class: "text-lg font-medium text-[var(--text-primary)]", "No Statistics Available" }
                p { class: "text-sm text-[var(--text-secondary)]", "This response did not include performance statistics." }
            }
        };
    };

    let total_duration = format_duration(stats.total_duration);
    let total_tokens = format_number(stats.total_tokens());
    let analysed_at = format_timestamp(Some(timestamp.as_str()));
    let phases = timeline_phases(&stats);
    let ttft = format!("{:.3}s", stats.time_to_first_token);
    let has_context = stats.context_length > 0
        || stats.context_window_prompt_fill_rate > 0.0
        || stats.context_window_response_fill_rate > 0.0;

    rsx! {
        div {
            class: "flex flex-col gap-6",

            div {
                class: "grid grid-cols-2 lg:grid-cols-4 gap-3",
                MetricCard { title: "Total Duration", value: total_duration.clone(), description: "End-to-End", tone: MetricTone::Accent }
                MetricCard { title: "Token Count", value: total_tokens, description: "Prompt + Response", tone: MetricTone::Neutral }
                MetricCard { title: "Model Used", value: model_used, description: "Analysis model", tone: MetricTone::Neutral }
                MetricCard { title: "Analysis Time", value: analysed_at, description: "Request timestamp", tone: MetricTone::Neutral }
            }

            div {
                class: "flex flex-col gap-3",
                div {
                    class: "flex items-center justify-between",
                    h3 { class: "text-sm font-semibold text-[var(--text-primary)]", "Response Generation Timeline" }
                    span { class: "text-xs font-mono text-[var(--text-tertiary)]", "{total_duration}" }
                }
                div {
                    class: "flex h-3 w-full rounded-full overflow-hidden bg-[var(--bg-subtle)]",
                    for phase in phases.iter() {
                        div {
                            key: "{phase.name}",
                            title: "{phase.name}: {format_duration(phase.duration)}",
                            style: "width: {phase.share}%; background: {phase.color};",
                        }
                    }
                }
                div {
                    class: "grid grid-cols-2 lg:grid-cols-4 gap-3",
                    for phase in phases.iter() {
                        div {
                            key: "{phase.name}",
                            class: "flex flex-col gap-0.5",
                            div {
                                class: "flex items-center gap-2",
                                span { class: "w-2 h-2 rounded-full", style: "background: {phase.color};" }
                                span { class: "text-xs font-medium text-[var(--text-secondary)]", "{phase.name}" }
                            }
                            span { class: "text-sm text-[var(--text-primary)]", "{format_duration(phase.duration)}" }
                            span { class: "text-[10px] text-[var(--text-tertiary)]", "{phase.share:.1}%" }
                        }
                    }
                }
            }

            div {
                class: "flex flex-col gap-3",
                h3 { class: "text-sm font-semibold text-[var(--text-primary)]", "Token Throughput" }
                div {
                    class: "grid grid-cols-2 lg:grid-cols-4 gap-3",
                    MetricCard { title: "TTFT", value: ttft, description: "Time to first token", tone: MetricTone::Accent }
                    MetricCard { title: "Prompt Speed", value: format_tokens_per_second(stats.prompt_tokens_per_second), description: "Input processing", tone: MetricTone::Neutral }
                    MetricCard { title: "Generation", value: format_tokens_per_second(stats.tokens_per_second), description: "Response generation", tone: MetricTone::Neutral }
                    MetricCard { title: "Overall", value: format_tokens_per_second(stats.total_throughput_tokens_per_sec), description: "Total throughput", tone: MetricTone::Success }
                }
            }

            if has_context {
                div {
                    class: "flex flex-col gap-3",
                    h3 { class: "text-sm font-semibold text-[var(--text-primary)]", "Context Window Usage" }
                    div {
                        class: "grid grid-cols-2 gap-3",
                        MetricCard {
                            title: "Prompt Fill Rate",
                            value: format_percentage(stats.context_window_prompt_fill_rate),
                            description: "% of consumed context used by prompt",
                            tone: MetricTone::Neutral,
                        }
                        MetricCard {
                            title: "Response Fill Rate",
                            value: format_percentage(stats.context_window_response_fill_rate),
                            description: "% of consumed context used by response",
                            tone: MetricTone::Neutral,
                        }
                    }
                }
            }
        }
    }
}
