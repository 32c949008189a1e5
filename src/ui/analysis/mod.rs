//! Analysis view: text input, run status, and tabbed results

pub mod argument_card;
pub mod statistics;

use crate::app::AppState;
use crate::format::{format_score, ScoreBand};
use crate::store::{self, AnalysisStatus};
use crate::types::analysis::{AnalysisResponse, ArgumentAnalysisResult};
use crate::types::prompt::ApplicationType;
use crate::ui::components::{MetricCard, MetricTone, Spinner};
use argument_card::ArgumentCard;
use dioxus::prelude::*;
use statistics::StatisticsDashboard;

/// Tabs of the results panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResultsTab {
    Analysis,
    Statistics,
    RawResponse,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 3] = [
        ResultsTab::Analysis,
        ResultsTab::Statistics,
        ResultsTab::RawResponse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultsTab::Analysis => "Argument Analysis",
            ResultsTab::Statistics => "Statistics & Metadata",
            ResultsTab::RawResponse => "Response Content",
        }
    }
}

#[component]
pub fn AnalysisView() -> Element {
    let app_state = use_context::<AppState>();
    let platform = app_state.platform;
    // Input text is kept across runs
    let mut text = use_signal(String::new);

    let (application, is_running, response) = {
        let state = platform.read();
        (
            state.active_application.clone(),
            state.analysis_status == AnalysisStatus::Running,
            state.last_response.clone(),
        )
    };
    let can_analyze = !is_running && !text().trim().is_empty();
    let show_ready = !is_running && response.is_none();
    let response = response.filter(|_| !is_running);

    let api = app_state.api.clone();
    let handle_analyze = move |_| {
        let api = api.clone();
        let mut platform = platform;
        let input = text();
        spawn(async move {
            if let Err(e) = store::analyze(api.as_ref(), &mut platform, &input).await {
                tracing::debug!("Analysis ended with error: {}", e);
            }
        });
    };

    if application != ApplicationType::ArgumentAnalysis {
        return rsx! {
            div {
                class: "flex-1 flex items-center justify-center p-8",
                div {
                    class: "max-w-md text-center flex flex-col gap-2",
                    h2 { class: "text-lg font-semibold text-[var(--text-primary)]", "{application.label()}" }
                    p { class: "text-sm text-[var(--text-secondary)]", "{application.description()}" }
                }
            }
        };
    }

    rsx! {
        div {
            class: "flex-1 overflow-y-auto custom-scrollbar p-6 flex flex-col gap-6",

            div {
                class: "p-5 rounded-xl bg-[var(--bg-surface)] border border-[var(--border-subtle)] flex flex-col gap-3",
                label {
                    class: "text-sm font-semibold text-[var(--text-primary)]",
                    r#for: "analysis-text",
                    "Text to Analyze"
                }
                textarea {
                    id: "analysis-text",
                    class: "w-full min-h-40 p-3 rounded-lg bg-[var(--bg-input)] border border-[var(--border-subtle)] text-sm text-[var(--text-primary)] placeholder-[var(--text-tertiary)] outline-none focus:border-[var(--accent-primary)] resize-y custom-scrollbar",
                    placeholder: "Enter the text you want to have analyzed by the selected application...",
                    value: "{text}",
                    disabled: is_running,
                    oninput: move |evt| text.set(evt.value()),
                }
                div {
                    class: "flex justify-end",
                    button {
                        onclick: handle_analyze,
                        disabled: !can_analyze,
                        class: "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium text-white bg-[var(--accent-primary)] hover:bg-[var(--accent-secondary)] transition-colors disabled:opacity-40 disabled:cursor-not-allowed",
                        if is_running {
                            Spinner { size: 14 }
                            "Analyzing..."
                        } else {
                            "Analyze Text"
                        }
                    }
                }
            }

            if is_running {
                div {
                    class: "flex items-center justify-center gap-3 p-8 rounded-xl bg-[var(--bg-surface)] border border-[var(--border-subtle)]",
                    Spinner { size: 20 }
                    span { class: "text-sm text-[var(--text-secondary)]", "Analyzing..." }
                }
            }
            if let Some(response) = response {
                AnalysisResults { response }
            }
            if show_ready {
                ReadyCard {}
            }
        }
    }
}

#[component]
fn ReadyCard() -> Element {
    rsx! {
        div {
            class: "p-6 rounded-xl bg-[var(--bg-surface)] border border-[var(--border-subtle)] flex flex-col gap-4",
            div {
                class: "flex flex-col gap-1",
                h2 { class: "text-lg font-semibold text-[var(--text-primary)]", "Ready to Analyze" }
                p {
                    class: "text-sm text-[var(--text-secondary)]",
                    "Enter some text above and click 'Analyze Text' to get started. The active model will identify arguments, assess their credibility, and provide detailed insights."
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-3",
                MetricCard { title: "Argument Detection", value: "", description: "Identifies main arguments and supporting claims", tone: MetricTone::Accent }
                MetricCard { title: "Credibility", value: "", description: "Evaluates argument strength and evidence quality", tone: MetricTone::Success }
                MetricCard { title: "Logical Analysis", value: "", description: "Maps logical structure and reasoning patterns", tone: MetricTone::Warning }
            }
        }
    }
}

#[component]
fn AnalysisResults(response: AnalysisResponse) -> Element {
    let mut tab = use_signal(|| ResultsTab::Analysis);
    let raw = response
        .raw_model_response
        .clone()
        .unwrap_or_else(|| "No response content".to_string());

    rsx! {
        div {
            class: "rounded-xl bg-[var(--bg-surface)] border border-[var(--border-subtle)] overflow-hidden",
            nav {
                class: "flex gap-6 px-5 border-b border-[var(--border-subtle)]",
                for option in ResultsTab::ALL {
                    TabButton {
                        key: "{option.label()}",
                        tab: option,
                        active: tab() == option,
                        on_select: move |selected| tab.set(selected),
                    }
                }
            }
            div {
                class: "p-5",
                {match tab() {
                    ResultsTab::Analysis => rsx! {
                        ArgumentResults {
                            result: response.result.clone(),
                            model_used: response.model_used.clone(),
                            success: response.success,
                        }
                    },
                    ResultsTab::Statistics => rsx! {
                        StatisticsDashboard {
                            statistics: response.statistics.clone(),
                            model_used: response.model_used.clone(),
                            timestamp: response.timestamp.clone(),
                        }
                    },
                    ResultsTab::RawResponse => rsx! {
                        div {
                            class: "flex flex-col gap-3",
                            h3 { class: "text-sm font-semibold text-[var(--text-primary)]", "Raw Model Response" }
                            pre {
                                class: "p-4 rounded-lg bg-[var(--bg-subtle)] text-xs font-mono text-[var(--text-secondary)] whitespace-pre-wrap break-words max-h-[32rem] overflow-y-auto custom-scrollbar",
                                "{raw}"
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn TabButton(tab: ResultsTab, active: bool, on_select: EventHandler<ResultsTab>) -> Element {
    let class = if active {
        "py-3 text-sm font-medium border-b-2 border-[var(--accent-primary)] text-[var(--accent-primary)]"
    } else {
        "py-3 text-sm font-medium border-b-2 border-transparent text-[var(--text-secondary)] hover:text-[var(--text-primary)]"
    };

    rsx! {
        button {
            onclick: move |_| on_select.call(tab),
            class: "{class}",
            "{tab.label()}"
        }
    }
}

#[component]
fn ArgumentResults(result: Option<ArgumentAnalysisResult>, model_used: String, success: bool) -> Element {
    let Some(result) = result else {
        let message = if success {
            "The response did not contain a structured analysis. Check the Response Content tab."
        } else {
            "The analysis did not succeed. Check the Response Content tab for the model output."
        };
        return rsx! {
            div {
                class: "py-8 text-center flex flex-col gap-2",
                h3 { class: "text-lg font-medium text-[var(--text-primary)]", "No Analysis Result" }
                p { class: "text-sm text-[var(--text-secondary)]", "{message}" }
            }
        };
    };

    let band = ScoreBand::from_score(result.credibility_score);
    let credibility_tone = match band {
        ScoreBand::High => MetricTone::Success,
        ScoreBand::Moderate => MetricTone::Warning,
        ScoreBand::Low => MetricTone::Error,
    };

    rsx! {
        div {
            class: "flex flex-col gap-6",
            div {
                class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold text-[var(--text-primary)]", "Argument Analysis Results" }
                span { class: "text-xs text-[var(--text-tertiary)]", "Model: {model_used}" }
            }

            div {
                class: "grid grid-cols-2 lg:grid-cols-4 gap-3",
                MetricCard { title: "Credibility", value: format_score(result.credibility_score), description: band.label().to_string(), tone: credibility_tone }
                MetricCard { title: "Arguments", value: result.argument_count.to_string(), description: "Total identified", tone: MetricTone::Accent }
                MetricCard { title: "Strong", value: result.well_supported_arguments_count.to_string(), description: "Well-supported", tone: MetricTone::Success }
                MetricCard { title: "Weak", value: result.weak_arguments_count().to_string(), description: "Weak arguments", tone: MetricTone::Warning }
            }

            div {
                class: "p-4 rounded-lg bg-[var(--bg-subtle)] flex flex-col gap-2",
                span { class: "text-sm font-medium text-[var(--text-primary)]", "Overall Assessment" }
                p { class: "text-sm text-[var(--text-secondary)] leading-relaxed", "{result.overall_assessment}" }
            }

            if result.arguments.is_empty() {
                div {
                    class: "p-8 text-center rounded-lg border border-dashed border-[var(--border-subtle)] flex flex-col gap-2",
                    h3 { class: "text-lg font-medium text-[var(--text-primary)]", "No Arguments Identified" }
                    p {
                        class: "text-sm text-[var(--text-secondary)]",
                        "The analysis did not identify any clear argumentative claims in the provided text. This could mean the text is primarily descriptive or informational rather than argumentative."
                    }
                }
            } else {
                div {
                    class: "flex flex-col gap-4",
                    h3 { class: "text-sm font-semibold text-[var(--text-primary)]", "Detailed Argument Analysis" }
                    for (index, argument) in result.arguments.iter().cloned().enumerate() {
                        ArgumentCard { key: "{index}", argument, index }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = ResultsTab::ALL.iter().map(ResultsTab::label).collect();
        assert_eq!(
            labels,
            vec!["Argument Analysis", "Statistics & Metadata", "Response Content"]
        );
    }
}
