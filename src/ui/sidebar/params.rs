//! Generation params list shown on the active model card

use crate::types::model::ModelGenerationParams;
use dioxus::prelude::*;

const DEFAULT_ROWS: usize = 3;

/// One editable field of [`ModelGenerationParams`]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenerationParam {
    Temperature,
    ContextLength,
    TopP,
    TopK,
    MaxTokens,
    RepeatPenalty,
    RepeatLastN,
    Seed,
    GpuCount,
}

impl GenerationParam {
    pub const ALL: [GenerationParam; 9] = [
        GenerationParam::Temperature,
        GenerationParam::ContextLength,
        GenerationParam::TopP,
        GenerationParam::TopK,
        GenerationParam::MaxTokens,
        GenerationParam::RepeatPenalty,
        GenerationParam::RepeatLastN,
        GenerationParam::Seed,
        GenerationParam::GpuCount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GenerationParam::Temperature => "Temperature",
            GenerationParam::ContextLength => "Context Length",
            GenerationParam::TopP => "Top P",
            GenerationParam::TopK => "Top K",
            GenerationParam::MaxTokens => "Max Tokens",
            GenerationParam::RepeatPenalty => "Repeat Penalty",
            GenerationParam::RepeatLastN => "Repeat Last N",
            GenerationParam::Seed => "Seed",
            GenerationParam::GpuCount => "GPU Count",
        }
    }

    /// `(step, min, max)` for the number input
    fn bounds(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            GenerationParam::Temperature => ("0.1", "0", "2"),
            GenerationParam::TopP => ("0.1", "0", "1"),
            GenerationParam::RepeatPenalty => ("0.1", "0", ""),
            GenerationParam::Seed => ("1", "0", ""),
            // -1 lets the server pick the GPU count
            GenerationParam::GpuCount => ("1", "-1", ""),
            _ => ("1", "1", ""),
        }
    }

    pub fn value(&self, params: &ModelGenerationParams) -> Option<String> {
        match self {
            GenerationParam::Temperature => Some(params.temperature.to_string()),
            GenerationParam::ContextLength => params.context_length.map(|v| v.to_string()),
            GenerationParam::TopP => params.top_p.map(|v| v.to_string()),
            GenerationParam::TopK => params.top_k.map(|v| v.to_string()),
            GenerationParam::MaxTokens => params.max_tokens.map(|v| v.to_string()),
            GenerationParam::RepeatPenalty => params.repeat_penalty.map(|v| v.to_string()),
            GenerationParam::RepeatLastN => params.repeat_last_n.map(|v| v.to_string()),
            GenerationParam::Seed => params.seed.map(|v| v.to_string()),
            GenerationParam::GpuCount => params.gpu_count.map(|v| v.to_string()),
        }
    }

    /// Apply user input. A blank optional field is cleared; unparseable input is ignored.
    pub fn apply(&self, params: &mut ModelGenerationParams, input: &str) {
        let input = input.trim();
        match self {
            GenerationParam::Temperature => {
                if let Ok(value) = input.parse() {
                    params.temperature = value;
                }
            }
            GenerationParam::ContextLength => set_optional(&mut params.context_length, input),
            GenerationParam::TopP => set_optional(&mut params.top_p, input),
            GenerationParam::TopK => set_optional(&mut params.top_k, input),
            GenerationParam::MaxTokens => set_optional(&mut params.max_tokens, input),
            GenerationParam::RepeatPenalty => set_optional(&mut params.repeat_penalty, input),
            GenerationParam::RepeatLastN => set_optional(&mut params.repeat_last_n, input),
            GenerationParam::Seed => set_optional(&mut params.seed, input),
            GenerationParam::GpuCount => set_optional(&mut params.gpu_count, input),
        }
    }
}

fn set_optional<T: std::str::FromStr>(slot: &mut Option<T>, input: &str) {
    if input.is_empty() {
        *slot = None;
    } else if let Ok(value) = input.parse() {
        *slot = Some(value);
    }
}

#[component]
pub fn GenerationParamsList(
    params: ModelGenerationParams,
    is_editing: bool,
    on_change: EventHandler<(GenerationParam, String)>,
) -> Element {
    let mut expanded = use_signal(|| false);

    let visible: Vec<GenerationParam> = GenerationParam::ALL
        .into_iter()
        .filter(|param| is_editing || param.value(&params).is_some())
        .collect();
    let hidden_count = visible.len().saturating_sub(DEFAULT_ROWS);
    let show_all = is_editing || expanded();
    let shown: Vec<GenerationParam> = if show_all {
        visible
    } else {
        visible.into_iter().take(DEFAULT_ROWS).collect()
    };
    let toggle_label = if expanded() {
        "Show less".to_string()
    } else {
        format!("Show {} more", hidden_count)
    };

    rsx! {
        div {
            class: "border border-[var(--border-subtle)] rounded-lg p-3 flex flex-col gap-2",
            div {
                class: "flex items-center justify-between",
                span {
                    class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                    "Generation Params"
                }
                if hidden_count > 0 && !is_editing {
                    button {
                        onclick: move |_| expanded.set(!expanded()),
                        class: "text-[10px] text-[var(--accent-primary)] hover:underline",
                        "{toggle_label}"
                    }
                }
            }
            for param in shown {
                ParamRow {
                    key: "{param.label()}",
                    param,
                    value: param.value(&params).unwrap_or_default(),
                    is_editing,
                    on_change,
                }
            }
        }
    }
}

#[component]
fn ParamRow(
    param: GenerationParam,
    value: String,
    is_editing: bool,
    on_change: EventHandler<(GenerationParam, String)>,
) -> Element {
    let (step, min, max) = param.bounds();
    let display = if value.is_empty() { "N/A".to_string() } else { value.clone() };

    rsx! {
        div {
            class: "flex items-center text-xs",
            label { class: "flex-1 text-[var(--text-secondary)] font-medium", "{param.label()}:" }
            if is_editing {
                input {
                    r#type: "number",
                    class: "w-20 px-2 py-1 rounded bg-[var(--bg-input)] border border-[var(--border-subtle)] text-right text-[var(--text-primary)] focus:border-[var(--accent-primary)] outline-none",
                    value: "{value}",
                    step: "{step}",
                    min: "{min}",
                    max: "{max}",
                    oninput: move |e| on_change.call((param, e.value())),
                }
            } else {
                span { class: "w-20 text-right font-mono text-[var(--text-primary)]", "{display}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_optional_fields() {
        let mut params = ModelGenerationParams {
            temperature: 0.7,
            top_k: Some(40),
            ..Default::default()
        };

        GenerationParam::TopK.apply(&mut params, "");
        assert_eq!(params.top_k, None);

        GenerationParam::GpuCount.apply(&mut params, "-1");
        assert_eq!(params.gpu_count, Some(-1));

        GenerationParam::MaxTokens.apply(&mut params, "abc");
        assert_eq!(params.max_tokens, None);
    }

    #[test]
    fn test_temperature_is_never_cleared() {
        let mut params = ModelGenerationParams {
            temperature: 0.7,
            ..Default::default()
        };
        GenerationParam::Temperature.apply(&mut params, "");
        assert_eq!(params.temperature, 0.7);

        GenerationParam::Temperature.apply(&mut params, " 1.1 ");
        assert_eq!(params.temperature, 1.1);
    }

    #[test]
    fn test_values_for_display() {
        let params = ModelGenerationParams {
            temperature: 0.5,
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(GenerationParam::Temperature.value(&params), Some("0.5".to_string()));
        assert_eq!(GenerationParam::Seed.value(&params), Some("42".to_string()));
        assert_eq!(GenerationParam::TopP.value(&params), None);
    }
}
