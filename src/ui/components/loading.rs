use dioxus::prelude::*;

/// Indeterminate progress indicator
#[component]
pub fn Spinner(size: u32) -> Element {
    rsx! {
        svg {
            class: "animate-spin text-[var(--accent-primary)]",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            circle {
                class: "opacity-25",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4",
            }
            path {
                class: "opacity-75",
                fill: "currentColor",
                d: "M4 12a8 8 0 0 1 8-8v4a4 4 0 0 0-4 4H4z",
            }
        }
    }
}
