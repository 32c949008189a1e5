//! tapdeck desktop entry point

use dioxus::desktop::{Config, WindowBuilder};
use std::sync::Arc;
use tapdeck::api::ApiClient;
use tapdeck::app::{App, Backend};
use tapdeck::storage::settings::load_config;
use tracing_subscriber::EnvFilter;

const HEAD: &str = r#"
<script src="https://cdn.tailwindcss.com"></script>
<style>
  :root {
    --bg-sidebar: #14161a;
    --bg-secondary: #1b1e23;
    --bg-surface: #101215;
    --bg-subtle: #22262c;
    --bg-input: #181b20;
    --bg-hover: #262a31;
    --border-subtle: rgba(255, 255, 255, 0.08);
    --text-primary: #f2ede7;
    --text-secondary: #b7b1aa;
    --text-tertiary: #7d7872;
    --accent-primary: #2a6b7c;
    --accent-secondary: #35869b;
    --success: #4e9a6a;
    --warning: #c4993b;
    --error: #c0564b;
    --bg-error-subtle: rgba(192, 86, 75, 0.12);
    --border-error-subtle: rgba(192, 86, 75, 0.3);
    --text-error: #e08a80;
    --text-success: #7cc49a;
  }
  html, body { margin: 0; background: var(--bg-surface); font-family: system-ui, sans-serif; }
  .custom-scrollbar::-webkit-scrollbar { width: 6px; }
  .custom-scrollbar::-webkit-scrollbar-thumb { background: var(--border-subtle); border-radius: 3px; }
</style>
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tapdeck=info")),
        )
        .init();

    let config = load_config();
    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    let backend = Backend {
        base_url: client.base_url().to_string(),
        api: Arc::new(client),
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_custom_head(HEAD.to_string())
                .with_window(WindowBuilder::new().with_title("tapdeck")),
        )
        .with_context(backend)
        .launch(App);
}
