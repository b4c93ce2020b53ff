use crate::api::ApiClient;
use leptos::*;

/// Base URL handed to view models rendered in tests. Nothing answers on it;
/// it keeps them away from runtime config resolution.
pub const SSR_API_BASE_URL: &str = "http://ssr.invalid/api";

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    provide_context(ApiClient::new_with_base_url(SSR_API_BASE_URL));
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
