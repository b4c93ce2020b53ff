use leptos::*;

#[component]
pub fn PresentDaysCard(total: Signal<usize>) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-surface-elevated border border-border shadow">
            <p class="text-xs font-bold text-action-primary-bg uppercase tracking-widest">
                {"Total Present Days"}
            </p>
            <p class="mt-3 text-3xl font-extrabold text-fg">{move || total.get()}</p>
            <p class="mt-1 text-sm text-fg-muted">{"All-time record for this employee"}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_total_with_caption() {
        let html = render_to_string(move || {
            view! { <PresentDaysCard total=Signal::derive(|| 42) /> }
        });
        assert!(html.contains("Total Present Days"));
        assert!(html.contains("42"));
        assert!(html.contains("All-time record for this employee"));
    }
}
