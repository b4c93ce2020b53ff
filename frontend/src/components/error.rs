use crate::api::ApiError;
use leptos::*;

/// Error banner for a failed submission. Shows the backend's detail text when
/// it sent one, otherwise `fallback`.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(optional, into)] fallback: Option<&'static str>,
) -> impl IntoView {
    let message = move || {
        error.with(|err| {
            err.as_ref().map(|e| match fallback {
                Some(fallback) => e.message_or(fallback),
                None => e.error.clone(),
            })
        })
    };

    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
                role="alert"
            >
                <div class="font-bold">{move || message().unwrap_or_default()}</div>
                {move || error.get().and_then(|e| {
                    let code = e.code;
                    (code != "UNKNOWN" && !code.is_empty()).then(|| view! {
                        <div class="text-xs opacity-75">{"Code: "}{code}</div>
                    })
                })}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use reqwest::StatusCode;

    use crate::api::ErrorBody;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_prefers_backend_detail() {
        let html = render_to_string(move || {
            let body = ErrorBody {
                detail: Some(json!("Employee ID or Email already exists")),
            };
            let error = ApiError::from_response(StatusCode::BAD_REQUEST, Some(body));
            let signal = create_rw_signal(Some(error));
            view! {
                <InlineErrorMessage
                    error={signal.into()}
                    fallback="An error occurred while adding the employee."
                />
            }
        });
        assert!(html.contains("Employee ID or Email already exists"));
        assert!(html.contains("Code: VALIDATION_ERROR"));
    }

    #[test]
    fn inline_error_uses_fallback_without_detail() {
        let html = render_to_string(move || {
            let error = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, None);
            let signal = create_rw_signal(Some(error));
            view! {
                <InlineErrorMessage
                    error={signal.into()}
                    fallback="An error occurred while adding the employee."
                />
            }
        });
        assert!(html.contains("An error occurred while adding the employee."));
        assert!(!html.contains("Request failed with status 500"));
    }

    #[test]
    fn inline_error_shows_client_validation_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::validation("All fields are required.")));
            view! {
                <InlineErrorMessage
                    error={signal.into()}
                    fallback="An error occurred while adding the employee."
                />
            }
        });
        assert!(html.contains("All fields are required."));
        assert!(!html.contains("An error occurred while adding the employee."));
    }

    #[test]
    fn inline_error_renders_nothing_when_empty() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
