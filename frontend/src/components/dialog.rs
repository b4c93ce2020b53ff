use crate::components::common::ButtonVariant;
use leptos::ev::KeyboardEvent;
use leptos::*;

const DIALOG_BUTTON_CLASS: &str =
    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50";

fn dialog_button_class(variant: ButtonVariant) -> String {
    format!("{} {}", DIALOG_BUTTON_CLASS, variant.classes())
}

fn label_or(text: String, default: &str) -> String {
    if text.trim().is_empty() {
        default.to_string()
    } else {
        text
    }
}

/// Backdrop plus centered panel. Escape calls `on_escape`; a backdrop click
/// calls `on_backdrop` when one is given and is ignored otherwise.
#[component]
fn ModalFrame(
    on_escape: Callback<()>,
    #[prop(optional)] on_backdrop: Option<Callback<()>>,
    #[prop(optional)] alert: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-overlay-backdrop"
                aria-hidden="true"
                on:click=move |_| {
                    if let Some(on_backdrop) = on_backdrop {
                        on_backdrop.call(());
                    }
                }
            ></div>
            <div
                class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                role=if alert { "alertdialog" } else { "dialog" }
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_escape.call(());
                    }
                }
            >
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_variant = if destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_label = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let cancel_label = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));
    let confirm_disabled = Signal::derive(move || confirm_disabled.get());

    view! {
        <Show when=move || is_open.get()>
            <ModalFrame on_escape=on_cancel on_backdrop=on_cancel>
                <div class="flex items-start justify-between gap-3">
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| on_cancel.call(())
                    >
                        {"✕"}
                    </button>
                </div>
                <p class="text-sm text-fg-muted">{move || message.get()}</p>
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class=dialog_button_class(ButtonVariant::Secondary)
                        on:click=move |_| on_cancel.call(())
                    >
                        {move || cancel_label.get()}
                    </button>
                    <button
                        type="button"
                        class=dialog_button_class(confirm_variant)
                        disabled=move || confirm_disabled.get()
                        on:click=move |_| on_confirm.call(())
                    >
                        {move || confirm_label.get()}
                    </button>
                </div>
            </ModalFrame>
        </Show>
    }
}

/// Blocking notice. Stays up until dismissed with its button or Escape;
/// clicks on the backdrop are swallowed.
#[component]
pub fn AlertDialog(
    message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let title = store_value(title.unwrap_or_else(|| "Notice".to_string()));

    view! {
        <Show when=move || message.with(Option::is_some)>
            <ModalFrame on_escape=on_dismiss alert=true>
                <h2 class="text-lg font-semibold text-fg">{title.get_value()}</h2>
                <p class="text-sm text-fg-muted">{move || message.get().unwrap_or_default()}</p>
                <div class="flex justify-end">
                    <button
                        type="button"
                        class=dialog_button_class(ButtonVariant::Primary)
                        on:click=move |_| on_dismiss.call(())
                    >
                        {"OK"}
                    </button>
                </div>
            </ModalFrame>
        </Show>
    }
}
