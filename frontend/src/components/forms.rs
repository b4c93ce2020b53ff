use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen::JsCast;

const FIELD_LABEL_CLASS: &str = "block text-sm font-medium text-fg-muted mb-1";
const FIELD_INPUT_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg shadow-sm focus:border-action-primary-border-hover focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50";

/// Human-readable form of an ISO date input value. Anything unparseable is
/// shown as typed.
pub fn format_date_display(value: &str) -> String {
    if value.is_empty() {
        return "Select a date".to_string();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d (%a)").to_string(),
        Err(_) => value.to_string(),
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=FIELD_LABEL_CLASS>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                class=FIELD_INPUT_CLASS
                placeholder=placeholder.unwrap_or_default()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// `<select>` over a fixed option list. `options` are (value, label) pairs.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=FIELD_LABEL_CLASS>{label}</label>
            <select
                class=FIELD_INPUT_CLASS
                required=required
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.with(|current| *current == selected_value)
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn DatePicker(
    #[prop(into)] value: RwSignal<String>,
    label: Option<&'static str>,
    #[prop(optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_click = move |_| {
        if disabled.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = js_sys::Reflect::get(&input, &"showPicker".into()).map(|f| {
                if f.is_function() {
                    let _ = js_sys::Reflect::apply(
                        &f.unchecked_into::<js_sys::Function>(),
                        &input,
                        &js_sys::Array::new(),
                    );
                }
            });
            let _ = input.focus();
        }
    };

    view! {
        <div class="flex flex-col gap-1 w-full">
            {label.map(|l| view! { <label class=FIELD_LABEL_CLASS>{l}</label> })}
            <div
                class=move || format!(
                    "relative cursor-pointer rounded-md border bg-form-control-bg py-2 px-3 flex items-center justify-between shadow-sm border-form-control-border {}",
                    if disabled.get() { "opacity-50 cursor-not-allowed" } else { "hover:border-action-primary-border-hover" }
                )
                on:click=on_click
            >
                <span class=move || format!(
                    "text-sm {}",
                    if value.get().is_empty() { "text-text-muted" } else { "text-fg" }
                )>
                    {move || format_date_display(&value.get())}
                </span>
                <i class="far fa-calendar-alt text-fg-muted"></i>
                <input
                    type="date"
                    node_ref=input_ref
                    class="absolute inset-0 w-full h-full opacity-0 pointer-events-none"
                    disabled=disabled
                    prop:value={move || value.get()}
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
