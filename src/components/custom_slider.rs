use leptos::prelude::*;

use crate::checkin::parse_rating;

#[component]
pub fn CustomSlider(
    /// Element id, so a `<label for=..>` can point at it
    #[prop(into)]
    id: String,
    #[prop(into)]
    value: Signal<u8>,
    /// Called with the new value, already clamped to `min..=max`
    #[prop(into)]
    on_change: Callback<u8>,
    min: u8,
    max: u8,
) -> impl IntoView {
    view! {
        <input
            id=id
            type="range"
            class="slider"
            min=min.to_string()
            max=max.to_string()
            prop:value=move || value.get().to_string()
            on:input=move |ev| {
                let parsed = parse_rating(&event_target_value(&ev)).clamp(min, max);
                on_change.run(parsed);
            }
        />
    }
}
