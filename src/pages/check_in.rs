use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::SessionContext;
use crate::checkin::{CheckIn, MoodBand};
use crate::components::custom_slider::CustomSlider;
use crate::components::navbar::Navbar;
use crate::config::{RATING_DEFAULT, RATING_MAX, RATING_MIN};

#[component]
pub fn CheckInPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let (mood, set_mood) = signal(RATING_DEFAULT);
    let (stress, set_stress) = signal(RATING_DEFAULT);
    let (feelings, set_feelings) = signal(String::new());
    let (submitted, set_submitted) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        set_is_loading.set(true);

        let record = CheckIn::new(
            i32::from(mood.get_untracked()),
            i32::from(stress.get_untracked()),
            feelings.get_untracked(),
        );
        spawn_local(async move {
            record.submit().await;
            set_is_loading.set(false);
            set_submitted.set(true);
        });
    };

    // Dropping the flag is enough: the route guard sends us back to the login.
    let on_logout = move |()| session.logout();

    view! {
        <div class="page check-in-page">
            <Navbar on_logout=on_logout />

            <div class="card card-wide fade-in-up">
                <div class="card-header">
                    <div class="header-row">
                        <div class="header-icon spin-slow">"\u{1F9E0}"</div>
                        <h2>"Daily Health Check-in"</h2>
                    </div>
                    <p class="card-subtitle">"Track your mental well-being daily"</p>
                </div>

                <div class="card-body">
                    <Show
                        when=move || submitted.get()
                        fallback=move || view! {
                            <form class="form" on:submit=on_submit>
                                <div class="form-group stagger-1">
                                    <div class="label-row">
                                        <label for="mood">"Mood Rating"</label>
                                        {move || {
                                            let band = MoodBand::from_rating(mood.get());
                                            view! { <span class=band.css_class()>{band.icon()}</span> }
                                        }}
                                    </div>
                                    <div class="slider-box">
                                        <div class="slider-row">
                                            <CustomSlider
                                                id="mood"
                                                value=mood
                                                on_change=move |v| set_mood.set(v)
                                                min=RATING_MIN
                                                max=RATING_MAX
                                            />
                                            <span class="slider-value">{move || mood.get().to_string()}</span>
                                        </div>
                                        <div class="slider-legend">
                                            <span>"Not Great"</span>
                                            <span>"Amazing"</span>
                                        </div>
                                    </div>
                                </div>

                                <div class="form-group stagger-2">
                                    <div class="label-row">
                                        <label for="stress">"Stress Level"</label>
                                        <span class="rating-fraction">
                                            {move || format!("{}/{}", stress.get(), RATING_MAX)}
                                        </span>
                                    </div>
                                    <div class="slider-box">
                                        <div class="slider-row">
                                            <CustomSlider
                                                id="stress"
                                                value=stress
                                                on_change=move |v| set_stress.set(v)
                                                min=RATING_MIN
                                                max=RATING_MAX
                                            />
                                            <span class="slider-value">{move || stress.get().to_string()}</span>
                                        </div>
                                        <div class="slider-legend">
                                            <span>"Low"</span>
                                            <span>"High"</span>
                                        </div>
                                    </div>
                                </div>

                                <div class="form-group stagger-3">
                                    <label for="feelings">"How are you feeling today?"</label>
                                    <textarea
                                        id="feelings"
                                        rows="4"
                                        class="input textarea"
                                        placeholder="Express your thoughts and feelings..."
                                        prop:value=move || feelings.get()
                                        on:input=move |ev| set_feelings.set(event_target_value(&ev))
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    class:btn-busy=move || is_loading.get()
                                    disabled=move || is_loading.get()
                                >
                                    {move || if is_loading.get() {
                                        view! { <span class="spinner"></span> }.into_any()
                                    } else {
                                        view! { <span>"\u{1F4CB} Submit Check-in"</span> }.into_any()
                                    }}
                                </button>
                            </form>
                        }
                    >
                        <div class="thank-you fade-in-up">
                            <div class="thank-you-icon pop-in">"\u{1F4CB}"</div>
                            <h3>"Thank you for checking in!"</h3>
                            <p>"Your health check-in has been recorded."</p>
                            <div class="fade-in-delayed">
                                <p class="muted">
                                    "Remember, taking care of your mental health is just as important as physical health."
                                </p>
                                <button class="link-button" on:click=move |_| set_submitted.set(false)>
                                    "Submit another check-in"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
