use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::{AuthClient, LoginRequest};
use crate::app::SessionContext;
use crate::routes::{CHECK_IN_PATH, SIGNUP_PATH};

/// Email icon once the identifier looks like an address, user icon otherwise.
fn identifier_icon(identifier: &str) -> &'static str {
    if identifier.contains('@') {
        "\u{2709}"
    } else {
        "\u{1F464}"
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let (identifier, set_identifier) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        set_is_loading.set(true);
        set_error_message.set(None);

        let request = LoginRequest {
            identifier: identifier.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match AuthClient::browser().login(&request).await {
                Ok(token) => {
                    set_is_loading.set(false);
                    session.login(&token);
                    navigate(CHECK_IN_PATH, Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error_message.set(Some(e.user_message()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card fade-in-up">
                <div class="card-header">
                    <div class="header-icon spin-slow">"\u{1FA7A}"</div>
                    <h2>"Healthcare Portal"</h2>
                    <p class="card-subtitle">"Secure access for professionals"</p>
                </div>

                <div class="card-body">
                    <Show when=move || error_message.get().is_some()>
                        <div class="form-error fade-in">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form class="form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="identifier">"Username or Email"</label>
                            <div class="input-with-icon">
                                <span class="input-icon">
                                    {move || identifier_icon(&identifier.get())}
                                </span>
                                <input
                                    id="identifier"
                                    type="text"
                                    class="input"
                                    required
                                    prop:value=move || identifier.get()
                                    on:input=move |ev| set_identifier.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <div class="input-with-icon">
                                <span class="input-icon">"\u{1F512}"</span>
                                <input
                                    id="password"
                                    type="password"
                                    class="input"
                                    required
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                            </div>
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
                                view! { <span>"Sign In \u{2192}"</span> }.into_any()
                            }}
                        </button>
                    </form>

                    <p class="form-footer">
                        "Don't have an account? "
                        <a href=SIGNUP_PATH class="link">"Register here"</a>
                    </p>

                    <div class="security-note fade-in-delayed">
                        "\u{1F512} Secure, encrypted login"
                    </div>
                </div>
            </div>
        </div>
    }
}
