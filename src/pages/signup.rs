use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::{AuthClient, SignupForm};
use crate::routes::{CHECK_IN_PATH, LOGIN_PATH};
use crate::session::Session;
use crate::storage::BrowserStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignupField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupField {
    const ALL: [SignupField; 4] = [
        SignupField::Username,
        SignupField::Email,
        SignupField::Password,
        SignupField::ConfirmPassword,
    ];

    fn id(self) -> &'static str {
        match self {
            SignupField::Username => "username",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SignupField::Username => "Username",
            SignupField::Email => "Email Address",
            SignupField::Password => "Password",
            SignupField::ConfirmPassword => "Confirm Password",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            SignupField::Username => "\u{1F464}",
            SignupField::Email => "\u{2709}",
            SignupField::Password => "\u{1F512}",
            SignupField::ConfirmPassword => "\u{2714}",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            SignupField::Password | SignupField::ConfirmPassword => "password",
            SignupField::Username | SignupField::Email => "text",
        }
    }

    fn get(self, form: &SignupForm) -> &str {
        match self {
            SignupField::Username => &form.username,
            SignupField::Email => &form.email,
            SignupField::Password => &form.password,
            SignupField::ConfirmPassword => &form.confirm_password,
        }
    }

    fn set(self, form: &mut SignupForm, value: String) {
        match self {
            SignupField::Username => form.username = value,
            SignupField::Email => form.email = value,
            SignupField::Password => form.password = value,
            SignupField::ConfirmPassword => form.confirm_password = value,
        }
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let submitted = form.get_untracked();
        // Mismatch is reported without touching the network.
        if let Err(e) = submitted.validate() {
            set_error.set(Some(e.user_message()));
            return;
        }
        set_is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match AuthClient::browser().signup(&submitted).await {
                Ok(token) => {
                    set_is_loading.set(false);
                    Session::new(BrowserStorage).record_signup(&token);
                    log::info!("Account created for {}", submitted.username);
                    navigate(CHECK_IN_PATH, Default::default());
                }
                Err(e) => {
                    log::error!("Sign-up failed: {}", e);
                    set_error.set(Some(e.user_message()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let fields = SignupField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div class="form-group">
                    <label for=field.id()>{field.label()}</label>
                    <div class="input-with-icon">
                        <span class="input-icon">{field.icon()}</span>
                        <input
                            id=field.id()
                            name=field.id()
                            type=field.input_type()
                            class="input"
                            required
                            prop:value=move || form.with(|f| field.get(f).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| field.set(f, value));
                                set_error.set(None);
                            }
                        />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page auth-page">
            <div class="card fade-in-up">
                <div class="card-header">
                    <div class="header-icon spin-slow">"\u{1FA7A}"</div>
                    <h2>"Join Our Healthcare Platform"</h2>
                    <p class="card-subtitle">"Create your professional medical account"</p>
                </div>

                <div class="card-body">
                    <form class="form" on:submit=on_submit>
                        {fields}

                        <Show when=move || error.get().is_some()>
                            <div class="form-error">
                                <span class="error-icon">"!"</span>
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <button
                            type="submit"
                            class="btn btn-primary"
                            class:btn-busy=move || is_loading.get()
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() {
                                view! { <span class="spinner"></span> }.into_any()
                            } else {
                                view! { <span>"Create Account \u{2192}"</span> }.into_any()
                            }}
                        </button>
                    </form>

                    <p class="form-footer">
                        "Already have an account? "
                        <a href=LOGIN_PATH class="link">"Sign in here"</a>
                    </p>

                    <div class="security-note">"\u{1F512} Secure, encrypted registration"</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    #[test]
    fn test_fields_write_to_their_own_slot() {
        let mut form = SignupForm::default();
        for (field, value) in SignupField::ALL.into_iter().zip(["sam", "s@x.io", "pw1", "pw2"]) {
            field.set(&mut form, value.to_string());
        }
        assert_eq!(form.username, "sam");
        assert_eq!(form.email, "s@x.io");
        assert_eq!(form.password, "pw1");
        assert_eq!(form.confirm_password, "pw2");
        assert_eq!(SignupField::ConfirmPassword.get(&form), "pw2");
    }

    #[test]
    fn test_only_password_fields_are_masked() {
        let masked: Vec<_> = SignupField::ALL
            .into_iter()
            .filter(|f| f.input_type() == "password")
            .map(SignupField::id)
            .collect();
        assert_eq!(masked, vec!["password", "confirmPassword"]);
    }

    #[test]
    fn test_mismatched_form_fails_validation() {
        let mut form = SignupForm::default();
        SignupField::Password.set(&mut form, "one".to_string());
        SignupField::ConfirmPassword.set(&mut form, "two".to_string());
        assert_eq!(form.validate(), Err(AuthError::PasswordMismatch));
    }
}
