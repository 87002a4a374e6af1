use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::validation::{Field, FieldErrors, SignupForm};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct SignupModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(SignupModal)]
pub fn signup_modal(props: &SignupModalProps) -> Html {
    let form = use_state(SignupForm::default);
    let errors = use_state(FieldErrors::new);
    let show_password = use_state(|| false);
    let show_confirm_password = use_state(|| false);
    let is_loading = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    // The simulated request must not outlive the modal.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_input = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            *next.field_mut(field) = input.value();
            form.set(next);
            if errors.contains_key(&field) {
                let mut remaining = (*errors).clone();
                remaining.remove(&field);
                errors.set(remaining);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_loading = is_loading.clone();
        let pending = pending.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            if let Err(found) = form.validate() {
                log::debug!("signup form has {} invalid field(s)", found.len());
                errors.set(found);
                return;
            }
            is_loading.set(true);

            let form = form.clone();
            let errors = errors.clone();
            let is_loading = is_loading.clone();
            let on_close = on_close.clone();
            let timeout = Timeout::new(config::SIGNUP_DELAY_MS, move || {
                match serde_json::to_string(&*form) {
                    Ok(account) => log::info!("Account created: {}", account),
                    Err(e) => log::error!("Failed to serialize account: {}", e),
                }
                is_loading.set(false);
                on_close.emit(());
                form.set(SignupForm::default());
                errors.set(FieldErrors::new());
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    let error_for = |field: Field| match errors.get(&field) {
        Some(err) => html! { <p class="field-error">{err.to_string()}</p> },
        None => html! {},
    };

    let toggle = |flag: &UseStateHandle<bool>| {
        let flag = flag.clone();
        Callback::from(move |_: MouseEvent| flag.set(!*flag))
    };

    let eye = |visible: bool| if visible { "fas fa-eye-slash" } else { "fas fa-eye" };
    let input_type = |visible: bool| if visible { "text" } else { "password" };

    html! {
        <div class="signup-overlay">
            <div class="signup-backdrop" onclick={close.clone()}></div>
            <div class="signup-modal">
                <div class="signup-header">
                    <h2>{"Create Account"}</h2>
                    <button class="signup-close" onclick={close}>{"×"}</button>
                </div>

                <form class="signup-form" {onsubmit}>
                    <div class="signup-field">
                        <label for="name">{"Full Name"}</label>
                        <div class="signup-input">
                            <i class="fas fa-user"></i>
                            <input id="name" type="text" placeholder="Enter your full name"
                                value={form.name.clone()} oninput={on_input(Field::Name)} />
                        </div>
                        {error_for(Field::Name)}
                    </div>

                    <div class="signup-field">
                        <label for="email">{"Email Address"}</label>
                        <div class="signup-input">
                            <i class="fas fa-envelope"></i>
                            <input id="email" type="email" placeholder="Enter your email"
                                value={form.email.clone()} oninput={on_input(Field::Email)} />
                        </div>
                        {error_for(Field::Email)}
                    </div>

                    <div class="signup-field">
                        <label for="password">{"Password"}</label>
                        <div class="signup-input">
                            <i class="fas fa-lock"></i>
                            <input id="password" type={input_type(*show_password)} placeholder="Create a password"
                                value={form.password.clone()} oninput={on_input(Field::Password)} />
                            <button type="button" class="signup-eye" onclick={toggle(&show_password)}>
                                <i class={eye(*show_password)}></i>
                            </button>
                        </div>
                        {error_for(Field::Password)}
                    </div>

                    <div class="signup-field">
                        <label for="confirmPassword">{"Confirm Password"}</label>
                        <div class="signup-input">
                            <i class="fas fa-lock"></i>
                            <input id="confirmPassword" type={input_type(*show_confirm_password)} placeholder="Confirm your password"
                                value={form.confirm_password.clone()} oninput={on_input(Field::ConfirmPassword)} />
                            <button type="button" class="signup-eye" onclick={toggle(&show_confirm_password)}>
                                <i class={eye(*show_confirm_password)}></i>
                            </button>
                        </div>
                        {error_for(Field::ConfirmPassword)}
                    </div>

                    <div class="signup-terms">
                        <i class="fas fa-circle-check"></i>
                        <p>
                            {"By creating an account, you agree to our "}
                            <button type="button" class="link-button">{"Terms of Service"}</button>
                            {" and "}
                            <button type="button" class="link-button">{"Privacy Policy"}</button>
                        </p>
                    </div>

                    <button type="submit" class="signup-submit" disabled={*is_loading}>
                        if *is_loading {
                            <span class="signup-spinner"></span>
                            <span>{"Creating Account..."}</span>
                        } else {
                            {"Create Free Account"}
                        }
                    </button>

                    <div class="signup-login">
                        <p>
                            {"Already have an account? "}
                            <button type="button" class="link-button"
                                onclick={Callback::from(|_| log::info!("Open login modal"))}>
                                {"Sign In"}
                            </button>
                        </p>
                    </div>
                </form>
            </div>
            <style>
                {r#"
                .signup-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .signup-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                }
                .signup-modal {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    background: white;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .signup-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    border-bottom: 1px solid #e2e8f0;
                }
                .signup-header h2 {
                    margin: 0;
                }
                .signup-close,
                .signup-eye {
                    border: none;
                    background: none;
                    cursor: pointer;
                    color: #64748b;
                    font-size: 1.25rem;
                }
                .signup-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                }
                .signup-field label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-weight: 500;
                }
                .signup-input {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    height: 3rem;
                    padding: 0 0.75rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    color: #64748b;
                }
                .signup-input:focus-within {
                    border-color: #6366f1;
                }
                .signup-input input {
                    flex: 1;
                    border: none;
                    outline: none;
                    font-size: 1rem;
                }
                .field-error {
                    margin: 0.375rem 0 0;
                    font-size: 0.875rem;
                    color: #dc2626;
                }
                .signup-terms {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                .signup-terms i {
                    color: #6366f1;
                    margin-top: 0.2rem;
                }
                .signup-terms p {
                    margin: 0;
                }
                .link-button {
                    border: none;
                    background: none;
                    padding: 0;
                    color: #6366f1;
                    cursor: pointer;
                    font: inherit;
                }
                .link-button:hover {
                    text-decoration: underline;
                }
                .signup-submit {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    height: 3rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #6366f1;
                    color: white;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .signup-submit:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                .signup-spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-top-color: white;
                    border-radius: 50%;
                    animation: signup-spin 1s linear infinite;
                }
                @keyframes signup-spin {
                    to { transform: rotate(360deg); }
                }
                .signup-login {
                    padding-top: 1rem;
                    border-top: 1px solid #e2e8f0;
                    text-align: center;
                    color: #64748b;
                }
                "#}
            </style>
        </div>
    }
}
