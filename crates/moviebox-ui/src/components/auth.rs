//! Authentication pages: login, signup, and the password reset flows.
//!
//! # Design
//! - Validation lives in `features::auth::forms`; these components only bind
//!   inputs and render the single banner message each page shows.
//! - A successful login/signup persists the session and updates the store;
//!   the router guard takes it from there.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::{persist_remembered_email, persist_session, remembered_email};
use crate::core::logic::{friendly_login_error, friendly_signup_error};
use crate::core::session::{Session, session_from_auth};
use crate::core::store::AppStore;
use crate::features::auth::forms::{
    LoginForm, SignupForm, validate_forgot, validate_login, validate_reset, validate_signup,
};
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use std::rc::Rc;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

fn input_value(e: &InputEvent) -> String {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn input_checked(e: &InputEvent) -> bool {
    e.target_dyn_into::<HtmlInputElement>()
        .is_some_and(|input| input.checked())
}

fn store_session(dispatch: &Dispatch<AppStore>, session: Session) {
    persist_session(&session);
    dispatch.reduce_mut(|store| {
        store.session.current = Some(session);
        store.session.restored = true;
    });
}

fn auth_header(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="auth-header">
            <span class="logo">
                <span class="logo-icon">{"🎬"}</span>
                <span class="logo-text">{"MOVIEBOX"}</span>
            </span>
            <h1 class="auth-title">{title}</h1>
            <p class="auth-subtitle">{subtitle}</p>
        </div>
    }
}

fn error_banner(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <div class="auth-error">{format!("⚠️ {message}")}</div> },
        None => html! {},
    }
}

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let session = use_selector(|store: &AppStore| store.session.current.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let form = use_state(LoginForm::default);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    // Already signed in: bounce straight to home.
    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |session: &Rc<Option<Session>>| {
                if (**session).is_some()
                    && let Some(nav) = navigator
                {
                    nav.replace(&Route::Home);
                }
                || ()
            },
            session,
        );
    }

    // Prefill the remembered email once.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(email) = remembered_email() {
                    form.set(LoginForm {
                        email,
                        remember: true,
                        ..LoginForm::default()
                    });
                }
                || ()
            },
            (),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {};
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let client = api_ctx.client();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match validate_login(&form) {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let remember = form.remember;
            error.set(None);
            busy.set(true);
            let client = client.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match client.login(&request).await {
                    Ok(payload) => {
                        let session = session_from_auth(payload, Some(&request.email));
                        persist_remembered_email(&request.email, remember);
                        store_session(&dispatch, session);
                        if let Some(nav) = navigator {
                            nav.replace(&Route::Home);
                        }
                    }
                    Err(err) => error.set(Some(friendly_login_error(&format!("{err}")))),
                }
                busy.set(false);
            });
        })
    };

    let on_guest = {
        let error = error.clone();
        let busy = busy.clone();
        let client = api_ctx.client();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            error.set(None);
            busy.set(true);
            let client = client.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match client.guest_login().await {
                    Ok(payload) => {
                        let session = Session {
                            token: payload.token,
                            name: Some("Guest User".to_string()),
                            email: Some("guest@moviebox.app".to_string()),
                            guest: true,
                        };
                        store_session(&dispatch, session);
                        if let Some(nav) = navigator {
                            nav.replace(&Route::Home);
                        }
                    }
                    Err(err) => error.set(Some(format!("Guest login is currently unavailable. {err}"))),
                }
                busy.set(false);
            });
        })
    };

    let set_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(LoginForm {
                email: input_value(&e),
                ..(*form).clone()
            });
        })
    };
    let set_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(LoginForm {
                password: input_value(&e),
                ..(*form).clone()
            });
        })
    };
    let set_remember = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(LoginForm {
                remember: input_checked(&e),
                ..(*form).clone()
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                {auth_header("Welcome Back", "Sign in to access your movie collection")}
                {error_banner(&error)}
                <form class="auth-form" onsubmit={on_submit}>
                    <label class="form-group">
                        <span>{"Email Address"}</span>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={form.email.clone()}
                            oninput={set_email}
                            disabled={*busy}
                        />
                    </label>
                    <label class="form-group">
                        <span>{"Password"}</span>
                        <input
                            type="password"
                            placeholder="Enter your password"
                            value={form.password.clone()}
                            oninput={set_password}
                            disabled={*busy}
                        />
                    </label>
                    <Link<Route> to={Route::ForgotPassword} classes="forgot-password">
                        {"Forgot password?"}
                    </Link<Route>>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            checked={form.remember}
                            oninput={set_remember}
                            disabled={*busy}
                        />
                        <span>{"Remember me"}</span>
                    </label>
                    <button type="submit" class="auth-btn primary" disabled={*busy}>
                        {if *busy { "Signing In..." } else { "SIGN IN" }}
                    </button>
                    <div class="auth-divider"><span>{"or"}</span></div>
                    <button type="button" class="auth-btn secondary" onclick={on_guest} disabled={*busy}>
                        {"Continue as Guest"}
                    </button>
                </form>
                <div class="auth-footer">
                    <p>
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Signup} classes="auth-link">{"Sign up now"}</Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[function_component(SignupPage)]
pub(crate) fn signup_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let session = use_selector(|store: &AppStore| store.session.current.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let form = use_state(SignupForm::default);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |session: &Rc<Option<Session>>| {
                if (**session).is_some()
                    && let Some(nav) = navigator
                {
                    nav.replace(&Route::Home);
                }
                || ()
            },
            session,
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {};
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let client = api_ctx.client();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match validate_signup(&form) {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let client = client.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match client.register(&request).await {
                    Ok(payload) => {
                        let mut session = session_from_auth(payload, Some(&request.email));
                        if session.name.is_none() {
                            session.name = Some(request.name.clone());
                        }
                        persist_remembered_email(&request.email, true);
                        store_session(&dispatch, session);
                        if let Some(nav) = navigator {
                            nav.replace(&Route::Home);
                        }
                    }
                    Err(err) => error.set(Some(friendly_signup_error(&format!("{err}")))),
                }
                busy.set(false);
            });
        })
    };

    let field = |apply: fn(&mut SignupForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
        })
    };
    let set_terms = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(SignupForm {
                agree_terms: input_checked(&e),
                ..(*form).clone()
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                {auth_header("Join Moviebox", "Create your account to start your movie journey")}
                {error_banner(&error)}
                <form class="auth-form" onsubmit={on_submit}>
                    <label class="form-group">
                        <span>{"Full Name"}</span>
                        <input
                            type="text"
                            placeholder="Enter your full name"
                            value={form.name.clone()}
                            oninput={field(|form, value| form.name = value)}
                            disabled={*busy}
                        />
                    </label>
                    <label class="form-group">
                        <span>{"Email Address"}</span>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={form.email.clone()}
                            oninput={field(|form, value| form.email = value)}
                            disabled={*busy}
                        />
                    </label>
                    <label class="form-group">
                        <span>{"Password"}</span>
                        <input
                            type="password"
                            placeholder="Create a password (min. 6 characters)"
                            value={form.password.clone()}
                            oninput={field(|form, value| form.password = value)}
                            disabled={*busy}
                        />
                    </label>
                    <label class="form-group">
                        <span>{"Confirm Password"}</span>
                        <input
                            type="password"
                            placeholder="Confirm your password"
                            value={form.confirm_password.clone()}
                            oninput={field(|form, value| form.confirm_password = value)}
                            disabled={*busy}
                        />
                    </label>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            checked={form.agree_terms}
                            oninput={set_terms}
                            disabled={*busy}
                        />
                        <span>{"I agree to the Terms of Service and Privacy Policy"}</span>
                    </label>
                    <button type="submit" class="auth-btn primary" disabled={*busy}>
                        {if *busy { "Creating Account..." } else { "CREATE ACCOUNT" }}
                    </button>
                </form>
                <div class="auth-footer">
                    <p>
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login} classes="auth-link">{"Sign in instead"}</Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[function_component(ForgotPasswordPage)]
pub(crate) fn forgot_password_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let error = use_state(|| None as Option<String>);
    let success = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let Some(api_ctx) = api_ctx else {
        return html! {};
    };

    let on_submit = {
        let email = email.clone();
        let error = error.clone();
        let success = success.clone();
        let busy = busy.clone();
        let client = api_ctx.client();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match validate_forgot(&email) {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let client = client.clone();
            let navigator = navigator.clone();
            let email = email.clone();
            let error = error.clone();
            let success = success.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match client.forgot_password(&request).await {
                    Ok(()) => {
                        success.set(Some(format!(
                            "Password reset instructions have been sent to {}. Please check your email.",
                            request.email
                        )));
                        email.set(String::new());
                        Timeout::new(5_000, move || {
                            if let Some(nav) = navigator {
                                nav.push(&Route::Login);
                            }
                        })
                        .forget();
                    }
                    Err(err) => error.set(Some(format!("{err}"))),
                }
                busy.set(false);
            });
        })
    };

    let set_email = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            email.set(input_value(&e));
            error.set(None);
        })
    };

    let locked = *busy || success.is_some();
    html! {
        <div class="auth-page">
            <div class="auth-card">
                {auth_header("Reset Your Password", "Enter your email to receive reset instructions")}
                {error_banner(&error)}
                {if let Some(message) = &*success {
                    html! {
                        <div class="auth-success">
                            {format!("✅ {message}")}
                            <p class="redirect-text">{"You will be redirected to login in 5 seconds..."}</p>
                        </div>
                    }
                } else { html! {} }}
                <form class="auth-form" onsubmit={on_submit}>
                    <label class="form-group">
                        <span>{"Email Address"}</span>
                        <input
                            type="email"
                            placeholder="Enter your registered email"
                            value={(*email).clone()}
                            oninput={set_email}
                            disabled={locked}
                        />
                        <p class="form-help">{"We'll send you a link to reset your password"}</p>
                    </label>
                    <button type="submit" class="auth-btn primary" disabled={locked}>
                        {if *busy { "Sending Reset Link..." } else { "SEND RESET LINK" }}
                    </button>
                </form>
                <div class="auth-footer">
                    <p>
                        {"Remember your password? "}
                        <Link<Route> to={Route::Login} classes="auth-link">{"Back to Login"}</Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Query parameters carried by the emailed reset link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ResetQuery {
    token: Option<String>,
}

#[function_component(ResetPasswordPage)]
pub(crate) fn reset_password_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let location = use_location();
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None as Option<String>);
    let success = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let token = location
        .and_then(|loc| loc.query::<ResetQuery>().ok())
        .and_then(|query| query.token);

    // Surface a missing token immediately rather than on submit.
    {
        let error = error.clone();
        use_effect_with_deps(
            move |token: &Option<String>| {
                if token.is_none() {
                    error.set(Some(
                        "Invalid or expired reset link. Please request a new password reset."
                            .to_string(),
                    ));
                }
                || ()
            },
            token.clone(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {};
    };

    let on_submit = {
        let password = password.clone();
        let confirm = confirm.clone();
        let token = token.clone();
        let error = error.clone();
        let success = success.clone();
        let busy = busy.clone();
        let client = api_ctx.client();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match validate_reset(token.as_deref(), &password, &confirm) {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let client = client.clone();
            let navigator = navigator.clone();
            let password = password.clone();
            let confirm = confirm.clone();
            let error = error.clone();
            let success = success.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match client.reset_password(&request).await {
                    Ok(()) => {
                        success.set(Some("Password has been reset successfully!".to_string()));
                        password.set(String::new());
                        confirm.set(String::new());
                        Timeout::new(3_000, move || {
                            if let Some(nav) = navigator {
                                nav.push(&Route::Login);
                            }
                        })
                        .forget();
                    }
                    Err(err) => error.set(Some(format!("{err}"))),
                }
                busy.set(false);
            });
        })
    };

    let set_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };
    let set_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |e: InputEvent| confirm.set(input_value(&e)))
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                {auth_header("Set New Password", "Create a new secure password for your account")}
                {error_banner(&error)}
                {if let Some(message) = &*success {
                    html! {
                        <div class="auth-success">
                            {format!("✅ {message}")}
                            <p class="redirect-text">{"Redirecting to login..."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <form class="auth-form" onsubmit={on_submit}>
                            <label class="form-group">
                                <span>{"New Password"}</span>
                                <input
                                    type="password"
                                    placeholder="Enter new password (min. 6 characters)"
                                    value={(*password).clone()}
                                    oninput={set_password}
                                    disabled={*busy}
                                />
                            </label>
                            <label class="form-group">
                                <span>{"Confirm New Password"}</span>
                                <input
                                    type="password"
                                    placeholder="Confirm your new password"
                                    value={(*confirm).clone()}
                                    oninput={set_confirm}
                                    disabled={*busy}
                                />
                            </label>
                            <button type="submit" class="auth-btn primary" disabled={*busy || token.is_none()}>
                                {if *busy { "Resetting Password..." } else { "RESET PASSWORD" }}
                            </button>
                        </form>
                    }
                }}
                <div class="auth-footer">
                    <p>
                        {"Remember your password? "}
                        <Link<Route> to={Route::Login} classes="auth-link">{"Back to Login"}</Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
