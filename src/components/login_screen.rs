use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::CaptchaChallenge;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<()>,
}

/// Pantalla de login. No valida credenciales contra ningún backend: el
/// formulario solo exige campos no vacíos, aviso de privacidad aceptado y
/// el captcha aritmético resuelto.
#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let captcha_ref = use_node_ref();

    let captcha = use_state(CaptchaChallenge::generate);
    let privacy_accepted = use_state(|| false);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let captcha_ref = captcha_ref.clone();
        let captcha = captcha.clone();
        let privacy_accepted = privacy_accepted.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input), Some(captcha_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                captcha_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            if email_input.value().trim().is_empty() || password_input.value().is_empty() {
                error.set(Some("Por favor, completa todos los campos.".to_string()));
                return;
            }

            if !*privacy_accepted {
                error.set(Some(
                    "Debes aceptar el aviso de privacidad para continuar.".to_string(),
                ));
                return;
            }

            if !captcha.check(&captcha_input.value()) {
                error.set(Some(
                    "Respuesta incorrecta. Intenta con la nueva operación.".to_string(),
                ));
                // Reto nuevo en cada intento fallido
                captcha.set(CaptchaChallenge::generate());
                captcha_input.set_value("");
                return;
            }

            error.set(None);
            on_login.emit(());
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_privacy_change = {
        let privacy_accepted = privacy_accepted.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                privacy_accepted.set(input.checked());
            }
        })
    };

    // Reto nuevo a petición del usuario
    let on_refresh_captcha = {
        let captcha = captcha.clone();
        let captcha_ref = captcha_ref.clone();
        Callback::from(move |_: MouseEvent| {
            captcha.set(CaptchaChallenge::generate());
            if let Some(input) = captcha_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let on_forgot_password = {
        let email_ref = email_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = email_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let email = input.value();
            if email.trim().is_empty() {
                web_sys::window()
                    .and_then(|w| w.alert_with_message("Escribe tu correo para continuar.").ok());
                let _ = input.focus();
                return;
            }
            let subject = "Solicitud de restablecimiento - Portal InmoLeads";
            let body = format!(
                "Hola equipo ITAI,%0A%0AQuiero restablecer mi contraseña del Portal InmoLeads.%0ACorreo del usuario: {}%0A%0AGracias.",
                email
            );
            if let Some(win) = web_sys::window() {
                let mailto = format!(
                    "mailto:itai@expertizdigital.com?subject={}&body={}",
                    subject.replace(' ', "%20"),
                    body
                );
                let _ = win.location().set_href(&mailto);
            }
        })
    };

    let password_type = if *show_password { "text" } else { "password" };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🏠"}</div>
                    </div>
                    <h1>{"InmoLeads"}</h1>
                    <p>{"Portal Cliente"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email-address">{"Nombre o correo electrónico"}</label>
                        <input
                            type="email"
                            id="email-address"
                            name="email"
                            placeholder="Escribe tu nombre o correo electrónico"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <div class="password-field">
                            <input
                                type={password_type}
                                id="password"
                                name="password"
                                placeholder="Escribe tu contraseña"
                                ref={password_ref}
                                required=true
                            />
                            <button
                                type="button"
                                class="btn-toggle-password"
                                onclick={toggle_password}
                                aria-pressed={show_password.to_string()}
                            >
                                { if *show_password { "🙈" } else { "👁" } }
                            </button>
                        </div>
                    </div>

                    <div class="form-group captcha-group">
                        <label for="captcha-answer">{captcha.question()}</label>
                        <div class="captcha-row">
                            <input
                                type="text"
                                id="captcha-answer"
                                name="captcha"
                                inputmode="numeric"
                                placeholder="Tu respuesta"
                                ref={captcha_ref}
                            />
                            <button
                                type="button"
                                class="btn-refresh-captcha"
                                onclick={on_refresh_captcha}
                                title="Otra operación"
                            >
                                {"↻"}
                            </button>
                        </div>
                    </div>

                    <div class="form-group privacy-group">
                        <input
                            type="checkbox"
                            id="privacy-checkbox"
                            checked={*privacy_accepted}
                            onchange={on_privacy_change}
                        />
                        <label for="privacy-checkbox">
                            {"He leído y acepto el aviso de privacidad."}
                        </label>
                    </div>

                    {
                        if let Some(msg) = error.as_ref() {
                            html! { <p class="login-error">{msg}</p> }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="btn-login">
                        <span class="btn-text">{"Iniciar Sesión"}</span>
                    </button>

                    <div class="login-footer">
                        <button
                            type="button"
                            class="btn-forgot-password"
                            onclick={on_forgot_password}
                        >
                            {"¿Olvidaste tu contraseña?"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
