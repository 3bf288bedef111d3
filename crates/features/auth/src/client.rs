use crate::domain::{ErrorKey, Field, MaskedField};
use crate::session::{RegistrationSession, RegistrationState};
use dioxus::prelude::*;
use portal_domain::config::FormConfig;
use portal_domain::route::Route;
use portal_kernel::http::ApiClient;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md focus:outline-green-500";
const ERROR_CLASS: &str = "text-sm text-red-600";
const TOGGLE_CLASS: &str = "absolute inset-y-0 right-0 pr-3 flex items-center text-sm leading-5";

/// Pushes routes onto the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator(pub Navigator);

impl fmt::Debug for RouterNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterNavigator").finish_non_exhaustive()
    }
}

impl portal_kernel::navigation::Navigator for RouterNavigator {
    fn navigate(&self, route: Route) {
        if let Some(failure) = self.0.push(route.path()) {
            warn!(?failure, %route, "Navigation failed");
        }
    }
}

type Session = Rc<RegistrationSession<ApiClient, RouterNavigator>>;

/// Registration page body.
///
/// Expects an [`ApiClient`] and a [`FormConfig`] in context and a router above it.
#[component]
pub fn RegisterForm() -> Element {
    let api = use_context::<ApiClient>();
    let form_config = use_context::<FormConfig>();
    let router = use_navigator();

    let session: Session = use_hook(|| {
        Rc::new(RegistrationSession::new(
            api,
            RouterNavigator(router),
            form_config.match_debounce(),
        ))
    });

    let mut state = use_signal(|| session.snapshot());
    use_future({
        let session = Rc::clone(&session);
        move || {
            let mut updates = session.subscribe();
            async move {
                while updates.changed().await.is_ok() {
                    let latest = updates.borrow_and_update().clone();
                    state.set(latest);
                }
            }
        }
    });

    let input = |field: Field| {
        let session = Rc::clone(&session);
        move |evt: FormEvent| session.set_field(field, evt.value())
    };
    let toggle = |field: MaskedField| {
        let session = Rc::clone(&session);
        move |_: MouseEvent| session.toggle_visibility(field)
    };
    let on_focus = {
        let session = Rc::clone(&session);
        move |_: FocusEvent| session.focus_password()
    };
    let on_submit = {
        let session = Rc::clone(&session);
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = Rc::clone(&session);
            spawn(async move {
                let outcome = session.submit().await;
                debug!(?outcome, "Registration form submitted");
            });
        }
    };

    let current: RegistrationState = state();
    let checklist_class = if current.password_focused {
        "opacity-100 translate-y-0"
    } else {
        "max-w-0 max-h-0 opacity-0 translate-y-4"
    };
    let submit_class = if current.loading { "opacity-50 cursor-not-allowed" } else { "" };

    rsx! {
        div { class: "mb-8 text-center",
            h1 { class: "text-gray-950 my-3 text-4xl font-bold", "Înregistrare" }
            p { class: "text-gray-600 text-sm", "Creează un cont pentru a accesa funcționalitățile" }
        }
        form { class: "space-y-10", onsubmit: on_submit,
            div { class: "space-y-2",
                div { class: "space-y-2",
                    label { r#for: "username", class: "text-gray-600 block text-sm", "Nume de utilizator" }
                    input {
                        r#type: "text",
                        name: "username",
                        id: "username",
                        placeholder: "user",
                        class: INPUT_CLASS,
                        aria_required: "true",
                        oninput: input(Field::Username),
                    }
                    if let Some(message) = current.errors.first(ErrorKey::Username) {
                        p { class: ERROR_CLASS, "{message}" }
                    }
                }
                div { class: "space-y-2",
                    label { r#for: "email", class: "text-gray-600 block text-sm", "Adresa de email" }
                    input {
                        r#type: "email",
                        name: "email",
                        id: "email",
                        placeholder: "example@domain.com",
                        class: INPUT_CLASS,
                        aria_required: "true",
                        oninput: input(Field::Email),
                    }
                    if let Some(message) = current.errors.first(ErrorKey::Email) {
                        p { class: ERROR_CLASS, "{message}" }
                    }
                }
                div { class: "space-y-2",
                    div { class: "text-gray-600 flex justify-between mb-2",
                        label { r#for: "password", class: "text-sm", "Parolă" }
                    }
                    div { class: "relative",
                        input {
                            r#type: input_type(current.show_password),
                            name: "password",
                            id: "password",
                            placeholder: "*****",
                            class: INPUT_CLASS,
                            aria_required: "true",
                            oninput: input(Field::Password),
                            onfocus: on_focus,
                        }
                        button {
                            r#type: "button",
                            class: TOGGLE_CLASS,
                            aria_label: "Afișează parola",
                            onclick: toggle(MaskedField::Password),
                            EyeIcon { open: current.show_password }
                        }
                    }
                    if let Some(message) = current.errors.first(ErrorKey::Password) {
                        p { class: ERROR_CLASS, "{message}" }
                    }
                    div { class: "{checklist_class} text-sm transition-opacity transform transition-transform duration-300",
                        ul { class: "space-y-1",
                            for (requirement, met) in current.requirements.checklist() {
                                li {
                                    key: "{requirement}",
                                    class: status_class(met),
                                    {status_mark(met)}
                                    " "
                                    {requirement.label()}
                                }
                            }
                        }
                    }
                }
                div { class: "space-y-2",
                    label { r#for: "confirmPassword", class: "text-gray-600 block text-sm", "Confirmă Parola" }
                    div { class: "relative",
                        input {
                            r#type: input_type(current.show_confirm_password),
                            name: "confirmPassword",
                            id: "confirmPassword",
                            placeholder: "*****",
                            class: INPUT_CLASS,
                            aria_required: "true",
                            oninput: input(Field::ConfirmPassword),
                        }
                        button {
                            r#type: "button",
                            class: TOGGLE_CLASS,
                            aria_label: "Afișează confirmarea parolei",
                            onclick: toggle(MaskedField::ConfirmPassword),
                            EyeIcon { open: current.show_confirm_password }
                        }
                    }
                    if current.shows_mismatch() {
                        p { class: ERROR_CLASS, "Parolele nu se potrivesc" }
                    }
                }
            }
            div { class: "space-y-2",
                div { class: "space-y-2",
                    button {
                        r#type: "submit",
                        class: "text-white w-full px-8 py-3 font-semibold rounded-md bg-green-500 hover:bg-green-400 duration-300 {submit_class}",
                        disabled: current.loading,
                        if current.loading { "Înregistrare..." } else { "Înregistrează-te" }
                    }
                    if let Some(message) = current.errors.first(ErrorKey::General) {
                        p { class: "{ERROR_CLASS} text-center", "{message}" }
                    }
                }
                p { class: "text-gray-600 px-6 text-sm text-center",
                    "Ai deja un cont? "
                    Link { to: Route::Login.path(), class: "text-gray-950 hover:underline", "Autentificare" }
                    "."
                }
            }
        }
    }
}

/// Eye glyph for the visibility toggles; crossed out while the text is shown.
#[component]
fn EyeIcon(open: bool) -> Element {
    rsx! {
        svg {
            class: "h-5 w-5 text-gray-500",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M12 9a3 3 0 0 0-3 3a3 3 0 0 0 3 3a3 3 0 0 0 3-3a3 3 0 0 0-3-3m0 8a5 5 0 0 1-5-5a5 5 0 0 1 5-5a5 5 0 0 1 5 5a5 5 0 0 1-5 5m0-12.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5" }
            if open {
                path { d: "M2 4.27L3.28 3L21 20.72L19.73 22z" }
            }
        }
    }
}

const fn input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

const fn status_class(met: bool) -> &'static str {
    if met {
        "text-green-600 transition-colors duration-300"
    } else {
        "text-red-600 transition-colors duration-300"
    }
}

const fn status_mark(met: bool) -> &'static str {
    if met { "✔" } else { "✖" }
}
