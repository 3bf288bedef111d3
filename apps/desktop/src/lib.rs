use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use portal::domain::config::{ClientConfig, FormConfig};
use portal::features::auth::RegisterForm;
use portal::features::social::Socials;
use portal::kernel::http::{ApiClient, HttpError};

/// Views of the desktop shell. Paths mirror [`portal::domain::route::Route`].
#[derive(Debug, Clone, PartialEq, Eq, Routable)]
#[rustfmt::skip]
pub enum AppRoute {
    #[layout(Frame)]
        #[route("/")]
        Register {},
        #[route("/login")]
        Login {},
}

const WINDOW_TITLE: &str = "Portal";
const WINDOW_SIZE: dioxus::desktop::LogicalSize<f64> =
    dioxus::desktop::LogicalSize { width: 520.0, height: 860.0 };

#[derive(Debug)]
pub struct DesktopApp {
    api: ApiClient,
    form: FormConfig,
}

impl DesktopApp {
    /// # Errors
    /// Returns [`HttpError::InvalidBaseUrl`] when `config.api.base_url` is unusable.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Ok(Self { api: ApiClient::builder().config(&config.api).build()?, form: config.form })
    }

    #[must_use]
    pub const fn form(&self) -> FormConfig {
        self.form
    }

    /// The entry point for launching the app
    pub fn launch(self) {
        let window = WindowBuilder::new().with_title(WINDOW_TITLE).with_inner_size(WINDOW_SIZE);

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        tracing::info!(base_url = self.api.base_url(), "Launching desktop shell");

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context(self.api)
            .with_context(self.form)
            .launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! { Router::<AppRoute> {} }
}

#[component]
fn Frame() -> Element {
    rsx! {
        main { class: "min-h-screen flex flex-col items-center justify-center bg-gray-50 px-6",
            div { class: "w-full max-w-md bg-white rounded-xl shadow p-8", Outlet::<AppRoute> {} }
            footer { class: "mt-8",
                Socials { class: "flex gap-4 justify-center", color: "#6b7280" }
            }
        }
    }
}

#[component]
fn Register() -> Element {
    rsx! { RegisterForm {} }
}

#[component]
fn Login() -> Element {
    rsx! {
        div { class: "text-center space-y-4",
            h1 { class: "text-gray-950 text-4xl font-bold", "Autentificare" }
            p { class: "text-gray-600 text-sm", "Contul a fost creat. Te poți autentifica." }
            Link { to: AppRoute::Register {}, class: "text-gray-950 hover:underline", "Înapoi la înregistrare" }
        }
    }
}
