use crate::cli::RegisterArgs;
use crate::output;
use anyhow::Context;
use console::Term;
use dialoguer::{Input, Password};
use portal::domain::config::ClientConfig;
use portal::domain::route::Route;
use portal::features::auth::{Field, RegistrationForm, RegistrationSession, SubmitOutcome};
use portal::kernel::http::ApiClient;
use portal::kernel::navigation::Navigator;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::{debug, warn};

/// Reports route changes on the terminal; there is no login view to switch to.
#[derive(Debug, Clone)]
pub struct ConsoleNavigator {
    term: Term,
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        let message = format!("Continuă cu autentificarea ({}).", route.path());
        if let Err(err) = output::info(&self.term, &message) {
            warn!(error = %err, %route, "Failed to report navigation");
        }
    }
}

pub async fn run(cfg: &ClientConfig, args: RegisterArgs) -> anyhow::Result<ExitCode> {
    let term = Term::stdout();
    let api = ApiClient::builder()
        .config(&cfg.api)
        .build()
        .context("Critical: API settings are malformed")?;
    let session = RegistrationSession::new(
        api,
        ConsoleNavigator { term: term.clone() },
        cfg.form.match_debounce(),
    );

    let username = match args.username {
        Some(username) => username,
        None => Input::<String>::new().with_prompt("Nume de utilizator").interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Adresa de email").interact_text()?,
    };
    session.set_field(Field::Username, username);
    session.set_field(Field::Email, email);

    if args.password_stdin {
        let password = read_stdin_line().context("Failed to read password from stdin")?;
        session.set_field(Field::Password, password.clone());
        session.set_field(Field::ConfirmPassword, password);
    } else {
        session.focus_password();
        session.set_field(Field::Password, Password::new().with_prompt("Parolă").interact()?);
        output::write_lines(&term, &output::checklist_lines(&session.snapshot().requirements))?;
        session.set_field(
            Field::ConfirmPassword,
            Password::new().with_prompt("Confirmă Parola").interact()?,
        );
    }

    if let Some(hint) = mismatch_hint(&session.snapshot().form) {
        output::error(&term, hint)?;
    }

    output::info(&term, "Înregistrare...")?;
    let outcome = session.submit().await;
    debug!(?outcome, "Registration finished");

    if outcome == SubmitOutcome::Registered {
        output::success(&term, "Cont creat.")?;
        return Ok(ExitCode::SUCCESS);
    }

    output::write_lines(&term, &output::error_lines(&session.snapshot().errors))?;
    Ok(ExitCode::FAILURE)
}

/// Both passwords are known once the prompts return, so the hint needs no settle time.
fn mismatch_hint(form: &RegistrationForm) -> Option<&'static str> {
    (!form.passwords_match() && !form.confirm_password.is_empty())
        .then_some("Parolele nu se potrivesc")
}

fn read_stdin_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
