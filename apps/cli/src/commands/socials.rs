use crate::cli::SocialsArgs;
use crate::output;
use console::{Term, style};
use portal::features::social::links;
use std::process::ExitCode;

pub fn run(args: &SocialsArgs) -> anyhow::Result<ExitCode> {
    let term = Term::stdout();

    if args.json {
        term.write_line(&serde_json::to_string_pretty(links())?)?;
        return Ok(ExitCode::SUCCESS);
    }

    output::info(&term, "Urmărește-ne:")?;
    for link in links() {
        term.write_line(&format!(
            "  {:<10} {}  {}",
            style(link.aria_label).bold(),
            link.href,
            style(link.icon).dim()
        ))?;
    }
    Ok(ExitCode::SUCCESS)
}
