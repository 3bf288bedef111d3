use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "portal")]
#[command(version, about = "Portal account tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (any format the loader understands); defaults to `client.*`
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show debug logs on the console
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account
    Register(RegisterArgs),

    /// List the social links
    Socials(SocialsArgs),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Username; prompted when missing
    #[arg(long, value_name = "USERNAME")]
    pub username: Option<String>,

    /// Email address; prompted when missing
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Read the password from the first line of stdin and use it as confirmation too
    #[arg(long)]
    pub password_stdin: bool,
}

#[derive(Debug, Args)]
pub struct SocialsArgs {
    /// Print the links as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn register_flags_parse() {
        let cli = Cli::parse_from([
            "portal",
            "register",
            "--username",
            "ana",
            "--password-stdin",
            "--config",
            "cfg/client.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("cfg/client.toml")));
        let Command::Register(args) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(args.username.as_deref(), Some("ana"));
        assert!(args.email.is_none());
        assert!(args.password_stdin);
    }
}
