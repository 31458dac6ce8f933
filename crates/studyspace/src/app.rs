use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("studyspace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse and watch StudySpace study sessions from the terminal")
        .long_about("StudySpace lists the study spaces offered by the backend, keeps the list refreshed while you watch it, and shows short-lived notifications the way the web client does.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Backend base URL (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("spaces")
                .about("Fetch the space list once and show the home view")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("watch")
                .about("Keep the space list refreshed and print every change")
                .arg(
                    Arg::new("ticks")
                        .long("ticks")
                        .short('n')
                        .help("Exit after this many refresh results (default: run until Ctrl-C)")
                        .value_parser(value_parser!(u64).range(1..))
                )
        )
        .subcommand(
            Command::new("notify")
                .about("Show a notification banner until it hides itself")
                .arg(
                    Arg::new("message")
                        .help("Text of the banner")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("error")
                        .long("error")
                        .help("Use error styling instead of success")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("login")
                .about("Store an authentication token")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .short('t')
                        .help("Token issued by the backend")
                        .required(true)
                )
        )
        .subcommand(Command::new("logout").about("Forget the stored authentication token"))
        .subcommand(Command::new("whoami").about("Show the user the stored token belongs to"))
        .subcommand(
            Command::new("email")
                .about("Capture the email address used to sign in")
                .arg(
                    Arg::new("address")
                        .help("Email address as typed")
                        .required(true)
                        .index(1)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "studyspace");
    }

    #[test]
    fn test_cli_spaces_json_flag() {
        let matches = build_cli()
            .try_get_matches_from(vec!["studyspace", "spaces", "--json"])
            .unwrap();
        let sub = matches.subcommand_matches("spaces").unwrap();
        assert!(sub.get_flag("json"));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "studyspace",
                "watch",
                "-v",
                "--base-url",
                "http://localhost:4000",
            ])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        assert_eq!(
            matches.get_one::<String>("base-url").map(String::as_str),
            Some("http://localhost:4000")
        );
    }

    #[test]
    fn test_cli_watch_ticks_must_be_positive() {
        let result = build_cli().try_get_matches_from(vec!["studyspace", "watch", "--ticks", "0"]);
        assert!(result.is_err());

        let matches = build_cli()
            .try_get_matches_from(vec!["studyspace", "watch", "--ticks", "3"])
            .unwrap();
        let sub = matches.subcommand_matches("watch").unwrap();
        assert_eq!(sub.get_one::<u64>("ticks"), Some(&3));
    }

    #[test]
    fn test_cli_notify_requires_message() {
        assert!(build_cli().try_get_matches_from(vec!["studyspace", "notify"]).is_err());

        let matches = build_cli()
            .try_get_matches_from(vec!["studyspace", "notify", "Saved", "--error"])
            .unwrap();
        let sub = matches.subcommand_matches("notify").unwrap();
        assert_eq!(sub.get_one::<String>("message").unwrap(), "Saved");
        assert!(sub.get_flag("error"));
    }

    #[test]
    fn test_cli_login_requires_token() {
        assert!(build_cli().try_get_matches_from(vec!["studyspace", "login"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(build_cli().try_get_matches_from(vec!["studyspace"]).is_err());
    }
}
