use super::*;

#[test]
fn no_argument_is_none() {
    let cli = Cli::try_parse_from(["redpersona"]).expect("expected valid cli args");
    assert!(cli.user.is_none());
}

#[test]
fn parses_bare_username() {
    let cli = Cli::try_parse_from(["redpersona", "alice"]).expect("expected valid cli args");
    assert_eq!(cli.user.as_deref(), Some("alice"));
}

#[test]
fn parses_profile_url() {
    let cli = Cli::try_parse_from(["redpersona", "https://reddit.com/user/alice/"])
        .expect("expected valid cli args");
    assert_eq!(cli.user.as_deref(), Some("https://reddit.com/user/alice/"));
}

#[test]
fn rejects_extra_positional_arguments() {
    assert!(Cli::try_parse_from(["redpersona", "alice", "bob"]).is_err());
}

#[test]
fn rejects_unknown_flags() {
    assert!(Cli::try_parse_from(["redpersona", "--limit", "5", "alice"]).is_err());
}
