use super::Participant;

#[test]
fn it_defaults_to_agent_1() {
    assert_eq!(Participant::default(), Participant::Agent1);
}

#[test]
fn it_displays_names() {
    assert_eq!(Participant::Agent1.to_string(), "Agent 1");
    assert_eq!(Participant::Agent2.to_string(), "Agent 2");
}

#[test]
fn it_maps_seed_ids() {
    assert_eq!(Participant::from_seed_id("agent_1"), Participant::Agent1);
    assert_eq!(Participant::from_seed_id("agent_2"), Participant::Agent2);
    assert_eq!(Participant::from_seed_id("customer"), Participant::Agent2);
    assert_eq!(Participant::from_seed_id(""), Participant::Agent2);
}

#[test]
fn it_parses_known_names() {
    assert_eq!(Participant::parse("Agent 1"), Some(Participant::Agent1));
    assert_eq!(Participant::parse("agent 2"), Some(Participant::Agent2));
    assert_eq!(Participant::parse("agent_2"), Some(Participant::Agent2));
    assert_eq!(Participant::parse(" 1 "), Some(Participant::Agent1));
    assert_eq!(Participant::parse("2"), Some(Participant::Agent2));
}

#[test]
fn it_rejects_unknown_names() {
    assert_eq!(Participant::parse("Agent 3"), None);
    assert_eq!(Participant::parse("3"), None);
    assert_eq!(Participant::parse(""), None);
}

#[test]
fn it_returns_other() {
    assert_eq!(Participant::Agent1.other(), Participant::Agent2);
    assert_eq!(Participant::Agent2.other(), Participant::Agent1);
}

#[test]
fn it_serializes_as_display_name() -> anyhow::Result<()> {
    let res = serde_json::to_string(&Participant::Agent2)?;
    assert_eq!(res, "\"Agent 2\"");

    let parsed: Participant = serde_json::from_str("\"Agent 1\"")?;
    assert_eq!(parsed, Participant::Agent1);

    return Ok(());
}
