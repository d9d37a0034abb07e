/// Seed document in the same shape the recommendation team exports.
pub fn seed_fixture() -> &'static str {
    return r#"
[
  { "agent": "agent_1", "message": "Hi, I ordered a lamp last week and it still hasn't shipped." },
  { "agent": "agent_2", "message": "Sorry about that! Could you share the order number?" },
  { "agent": "agent_1", "message": "Sure, it's 48213." }
]
"#
    .trim();
}

pub fn long_message_fixture() -> &'static str {
    return "This is a really long line that pushes the boundaries of 50 characters across the screen, resulting in a bubble where the line is wrapped to the next line. Cool right?";
}
