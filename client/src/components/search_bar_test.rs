use super::*;

#[test]
fn quick_actions_carry_canned_prompts() {
    assert_eq!(
        QUICK_ACTIONS,
        [
            ("Find Better Alternatives", "Find better alternatives to my current pick"),
            ("Quick Compare", "Compare top 3 options side by side"),
            ("Daily Essentials", "Show daily essentials for home office"),
        ]
    );
}

#[test]
fn quick_action_prompts_are_sendable() {
    let mut state = AssistState::default();
    for (_, prompt) in QUICK_ACTIONS {
        state.set_input(prompt);
        let request = state.begin_send().unwrap();
        assert_eq!(request.message, prompt);
    }
}
