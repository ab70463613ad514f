//! Tests for the host-screen advance logic around the shared step state.

use stepview_widgets::step_view::StepViewState;

/// The advance rule of the host screen: next step, wrapping past the last
/// step back to the first.
fn advance(state: &StepViewState) {
    let mut next = state.current_step() + 1;
    if next > state.step_count() {
        next = 1;
    }
    state.selected_step(next);
}

#[test]
fn advancing_four_steps_cycles_with_wraparound() {
    let state = StepViewState::new();
    state.set_steps(vec![
        "Enter phone".to_string(),
        "Verify phone".to_string(),
        "Set password".to_string(),
        "Registered".to_string(),
    ]);

    assert_eq!(state.current_step(), 1);

    let mut seen = Vec::new();
    for _ in 0..8 {
        advance(&state);
        seen.push(state.current_step());
    }

    assert_eq!(seen, vec![2, 3, 4, 1, 2, 3, 4, 1]);
}

#[test]
fn advancing_an_empty_indicator_stays_at_one() {
    let state = StepViewState::new();

    for _ in 0..3 {
        advance(&state);
        assert_eq!(state.current_step(), 1);
    }
}

#[test]
fn shared_handles_observe_the_same_model() {
    let state = StepViewState::new();
    let other = state.clone();

    state.set_steps(vec!["a".to_string(), "b".to_string()]);
    other.selected_step(2);

    assert_eq!(state.current_step(), 2);
    assert_eq!(other.step_count(), 2);
}
