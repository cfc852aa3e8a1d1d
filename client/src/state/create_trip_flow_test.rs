use super::*;

#[test]
fn default_flow_has_everything_closed() {
    let flow = CreateTripFlow::default();
    assert!(!flow.guest_input_open);
    assert!(!flow.guest_modal_open);
    assert!(!flow.confirm_modal_open);
    assert!(!flow.submitting);
}

#[test]
fn guest_input_toggles() {
    let mut flow = CreateTripFlow::default();
    flow.open_guest_input();
    assert!(flow.guest_input_open);
    flow.close_guest_input();
    assert!(!flow.guest_input_open);
}

#[test]
fn modals_toggle_independently() {
    let mut flow = CreateTripFlow::default();
    flow.open_guest_modal();
    flow.open_confirm_modal();
    assert!(flow.guest_modal_open);
    assert!(flow.confirm_modal_open);

    flow.close_guest_modal();
    assert!(!flow.guest_modal_open);
    assert!(flow.confirm_modal_open);

    flow.close_confirm_modal();
    assert!(!flow.confirm_modal_open);
}

#[test]
fn begin_submit_rejects_second_submission() {
    let mut flow = CreateTripFlow::default();
    assert!(flow.begin_submit());
    assert!(!flow.begin_submit());
    flow.finish_submit();
    assert!(flow.begin_submit());
}
