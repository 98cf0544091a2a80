use pretty_assertions::assert_eq;

use super::*;
use crate::sink::buffer_sink;
use crate::test_support::GLOBAL_STATE;

#[test]
fn inactive_context_falls_back_to_canonical() {
    let _guard = GLOBAL_STATE.lock();
    deactivate();
    assert_eq!(
        active_repr(&Value::bytes(b"x".to_vec())),
        Ok("b'x'".to_string())
    );
    assert_eq!(active_repr(&Value::string("x")), Ok("'x'".to_string()));
}

#[test]
fn activate_default_installs_byte_prefix_behavior() {
    let _guard = GLOBAL_STATE.lock();
    activate_default();
    assert_eq!(
        active_repr(&Value::bytes(b"0123456789".to_vec())),
        Ok("b'0123456789'".to_string())
    );
    assert_eq!(
        active_repr(&Value::string("0123456789")),
        Ok("'0123456789'".to_string())
    );
    deactivate();
}

#[test]
fn char_prefix_activation_strips_bytes_and_marks_text() {
    let _guard = GLOBAL_STATE.lock();
    activate(PrefixPolicy::CharPrefix);
    assert_eq!(
        active_repr(&Value::bytes(b"x".to_vec())),
        Ok("'x'".to_string())
    );
    assert_eq!(active_repr(&Value::string("x")), Ok("u'x'".to_string()));
    deactivate();
}

#[test]
fn last_activation_wins() {
    let _guard = GLOBAL_STATE.lock();
    activate(PrefixPolicy::DualPrefix);
    activate(PrefixPolicy::CharPrefix);
    assert_eq!(
        active_repr(&Value::bytes(b"x".to_vec())),
        Ok("'x'".to_string())
    );
    deactivate();
}

#[test]
fn echo_active_routes_through_the_installed_hook() {
    let _guard = GLOBAL_STATE.lock();
    let sink = buffer_sink();
    let renderer = Renderer::dual_prefix();
    activate_with(renderer, DisplayHook::with_sink(renderer, sink.clone()));
    assert_eq!(echo_active(&Value::string("s")), Ok(()));
    assert_eq!(echo_active(&Value::None), Ok(()));
    assert_eq!(sink.get_output(), "u's'\n");
    deactivate();
}
