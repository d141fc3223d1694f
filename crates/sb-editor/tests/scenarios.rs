use sb_editor::EditorState;
use sb_editor::Param;
use sb_editor::ParamField;
use sb_editor::SyncMode;
use sb_editor::Validity;

fn empty_state() -> EditorState {
    let state = EditorState::new("");
    assert_eq!(state.uri_base(), "");
    assert!(state.params().is_empty());
    state
}

fn ok<T>(result: sb_core::SchemeResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

#[test]
fn builds_example_uri_from_scratch() {
    let mut state = empty_state();

    state.edit_base("supertoss://main");
    assert_eq!(state.uri_string(), "supertoss://main");

    state.add_param();
    assert_eq!(state.uri_string(), "supertoss://main");

    ok(state.edit_param(0, ParamField::Key, "referrer"));
    assert_eq!(state.uri_string(), "supertoss://main");

    ok(state.edit_param(0, ParamField::Value, "test"));
    assert_eq!(state.uri_string(), "supertoss://main?referrer=test");
    assert_eq!(state.validity(), Validity::Valid);
}

#[test]
fn duplicate_keys_survive_parse_and_recompose() {
    let mut state = EditorState::default();
    let validity = state.edit_uri_string("supertoss://main?a=1&a=2");
    assert!(validity.is_valid());
    assert_eq!(state.params(), &[Param::new("a", "1"), Param::new("a", "2")]);

    state.edit_base(state.uri_base().to_owned());
    assert_eq!(state.uri_string(), "supertoss://main?a=1&a=2");
}

#[test]
fn blank_value_is_filtered_from_uri() {
    let mut state = EditorState::new("supertoss://main");
    state.add_param();
    state.add_param();
    ok(state.edit_param(0, ParamField::Key, "x"));
    ok(state.edit_param(1, ParamField::Key, "y"));
    ok(state.edit_param(1, ParamField::Value, "1"));

    assert_eq!(state.params(), &[Param::new("x", ""), Param::new("y", "1")]);
    assert!(state.uri_string().ends_with("?y=1"));
    assert_eq!(state.uri_string(), "supertoss://main?y=1");
}

#[test]
fn divergent_edit_keeps_previous_structure() {
    let mut state = EditorState::new("supertoss://main?referrer=test&mode=dark");
    let base_before = state.uri_base().to_owned();
    let params_before = state.params().to_vec();

    let validity = state.edit_uri_string("not a uri");

    assert_eq!(validity, Validity::Invalid);
    assert_eq!(state.uri_string(), "not a uri");
    assert_eq!(state.uri_base(), base_before);
    assert_eq!(state.params(), params_before.as_slice());
    assert!(!state.validity().is_valid());
    assert_eq!(state.sync_mode(), SyncMode::Divergent);
}

#[test]
fn typing_through_invalid_prefixes_recovers_on_valid_text() {
    let mut state = EditorState::default();
    for typed in ["s", "su", "sup:", "sup:/", "sup://x?k=v"] {
        state.edit_uri_string(typed);
        assert_eq!(state.uri_string(), typed);
    }

    assert_eq!(state.uri_base(), "sup://x");
    assert_eq!(state.params(), &[Param::new("k", "v")]);
    assert_eq!(state.sync_mode(), SyncMode::Synced);
}

#[test]
fn remove_param_preserves_relative_order() {
    let mut state = EditorState::new("app://x?a=1&b=2&c=3&d=4");

    let removed = ok(state.remove_param(1));
    assert_eq!(removed, Param::new("b", "2"));
    assert_eq!(
        state.params(),
        &[
            Param::new("a", "1"),
            Param::new("c", "3"),
            Param::new("d", "4"),
        ]
    );
    assert_eq!(state.uri_string(), "app://x?a=1&c=3&d=4");

    ok(state.remove_param(0));
    assert_eq!(state.params(), &[Param::new("c", "3"), Param::new("d", "4")]);
}

#[test]
fn rewriting_current_values_is_idempotent() {
    let mut state = empty_state();
    state.edit_base("app://x/path");
    state.add_param();
    ok(state.edit_param(0, ParamField::Key, "q"));
    ok(state.edit_param(0, ParamField::Value, "a b"));
    let composed = state.uri_string().to_owned();
    assert_eq!(composed, "app://x/path?q=a+b");

    state.edit_base("app://x/path");
    assert_eq!(state.uri_string(), composed);

    ok(state.edit_param(0, ParamField::Key, "q"));
    ok(state.edit_param(0, ParamField::Value, "a b"));
    assert_eq!(state.uri_string(), composed);
}

#[test]
fn validity_tracks_current_string_not_history() {
    let mut state = EditorState::default();
    assert!(state.validity().is_valid());

    state.edit_uri_string("::");
    assert!(!state.validity().is_valid());

    state.edit_base("supertoss://other");
    assert!(state.validity().is_valid());

    state.edit_base("broken");
    assert!(!state.validity().is_valid());
    assert_eq!(state.uri_string(), "broken?referrer=test");
}

#[test]
fn rewriting_current_values_keeps_hand_typed_uri() {
    let mut state = EditorState::default();
    let typed = "app://x?q=a%20b&flag";
    assert!(state.edit_uri_string(typed).is_valid());
    assert_eq!(state.params(), &[Param::new("q", "a b"), Param::new("flag", "")]);

    state.edit_base(state.uri_base().to_owned());
    assert_eq!(state.uri_string(), typed);

    ok(state.edit_param(0, ParamField::Key, "q"));
    ok(state.edit_param(0, ParamField::Value, "a b"));
    ok(state.edit_param(1, ParamField::Value, ""));
    assert_eq!(state.uri_string(), typed);

    ok(state.edit_param(0, ParamField::Value, "c"));
    assert_eq!(state.uri_string(), "app://x?q=c");
}

#[test]
fn same_value_write_after_divergence_keeps_typed_text() {
    let mut state = EditorState::default();
    state.edit_uri_string("not a uri");

    state.edit_base("supertoss://main");
    assert_eq!(state.uri_string(), "not a uri");
    assert_eq!(state.sync_mode(), SyncMode::Divergent);

    state.edit_base("supertoss://other");
    assert_eq!(state.uri_string(), "supertoss://other?referrer=test");
}
