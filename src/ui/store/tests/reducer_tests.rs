use tempfile::TempDir;

use crate::{
    config::DEFAULT_CONFIG_ID,
    ui::{colors::Theme, store::store::Store},
};

use super::*;

fn setup() -> (Store, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    let conf_manager = Arc::new(Mutex::new(ConfigManager::new(path.to_str().unwrap())));
    let store = Store::new(conf_manager);
    (store, dir)
}

fn add_contact(store: &Store, name: &str, phone: &str) {
    store.dispatch(Action::SubmitContact {
        name: name.to_string(),
        phone: phone.to_string(),
    });
}

#[test]
fn submit_contact_appends_and_reports() {
    let (store, _dir) = setup();

    add_contact(&store, "Ada Lovelace", "555-0100");

    let state = store.get_state();
    assert_eq!(state.registry.len(), 1);
    assert_eq!(state.registry.contacts()[0].name, "Ada Lovelace");
    assert_eq!(state.registry.contacts()[0].phone, "555-0100");
    assert_eq!(
        state.message,
        Some("Added contact: Ada Lovelace".to_string())
    );
}

#[test]
fn submit_contact_with_missing_input_rejects() {
    let (store, _dir) = setup();

    add_contact(&store, "", "555-1212");

    let state = store.get_state();
    assert_eq!(state.registry.len(), 0);
    assert_eq!(
        state.message,
        Some("Please enter a contact name and phone number.".to_string())
    );
}

#[test]
fn submit_contact_trims_before_validating() {
    let (store, _dir) = setup();

    add_contact(&store, "  Ada  ", "  555-0100  ");

    let state = store.get_state();
    assert_eq!(state.registry.contacts()[0].name, "Ada");
    assert_eq!(state.message, Some("Added contact: Ada".to_string()));
}

#[test]
fn request_removal_without_selection_reports() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");

    store.dispatch(Action::RequestRemoval(None));

    let state = store.get_state();
    assert_eq!(state.pending_removal, None);
    assert_eq!(state.registry.len(), 1);
    assert_eq!(
        state.message,
        Some("Please select a contact to remove.".to_string())
    );
}

#[test]
fn request_removal_with_selection_opens_confirmation() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");
    add_contact(&store, "Grace", "555-0199");

    store.dispatch(Action::RequestRemoval(Some(1)));

    let state = store.get_state();
    let pending = state.pending_removal.expect("pending removal");
    assert_eq!(pending.index, 1);
    assert_eq!(pending.name, "Grace");
    assert_eq!(pending.prompt(), "Remove contact: Grace?");
    // no mutation and no status change until the user answers
    assert_eq!(state.registry.len(), 2);
    assert_eq!(state.message, Some("Added contact: Grace".to_string()));
}

#[test]
fn request_removal_with_stale_selection_degrades_to_no_selection() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");

    store.dispatch(Action::RequestRemoval(Some(3)));

    let state = store.get_state();
    assert_eq!(state.pending_removal, None);
    assert_eq!(
        state.message,
        Some("Please select a contact to remove.".to_string())
    );
}

#[test]
fn confirmed_removal_deletes_and_reports() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");

    store.dispatch(Action::RequestRemoval(Some(0)));
    store.dispatch(Action::AnswerRemoval(true));

    let state = store.get_state();
    assert!(state.registry.is_empty());
    assert_eq!(state.pending_removal, None);
    assert_eq!(state.message, Some("Removed contact: Ada".to_string()));
}

#[test]
fn declined_removal_keeps_contact() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");

    store.dispatch(Action::RequestRemoval(Some(0)));
    store.dispatch(Action::AnswerRemoval(false));

    let state = store.get_state();
    assert_eq!(state.registry.len(), 1);
    assert_eq!(state.registry.contacts()[0].name, "Ada");
    assert_eq!(state.pending_removal, None);
    assert_eq!(state.message, Some("Removal canceled.".to_string()));
}

#[test]
fn removal_shifts_later_contacts_down() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");
    add_contact(&store, "Grace", "555-0199");
    add_contact(&store, "Edsger", "555-0142");

    store.dispatch(Action::RequestRemoval(Some(1)));
    store.dispatch(Action::AnswerRemoval(true));

    let state = store.get_state();
    assert_eq!(state.registry.len(), 2);
    assert_eq!(state.registry.contacts()[0].name, "Ada");
    assert_eq!(state.registry.contacts()[1].name, "Edsger");
}

#[test]
fn removal_clamps_selection_to_remaining_rows() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");
    add_contact(&store, "Grace", "555-0199");

    store.dispatch(Action::UpdateSelectedContact(Some(1)));
    store.dispatch(Action::RequestRemoval(Some(1)));
    store.dispatch(Action::AnswerRemoval(true));

    let state = store.get_state();
    assert_eq!(state.selected_contact, Some(0));
}

#[test]
fn removing_last_contact_clears_selection() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");

    store.dispatch(Action::UpdateSelectedContact(Some(0)));
    store.dispatch(Action::RequestRemoval(Some(0)));
    store.dispatch(Action::AnswerRemoval(true));

    let state = store.get_state();
    assert_eq!(state.selected_contact, None);
}

#[test]
fn answer_without_pending_removal_is_a_no_op() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");

    store.dispatch(Action::AnswerRemoval(true));

    let state = store.get_state();
    assert_eq!(state.registry.len(), 1);
    assert_eq!(state.message, Some("Added contact: Ada".to_string()));
}

#[test]
fn repeated_answer_only_applies_once() {
    let (store, _dir) = setup();
    add_contact(&store, "Ada", "555-0100");

    store.dispatch(Action::RequestRemoval(Some(0)));
    store.dispatch(Action::AnswerRemoval(true));
    store.dispatch(Action::AnswerRemoval(true));

    let state = store.get_state();
    assert!(state.registry.is_empty());
    assert_eq!(state.message, Some("Removed contact: Ada".to_string()));
}

#[test]
fn update_theme_persists_preference() {
    let (store, dir) = setup();

    store.dispatch(Action::UpdateTheme(Theme::Rose));

    let state = store.get_state();
    assert_eq!(state.config.theme, Theme::Rose.to_string());

    let path = dir.path().join("config.yml");
    let reloaded = ConfigManager::new(path.to_str().unwrap());
    let config = reloaded.get_by_id(DEFAULT_CONFIG_ID).unwrap();
    assert_eq!(config.theme, Theme::Rose.to_string());
}

#[test]
fn set_error_round_trip() {
    let (store, _dir) = setup();

    store.dispatch(Action::SetError(Some("boom".to_string())));
    assert_eq!(store.get_state().error, Some("boom".to_string()));

    store.dispatch(Action::SetError(None));
    assert_eq!(store.get_state().error, None);
}
