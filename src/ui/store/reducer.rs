use std::sync::{Arc, Mutex};

use crate::{
    config::{ConfigManager, DEFAULT_CONFIG_ID},
    contacts::RemovalRequest,
    ui::colors::Colors,
};

use super::{action::Action, state::State};

pub struct Reducer {
    config_manager: Arc<Mutex<ConfigManager>>,
}

impl Reducer {
    pub fn new(config_manager: Arc<Mutex<ConfigManager>>) -> Self {
        Self { config_manager }
    }

    pub fn reduce(&self, prev_state: State, action: Action) -> State {
        match action {
            Action::SetError(err) => {
                let mut state = prev_state.clone();
                state.error = err;
                state
            }
            Action::UpdateMessage(message) => {
                let mut state = prev_state.clone();
                state.message = message;
                state
            }
            Action::UpdateTheme(theme) => {
                let mut state = prev_state.clone();
                let mut manager = self.config_manager.lock().unwrap();
                manager.update_theme(DEFAULT_CONFIG_ID, &theme);
                state.config.theme = theme.to_string();
                state.colors = Colors::new(
                    theme.to_palette(state.true_color_enabled),
                    state.true_color_enabled,
                );
                state
            }
            Action::SubmitContact { name, phone } => {
                let mut state = prev_state.clone();
                let outcome = state.registry.add(&name, &phone);
                state.message = Some(outcome.status_message());
                state
            }
            Action::UpdateSelectedContact(selected) => {
                let mut state = prev_state.clone();
                state.selected_contact = selected;
                state
            }
            Action::RequestRemoval(selected) => {
                let mut state = prev_state.clone();
                let request = state.registry.request_removal(selected);

                if let Some(message) = request.status_message() {
                    state.message = Some(message);
                }

                if let RemovalRequest::PendingConfirm(pending) = request {
                    state.pending_removal = Some(pending);
                }

                state
            }
            Action::AnswerRemoval(confirmed) => {
                let mut state = prev_state.clone();

                if let Some(pending) = state.pending_removal.take() {
                    let outcome = state.registry.confirm_removal(pending.index, confirmed);
                    state.message = Some(outcome.status_message());
                    state.selected_contact = match state.registry.len() {
                        0 => None,
                        len => state.selected_contact.map(|i| i.min(len - 1)),
                    };
                }

                state
            }
        }
    }
}

#[cfg(test)]
#[path = "./tests/reducer_tests.rs"]
mod tests;
