use std::{cell::RefCell, sync::Arc};

use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
};

use crate::ui::{
    components::{
        input::{Input, InputState},
        table::{self, Table},
    },
    store::{action::Action, state::State, state::ViewID, store::Store},
};

use super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

const HEADERS: [&str; 2] = ["Name", "Phone"];
const NAME_COLUMN_WIDTH: usize = 30;
const PHONE_COLUMN_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Focus {
    NameInput,
    PhoneInput,
    Table,
}

/// The contact form and table: two text inputs feeding the add
/// operation, and the selectable projection of the registry.
pub struct ContactsView {
    store: Arc<Store>,
    focus: RefCell<Focus>,
    name_state: RefCell<InputState>,
    phone_state: RefCell<InputState>,
    table: RefCell<Table>,
}

impl ContactsView {
    pub fn new(store: Arc<Store>) -> Self {
        let headers = HEADERS.iter().map(|h| h.to_string()).collect_vec();

        Self {
            store,
            focus: RefCell::new(Focus::NameInput),
            name_state: RefCell::new(InputState {
                editing: true,
                value: String::from(""),
            }),
            phone_state: RefCell::new(InputState {
                editing: false,
                value: String::from(""),
            }),
            table: RefCell::new(Table::new(
                Vec::new(),
                Some(headers),
                vec![NAME_COLUMN_WIDTH, PHONE_COLUMN_WIDTH],
                table::DEFAULT_ITEM_HEIGHT,
            )),
        }
    }

    fn set_focus(&self, focus: Focus) {
        self.name_state.borrow_mut().editing = focus == Focus::NameInput;
        self.phone_state.borrow_mut().editing = focus == Focus::PhoneInput;
        *self.focus.borrow_mut() = focus;
    }

    fn focus_next(&self) {
        let next = match *self.focus.borrow() {
            Focus::NameInput => Focus::PhoneInput,
            Focus::PhoneInput => Focus::Table,
            Focus::Table => Focus::NameInput,
        };
        self.set_focus(next);
    }

    fn focus_previous(&self) {
        let previous = match *self.focus.borrow() {
            Focus::NameInput => Focus::Table,
            Focus::PhoneInput => Focus::NameInput,
            Focus::Table => Focus::PhoneInput,
        };
        self.set_focus(previous);
    }

    fn push_input_char(&self, c: char) {
        match *self.focus.borrow() {
            Focus::NameInput => self.name_state.borrow_mut().value.push(c),
            Focus::PhoneInput => self.phone_state.borrow_mut().value.push(c),
            Focus::Table => {}
        }
    }

    fn pop_input_char(&self) {
        match *self.focus.borrow() {
            Focus::NameInput => {
                self.name_state.borrow_mut().value.pop();
            }
            Focus::PhoneInput => {
                self.phone_state.borrow_mut().value.pop();
            }
            Focus::Table => {}
        }
    }

    // the inputs are read at activation time and intentionally left
    // untouched; validation lives in the registry
    fn submit(&self) {
        let name = self.name_state.borrow().value.clone();
        let phone = self.phone_state.borrow().value.clone();
        self.store.dispatch(Action::SubmitContact { name, phone });
    }

    fn next_row(&self) {
        let selected = self.table.borrow_mut().next();
        self.store.dispatch(Action::UpdateSelectedContact(selected));
    }

    fn previous_row(&self) {
        let selected = self.table.borrow_mut().previous();
        self.store.dispatch(Action::UpdateSelectedContact(selected));
    }

    fn request_removal(&self) {
        let selected = self.table.borrow().selected();
        self.store.dispatch(Action::RequestRemoval(selected));
    }
}

impl View for ContactsView {
    fn id(&self) -> ViewID {
        ViewID::Contacts
    }

    fn legend(&self, _state: &State) -> &str {
        match *self.focus.borrow() {
            Focus::Table => "(tab) edit form | (enter) add | (d) remove | (j/k) select | (q) quit",
            _ => "(tab) next field | (enter) add | (esc) focus table",
        }
    }
}

impl EventHandler for ContactsView {
    fn process_event(&self, evt: &Event, _ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return false;
            }

            let editing = *self.focus.borrow() != Focus::Table;

            match key.code {
                KeyCode::Tab => {
                    self.focus_next();
                    handled = true;
                }
                KeyCode::BackTab => {
                    self.focus_previous();
                    handled = true;
                }
                KeyCode::Enter => {
                    self.submit();
                    handled = true;
                }
                KeyCode::Esc if editing => {
                    self.set_focus(Focus::Table);
                    handled = true;
                }
                KeyCode::Backspace if editing => {
                    self.pop_input_char();
                    handled = true;
                }
                KeyCode::Char(c) if editing => {
                    self.push_input_char(c);
                    handled = true;
                }
                KeyCode::Char('j') | KeyCode::Down if !editing => {
                    self.next_row();
                    handled = true;
                }
                KeyCode::Char('k') | KeyCode::Up if !editing => {
                    self.previous_row();
                    handled = true;
                }
                KeyCode::Char('d') | KeyCode::Delete if !editing => {
                    self.request_removal();
                    handled = true;
                }
                _ => {}
            }
        }

        handled
    }
}

impl CustomWidgetRef for ContactsView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let rects = Layout::vertical([
            Constraint::Length(1), // name input
            Constraint::Length(1), // spacer
            Constraint::Length(1), // phone input
            Constraint::Length(1), // spacer
            Constraint::Min(5),    // contact table
        ])
        .split(area);

        let rows = ctx
            .state
            .registry
            .contacts()
            .iter()
            .map(|c| vec![c.name.clone(), c.phone.clone()])
            .collect_vec();

        // the table is a projection of the registry; rebuild it every
        // frame and mirror any clamped selection back into the store
        let selected = self.table.borrow_mut().update_items(rows);
        if selected != ctx.state.selected_contact {
            self.store.dispatch(Action::UpdateSelectedContact(selected));
        }

        let name_input = Input::new("Name");
        name_input.render(rects[0], buf, &mut self.name_state.borrow_mut(), ctx);

        let phone_input = Input::new("Phone");
        phone_input.render(rects[2], buf, &mut self.phone_state.borrow_mut(), ctx);

        self.table.borrow().render_ref(rects[4], buf, ctx);
    }
}
