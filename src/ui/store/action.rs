use crate::ui::colors::Theme;

#[derive(Debug)]
pub enum Action {
    SetError(Option<String>),
    UpdateMessage(Option<String>),
    UpdateTheme(Theme),
    SubmitContact { name: String, phone: String },
    UpdateSelectedContact(Option<usize>),
    RequestRemoval(Option<usize>),
    AnswerRemoval(bool),
}
