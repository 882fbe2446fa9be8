use core::fmt;

use crate::{
    config::Config,
    contacts::{ContactRegistry, PendingRemoval},
    ui::colors::Colors,
};

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum ViewID {
    Main,
    Contacts,
}

impl fmt::Display for ViewID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub error: Option<String>,
    pub view_id: ViewID,
    pub config: Config,
    pub registry: ContactRegistry,
    pub selected_contact: Option<usize>,
    pub pending_removal: Option<PendingRemoval>,
    pub colors: Colors,
    pub message: Option<String>,
}
