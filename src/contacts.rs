//! Contact registry: the ordered contact list and its two user operations.

/// A single (name, phone) pair stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// Removal captured between the request and confirm phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub index: usize,
    pub name: String,
}

impl PendingRemoval {
    /// Text for the confirmation prompt shown before committing.
    pub fn prompt(&self) -> String {
        format!("Remove contact: {}?", self.name)
    }
}

/// Result of `add` or `confirm_removal`, carrying enough data to produce
/// the status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Rejected,
    Removed(String),
    Canceled,
}

impl Outcome {
    pub fn status_message(&self) -> String {
        match self {
            Outcome::Added(name) => format!("Added contact: {name}"),
            Outcome::Rejected => {
                String::from("Please enter a contact name and phone number.")
            }
            Outcome::Removed(name) => format!("Removed contact: {name}"),
            Outcome::Canceled => String::from("Removal canceled."),
        }
    }
}

/// Result of resolving the current table selection prior to confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalRequest {
    NoSelection,
    PendingConfirm(PendingRemoval),
}

impl RemovalRequest {
    /// Status text for requests that end the removal flow immediately.
    /// Pending confirmations produce a prompt instead, not a status line.
    pub fn status_message(&self) -> Option<String> {
        match self {
            RemovalRequest::NoSelection => {
                Some(String::from("Please select a contact to remove."))
            }
            RemovalRequest::PendingConfirm(_) => None,
        }
    }
}

/// Insertion-ordered list of contacts. Positions are 0-based and
/// contiguous; removing an element shifts all subsequent elements down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends a contact when both inputs survive trimming, otherwise
    /// rejects without mutating.
    pub fn add(&mut self, raw_name: &str, raw_phone: &str) -> Outcome {
        let name = raw_name.trim();
        let phone = raw_phone.trim();

        if name.is_empty() || phone.is_empty() {
            return Outcome::Rejected;
        }

        self.contacts.push(Contact {
            name: name.to_string(),
            phone: phone.to_string(),
        });

        Outcome::Added(name.to_string())
    }

    /// First phase of removal: resolves the current selection to the
    /// contact awaiting confirmation. An out of range index from the
    /// table is treated the same as no selection.
    pub fn request_removal(&self, selected: Option<usize>) -> RemovalRequest {
        match selected {
            Some(index) if index < self.contacts.len() => {
                RemovalRequest::PendingConfirm(PendingRemoval {
                    index,
                    name: self.contacts[index].name.clone(),
                })
            }
            _ => RemovalRequest::NoSelection,
        }
    }

    /// Second phase of removal. Declined or stale confirmations leave the
    /// registry untouched.
    pub fn confirm_removal(&mut self, index: usize, confirmed: bool) -> Outcome {
        if !confirmed || index >= self.contacts.len() {
            return Outcome::Canceled;
        }

        let removed = self.contacts.remove(index);
        Outcome::Removed(removed.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(entries: &[(&str, &str)]) -> ContactRegistry {
        let mut registry = ContactRegistry::new();
        for (name, phone) in entries {
            assert!(matches!(registry.add(name, phone), Outcome::Added(_)));
        }
        registry
    }

    #[test]
    fn adds_contact_when_both_fields_present() {
        let mut registry = ContactRegistry::new();
        let outcome = registry.add("Ada Lovelace", "555-0100");

        assert_eq!(outcome, Outcome::Added("Ada Lovelace".to_string()));
        assert_eq!(
            outcome.status_message(),
            "Added contact: Ada Lovelace"
        );
        assert_eq!(
            registry.contacts(),
            &[Contact {
                name: "Ada Lovelace".to_string(),
                phone: "555-0100".to_string(),
            }]
        );
    }

    #[test]
    fn rejects_empty_name() {
        let mut registry = ContactRegistry::new();
        let outcome = registry.add("", "555-1212");

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(
            outcome.status_message(),
            "Please enter a contact name and phone number."
        );
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn rejects_empty_phone() {
        let mut registry = ContactRegistry::new();
        assert_eq!(registry.add("Ada", ""), Outcome::Rejected);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn rejects_whitespace_only_fields() {
        let mut registry = ContactRegistry::new();
        assert_eq!(registry.add("   ", "555-0100"), Outcome::Rejected);
        assert_eq!(registry.add("Ada", " \t "), Outcome::Rejected);
        assert_eq!(registry.add("  ", "  "), Outcome::Rejected);
        assert!(registry.is_empty());
    }

    #[test]
    fn trims_inputs_before_storing() {
        let mut registry = ContactRegistry::new();
        let outcome = registry.add("  Ada  ", " 555-0100 ");

        assert_eq!(outcome, Outcome::Added("Ada".to_string()));
        assert_eq!(registry.contacts()[0].name, "Ada");
        assert_eq!(registry.contacts()[0].phone, "555-0100");
    }

    #[test]
    fn allows_duplicate_contacts() {
        let mut registry = registry_with(&[("Ada", "555-0100")]);
        assert!(matches!(registry.add("Ada", "555-0100"), Outcome::Added(_)));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.contacts()[0], registry.contacts()[1]);
    }

    #[test]
    fn add_grows_length_by_exactly_one_on_success() {
        let mut registry = ContactRegistry::new();
        for i in 0..5 {
            assert_eq!(registry.len(), i);
            registry.add("Grace", "555-0199");
        }
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn request_removal_without_selection() {
        let registry = registry_with(&[("Ada", "555-0100")]);
        let request = registry.request_removal(None);

        assert_eq!(request, RemovalRequest::NoSelection);
        assert_eq!(
            request.status_message(),
            Some("Please select a contact to remove.".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn request_removal_captures_index_and_name() {
        let registry = registry_with(&[("Ada", "555-0100"), ("Grace", "555-0199")]);
        let request = registry.request_removal(Some(1));

        let pending = match request {
            RemovalRequest::PendingConfirm(pending) => pending,
            other => panic!("expected pending confirmation, got {other:?}"),
        };

        assert_eq!(pending.index, 1);
        assert_eq!(pending.name, "Grace");
        assert_eq!(pending.prompt(), "Remove contact: Grace?");
        // no mutation in the request phase
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn request_removal_treats_out_of_range_as_no_selection() {
        let registry = registry_with(&[("Ada", "555-0100")]);
        assert_eq!(registry.request_removal(Some(1)), RemovalRequest::NoSelection);
        assert_eq!(
            registry.request_removal(Some(usize::MAX)),
            RemovalRequest::NoSelection
        );
    }

    #[test]
    fn pending_confirm_has_no_status_message() {
        let registry = registry_with(&[("Ada", "555-0100")]);
        assert_eq!(registry.request_removal(Some(0)).status_message(), None);
    }

    #[test]
    fn confirmed_removal_shifts_subsequent_contacts_down() {
        let mut registry = registry_with(&[
            ("Ada", "555-0100"),
            ("Grace", "555-0199"),
            ("Edsger", "555-0142"),
        ]);

        let outcome = registry.confirm_removal(1, true);

        assert_eq!(outcome, Outcome::Removed("Grace".to_string()));
        assert_eq!(outcome.status_message(), "Removed contact: Grace");
        assert_eq!(registry.len(), 2);
        // element before the removed index is unchanged, the one after
        // shifts down by one
        assert_eq!(registry.contacts()[0].name, "Ada");
        assert_eq!(registry.contacts()[1].name, "Edsger");
    }

    #[test]
    fn two_phase_removal_removes_the_captured_contact() {
        let mut registry = registry_with(&[("Ada", "555-0100")]);

        let pending = match registry.request_removal(Some(0)) {
            RemovalRequest::PendingConfirm(pending) => pending,
            other => panic!("expected pending confirmation, got {other:?}"),
        };

        let outcome = registry.confirm_removal(pending.index, true);

        assert_eq!(outcome, Outcome::Removed(pending.name));
        assert!(registry.is_empty());
    }

    #[test]
    fn declined_removal_is_a_no_op() {
        let mut registry = registry_with(&[("Ada", "555-0100")]);
        let before = registry.clone();

        let outcome = registry.confirm_removal(0, false);

        assert_eq!(outcome, Outcome::Canceled);
        assert_eq!(outcome.status_message(), "Removal canceled.");
        assert_eq!(registry, before);
    }

    #[test]
    fn stale_index_cancels_without_mutation() {
        let mut registry = registry_with(&[("Ada", "555-0100")]);
        let before = registry.clone();

        assert_eq!(registry.confirm_removal(1, true), Outcome::Canceled);
        assert_eq!(registry.confirm_removal(usize::MAX, true), Outcome::Canceled);
        assert_eq!(registry, before);
    }

    #[test]
    fn confirm_on_empty_registry_cancels() {
        let mut registry = ContactRegistry::new();
        assert_eq!(registry.confirm_removal(0, true), Outcome::Canceled);
        assert!(registry.is_empty());
    }
}
