use std::collections::HashSet;

use crate::model::{Contact, ContactId};

/// The live, in-memory contact collection.
#[derive(Debug, Clone, Default)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find_by_id(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| &c.id == id)
    }

    /// IDs currently assigned in the collection.
    pub fn ids(&self) -> HashSet<ContactId> {
        self.contacts.iter().map(|c| c.id.clone()).collect()
    }

    /// Appends without any checks. Callers go through `contact_ops`.
    pub(crate) fn insert(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Swaps the contact with the same ID for `contact`. Returns the old one.
    pub(crate) fn replace(&mut self, contact: Contact) -> Option<Contact> {
        let index = self.position(&contact.id)?;
        Some(std::mem::replace(&mut self.contacts[index], contact))
    }

    pub(crate) fn remove(&mut self, id: &ContactId) -> Option<Contact> {
        let index = self.position(id)?;
        Some(self.contacts.remove(index))
    }

    /// Drops the whole collection in favour of `contacts`.
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }
}

impl From<Vec<Contact>> for ContactList {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, first: &str) -> Contact {
        Contact::from_values(id, &[first, "Smith", "", "", "", "", "FRIEND"])
    }

    #[test]
    fn find_and_remove_by_id() {
        let mut list = ContactList::from(vec![contact("1", "Ann"), contact("2", "Bob")]);
        assert_eq!(list.find_by_id(&ContactId::from(2)).unwrap().first_name, "Bob");
        let removed = list.remove(&ContactId::from(1)).unwrap();
        assert_eq!(removed.first_name, "Ann");
        assert_eq!(list.len(), 1);
        assert!(list.remove(&ContactId::from(1)).is_none());
    }

    #[test]
    fn replace_keeps_position() {
        let mut list = ContactList::from(vec![contact("1", "Ann"), contact("2", "Bob")]);
        let old = list.replace(contact("1", "Anna")).unwrap();
        assert_eq!(old.first_name, "Ann");
        assert_eq!(list.as_slice()[0].first_name, "Anna");
        assert!(list.replace(contact("3", "Cy")).is_none());
    }

    #[test]
    fn ids_reflect_contents() {
        let list = ContactList::from(vec![contact("1", "Ann"), contact("x", "Bob")]);
        let ids = list.ids();
        assert!(ids.contains(&ContactId::from(1)));
        assert!(ids.contains(&ContactId::from("x")));
        assert_eq!(ids.len(), 2);
    }
}
