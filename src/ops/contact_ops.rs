use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, ContactId, Field, FieldUpdate, IdSource};
use crate::store::ContactList;

/// True when no contact in `collection` has the same editable fields as
/// `candidate`. IDs are not compared.
pub fn is_unique<'a>(candidate: &Contact, collection: impl IntoIterator<Item = &'a Contact>) -> bool {
    !collection
        .into_iter()
        .any(|existing| existing.is_semantic_duplicate(candidate))
}

/// Validates every field of `contact`, checks its ID is free and that it is
/// not a duplicate, then appends it to `list`. Nothing is stored on failure.
pub fn validate_and_admit(list: &mut ContactList, contact: Contact) -> ContactsResult<()> {
    let report = contact.validate();
    if !report.is_valid() {
        return Err(ContactsError::Invalid(
            report.errors().map(ToString::to_string).collect(),
        ));
    }

    if list.find_by_id(&contact.id).is_some() {
        return Err(ContactsError::IdInUse {
            id: contact.id.to_string(),
        });
    }

    if !is_unique(&contact, list.iter()) {
        return Err(ContactsError::Duplicate {
            identifier: display_name(&contact),
        });
    }

    tracing::info!(id = %contact.id, "added contact");
    list.insert(contact);
    Ok(())
}

/// Creates a contact from raw values in column order under a freshly
/// generated ID.
pub fn add_contact<S: AsRef<str>>(
    list: &mut ContactList,
    values: &[S],
    ids: &mut dyn IdSource,
    max_attempts: usize,
) -> ContactsResult<Contact> {
    let id = ContactId::generate(ids, &list.ids(), max_attempts)?;
    let contact = Contact::from_values(id.as_str(), values);
    validate_and_admit(list, contact.clone())?;
    Ok(contact)
}

/// Applies `edits` to a copy of the stored contact and commits the copy only
/// if every edit is accepted and the result is still unique.
pub fn edit_contact(
    list: &mut ContactList,
    id: &ContactId,
    edits: &[(Field, &str)],
) -> ContactsResult<Contact> {
    let mut edited = list
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| ContactsError::NotFound { id: id.to_string() })?;

    for (field, new_value) in edits {
        match edited.validate_field_update(*field, new_value) {
            FieldUpdate::Keep => {}
            FieldUpdate::Change => edited.set(*field, new_value),
            FieldUpdate::Rejected(e) => return Err(e.into()),
        }
    }

    let others = list.iter().filter(|c| &c.id != id);
    if !is_unique(&edited, others) {
        return Err(ContactsError::Duplicate {
            identifier: display_name(&edited),
        });
    }

    list.replace(edited.clone());
    tracing::info!(id = %id, "edited contact");
    Ok(edited)
}

pub fn delete_contact(list: &mut ContactList, id: &ContactId) -> ContactsResult<Contact> {
    let removed = list
        .remove(id)
        .ok_or_else(|| ContactsError::NotFound { id: id.to_string() })?;
    tracing::info!(id = %id, "deleted contact");
    Ok(removed)
}

/// Outcome of loading an imported batch into the book.
#[derive(Debug, Default)]
pub struct Admission {
    pub admitted: usize,
    pub rejected: Vec<(Contact, ContactsError)>,
}

/// Replaces the book with `contacts`. In strict mode each contact goes
/// through [`validate_and_admit`] and failures are reported back; otherwise
/// every contact is taken as-is.
pub fn admit_import(list: &mut ContactList, contacts: Vec<Contact>, strict: bool) -> Admission {
    let mut admission = Admission::default();

    if !strict {
        admission.admitted = contacts.len();
        list.replace_all(contacts);
        return admission;
    }

    let mut fresh = ContactList::new();
    for contact in contacts {
        match validate_and_admit(&mut fresh, contact.clone()) {
            Ok(()) => admission.admitted += 1,
            Err(e) => {
                tracing::warn!(id = %contact.id, error = %e, "imported contact not admitted");
                admission.rejected.push((contact, e));
            }
        }
    }
    *list = fresh;
    admission
}

fn display_name(contact: &Contact) -> String {
    format!("{} {}", contact.first_name, contact.last_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SequentialIds;

    const TIM: [&str; 7] = ["Tim", "Py", "123-456-7890", "t@e.co", "Corp", "Dev", "FRIEND"];

    #[test]
    fn add_assigns_first_free_sequential_id() {
        let mut list = ContactList::new();
        let mut ids = SequentialIds::default();
        let c = add_contact(&mut list, &TIM, &mut ids, 10).unwrap();
        assert_eq!(c.id, ContactId::from(1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_rejects_semantic_duplicate() {
        let mut list = ContactList::new();
        let mut ids = SequentialIds::default();
        add_contact(&mut list, &TIM, &mut ids, 10).unwrap();
        let err = add_contact(&mut list, &TIM, &mut ids, 10).unwrap_err();
        assert!(matches!(err, ContactsError::Duplicate { .. }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn admit_rejects_taken_id() {
        let mut list = ContactList::new();
        validate_and_admit(&mut list, Contact::from_values("4", &TIM)).unwrap();
        let other = Contact::from_values("4", &["Ann", "Lee", "", "", "", "", "family"]);
        assert!(matches!(
            validate_and_admit(&mut list, other),
            Err(ContactsError::IdInUse { .. })
        ));
    }

    #[test]
    fn edit_against_itself_is_not_a_duplicate() {
        let mut list = ContactList::new();
        validate_and_admit(&mut list, Contact::from_values("4", &TIM)).unwrap();
        let edited = edit_contact(&mut list, &ContactId::from(4), &[(Field::Title, "")]).unwrap();
        assert_eq!(edited.title, "Dev");
    }
}
