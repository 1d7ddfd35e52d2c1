use super::ContactRegistry;
use crate::model::{ContactId, FirstName, Groups, LastName};

impl ContactRegistry {
    /// Contacts whose groups include `group_name`, in creation order.
    /// Contacts without a `Groups` record are skipped.
    pub fn contacts_in_group<'a>(
        &'a self,
        group_name: &'a str,
    ) -> impl Iterator<Item = ContactId> + 'a {
        self.contacts().filter(move |c| {
            self.get_component::<Groups>(*c)
                .map(|groups| groups.contains(group_name))
                .unwrap_or(false)
        })
    }

    /// "First Last", "First", or "" depending on which name parts are
    /// attached. A lone last name keeps its leading separator. Middle
    /// name, prefix, suffix and nicknames are left out.
    pub fn display_name(&self, contact: ContactId) -> String {
        let first = self.get_component::<FirstName>(contact);
        let last = self.get_component::<LastName>(contact);

        match (first, last) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => format!(" {}", last),
            (None, None) => String::new(),
        }
    }
}
