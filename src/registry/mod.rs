//! Contacts as graph nodes with typed attribute records attached.

mod queries;

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::CgResult;
use crate::graph::{Graph, Link};
use crate::model::{
    AnyComponent, Component, ComponentKind, ContactId, FirstName, LastName, MiddleName, Nicknames,
};

/// Whether `link_contacts` replaces an existing relationship when the caller
/// does not say. Callers must opt in to clobbering.
pub const DEFAULT_LINK_OVERWRITE: bool = false;

/// Entity-component store over a relationship graph.
///
/// Each contact is a node of the graph. Attribute records are kept per kind,
/// at most one record of a kind per contact.
#[derive(Debug, Default)]
pub struct ContactRegistry {
    graph: Graph,
    components: BTreeMap<ComponentKind, BTreeMap<ContactId, AnyComponent>>,
}

impl ContactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The relationship graph, for neighbor, weight and metadata lookups.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn new_contact(&mut self) -> ContactId {
        self.graph.create_node()
    }

    /// Creates a contact and attaches the given name parts. Omitted parts
    /// (and an empty nickname list) attach nothing.
    pub fn new_contact_with_name(
        &mut self,
        first: &str,
        last: Option<&str>,
        middle: Option<&str>,
        nicknames: &[&str],
    ) -> ContactId {
        let contact = self.new_contact();

        self.add_component(contact, FirstName::new(first));

        if let Some(last) = last {
            self.add_component(contact, LastName::new(last));
        }
        if let Some(middle) = middle {
            self.add_component(contact, MiddleName::new(middle));
        }
        if !nicknames.is_empty() {
            self.add_component(contact, Nicknames::from_strings(nicknames.iter().copied()));
        }

        contact
    }

    /// Attaches `component`, replacing any record of the same kind.
    pub fn add_component<C: Component>(&mut self, contact: ContactId, component: C) {
        let kind = C::KIND;
        let replaced = self
            .components
            .entry(kind)
            .or_default()
            .insert(contact, component.into())
            .is_some();
        debug!(contact = %contact, kind = %kind, replaced, "attached component");
    }

    /// The record of kind `C` for `contact`. Unknown contacts simply have
    /// nothing attached.
    pub fn get_component<C: Component>(&self, contact: ContactId) -> Option<&C> {
        self.components
            .get(&C::KIND)
            .and_then(|by_contact| by_contact.get(&contact))
            .and_then(C::from_any)
    }

    /// Detaches and returns the record of kind `C` for `contact`.
    pub fn remove_component<C: Component>(&mut self, contact: ContactId) -> Option<C> {
        let removed = self
            .components
            .get_mut(&C::KIND)
            .and_then(|by_contact| by_contact.remove(&contact))?;
        let kind = C::KIND;
        debug!(contact = %contact, kind = %kind, "detached component");
        C::from_any_owned(removed)
    }

    pub fn all_components(&self, contact: ContactId) -> BTreeMap<ComponentKind, &AnyComponent> {
        self.components
            .iter()
            .filter_map(|(kind, by_contact)| by_contact.get(&contact).map(|c| (*kind, c)))
            .collect()
    }

    /// Relates two contacts. Unlike the graph engine, an existing
    /// relationship is kept unless `link.overwrite` is set to true.
    pub fn link_contacts(&mut self, a: ContactId, b: ContactId, mut link: Link) -> CgResult<bool> {
        link.overwrite = Some(link.overwrite.unwrap_or(DEFAULT_LINK_OVERWRITE));
        self.graph.connect(a, b, link)
    }

    pub fn unlink_contacts(&mut self, a: ContactId, b: ContactId) -> CgResult<bool> {
        self.graph.disconnect(a, b)
    }

    /// Every contact ever created, in creation order.
    pub fn contacts(&self) -> impl Iterator<Item = ContactId> + '_ {
        self.graph.nodes()
    }
}
