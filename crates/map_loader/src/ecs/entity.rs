//! Entity implementation

use super::{Component, ComponentData, ComponentKind};

/// Entity identifier, unique within one scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// An identity plus at most one component of each kind
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    components: Vec<Component>,
}

impl Entity {
    /// Create an entity with no components
    pub const fn new(id: EntityId) -> Self {
        Self {
            id,
            components: Vec::new(),
        }
    }

    /// Get the entity ID
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Attach a component, replacing any existing component of the same kind
    ///
    /// A replaced component keeps its slot in attachment order.
    pub fn add<C: ComponentData>(&mut self, component: C) -> &mut Self {
        let component = component.into();
        match self.components.iter().position(|c| c.kind() == C::KIND) {
            Some(index) => self.components[index] = component,
            None => self.components.push(component),
        }
        self
    }

    /// Borrow the component of type `C`, if attached
    pub fn get<C: ComponentData>(&self) -> Option<&C> {
        self.components.iter().find_map(C::from_component)
    }

    /// Mutably borrow the component of type `C`, if attached
    pub fn get_mut<C: ComponentData>(&mut self) -> Option<&mut C> {
        self.components.iter_mut().find_map(C::from_component_mut)
    }

    /// Check whether a component of type `C` is attached
    pub fn has<C: ComponentData>(&self) -> bool {
        self.has_kind(C::KIND)
    }

    /// Check whether a component of the given kind is attached
    pub fn has_kind(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }

    /// Detach and return the component of type `C`
    pub fn remove<C: ComponentData>(&mut self) -> Option<Component> {
        let index = self.components.iter().position(|c| c.kind() == C::KIND)?;
        Some(self.components.remove(index))
    }

    /// Detach every component
    pub fn clear_components(&mut self) {
        self.components.clear();
    }

    /// All attached components in attachment order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Kinds of all attached components in attachment order
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.iter().map(Component::kind)
    }

    /// Check whether the entity has no components at all
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
