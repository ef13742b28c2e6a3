//! Component kinds and typed access

use super::components::{AaCollisionBox, Health, MeshDrawable, PlayerMotion, Transform, Trigger};

/// Discriminant of a [`Component`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Spatial placement
    Transform,
    /// Renderable mesh plus material
    MeshDrawable,
    /// Axis-aligned collision volume
    AaCollisionBox,
    /// Gameplay trigger volume
    Trigger,
    /// Hit points
    Health,
    /// Player locomotion state
    PlayerMotion,
}

/// One component record attached to an entity
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// See [`Transform`]
    Transform(Transform),
    /// See [`MeshDrawable`]
    MeshDrawable(MeshDrawable),
    /// See [`AaCollisionBox`]
    AaCollisionBox(AaCollisionBox),
    /// See [`Trigger`]
    Trigger(Trigger),
    /// See [`Health`]
    Health(Health),
    /// See [`PlayerMotion`]
    PlayerMotion(PlayerMotion),
}

impl Component {
    /// Which kind of component this is
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Transform(_) => ComponentKind::Transform,
            Self::MeshDrawable(_) => ComponentKind::MeshDrawable,
            Self::AaCollisionBox(_) => ComponentKind::AaCollisionBox,
            Self::Trigger(_) => ComponentKind::Trigger,
            Self::Health(_) => ComponentKind::Health,
            Self::PlayerMotion(_) => ComponentKind::PlayerMotion,
        }
    }
}

/// Typed view over one [`Component`] variant
///
/// Lets callers write `entity.get::<Transform>()` instead of matching on the
/// enum by hand.
pub trait ComponentData: Into<Component> + Sized {
    /// Kind tag of the implementing record
    const KIND: ComponentKind;

    /// Borrow the record if `component` is of this kind
    fn from_component(component: &Component) -> Option<&Self>;

    /// Mutably borrow the record if `component` is of this kind
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! impl_component_data {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Component {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }

            impl ComponentData for $variant {
                const KIND: ComponentKind = ComponentKind::$variant;

                fn from_component(component: &Component) -> Option<&Self> {
                    match component {
                        Component::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                    match component {
                        Component::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_component_data!(Transform, MeshDrawable, AaCollisionBox, Trigger, Health, PlayerMotion);
