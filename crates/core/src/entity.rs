//! Entity base: identity + properties, continuity across state changes.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::id::UniqueEntityId;

/// Key under which the identity appears in [`Entity::to_object`].
pub const ID_KEY: &str = "id";

/// Generic entity: one identity, set at construction, plus a property record.
///
/// Concrete entities compose this type and expose typed accessors and
/// mutators over `P`, validating new values before committing them.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<P> {
    unique_entity_id: UniqueEntityId,
    props: P,
}

impl<P> Entity<P> {
    /// Build an entity around `props`, generating an identity when none is given.
    pub fn new(props: P, id: Option<UniqueEntityId>) -> Self {
        let unique_entity_id = id.unwrap_or_default();
        tracing::trace!(id = %unique_entity_id, "entity created");
        Self {
            unique_entity_id,
            props,
        }
    }

    /// The identity's string value.
    pub fn id(&self) -> &str {
        self.unique_entity_id.value()
    }

    pub fn unique_entity_id(&self) -> &UniqueEntityId {
        &self.unique_entity_id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    /// Mutable access for concrete entities' update operations.
    pub fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }

    pub fn into_parts(self) -> (UniqueEntityId, P) {
        (self.unique_entity_id, self.props)
    }
}

impl<P: Serialize> Entity<P> {
    /// Project into a fresh map: `{ "id": <identity>, ...props }`.
    ///
    /// Fails if `P` does not serialize to an object or already has an `id` field.
    pub fn to_object(&self) -> DomainResult<Map<String, Value>> {
        let props = serde_json::to_value(&self.props)
            .map_err(|e| DomainError::invariant(format!("entity properties: {e}")))?;

        let Value::Object(props) = props else {
            return Err(DomainError::invariant(
                "entity properties must serialize to an object",
            ));
        };

        if props.contains_key(ID_KEY) {
            return Err(DomainError::invariant(format!(
                "entity properties must not define the reserved `{ID_KEY}` key"
            )));
        }

        let mut object = Map::with_capacity(props.len() + 1);
        object.insert(ID_KEY.to_string(), Value::String(self.id().to_string()));
        object.extend(props);
        Ok(object)
    }
}
