use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use seedwork_core::{DomainResult, Entity, UniqueEntityId, ValidatorRules};

/// Longest accepted category name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

/// Input for creating a category. Omitted fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProperties {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProperties {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Committed category state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProps {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Entity: Category.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    entity: Entity<CategoryProps>,
}

impl Category {
    /// Validate `props`, fill defaults and build the category.
    pub fn new(props: CategoryProperties, id: Option<UniqueEntityId>) -> DomainResult<Self> {
        let is_active = props.is_active.unwrap_or(true);
        Self::validate(&props.name, props.description.as_deref(), is_active)?;

        let props = CategoryProps {
            name: props.name,
            description: props.description,
            is_active,
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };
        Ok(Self {
            entity: Entity::new(props, id),
        })
    }

    pub fn id(&self) -> &str {
        self.entity.id()
    }

    pub fn unique_entity_id(&self) -> &UniqueEntityId {
        self.entity.unique_entity_id()
    }

    pub fn props(&self) -> &CategoryProps {
        self.entity.props()
    }

    pub fn name(&self) -> &str {
        &self.props().name
    }

    pub fn description(&self) -> Option<&str> {
        self.props().description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.props().is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.props().created_at
    }

    pub fn to_object(&self) -> DomainResult<Map<String, Value>> {
        self.entity.to_object()
    }

    /// Replace name and description together. Nothing changes if either is invalid.
    pub fn update(&mut self, name: impl Into<String>, description: Option<String>) -> DomainResult<()> {
        let name = name.into();
        Self::validate(&name, description.as_deref(), self.is_active())?;

        let props = self.entity.props_mut();
        props.name = name;
        props.description = description;
        tracing::debug!(id = %self.entity.id(), "category updated");
        Ok(())
    }

    /// `None` clears the description.
    pub fn set_description(&mut self, description: Option<String>) -> DomainResult<()> {
        ValidatorRules::values(description.as_deref(), "description").string()?;
        self.entity.props_mut().description = description;
        Ok(())
    }

    pub fn activate(&mut self) {
        self.entity.props_mut().is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.entity.props_mut().is_active = false;
    }

    fn validate(name: &str, description: Option<&str>, is_active: bool) -> DomainResult<()> {
        ValidatorRules::values(name, "name")
            .required()?
            .string()?
            .max_length(NAME_MAX_LENGTH)?;
        ValidatorRules::values(description, "description").string()?;
        ValidatorRules::values(is_active, "is_active").boolean()?;
        Ok(())
    }
}
