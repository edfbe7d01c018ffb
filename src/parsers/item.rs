//! Resource object parsing and relation resolution.

use serde_json::{Map, Value};

use super::guards::{expect_object, reject_reserved, required_string};
use super::{LinksParser, MetaParser};
use crate::config::{CardinalityPolicy, ParserConfig};
use crate::error::{JsonKind, ValidationError};
use crate::model::{
    HasManyRelation, HasOneRelation, Item, ItemKey, LinkSource, Links, Meta, MorphToManyRelation,
    MorphToRelation, Relation,
};
use crate::schema::{DeclaredRelation, Prototype, TypeSchema};

const RESOURCE_OBJECT: &str = "Resource object";
const RESOURCE_IDENTIFIER: &str = "Resource identifier object";

const RESERVED_IN_ATTRIBUTES: [&str; 4] = ["type", "id", "relationships", "links"];
const RESERVED_IN_RELATIONSHIPS: [&str; 2] = ["type", "id"];

/// The resource linkage found in a relationship's `data` member.
#[derive(Debug)]
enum Linkage {
    /// No `data` member.
    Omitted,
    /// `"data": null`
    Null,
    /// A single resource identifier.
    One(ItemKey),
    /// An array of resource identifiers, possibly empty.
    Many(Vec<ItemKey>),
}

impl Linkage {
    const fn shape(&self) -> JsonKind {
        match self {
            Self::Omitted | Self::Null => JsonKind::Null,
            Self::One(_) => JsonKind::Object,
            Self::Many(_) => JsonKind::Array,
        }
    }
}

/// The parts of a relationship parsed independently of its linkage.
struct RelationshipParts {
    links: Option<Links>,
    meta: Option<Meta>,
    omitted: bool,
}

/// Parses resource objects into [`Item`]s.
///
/// Validation stops at the first violation. Relationships are resolved to a
/// [`Relation`] variant by asking the [`TypeSchema`] for the declared
/// relations of the resource's type:
///
/// - declared `HasOne` → [`Relation::HasOne`]
/// - declared `HasMany` → [`Relation::HasMany`]
/// - undeclared with a single identifier, `null` or no data → [`Relation::MorphTo`]
/// - undeclared with an array of identifiers → [`Relation::MorphToMany`]
///
/// Related items are stubs holding only a type and id.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{ItemParser, Prototype, RelationKind, TypeMapper};
/// use serde_json::json;
///
/// let mut mapper = TypeMapper::new();
/// mapper.set_mapping("articles", Prototype::new().has_one("author", "people"));
///
/// let parser = ItemParser::new(&mapper);
/// let item = parser
///     .parse(&json!({
///         "type": "articles",
///         "id": "1",
///         "relationships": {
///             "author": {"data": {"type": "people", "id": "9"}},
///             "tags": {"data": [{"type": "tags", "id": "2"}]}
///         }
///     }))
///     .unwrap();
///
/// assert_eq!(item.relation("author").unwrap().kind(), RelationKind::HasOne);
/// assert_eq!(item.relation("tags").unwrap().kind(), RelationKind::MorphToMany);
/// ```
#[derive(Clone, Debug)]
pub struct ItemParser<S> {
    schema: S,
    links_parser: LinksParser,
    meta_parser: MetaParser,
    config: ParserConfig,
}

impl<S: TypeSchema> ItemParser<S> {
    /// Creates a parser with the default [`ParserConfig`].
    #[must_use]
    pub fn new(schema: S) -> Self {
        Self::with_config(schema, ParserConfig::default())
    }

    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn with_config(schema: S, config: ParserConfig) -> Self {
        Self {
            schema,
            links_parser: LinksParser::new(),
            meta_parser: MetaParser::new(),
            config,
        }
    }

    /// Returns the type schema.
    #[must_use]
    pub const fn schema(&self) -> &S {
        &self.schema
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a resource object into an [`Item`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found in `raw`.
    pub fn parse(&self, raw: &Value) -> Result<Item, ValidationError> {
        let object = expect_object(raw, RESOURCE_OBJECT)?;
        let item_type = required_string(object, "type", RESOURCE_OBJECT)?;
        let id = required_string(object, "id", RESOURCE_OBJECT)?;

        let attributes = match object.get("attributes") {
            Some(attributes) => parse_attributes(attributes)?,
            None => Map::new(),
        };

        let relationships = object
            .get("relationships")
            .map(parse_relationships)
            .transpose()?;

        let mut item = Item::new(item_type, id).with_attributes(attributes);

        if let Some(relationships) = relationships {
            if let Some(name) = relationships
                .keys()
                .find(|name| item.attributes().contains_key(name.as_str()))
            {
                return Err(ValidationError::DuplicateName { name: name.clone() });
            }

            if let Some(limit) = self.config.max_relationships() {
                if relationships.len() > limit {
                    return Err(ValidationError::TooManyRelationships {
                        count: relationships.len(),
                        limit,
                    });
                }
            }

            let prototype = if self.schema.has_mapping(item_type) {
                self.schema.prototype(item_type)
            } else {
                None
            };

            for (name, relationship) in relationships {
                let relation = self.parse_relationship(name, relationship, prototype)?;
                item.set_relation(name.as_str(), relation);
            }
        }

        if let Some(links) = object.get("links") {
            item = item.with_links(self.links_parser.parse(links, LinkSource::Item)?);
        }

        if let Some(meta) = object.get("meta") {
            item = item.with_meta(self.meta_parser.parse(meta)?);
        }

        tracing::debug!(
            item_type = %item.item_type(),
            id = %item.id(),
            relations = item.relations().len(),
            "Parsed resource object"
        );

        Ok(item)
    }

    /// Parses a resource identifier object into its `(type, id)` key.
    ///
    /// Errors name the context "Resource identifier object" rather than
    /// "Resource object", so a failure inside relationship data can be told
    /// apart from a failure in the resource itself.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `raw` is not an object or its `type`
    /// or `id` is missing, not a string, or empty.
    pub fn parse_identifier(&self, raw: &Value) -> Result<ItemKey, ValidationError> {
        parse_identifier(raw)
    }

    fn parse_relationship(
        &self,
        name: &str,
        raw: &Value,
        prototype: Option<&Prototype>,
    ) -> Result<Relation, ValidationError> {
        let object = expect_object(raw, &format!("Relationship `{name}`"))?;

        if !object.contains_key("links")
            && !object.contains_key("data")
            && !object.contains_key("meta")
        {
            return Err(ValidationError::EmptyRelationship {
                name: name.to_string(),
            });
        }

        let links = object
            .get("links")
            .map(|links| self.links_parser.parse(links, LinkSource::Relationship))
            .transpose()?;
        let meta = object
            .get("meta")
            .map(|meta| self.meta_parser.parse(meta))
            .transpose()?;
        let linkage = parse_linkage(name, object.get("data"))?;

        let parts = RelationshipParts {
            links,
            meta,
            omitted: matches!(linkage, Linkage::Omitted),
        };

        self.resolve_relation(name, linkage, parts, prototype)
    }

    fn resolve_relation(
        &self,
        name: &str,
        linkage: Linkage,
        parts: RelationshipParts,
        prototype: Option<&Prototype>,
    ) -> Result<Relation, ValidationError> {
        let Some(declared) = prototype.and_then(|p| p.declared_relation(name)) else {
            tracing::debug!(
                relation = %name,
                shape = %linkage.shape(),
                "Inferring relation from data shape"
            );
            return Ok(infer_relation(linkage, parts));
        };

        tracing::debug!(
            relation = %name,
            declared = %declared.kind(),
            item_type = %declared.item_type(),
            "Resolving declared relation"
        );

        match (declared, linkage) {
            (DeclaredRelation::HasOne { item_type }, Linkage::One(key)) => {
                warn_on_unexpected_type(name, item_type, &key);
                Ok(Relation::HasOne(HasOneRelation {
                    item_type: item_type.clone(),
                    included: Some(key.into()),
                    links: parts.links,
                    meta: parts.meta,
                    omitted: parts.omitted,
                }))
            }
            (DeclaredRelation::HasOne { item_type }, Linkage::Omitted | Linkage::Null) => {
                Ok(Relation::HasOne(HasOneRelation {
                    item_type: item_type.clone(),
                    included: None,
                    links: parts.links,
                    meta: parts.meta,
                    omitted: parts.omitted,
                }))
            }
            (DeclaredRelation::HasMany { item_type }, Linkage::Many(keys)) => {
                for key in &keys {
                    warn_on_unexpected_type(name, item_type, key);
                }
                Ok(Relation::HasMany(HasManyRelation {
                    item_type: item_type.clone(),
                    included: keys.into_iter().map(Item::from).collect(),
                    links: parts.links,
                    meta: parts.meta,
                    omitted: parts.omitted,
                }))
            }
            (DeclaredRelation::HasMany { item_type }, Linkage::Omitted | Linkage::Null) => {
                Ok(Relation::HasMany(HasManyRelation {
                    item_type: item_type.clone(),
                    included: Vec::new(),
                    links: parts.links,
                    meta: parts.meta,
                    omitted: parts.omitted,
                }))
            }
            (declared, linkage) => match self.config.cardinality_policy() {
                CardinalityPolicy::Reject => Err(ValidationError::CardinalityMismatch {
                    name: name.to_string(),
                    declared: declared.kind(),
                    given: linkage.shape(),
                }),
                CardinalityPolicy::Infer => {
                    tracing::warn!(
                        relation = %name,
                        declared = %declared.kind(),
                        shape = %linkage.shape(),
                        "Relationship data does not match its declaration, inferring from shape"
                    );
                    Ok(infer_relation(linkage, parts))
                }
            },
        }
    }
}

fn parse_attributes(raw: &Value) -> Result<Map<String, Value>, ValidationError> {
    let attributes = expect_object(raw, "Resource property `attributes`")?;
    reject_reserved(attributes, &RESERVED_IN_ATTRIBUTES, "attributes")?;
    Ok(attributes.clone())
}

fn parse_relationships(raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    let relationships = expect_object(raw, "Resource property `relationships`")?;
    reject_reserved(relationships, &RESERVED_IN_RELATIONSHIPS, "relationships")?;
    Ok(relationships)
}

fn parse_identifier(raw: &Value) -> Result<ItemKey, ValidationError> {
    let object = expect_object(raw, RESOURCE_IDENTIFIER)?;
    let item_type = required_string(object, "type", RESOURCE_IDENTIFIER)?;
    let id = required_string(object, "id", RESOURCE_IDENTIFIER)?;
    Ok(ItemKey::new(item_type, id))
}

fn parse_linkage(name: &str, data: Option<&Value>) -> Result<Linkage, ValidationError> {
    match data {
        None => Ok(Linkage::Omitted),
        Some(Value::Null) => Ok(Linkage::Null),
        Some(identifier @ Value::Object(_)) => parse_identifier(identifier).map(Linkage::One),
        Some(Value::Array(identifiers)) => identifiers
            .iter()
            .map(parse_identifier)
            .collect::<Result<Vec<_>, _>>()
            .map(Linkage::Many),
        Some(other) => Err(ValidationError::InvalidLinkage {
            name: name.to_string(),
            given: JsonKind::of(other),
        }),
    }
}

/// Resolves an undeclared relation from the shape of its data.
///
/// Without data there is no cardinality evidence; such relations become an
/// empty `MorphTo`.
fn infer_relation(linkage: Linkage, parts: RelationshipParts) -> Relation {
    match linkage {
        Linkage::Omitted | Linkage::Null => Relation::MorphTo(MorphToRelation {
            included: None,
            links: parts.links,
            meta: parts.meta,
            omitted: parts.omitted,
        }),
        Linkage::One(key) => Relation::MorphTo(MorphToRelation {
            included: Some(key.into()),
            links: parts.links,
            meta: parts.meta,
            omitted: parts.omitted,
        }),
        Linkage::Many(keys) => Relation::MorphToMany(MorphToManyRelation {
            included: keys.into_iter().map(Item::from).collect(),
            links: parts.links,
            meta: parts.meta,
            omitted: parts.omitted,
        }),
    }
}

fn warn_on_unexpected_type(name: &str, expected: &str, key: &ItemKey) {
    if key.item_type != expected {
        tracing::warn!(
            relation = %name,
            expected = %expected,
            given = %key.item_type,
            "Related resource type differs from the declared type"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RelationKind;
    use crate::schema::TypeMapper;
    use serde_json::json;

    fn mapper() -> TypeMapper {
        let mut mapper = TypeMapper::new();
        mapper
            .set_mapping(
                "master",
                Prototype::new()
                    .has_one("child", "child")
                    .has_one("empty", "child")
                    .has_many("children", "child"),
            )
            .set_mapping("child", Prototype::new());
        mapper
    }

    #[test]
    fn test_parses_minimal_resource() {
        let parser = ItemParser::new(TypeMapper::new());
        let raw = json!({"type": "master", "id": "1"});
        let item = parser.parse(&raw).unwrap();

        assert_eq!(item.key(), ItemKey::new("master", "1"));
        assert!(item.is_stub());
    }

    #[test]
    fn test_linkage_shapes() {
        assert!(matches!(parse_linkage("foo", None), Ok(Linkage::Omitted)));
        assert!(matches!(parse_linkage("foo", Some(&Value::Null)), Ok(Linkage::Null)));
        assert!(matches!(
            parse_linkage("foo", Some(&json!({"type": "a", "id": "1"}))),
            Ok(Linkage::One(_))
        ));
        assert!(matches!(
            parse_linkage("foo", Some(&json!([]))),
            Ok(Linkage::Many(ref keys)) if keys.is_empty()
        ));
        assert!(matches!(
            parse_linkage("foo", Some(&json!("a"))),
            Err(ValidationError::InvalidLinkage {
                given: JsonKind::String,
                ..
            })
        ));
    }

    #[test]
    fn test_identifier_in_array_must_be_object() {
        let result = parse_linkage("foo", Some(&json!([{"type": "a", "id": "1"}, 5])));
        assert!(matches!(
            result,
            Err(ValidationError::NotAnObject {
                given: JsonKind::Number,
                ..
            })
        ));
    }

    #[test]
    fn test_declared_relations_resolve_to_fixed_type_variants() {
        let parser = ItemParser::new(mapper());
        let item = parser
            .parse(&json!({
                "type": "master",
                "id": "1",
                "relationships": {
                    "child": {"data": {"type": "child", "id": "2"}},
                    "empty": {"data": null},
                    "children": {
                        "data": [{"type": "child", "id": "3"}, {"type": "child", "id": "4"}]
                    }
                }
            }))
            .unwrap();

        let child = item.relation("child").unwrap();
        assert_eq!(child.kind(), RelationKind::HasOne);
        assert_eq!(child.included_keys(), vec![ItemKey::new("child", "2")]);

        let empty = item.relation("empty").unwrap();
        assert_eq!(empty.kind(), RelationKind::HasOne);
        assert_eq!(empty.included_items().count(), 0);
        assert!(!empty.is_omitted());

        let children = item.relation("children").unwrap();
        assert_eq!(children.kind(), RelationKind::HasMany);
        assert_eq!(children.declared_type(), Some("child"));
        assert_eq!(children.included_items().count(), 2);
    }

    #[test]
    fn test_declared_has_many_without_data_is_empty_and_omitted() {
        let parser = ItemParser::new(mapper());
        let item = parser
            .parse(&json!({
                "type": "master",
                "id": "1",
                "relationships": {
                    "children": {"links": {"related": "http://x/master/1/children"}}
                }
            }))
            .unwrap();

        let children = item.relation("children").unwrap();
        assert_eq!(children.kind(), RelationKind::HasMany);
        assert_eq!(children.included_items().count(), 0);
        assert!(children.is_omitted());
        assert!(children.links().unwrap().contains("related"));
    }

    #[test]
    fn test_cardinality_mismatch_is_rejected_by_default() {
        let parser = ItemParser::new(mapper());
        let result = parser.parse(&json!({
            "type": "master",
            "id": "1",
            "relationships": {
                "child": {"data": [{"type": "child", "id": "2"}]}
            }
        }));

        assert_eq!(
            result,
            Err(ValidationError::CardinalityMismatch {
                name: "child".to_string(),
                declared: RelationKind::HasOne,
                given: JsonKind::Array,
            })
        );
    }

    #[test]
    fn test_cardinality_mismatch_is_inferred_when_configured() {
        let config = ParserConfig::builder()
            .cardinality_policy(CardinalityPolicy::Infer)
            .build()
            .unwrap();
        let parser = ItemParser::with_config(mapper(), config);
        let item = parser
            .parse(&json!({
                "type": "master",
                "id": "1",
                "relationships": {
                    "child": {"data": [{"type": "child", "id": "2"}]},
                    "children": {"data": {"type": "child", "id": "3"}}
                }
            }))
            .unwrap();

        let child = item.relation("child").unwrap();
        assert_eq!(child.kind(), RelationKind::MorphToMany);

        let children = item.relation("children").unwrap();
        assert_eq!(children.kind(), RelationKind::MorphTo);
    }

    #[test]
    fn test_undeclared_relation_without_data_is_empty_morph_to() {
        let parser = ItemParser::new(TypeMapper::new());
        let item = parser
            .parse(&json!({
                "type": "master",
                "id": "1",
                "relationships": {
                    "nothing": {"data": null},
                    "unloaded": {"meta": {"count": 0}}
                }
            }))
            .unwrap();

        let nothing = item.relation("nothing").unwrap();
        assert_eq!(nothing.kind(), RelationKind::MorphTo);
        assert_eq!(nothing.included_items().count(), 0);
        assert!(!nothing.is_omitted());

        let unloaded = item.relation("unloaded").unwrap();
        assert_eq!(unloaded.kind(), RelationKind::MorphTo);
        assert!(unloaded.is_omitted());
        assert!(unloaded.meta().is_some());
    }

    #[test]
    fn test_relationship_limit() {
        let config = ParserConfig::builder()
            .max_relationships(1)
            .build()
            .unwrap();
        let parser = ItemParser::with_config(TypeMapper::new(), config);
        let result = parser.parse(&json!({
            "type": "master",
            "id": "1",
            "relationships": {
                "a": {"data": null},
                "b": {"data": null}
            }
        }));

        assert_eq!(
            result,
            Err(ValidationError::TooManyRelationships { count: 2, limit: 1 })
        );
    }

    #[test]
    fn test_parse_identifier() {
        let parser = ItemParser::new(TypeMapper::new());

        assert_eq!(
            parser.parse_identifier(&json!({"type": "child", "id": "5", "meta": {}})),
            Ok(ItemKey::new("child", "5"))
        );
        assert!(matches!(
            parser.parse_identifier(&json!({"type": "child"})),
            Err(ValidationError::MissingMember { member: "id", .. })
        ));
    }
}
