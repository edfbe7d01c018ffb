//! Tests for links object parsing across every link source.

use jsonapi_client::{JsonKind, Link, LinkSource, LinksParser, ValidationError};
use serde_json::{json, Value};

const ALL_SOURCES: [LinkSource; 4] = [
    LinkSource::Document,
    LinkSource::Error,
    LinkSource::Item,
    LinkSource::Relationship,
];

/// Adds the links a source requires so only the link under test can fail.
fn with_required(source: LinkSource, mut links: serde_json::Map<String, Value>) -> Value {
    match source {
        LinkSource::Error => {
            links
                .entry("about")
                .or_insert_with(|| json!("http://example.com/about"));
        }
        LinkSource::Relationship => {
            if !links.contains_key("self") && !links.contains_key("related") {
                links.insert("related".to_string(), json!("http://example.com/related"));
            }
        }
        LinkSource::Document | LinkSource::Item => {}
    }
    Value::Object(links)
}

fn single(name: &str, value: Value) -> serde_json::Map<String, Value> {
    let mut links = serde_json::Map::new();
    links.insert(name.to_string(), value);
    links
}

#[test]
fn test_parses_relationship_links_example() {
    let links = LinksParser::new()
        .parse(
            &json!({
                "self": "http://example.com/articles/1/relationships/author",
                "related": {
                    "href": "http://example.com/articles/1/author",
                    "meta": {"count": 10}
                }
            }),
            LinkSource::Relationship,
        )
        .unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(
        links.get("self"),
        Some(&Link::new("http://example.com/articles/1/relationships/author"))
    );

    let related = links.get("related").unwrap();
    assert_eq!(related.href, "http://example.com/articles/1/author");
    assert_eq!(
        related.meta.as_ref().unwrap().get("count"),
        Some(&json!(10))
    );
}

#[test]
fn test_throws_when_links_is_not_an_object() {
    let parser = LinksParser::new();
    let cases = [
        (json!(1), JsonKind::Number),
        (json!(1.5), JsonKind::Number),
        (json!(false), JsonKind::Boolean),
        (json!(null), JsonKind::Null),
        (json!("foo"), JsonKind::String),
        (json!([]), JsonKind::Array),
    ];

    for source in ALL_SOURCES {
        for (raw, kind) in &cases {
            assert_eq!(
                parser.parse(raw, source),
                Err(ValidationError::NotAnObject {
                    context: "Links object".to_string(),
                    given: *kind,
                })
            );
        }
    }
}

#[test]
fn test_throws_when_error_links_lack_about() {
    let error = LinksParser::new()
        .parse(&json!({"self": "http://example.com"}), LinkSource::Error)
        .unwrap_err();

    assert_eq!(
        error,
        ValidationError::MissingRequiredLinks {
            link_source: LinkSource::Error,
            required: "`about`",
        }
    );
}

#[test]
fn test_throws_when_relationship_links_lack_self_and_related() {
    let error = LinksParser::new()
        .parse(
            &json!({"first": "http://example.com/1"}),
            LinkSource::Relationship,
        )
        .unwrap_err();

    assert!(error.to_string().contains("`self`, `related`"));
}

#[test]
fn test_null_is_accepted_for_ordinary_links() {
    let parser = LinksParser::new();

    for source in ALL_SOURCES {
        let links = parser
            .parse(&with_required(source, single("next", Value::Null)), source)
            .unwrap();
        assert!(links.contains("next"));
        assert_eq!(links.get("next"), None);
    }
}

#[test]
fn test_throws_when_self_or_related_is_null() {
    let parser = LinksParser::new();

    for source in ALL_SOURCES {
        for name in ["self", "related"] {
            let error = parser
                .parse(&with_required(source, single(name, Value::Null)), source)
                .unwrap_err();
            assert_eq!(
                error,
                ValidationError::InvalidLink {
                    name: name.to_string(),
                    nullable: false,
                    given: JsonKind::Null,
                }
            );
        }
    }
}

#[test]
fn test_throws_when_link_is_not_an_object_string_or_null() {
    let parser = LinksParser::new();

    for source in ALL_SOURCES {
        for value in [json!(1), json!(1.5), json!(false), json!([])] {
            let error = parser
                .parse(&with_required(source, single("next", value)), source)
                .unwrap_err();
            assert!(matches!(error, ValidationError::InvalidLink { nullable: true, .. }));
            assert!(error.to_string().contains("string or null"));
        }
    }
}

#[test]
fn test_throws_when_link_object_misses_href() {
    let parser = LinksParser::new();

    for source in ALL_SOURCES {
        let error = parser
            .parse(&with_required(source, single("next", json!({}))), source)
            .unwrap_err();
        assert_eq!(
            error,
            ValidationError::MissingHref {
                name: "next".to_string(),
            }
        );
    }
}

#[test]
fn test_throws_when_link_href_is_not_a_string() {
    let parser = LinksParser::new();

    for href in [json!(1), json!(null), json!([]), json!({})] {
        let error = parser
            .parse(&json!({"next": {"href": href}}), LinkSource::Document)
            .unwrap_err();
        assert!(matches!(
            error,
            ValidationError::InvalidMember { ref member, .. } if member == "href"
        ));
    }
}

#[test]
fn test_throws_when_link_meta_is_not_an_object() {
    let error = LinksParser::new()
        .parse(
            &json!({"next": {"href": "http://example.com", "meta": "foo"}}),
            LinkSource::Document,
        )
        .unwrap_err();

    assert!(matches!(
        error,
        ValidationError::NotAnObject {
            given: JsonKind::String,
            ..
        }
    ));
}

#[test]
fn test_empty_href_is_kept_verbatim() {
    let raw = json!({"next": {"href": ""}, "last": ""});
    let parser = LinksParser::new();
    let links = parser.parse(&raw, LinkSource::Document).unwrap();

    assert_eq!(links.get("next"), Some(&Link::new("")));
    assert_eq!(links.get("last"), Some(&Link::new("")));
}
