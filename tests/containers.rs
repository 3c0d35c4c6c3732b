//! End-to-end contracts for owned containers, property slots, and
//! reference resolution, exercised through the Location worked example.

use std::collections::HashMap;

use sbol_model::{
    vocab, Cardinality, Entity, EntityIndex, Error, Identified, IntProperty, Literal, Location,
    OwnedLocation, Range, Uri, ValidationRule,
};

fn locations() -> OwnedLocation {
    OwnedLocation::new(vocab::LOCATIONS_PROPERTY, Cardinality::many(0))
}

// ============================================================================
// OwnedLocation factories and lookups
// ============================================================================

#[test]
fn create_then_get_round_trips_by_uri_and_attributes() {
    let mut c = locations();
    {
        let created = c.create_range(Uri::new("http://example.org/r1")).unwrap();
        created.set_start(10).unwrap();
        created.set_end(20).unwrap();
    }

    let got = c.get_range("http://example.org/r1").unwrap();
    assert_eq!(got.uri().as_str(), "http://example.org/r1");
    assert_eq!((got.start(), got.end()), (10, 20));
    assert_eq!(*got, {
        let mut expected = Range::new("http://example.org/r1", 1, 2);
        expected.set_start(10).unwrap();
        expected.set_end(20).unwrap();
        expected
    });
}

#[test]
fn get_cut_on_empty_container_misses() {
    let c = locations();
    let err = c.get_cut("nonexistent").unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            uri: "nonexistent".to_string(),
        }
    );
}

#[test]
fn get_range_rejects_a_cut() {
    let mut c = locations();
    c.create_cut(Uri::new("http://example.org/c1")).unwrap();
    let err = c.get_range("http://example.org/c1").unwrap_err();
    assert!(matches!(err, Error::Type { .. }));
    // The generic typed lookup agrees with the downcast path.
    let err = c
        .get_typed("http://example.org/c1", vocab::RANGE)
        .unwrap_err();
    assert!(matches!(err, Error::Type { .. }));
}

#[test]
fn factories_enforce_the_upper_bound() {
    let mut c = OwnedLocation::new(vocab::LOCATIONS_PROPERTY, Cardinality::optional());
    c.create_generic_location(Uri::new("http://example.org/g1"))
        .unwrap();
    let err = c.create_cut(Uri::new("http://example.org/c1")).unwrap_err();
    assert!(matches!(err, Error::Cardinality { .. }));
    assert_eq!(c.len(), 1);
}

#[test]
fn duplicate_uri_rejected_across_kinds() {
    let mut c = locations();
    c.create_range(Uri::new("http://example.org/l1")).unwrap();
    let err = c.create_cut(Uri::new("http://example.org/l1")).unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateUri {
            uri: "http://example.org/l1".to_string(),
        }
    );
}

#[test]
fn factories_accept_any_uri_form() {
    let mut c = locations();
    c.create_range("http://example.org/r1").unwrap();
    c.create_cut(Uri::new("http://example.org/c1")).unwrap();
    c.create_generic_location(String::from("http://example.org/g1"))
        .unwrap();
    assert_eq!(c.len(), 3);
}

#[test]
fn empty_uri_selects_the_sole_location() {
    let mut c = locations();
    c.create_cut(Uri::new("http://example.org/c1")).unwrap();
    assert_eq!(c.get_cut("").unwrap().at(), 1);
}

#[test]
fn removal_transfers_ownership_for_reinsertion_elsewhere() {
    let mut first = locations();
    first.create_range(Uri::new("http://example.org/r1")).unwrap();
    first.create_cut(Uri::new("http://example.org/c1")).unwrap();

    let detached: Location = first.remove("http://example.org/r1").unwrap();
    assert_eq!(first.len(), 1);

    let mut second = locations();
    second.insert(detached).unwrap();
    assert_eq!(
        second.get_range("http://example.org/r1").unwrap().start(),
        1
    );
}

#[test]
fn iteration_preserves_insertion_order_across_kinds() {
    let mut c = locations();
    c.create_range(Uri::new("http://example.org/r1")).unwrap();
    c.create_cut(Uri::new("http://example.org/c1")).unwrap();
    c.create_generic_location(Uri::new("http://example.org/g1"))
        .unwrap();

    let type_uris: Vec<&str> = c.iter().map(Entity::type_uri).collect();
    assert_eq!(
        type_uris,
        vec![vocab::RANGE, vocab::CUT, vocab::GENERIC_LOCATION]
    );
}

// ============================================================================
// Property slots through the entity surface
// ============================================================================

#[test]
fn scalar_set_overwrites_instead_of_appending() {
    let mut c = locations();
    let cut = c.create_cut(Uri::new("http://example.org/c1")).unwrap();
    cut.set_at(5).unwrap();
    cut.set_at(9).unwrap();
    assert_eq!(cut.at(), 9);
}

#[test]
fn rejected_mutation_leaves_prior_state_unchanged() {
    fn one_based(v: &i64) -> bool {
        *v >= 1
    }
    let rule = ValidationRule {
        id: "coordinates-are-1-based",
        check: one_based,
    };
    let mut start =
        IntProperty::new(vocab::START, Cardinality::optional(), vec![rule], Some(3)).unwrap();
    let err = start.set(0).unwrap_err();
    assert_eq!(
        err,
        Error::Validation {
            predicate: vocab::START,
            rule: "coordinates-are-1-based",
        }
    );
    assert_eq!(start.get(), Some(&3));
}

#[test]
fn literal_input_coerces_per_declared_kind() {
    let mut c = locations();
    let range = c.create_range(Uri::new("http://example.org/r1")).unwrap();
    range.set_start(1).unwrap();

    let mut end = IntProperty::new(vocab::END, Cardinality::optional(), vec![], None).unwrap();
    end.set_literal(Literal::Text("44".into())).unwrap();
    assert_eq!(end.get(), Some(&44));

    let err = end.set_literal(Literal::Text("forty-four".into())).unwrap_err();
    assert!(matches!(err, Error::Type { .. }));
    assert_eq!(end.get(), Some(&44));
}

#[test]
fn annotation_slots_ride_on_every_entity() {
    let mut c = locations();
    let g = c
        .create_generic_location(Uri::new("http://example.org/g1"))
        .unwrap();
    g.identity_mut()
        .display_id_mut()
        .set("g1".to_string())
        .unwrap();
    g.identity_mut()
        .description_mut()
        .set("unresolved upstream region".to_string())
        .unwrap();
    assert_eq!(g.identity().display_id(), Some("g1"));
    assert_eq!(
        g.identity().description(),
        Some("unresolved upstream region")
    );
}

// ============================================================================
// Reference resolution against a document entity table
// ============================================================================

struct Document {
    entities: HashMap<String, Identified>,
}

impl Document {
    fn with_sequence(uri: &str) -> Self {
        let mut entities = HashMap::new();
        entities.insert(
            uri.to_string(),
            Identified::new(Uri::new(uri), vocab::SEQUENCE),
        );
        Document { entities }
    }
}

impl EntityIndex for Document {
    fn find_entity(&self, uri: &str) -> Option<&Identified> {
        self.entities.get(uri)
    }
}

#[test]
fn sequence_reference_resolves_and_survives_dangling() {
    let doc = Document::with_sequence("http://example.org/seq1");

    let mut c = locations();
    let range = c.create_range(Uri::new("http://example.org/r1")).unwrap();
    range
        .base_mut()
        .sequence_mut()
        .set(Uri::new("http://example.org/seq1"))
        .unwrap();
    assert_eq!(
        range.base().sequence().resolve(&doc).unwrap().type_uri(),
        vocab::SEQUENCE
    );

    // Point it outside the loaded document: resolution misses, the URI stays.
    range
        .base_mut()
        .sequence_mut()
        .set(Uri::new("http://example.org/other-doc/seq9"))
        .unwrap();
    assert!(matches!(
        range.base().sequence().resolve(&doc),
        Err(Error::NotFound { .. })
    ));
    assert_eq!(
        range.base().sequence().get().map(Uri::as_str),
        Some("http://example.org/other-doc/seq9")
    );
}
