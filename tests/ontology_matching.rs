mod common;

use std::sync::Arc;

use common::localisation_ontology;
use locannot::prelude::*;
use rstest::rstest;

fn mods(items: &[&str]) -> ModifierSet {
    items.iter().map(|s| AnnotStr::from(*s)).collect()
}

#[test]
fn fixture_ontology_is_fully_indexed() {
    let ontology = localisation_ontology();
    assert_eq!(ontology.len(), 7);
    assert_eq!(ontology.root_entries().count(), 2);

    let roots: Vec<&str> = ontology
        .root_entries()
        .map(|entry| entry.name().as_str())
        .collect();
    assert_eq!(roots, vec!["cell", "extracellular region"]);

    // every nested child is addressable, case-insensitively
    for name in ["Cytosol", "NUCLEOPLASM", "nucleolus"] {
        assert!(ontology.entry(name).is_some(), "missing entry {name}");
    }
}

#[rstest]
#[case::self_match("nucleoplasm", "nucleoplasm")]
#[case::parent("nucleoplasm", "nucleus")]
#[case::grandparent("nucleoplasm", "cell")]
#[case::sibling_branch("cytosol", "cytoplasm")]
fn specific_annotations_satisfy_broader_queries(
    #[case] annotated: &str,
    #[case] queried: &str,
) {
    let ontology = localisation_ontology();
    let annot = OntologyAnnotation::parse(annotated, &ontology).unwrap();
    assert!(annot.matches(queried, None, None, true));
}

#[rstest]
#[case::child("nucleus", "nucleoplasm")]
#[case::grandchild("cell", "cytosol")]
#[case::unrelated("nucleoplasm", "cytoplasm")]
#[case::other_root("nucleus", "extracellular region")]
fn matching_never_walks_downward(
    #[case] annotated: &str,
    #[case] queried: &str,
) {
    let ontology = localisation_ontology();
    let annot = OntologyAnnotation::parse(annotated, &ontology).unwrap();
    assert!(!annot.matches(queried, None, None, true));
}

#[test]
fn recursive_flag_gates_the_ancestor_walk() {
    let ontology = localisation_ontology();
    let collection =
        OntologyAnnotationCollection::parse("nucleoplasm", &ontology).unwrap();

    assert!(collection.matches("nucleus", None, None, true));
    assert!(!collection.matches("nucleus", None, None, false));
    assert!(collection.matches("nucleoplasm", None, None, false));
}

#[test]
fn unknown_terms_fail_collection_construction() {
    let ontology = localisation_ontology();
    assert!(matches!(
        OntologyAnnotationCollection::parse("nucleus,endosome", &ontology),
        Err(AnnotError::EntryNotFound(_))
    ));
}

#[test]
fn modifier_constraints_compose_with_hierarchy() {
    let ontology = localisation_ontology();
    let collection = OntologyAnnotationCollection::parse(
        "cytosol[points,weak],nucleolus[strong]",
        &ontology,
    )
    .unwrap();

    assert!(collection.matches("cell", Some(&mods(&["points"])), None, true));
    assert!(collection.matches("nucleus", Some(&mods(&["strong"])), None, true));
    assert!(!collection.matches("nucleus", Some(&mods(&["points"])), None, true));
    assert!(!collection.matches("cell", None, Some(&mods(&["points", "strong"])), true));
}

#[test]
fn filtered_and_stripped_collections_stay_ontology_aware() {
    let ontology = localisation_ontology();
    let collection = OntologyAnnotationCollection::parse(
        "cytosol[points,weak],nucleolus[strong]",
        &ontology,
    )
    .unwrap();

    let weak = collection.filter_by_modifiers(Some(&mods(&["weak"])), None);
    assert_eq!(weak.len(), 1);
    assert!(weak.matches("cytoplasm", None, None, true));
    assert!(Arc::ptr_eq(weak.ontology(), &ontology));

    let stripped = collection.strip_modifiers(Some(&mods(&["weak", "strong"])));
    assert!(stripped.matches("nucleus", None, None, true));
    assert!(!stripped.matches("nucleus", Some(&mods(&["strong"])), None, true));
}

#[test]
fn union_and_intersection_preserve_the_shared_ontology() {
    let ontology = localisation_ontology();
    let a = OntologyAnnotationCollection::parse(
        "nucleoplasm[weak],cytosol",
        &ontology,
    )
    .unwrap();
    let b =
        OntologyAnnotationCollection::parse("cytosol,nucleolus", &ontology)
            .unwrap();

    let union = a.union(&b).unwrap();
    assert_eq!(union.len(), 3);
    assert!(Arc::ptr_eq(union.ontology(), &ontology));
    assert!(union.matches("nucleus", None, None, true));

    let intersection = a.intersection(&b).unwrap();
    assert_eq!(intersection.len(), 1);
    assert!(Arc::ptr_eq(intersection.ontology(), &ontology));
    assert!(intersection.matches("cytoplasm", None, None, true));
}

#[test]
fn set_operations_obey_set_laws() {
    let ontology = localisation_ontology();
    let a = OntologyAnnotationCollection::parse(
        "nucleoplasm[weak],cytosol",
        &ontology,
    )
    .unwrap();
    let b =
        OntologyAnnotationCollection::parse("cytosol,nucleolus", &ontology)
            .unwrap();
    let c = OntologyAnnotationCollection::parse("nucleus", &ontology).unwrap();

    assert_eq!(a.union(&b).unwrap(), b.union(&a).unwrap());
    assert_eq!(a.intersection(&b).unwrap(), b.intersection(&a).unwrap());
    assert_eq!(
        a.union(&b).unwrap().union(&c).unwrap(),
        a.union(&b.union(&c).unwrap()).unwrap()
    );
    assert_eq!(
        a.intersection(&b).unwrap().intersection(&c).unwrap(),
        a.intersection(&b.intersection(&c).unwrap()).unwrap()
    );
    assert_eq!(a.union(&a).unwrap(), a);
    assert_eq!(a.intersection(&a).unwrap(), a);
}

#[test]
fn distinct_ontology_instances_cannot_be_combined() {
    let first = localisation_ontology();
    let second = localisation_ontology();

    let a = OntologyAnnotationCollection::parse("nucleus", &first).unwrap();
    let b = OntologyAnnotationCollection::parse("nucleus", &second).unwrap();

    assert!(matches!(a.union(&b), Err(AnnotError::OntologyMismatch)));
    assert!(matches!(
        a.intersection(&b),
        Err(AnnotError::OntologyMismatch)
    ));
}

#[test]
fn scenario_from_the_localisation_workflow() {
    let ontology = localisation_ontology();

    // an imaging annotation made at high specificity
    let observed = OntologyAnnotationCollection::parse(
        "nucleoplasm[points,weak],cytosol[weak]",
        &ontology,
    )
    .unwrap();

    // a coarse query over the broad compartments still finds it
    assert!(observed.matches("nucleus", None, None, true));
    assert!(observed.matches("cytoplasm", None, None, true));
    assert!(!observed.matches("extracellular region", None, None, true));

    // containment stays literal: the regex query runs over member terms
    assert!(observed.contains_str("nucleo.*[points]").unwrap());
    assert!(!observed.contains_str("nucleus").unwrap());
}
