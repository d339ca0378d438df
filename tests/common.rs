use std::sync::Arc;

use locannot::prelude::*;

/// Subcellular localisation vocabulary used across the integration tests:
///
/// cell
///   cytoplasm
///     cytosol
///   nucleus
///     nucleoplasm
///     nucleolus
/// extracellular region
pub const LOCALISATION_ONTOLOGY_JSON: &str = r#"[
    {
        "name": "cell",
        "children": [
            {
                "name": "cytoplasm",
                "goterm": "GO:0005737",
                "children": [{"name": "cytosol"}]
            },
            {
                "name": "nucleus",
                "goterm": "GO:0005634",
                "synonyms": ["cell nucleus"],
                "children": [
                    {"name": "nucleoplasm"},
                    {"name": "nucleolus", "comment": "dense nuclear body"}
                ]
            }
        ]
    },
    {"name": "extracellular region"}
]"#;

pub fn localisation_ontology() -> Arc<Ontology> {
    let _ = pretty_env_logger::try_init();
    Arc::new(
        Ontology::from_json(LOCALISATION_ONTOLOGY_JSON.as_bytes())
            .expect("localisation ontology fixture must parse"),
    )
}
