use std::collections::BTreeSet;
use std::sync::Arc;

use crate::app::AppServices;
use crate::domain::entities::chemical::{ChemicalId, ChemicalRecord};
use crate::domain::entities::element::{ElementCategory, PeriodicCell};
use crate::domain::entities::query::{QueryCriteria, SortKey};
use crate::infra::catalog::details::parse_chemical_details;
use crate::infra::catalog::repo::StaticCatalogRepo;
use crate::infra::import::csv::{parse_chemicals_csv, parse_elements_csv};
use crate::ui::state::listing_state::ListingSession;
use crate::usecase::ports::catalog::{CatalogError, CatalogRepository};
use crate::usecase::services::query_service::{compute_result_page, matches_criteria};
use crate::usecase::services::reference_service::{build_periodic_grid, PERIODIC_COLUMNS};
use crate::*;

fn sample_catalog() -> Vec<ChemicalRecord> {
    StaticCatalogRepo::load()
        .expect("embedded catalog should load")
        .list_chemicals()
        .expect("listing should succeed")
}

fn names(records: &[ChemicalRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

fn criteria_with(update: impl FnOnce(&mut QueryCriteria)) -> QueryCriteria {
    let mut criteria = QueryCriteria::default();
    update(&mut criteria);
    criteria
}

#[test]
fn embedded_catalog_lists_six_substances_by_name() {
    let catalog = sample_catalog();

    let page = compute_result_page(&catalog, &QueryCriteria::default(), PAGE_SIZE);

    assert_eq!(
        names(&page.items),
        vec![
            "Acetone",
            "Ammonia",
            "Benzene",
            "Ethanol",
            "Sodium Chloride",
            "Sulfuric Acid"
        ]
    );
    assert_eq!(page.total_count, catalog.len());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
}

#[test]
fn search_matches_names_and_formulas_as_substrings() {
    let catalog = sample_catalog();

    let ac = compute_result_page(
        &catalog,
        &criteria_with(|c| c.search_term = "ac".to_string()),
        PAGE_SIZE,
    );
    // "NaCl" contains "ac" once case is folded.
    assert_eq!(
        names(&ac.items),
        vec!["Acetone", "Sodium Chloride", "Sulfuric Acid"]
    );

    let acet = compute_result_page(
        &catalog,
        &criteria_with(|c| c.search_term = "ACET".to_string()),
        PAGE_SIZE,
    );
    assert_eq!(names(&acet.items), vec!["Acetone"]);
    assert_eq!(acet.total_count, 1);
}

#[test]
fn search_matches_formula_ignoring_case_and_cas_verbatim() {
    let catalog = sample_catalog();

    let by_formula = compute_result_page(
        &catalog,
        &criteria_with(|c| c.search_term = "nacl".to_string()),
        PAGE_SIZE,
    );
    assert_eq!(names(&by_formula.items), vec!["Sodium Chloride"]);

    let by_cas = compute_result_page(
        &catalog,
        &criteria_with(|c| c.search_term = "7664-".to_string()),
        PAGE_SIZE,
    );
    assert_eq!(names(&by_cas.items), vec!["Ammonia", "Sulfuric Acid"]);
}

#[test]
fn cas_match_is_case_sensitive_unlike_name_and_formula() {
    let record = ChemicalRecord {
        id: ChemicalId::from("x"),
        name: "Example".to_string(),
        formula: Some("XyZ".to_string()),
        cas_number: Some("AB-12".to_string()),
        molecular_weight: None,
        tags: Vec::new(),
    };
    let search = |term: &str| criteria_with(|c| c.search_term = term.to_string());

    assert!(matches_criteria(&record, &search("AB-")));
    assert!(!matches_criteria(&record, &search("ab-")));
    assert!(matches_criteria(&record, &search("xyz")));
    assert!(matches_criteria(&record, &search("EXAMPLE")));
}

#[test]
fn flammable_filter_keeps_three_substances() {
    let catalog = sample_catalog();
    let criteria = criteria_with(|c| {
        c.active_tag_filters.insert("Flammable".to_string());
    });

    let page = compute_result_page(&catalog, &criteria, PAGE_SIZE);

    assert_eq!(names(&page.items), vec!["Acetone", "Benzene", "Ethanol"]);
    assert_eq!(page.total_count, 3);
}

#[test]
fn tag_filters_combine_with_and() {
    let catalog = sample_catalog();
    let criteria = criteria_with(|c| {
        c.active_tag_filters = BTreeSet::from(["Flammable".to_string(), "Toxic".to_string()]);
    });
    assert_eq!(compute_result_page(&catalog, &criteria, PAGE_SIZE).total_count, 0);

    let criteria = criteria_with(|c| {
        c.active_tag_filters = BTreeSet::from(["Corrosive".to_string(), "Toxic".to_string()]);
    });
    let page = compute_result_page(&catalog, &criteria, PAGE_SIZE);
    assert_eq!(names(&page.items), vec!["Ammonia"]);
}

#[test]
fn filtering_is_idempotent() {
    let catalog = sample_catalog();
    let criteria = criteria_with(|c| {
        c.search_term = "e".to_string();
        c.active_tag_filters.insert("Flammable".to_string());
    });

    let once = compute_result_page(&catalog, &criteria, PAGE_SIZE);
    let twice = compute_result_page(&once.items, &criteria, PAGE_SIZE);

    assert_eq!(once, twice);
}

#[test]
fn molecular_weight_descending_order() {
    let catalog = sample_catalog();
    let criteria = criteria_with(|c| c.sort_key = SortKey::MolecularWeightDesc);

    let page = compute_result_page(&catalog, &criteria, PAGE_SIZE);

    assert_eq!(
        names(&page.items),
        vec![
            "Sulfuric Acid",
            "Benzene",
            "Sodium Chloride",
            "Acetone",
            "Ethanol",
            "Ammonia"
        ]
    );
}

#[test]
fn name_descending_reverses_ascending_without_ties() {
    let catalog = sample_catalog();

    let asc = compute_result_page(&catalog, &QueryCriteria::default(), PAGE_SIZE);
    let desc = compute_result_page(
        &catalog,
        &criteria_with(|c| c.sort_key = SortKey::NameDesc),
        PAGE_SIZE,
    );

    let mut reversed = names(&asc.items);
    reversed.reverse();
    assert_eq!(names(&desc.items), reversed);
}

#[test]
fn pages_cover_the_filtered_set_in_order() {
    let catalog = sample_catalog();
    let page_of = |page: usize| {
        compute_result_page(&catalog, &criteria_with(|c| c.page = page), 4)
    };

    let first = page_of(1);
    let second = page_of(2);

    assert_eq!(first.total_pages, 2);
    assert_eq!(names(&first.items), vec!["Acetone", "Ammonia", "Benzene", "Ethanol"]);
    assert_eq!(names(&second.items), vec!["Sodium Chloride", "Sulfuric Acid"]);
    assert!(page_of(3).items.is_empty());
}

#[test]
fn session_rejects_pages_outside_range() {
    let catalog = sample_catalog();
    let mut session = ListingSession::new("", 4);
    let total_pages = session.result(&catalog).total_pages;

    assert!(!session.go_to_page(total_pages + 1, total_pages));
    assert!(!session.go_to_page(0, total_pages));
    assert_eq!(session.page(), 1);

    assert!(session.go_to_page(total_pages, total_pages));
    assert_eq!(session.result(&catalog).page, 2);
}

#[test]
fn session_resets_page_on_any_criteria_change() {
    let mut session = ListingSession::new("", 1);

    assert!(session.go_to_page(3, 6));
    session.set_search_term("a");
    assert_eq!(session.page(), 1);

    assert!(session.go_to_page(2, 6));
    session.set_tag_filter("Flammable", true);
    assert_eq!(session.page(), 1);
    assert!(session.is_tag_filter_active("Flammable"));

    assert!(session.go_to_page(2, 6));
    session.set_sort_key(SortKey::MolecularWeightAsc);
    assert_eq!(session.page(), 1);

    assert!(session.go_to_page(2, 6));
    session.set_tag_filter("Flammable", false);
    assert_eq!(session.page(), 1);
    assert!(!session.is_tag_filter_active("Flammable"));
}

#[test]
fn session_seeds_search_from_initial_term() {
    let session = ListingSession::new("Benzene", PAGE_SIZE);

    assert_eq!(session.criteria().search_term, "Benzene");
    assert_eq!(session.page_size(), PAGE_SIZE);
    assert_eq!(names(&session.result(&sample_catalog()).items), vec!["Benzene"]);
}

#[test]
fn services_query_through_the_repository() {
    let repo = Arc::new(StaticCatalogRepo::load().expect("embedded catalog should load"));
    let services = AppServices::with_repo(repo);

    let criteria = criteria_with(|c| c.search_term = "ethanol".to_string());
    let page = services
        .query
        .query_page(&criteria, PAGE_SIZE)
        .expect("query should succeed");
    assert_eq!(names(&page.items), vec!["Ethanol"]);

    let detail = services
        .detail
        .find_detail(&ChemicalId::from("4"))
        .expect("lookup should succeed")
        .expect("sulfuric acid should have details");
    assert_eq!(detail.name, "Sulfuric Acid");
    let rating = detail.nfpa_rating.expect("nfpa rating should be present");
    assert_eq!(rating.special.as_deref(), Some("W"));

    let missing = services
        .detail
        .find_detail(&ChemicalId::from("999"))
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

#[test]
fn every_catalog_entry_has_details() {
    let repo = StaticCatalogRepo::load().expect("embedded catalog should load");

    for record in repo.list_chemicals().expect("listing should succeed") {
        let detail = repo
            .find_detail(&record.id)
            .expect("lookup should succeed")
            .unwrap_or_else(|| panic!("missing details for {}", record.id));
        assert_eq!(detail.name, record.name);
    }
}

#[test]
fn sodium_chloride_has_no_hazard_pictograms() {
    let repo = StaticCatalogRepo::load().expect("embedded catalog should load");

    let detail = repo
        .find_detail(&ChemicalId::from("3"))
        .expect("lookup should succeed")
        .expect("sodium chloride should have details");

    assert!(detail.safety_pictograms.is_empty());
    assert!(detail.hazard_statements.is_empty());
}

#[test]
fn chemicals_csv_requires_every_column() {
    let err = parse_chemicals_csv("id,name,formula,cas_number,tags\n1,A,,,\n")
        .expect_err("missing column should fail");

    assert!(matches!(
        err,
        CatalogError::MissingColumn {
            column: "molecular_weight",
            ..
        }
    ));
}

#[test]
fn chemicals_csv_rejects_duplicate_ids_and_blank_names() {
    let header = "id,name,formula,cas_number,molecular_weight,tags\n";

    let duplicate = parse_chemicals_csv(&format!("{header}1,A,,,,\n1,B,,,,\n"))
        .expect_err("duplicate id should fail");
    assert!(matches!(duplicate, CatalogError::DuplicateId(ref id) if id.0 == "1"));

    let blank = parse_chemicals_csv(&format!("{header}1,,,,,\n"))
        .expect_err("blank name should fail");
    assert!(matches!(
        blank,
        CatalogError::EmptyField {
            row: 1,
            column: "name",
            ..
        }
    ));
}

#[test]
fn chemicals_csv_keeps_optional_cells_optional() {
    let records = parse_chemicals_csv(
        "id,name,formula,cas_number,molecular_weight,tags\n7,Mystery,,,, Solid ; ;Toxic\n",
    )
    .expect("csv should parse");

    let record = &records[0];
    assert_eq!(record.formula, None);
    assert_eq!(record.cas_number, None);
    assert_eq!(record.molecular_weight, None);
    assert_eq!(record.molecular_weight_value(), 0.0);
    assert_eq!(record.tags, vec!["Solid".to_string(), "Toxic".to_string()]);
}

#[test]
fn elements_csv_rejects_non_numeric_period() {
    let err = parse_elements_csv(
        "atomic_number,symbol,name,category,atomic_mass,period,group\n1,H,Hydrogen,nonmetal,1.008,one,1\n",
    )
    .expect_err("bad period should fail");

    assert!(matches!(
        err,
        CatalogError::InvalidNumber {
            column: "period",
            ref value,
            ..
        } if value == "one"
    ));
}

#[test]
fn details_json_rejects_duplicates_and_bad_json() {
    let duplicate = parse_chemical_details(r#"[{"id":"1","name":"A"},{"id":"1","name":"B"}]"#)
        .expect_err("duplicate id should fail");
    assert!(matches!(duplicate, CatalogError::DuplicateId(_)));

    let malformed = parse_chemical_details("{").expect_err("malformed json should fail");
    assert!(matches!(malformed, CatalogError::Details(_)));
}

#[test]
fn periodic_grid_places_elements_by_period_and_group() {
    let repo = StaticCatalogRepo::load().expect("embedded catalog should load");
    let elements = repo.list_elements().expect("elements should load");

    let grid = build_periodic_grid(&elements);

    assert_eq!(grid.len(), 5, "three periods plus two marker rows");
    assert!(grid.iter().all(|row| row.len() == PERIODIC_COLUMNS));
    assert!(matches!(&grid[0][0], PeriodicCell::Element(e) if e.symbol == "H"));
    assert!(matches!(&grid[0][17], PeriodicCell::Element(e) if e.symbol == "He"));
    assert_eq!(grid[0][1], PeriodicCell::Empty);
    assert!(matches!(&grid[2][16], PeriodicCell::Element(e) if e.symbol == "Cl"));
    assert_eq!(
        grid[3][2],
        PeriodicCell::Marker {
            label: "*Lanthanides",
            category: ElementCategory::Lanthanide
        }
    );
    assert_eq!(
        grid[4][2],
        PeriodicCell::Marker {
            label: "**Actinides",
            category: ElementCategory::Actinide
        }
    );
}

#[test]
fn copyright_notice_names_the_year() {
    assert_eq!(
        copyright_notice(2024),
        "© 2024 ChemInfoHub. All rights reserved."
    );
    assert!(current_year() >= 2024);
}

#[test]
fn reference_service_resolves_element_symbols() {
    let repo = Arc::new(StaticCatalogRepo::load().expect("embedded catalog should load"));
    let services = AppServices::with_repo(repo);

    let sodium = services
        .reference
        .find_element("Na")
        .expect("lookup should succeed")
        .expect("sodium should be in the table");
    assert_eq!(sodium.name, "Sodium");
    assert_eq!(sodium.category, ElementCategory::AlkaliMetal);

    assert!(services
        .reference
        .find_element("Xx")
        .expect("lookup should succeed")
        .is_none());
    assert_eq!(services.reference.glossary_terms().len(), 5);
    assert_eq!(services.reference.safety_guidelines().len(), 5);
}
