//! Integration tests for entrant import from the spreadsheet layout (as CSV).

use kumite_scoring::{
    import_entrants_csv, parse_entrants, Entrant, ImportError, KumiteConfig, MatchCoord,
    MatchSession,
};

const SHEET: &str = "\
Category,Kumite U12
Name,Age
Aiko Tanaka,11
Ben Morris,12
Chloe Dubois,10
";

#[test]
fn reads_category_and_entrants_in_order() {
    let list = parse_entrants(SHEET.as_bytes()).unwrap();
    assert_eq!(list.category.as_deref(), Some("Kumite U12"));
    assert_eq!(
        list.entrants,
        vec![
            Entrant {
                name: "Aiko Tanaka".to_string(),
                age: 11
            },
            Entrant {
                name: "Ben Morris".to_string(),
                age: 12
            },
            Entrant {
                name: "Chloe Dubois".to_string(),
                age: 10
            },
        ]
    );

    let competitors = list.to_competitors();
    assert_eq!(competitors[0].id, 1);
    assert_eq!(competitors[2].id, 3);
    assert_eq!(competitors[2].display_name, "Chloe Dubois");
}

#[test]
fn reading_stops_at_the_first_blank_name() {
    let sheet = "Category,Open\nName,Age\nAnn,20\nBo,21\n,\nCarl,22\n";
    let list = parse_entrants(sheet.as_bytes()).unwrap();
    assert_eq!(list.entrants.len(), 2);
}

#[test]
fn reading_stops_at_a_blank_line() {
    let sheet = "Category,Open\nName,Age\nAnn,20\nBo,21\n\nCarl,22\n";
    let list = parse_entrants(sheet.as_bytes()).unwrap();
    let names: Vec<&str> = list.entrants.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Ann", "Bo"]);
}

#[test]
fn blank_first_competitor_row_means_no_entrants() {
    let sheet = "Category,Open\nName,Age\n\nAnn,20\nBo,x\n";
    assert_eq!(
        parse_entrants(sheet.as_bytes()),
        Err(ImportError::InvalidCells(vec!["A3".to_string()]))
    );
}

#[test]
fn missing_category_is_allowed() {
    let sheet = "Category,\nName,Age\nAnn,20\nBo,21\n";
    let list = parse_entrants(sheet.as_bytes()).unwrap();
    assert_eq!(list.category, None);
}

#[test]
fn no_entrants_points_at_the_first_name_cell() {
    let sheet = "Category,Open\nName,Age\n";
    assert_eq!(
        parse_entrants(sheet.as_bytes()),
        Err(ImportError::InvalidCells(vec!["A3".to_string()]))
    );
}

#[test]
fn bad_ages_and_long_names_are_reported_by_cell() {
    let long_name = "x".repeat(101);
    let sheet = format!("Category,Open\nName,Age\nAnn,ten\n{long_name},12\nCy,\n");
    assert_eq!(
        parse_entrants(sheet.as_bytes()),
        Err(ImportError::InvalidCells(vec![
            "B3".to_string(),
            "A4".to_string(),
            "B5".to_string(),
        ]))
    );
}

#[test]
fn unreadable_input_is_malformed() {
    let bytes: &[u8] = b"Category,Open\nName,Age\n\xff\xfe,12\n";
    assert!(matches!(
        parse_entrants(bytes),
        Err(ImportError::Malformed(_))
    ));
}

#[test]
fn importing_builds_the_bracket_and_primes_names() {
    let mut s = MatchSession::new(KumiteConfig::default());
    let count = import_entrants_csv(&mut s, SHEET).unwrap();

    assert_eq!(count, 3);
    assert_eq!(s.bracket.len(), 2);
    assert_eq!(s.cursor, MatchCoord::START);
    assert_eq!(s.scores.aka.display_name, "Aiko Tanaka");
    assert_eq!(s.scores.shiro.display_name, "Ben Morris");
    assert_eq!(s.outcome.category, "Kumite U12");
}

#[test]
fn failed_import_leaves_the_session_alone() {
    let mut s = MatchSession::new(KumiteConfig::default());
    let bracket = s.bracket.clone();
    let result = import_entrants_csv(&mut s, "Category,Open\nName,Age\nAnn,old\n");
    assert!(matches!(result, Err(ImportError::InvalidCells(_))));
    assert_eq!(s.bracket, bracket);
    assert_eq!(s.scores.aka.display_name, "AKA");
}
