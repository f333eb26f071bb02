//! Entrant import from the fixed spreadsheet layout, exported as CSV.
//!
//! Layout: row 1 column B is the category label; row 2 is a header row;
//! competitors start at row 3 with name in column A and age in column B.
//! Reading stops at the first row without a name.

use crate::logic::progression::load_entrants;
use crate::models::{Competitor, MatchSession};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;

const FIRST_COMPETITOR_ROW: u64 = 3;
const MAX_NAME_LEN: usize = 100;

/// Errors reading an entrant file. Nothing is committed when one is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImportError {
    /// The file is not readable CSV.
    Malformed(String),
    /// Cell references (e.g. `A3`, `B5`) that are missing or invalid.
    InvalidCells(Vec<String>),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Malformed(msg) => write!(f, "Could not read entrant file: {}", msg),
            ImportError::InvalidCells(cells) => {
                write!(f, "Missing or invalid cells: {}", cells.join(", "))
            }
        }
    }
}

impl std::error::Error for ImportError {}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Malformed(e.to_string())
    }
}

/// One imported competitor row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub name: String,
    pub age: u32,
}

/// Ordered entrants plus the optional category label.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntrantList {
    pub category: Option<String>,
    pub entrants: Vec<Entrant>,
}

impl EntrantList {
    /// Competitors with ids 1, 2, 3, ... in entrant order.
    pub fn to_competitors(&self) -> Vec<Arc<Competitor>> {
        self.entrants
            .iter()
            .zip(1..)
            .map(|(e, id)| Arc::new(Competitor::new(id, e.name.clone(), e.age)))
            .collect()
    }
}

/// Parse the CSV layout. Every bad cell is reported, not just the first.
pub fn parse_entrants<R: Read>(reader: R) -> Result<EntrantList, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut list = EntrantList::default();
    let mut bad_cells = Vec::new();
    // csv skips blank lines, so a jump in line numbers marks an empty row
    let mut expected_row = FIRST_COMPETITOR_ROW;

    for record in csv_reader.records() {
        let record = record?;
        let row = record.position().map_or(0, |p| p.line());
        let cell = |col: usize| record.get(col).map(str::trim).unwrap_or("");

        if row == 1 {
            let category = cell(1);
            if !category.is_empty() {
                list.category = Some(category.to_string());
            }
            continue;
        }
        if row < FIRST_COMPETITOR_ROW {
            continue;
        }

        let name = cell(0);
        if row != expected_row || name.is_empty() {
            break;
        }
        expected_row = row + 1;
        if name.chars().count() > MAX_NAME_LEN {
            bad_cells.push(format!("A{}", row));
        }
        match cell(1).parse::<u32>() {
            Ok(age) => list.entrants.push(Entrant {
                name: name.to_string(),
                age,
            }),
            Err(_) => bad_cells.push(format!("B{}", row)),
        }
    }

    if list.entrants.is_empty() && bad_cells.is_empty() {
        bad_cells.push(format!("A{}", FIRST_COMPETITOR_ROW));
    }
    if !bad_cells.is_empty() {
        return Err(ImportError::InvalidCells(bad_cells));
    }
    Ok(list)
}

/// Parse `text` and load it into `session`. The session is untouched on error.
pub fn import_entrants_csv(session: &mut MatchSession, text: &str) -> Result<usize, ImportError> {
    let list = parse_entrants(text.as_bytes())?;
    Ok(import_entrants(session, list))
}

/// Build a fresh bracket from `list` and start at its first match.
pub fn import_entrants(session: &mut MatchSession, list: EntrantList) -> usize {
    let competitors = list.to_competitors();
    load_entrants(session, &competitors, list.category);
    competitors.len()
}
