//! The pass engine: applies compiled passes to a dataset in place.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use deid_model::{CellValue, Dataset};

use crate::categorical::CategoryMap;
use crate::dates::shift_date;
use crate::hashing::hash_identifier;
use crate::jitter::{shift_float, shift_integer};
use crate::numeric::{parse_f64, parse_i64};
use crate::policy::{ColumnPass, ColumnPolicy};
use crate::pseudonym::{Persona, PersonaLedger, fresh_email, fresh_phone};
use crate::semester::shift_semester;

/// Counters for one applied (or skipped) pass.
///
/// `rows` is the dataset row count at apply time; `changed` counts cells
/// actually rewritten to a different value; `passthrough` counts cells the
/// policy declined to touch (missing values, parse failures). A pass whose
/// target column is absent is `skipped` with zeroed counters.
#[derive(Debug, Clone, Serialize)]
pub struct PassOutcome {
    pub column: String,
    pub policy: String,
    pub rows: usize,
    pub changed: usize,
    pub passthrough: usize,
    pub skipped: bool,
}

impl PassOutcome {
    fn skipped(pass: &ColumnPass) -> Self {
        Self {
            column: pass.column.clone(),
            policy: pass.policy.name().to_string(),
            rows: 0,
            changed: 0,
            passthrough: 0,
            skipped: true,
        }
    }
}

/// Applies every pass to the dataset in order, sharing one persona ledger
/// across the run so ledger-keyed passes agree with each other.
pub fn apply_passes<R: Rng + ?Sized>(
    dataset: &mut Dataset,
    passes: &[ColumnPass],
    rng: &mut R,
) -> Vec<PassOutcome> {
    let mut ledger = PersonaLedger::new();
    passes
        .iter()
        .map(|pass| apply_pass(dataset, pass, &mut ledger, rng))
        .collect()
}

fn apply_pass<R: Rng + ?Sized>(
    dataset: &mut Dataset,
    pass: &ColumnPass,
    ledger: &mut PersonaLedger,
    rng: &mut R,
) -> PassOutcome {
    let Some(col) = dataset.column_index(&pass.column) else {
        debug!(
            column = %pass.column,
            policy = pass.policy.name(),
            "column not in dataset, pass skipped"
        );
        return PassOutcome::skipped(pass);
    };
    let rows = dataset.row_count();
    let (changed, passthrough) = match &pass.policy {
        ColumnPolicy::HashIdentifier => rewrite_cells(dataset, col, |cell| {
            cell.as_text()
                .map(|text| CellValue::Text(hash_identifier(text)))
        }),
        ColumnPolicy::GivenName { identifier_column } => {
            let Some(key_col) = dataset.column_index(identifier_column) else {
                debug!(
                    column = %pass.column,
                    identifier = %identifier_column,
                    "identifier column not in dataset, name pass skipped"
                );
                return PassOutcome::skipped(pass);
            };
            rewrite_with_persona(dataset, col, key_col, ledger, rng, true, |persona| {
                persona.given_name.clone()
            })
        }
        ColumnPolicy::FamilyName { identifier_column } => {
            let Some(key_col) = dataset.column_index(identifier_column) else {
                debug!(
                    column = %pass.column,
                    identifier = %identifier_column,
                    "identifier column not in dataset, name pass skipped"
                );
                return PassOutcome::skipped(pass);
            };
            rewrite_with_persona(dataset, col, key_col, ledger, rng, true, |persona| {
                persona.family_name.clone()
            })
        }
        ColumnPolicy::Categorical => {
            let mut categories = CategoryMap::new();
            rewrite_cells(dataset, col, |cell| {
                Some(CellValue::Text(categories.label_for(cell)))
            })
        }
        ColumnPolicy::ShiftDate { years } => rewrite_cells(dataset, col, |cell| {
            let text = cell.as_text()?;
            shift_date(text, *years).map(CellValue::Text)
        }),
        ColumnPolicy::ShiftSemester { years } => rewrite_cells(dataset, col, |cell| {
            let text = cell.as_text()?;
            shift_semester(text, *years).map(CellValue::Text)
        }),
        ColumnPolicy::Email { identifier_column } => {
            match identifier_column
                .as_ref()
                .and_then(|name| dataset.column_index(name))
            {
                Some(key_col) => {
                    rewrite_with_persona(dataset, col, key_col, ledger, rng, false, |persona| {
                        persona.email.clone()
                    })
                }
                None => rewrite_cells(dataset, col, |cell| {
                    if cell.is_missing() {
                        None
                    } else {
                        Some(CellValue::Text(fresh_email(rng)))
                    }
                }),
            }
        }
        ColumnPolicy::Phone { identifier_column } => {
            match identifier_column
                .as_ref()
                .and_then(|name| dataset.column_index(name))
            {
                Some(key_col) => {
                    rewrite_with_persona(dataset, col, key_col, ledger, rng, false, |persona| {
                        persona.phone.clone()
                    })
                }
                None => rewrite_cells(dataset, col, |cell| {
                    if cell.is_missing() {
                        None
                    } else {
                        Some(CellValue::Text(fresh_phone(rng)))
                    }
                }),
            }
        }
        ColumnPolicy::JitterInteger => rewrite_cells(dataset, col, |cell| {
            let value = parse_i64(cell.as_text()?)?;
            Some(CellValue::Text(shift_integer(value, rng).to_string()))
        }),
        ColumnPolicy::JitterFloat => rewrite_cells(dataset, col, |cell| {
            let value = parse_f64(cell.as_text()?)?;
            Some(CellValue::Text(shift_float(value, rng).to_string()))
        }),
    };
    debug!(
        column = %pass.column,
        policy = pass.policy.name(),
        rows,
        changed,
        passthrough,
        "pass applied"
    );
    PassOutcome {
        column: pass.column.clone(),
        policy: pass.policy.name().to_string(),
        rows,
        changed,
        passthrough,
        skipped: false,
    }
}

/// Rewrites one column cell by cell. The transform returns `None` to leave
/// a cell untouched (counted as passthrough); a returned value equal to the
/// existing one is not counted as a change.
fn rewrite_cells<F>(dataset: &mut Dataset, col: usize, mut transform: F) -> (usize, usize)
where
    F: FnMut(&CellValue) -> Option<CellValue>,
{
    let mut changed = 0;
    let mut passthrough = 0;
    for row in &mut dataset.rows {
        match transform(&row[col]) {
            Some(new_cell) => {
                if new_cell != row[col] {
                    row[col] = new_cell;
                    changed += 1;
                }
            }
            None => passthrough += 1,
        }
    }
    (changed, passthrough)
}

/// Rewrites one column from the persona recorded for each row's key cell.
/// With `replace_missing` unset, missing cells pass through before the
/// ledger is consulted.
fn rewrite_with_persona<R, F>(
    dataset: &mut Dataset,
    col: usize,
    key_col: usize,
    ledger: &mut PersonaLedger,
    rng: &mut R,
    replace_missing: bool,
    mut field: F,
) -> (usize, usize)
where
    R: Rng + ?Sized,
    F: FnMut(&Persona) -> String,
{
    let mut changed = 0;
    let mut passthrough = 0;
    for row in &mut dataset.rows {
        if !replace_missing && row[col].is_missing() {
            passthrough += 1;
            continue;
        }
        let key = row[key_col].clone();
        let persona = ledger.persona_for(&key, rng);
        let new_cell = CellValue::Text(field(persona));
        if new_cell != row[col] {
            row[col] = new_cell;
            changed += 1;
        }
    }
    (changed, passthrough)
}
