//! Column policies and the config-to-passes compiler.

use deid_model::DeidConfig;

/// Anonymization policy applied to one column.
///
/// Each variant names a specific rewrite. A run is compiled from the
/// configuration into an ordered list of [`ColumnPass`]es by
/// [`build_passes`]; the engine dispatches on the variant, so adding a
/// policy means adding a variant and its applicator, not a string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Replace each value with its 12-digit identifier hash.
    HashIdentifier,

    /// Replace every cell with the ledger persona's given name,
    /// keyed by the already-hashed identifier column.
    GivenName { identifier_column: String },

    /// Replace every cell with the ledger persona's family name,
    /// keyed by the already-hashed identifier column.
    FamilyName { identifier_column: String },

    /// Replace each distinct value with a `CATEGORYnn` label.
    Categorical,

    /// Move `YYYY-MM-DD` dates back by `years`.
    ShiftDate { years: i32 },

    /// Move `YYYYSS` semester codes forward by `years`.
    ShiftSemester { years: i32 },

    /// Replace non-missing cells with a generated email address.
    /// Ledger-keyed when an identifier column is configured.
    Email { identifier_column: Option<String> },

    /// Replace non-missing cells with a generated phone number.
    /// Ledger-keyed when an identifier column is configured.
    Phone { identifier_column: Option<String> },

    /// Add a uniform offset from {-1, 0, +1} to integer cells.
    JitterInteger,

    /// Add a uniform offset from [-0.25, +0.25] to float cells.
    JitterFloat,
}

impl ColumnPolicy {
    /// Short policy name used in logs, the summary table, and the run report.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnPolicy::HashIdentifier => "hash",
            ColumnPolicy::GivenName { .. } => "given-name",
            ColumnPolicy::FamilyName { .. } => "family-name",
            ColumnPolicy::Categorical => "categorical",
            ColumnPolicy::ShiftDate { .. } => "shift-date",
            ColumnPolicy::ShiftSemester { .. } => "shift-semester",
            ColumnPolicy::Email { .. } => "email",
            ColumnPolicy::Phone { .. } => "phone",
            ColumnPolicy::JitterInteger => "jitter-int",
            ColumnPolicy::JitterFloat => "jitter-float",
        }
    }
}

/// One scheduled pass: a target column and the policy to apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPass {
    pub column: String,
    pub policy: ColumnPolicy,
}

/// Compiles a configuration into the ordered pass list.
///
/// The identifier hash runs first so every later ledger-keyed pass sees
/// hashed identifiers. Name passes are only scheduled when an identifier
/// column is configured; email and phone run either way and fall back to
/// unkeyed generation when no identifier is available.
pub fn build_passes(config: &DeidConfig) -> Vec<ColumnPass> {
    let mut passes = Vec::new();
    if let Some(id) = &config.id_column {
        passes.push(ColumnPass {
            column: id.clone(),
            policy: ColumnPolicy::HashIdentifier,
        });
        if let Some(first) = &config.first_name_column {
            passes.push(ColumnPass {
                column: first.clone(),
                policy: ColumnPolicy::GivenName {
                    identifier_column: id.clone(),
                },
            });
        }
        if let Some(last) = &config.last_name_column {
            passes.push(ColumnPass {
                column: last.clone(),
                policy: ColumnPolicy::FamilyName {
                    identifier_column: id.clone(),
                },
            });
        }
    }
    for column in &config.categorical_columns {
        passes.push(ColumnPass {
            column: column.clone(),
            policy: ColumnPolicy::Categorical,
        });
    }
    for column in &config.time_date_columns {
        passes.push(ColumnPass {
            column: column.clone(),
            policy: ColumnPolicy::ShiftDate {
                years: config.shift_years,
            },
        });
    }
    for column in &config.semester_columns {
        passes.push(ColumnPass {
            column: column.clone(),
            policy: ColumnPolicy::ShiftSemester {
                years: config.shift_years,
            },
        });
    }
    if let Some(email) = &config.email_column {
        passes.push(ColumnPass {
            column: email.clone(),
            policy: ColumnPolicy::Email {
                identifier_column: config.id_column.clone(),
            },
        });
    }
    if let Some(student_id) = &config.student_id_column {
        passes.push(ColumnPass {
            column: student_id.clone(),
            policy: ColumnPolicy::HashIdentifier,
        });
    }
    for column in &config.integer_columns {
        passes.push(ColumnPass {
            column: column.clone(),
            policy: ColumnPolicy::JitterInteger,
        });
    }
    for column in &config.float_columns {
        passes.push(ColumnPass {
            column: column.clone(),
            policy: ColumnPolicy::JitterFloat,
        });
    }
    if let Some(phone) = &config.phone_column {
        passes.push(ColumnPass {
            column: phone.clone(),
            policy: ColumnPolicy::Phone {
                identifier_column: config.id_column.clone(),
            },
        });
    }
    passes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> DeidConfig {
        DeidConfig {
            id_column: Some("id".to_string()),
            first_name_column: Some("first".to_string()),
            last_name_column: Some("last".to_string()),
            email_column: Some("email".to_string()),
            phone_column: Some("phone".to_string()),
            student_id_column: Some("student_id".to_string()),
            categorical_columns: vec!["cohort".to_string()],
            time_date_columns: vec!["enrolled_on".to_string()],
            semester_columns: vec!["term".to_string()],
            integer_columns: vec!["score".to_string()],
            float_columns: vec!["gpa".to_string()],
            shift_years: 2,
        }
    }

    #[test]
    fn passes_follow_the_fixed_order() {
        let passes = build_passes(&full_config());
        let order: Vec<(&str, &str)> = passes
            .iter()
            .map(|pass| (pass.column.as_str(), pass.policy.name()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("id", "hash"),
                ("first", "given-name"),
                ("last", "family-name"),
                ("cohort", "categorical"),
                ("enrolled_on", "shift-date"),
                ("term", "shift-semester"),
                ("email", "email"),
                ("student_id", "hash"),
                ("score", "jitter-int"),
                ("gpa", "jitter-float"),
                ("phone", "phone"),
            ]
        );
    }

    #[test]
    fn name_passes_require_an_identifier_column() {
        let mut config = full_config();
        config.id_column = None;
        let passes = build_passes(&config);
        assert!(
            passes
                .iter()
                .all(|pass| !matches!(pass.policy, ColumnPolicy::GivenName { .. }))
        );
        assert!(
            passes
                .iter()
                .all(|pass| !matches!(pass.policy, ColumnPolicy::FamilyName { .. }))
        );
    }

    #[test]
    fn email_and_phone_run_without_an_identifier() {
        let mut config = full_config();
        config.id_column = None;
        let passes = build_passes(&config);
        assert!(passes.iter().any(|pass| matches!(
            &pass.policy,
            ColumnPolicy::Email {
                identifier_column: None
            }
        )));
        assert!(passes.iter().any(|pass| matches!(
            &pass.policy,
            ColumnPolicy::Phone {
                identifier_column: None
            }
        )));
    }

    #[test]
    fn shift_years_flows_into_date_and_semester_passes() {
        let passes = build_passes(&full_config());
        assert!(
            passes
                .iter()
                .any(|pass| pass.policy == ColumnPolicy::ShiftDate { years: 2 })
        );
        assert!(
            passes
                .iter()
                .any(|pass| pass.policy == ColumnPolicy::ShiftSemester { years: 2 })
        );
    }

    #[test]
    fn empty_config_compiles_to_no_passes() {
        assert!(build_passes(&DeidConfig::default()).is_empty());
    }
}
