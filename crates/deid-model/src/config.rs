use serde::Deserialize;

/// Declares which columns of an input file carry identifying data and how
/// each should be rewritten.
///
/// Every field is optional; a column role that is absent (or an empty list)
/// simply means no pass of that kind runs. Unknown keys are rejected so a
/// misspelled role fails loudly instead of silently leaving a column intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeidConfig {
    /// Primary identifier column, replaced by a pseudonymous digit string.
    /// Also gates name replacement: without it, name columns are left alone.
    pub id_column: Option<String>,
    pub first_name_column: Option<String>,
    pub last_name_column: Option<String>,
    pub email_column: Option<String>,
    pub phone_column: Option<String>,
    /// Secondary identifier column, hashed the same way as `id_column`.
    pub student_id_column: Option<String>,
    #[serde(default)]
    pub categorical_columns: Vec<String>,
    #[serde(default)]
    pub time_date_columns: Vec<String>,
    #[serde(default)]
    pub semester_columns: Vec<String>,
    #[serde(default)]
    pub integer_columns: Vec<String>,
    #[serde(default)]
    pub float_columns: Vec<String>,
    /// Calendar dates move back by this many years; semester codes move
    /// forward by the same amount.
    #[serde(default)]
    pub shift_years: i32,
}

impl DeidConfig {
    /// True when the config names no columns at all, so a run would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.id_column.is_none()
            && self.first_name_column.is_none()
            && self.last_name_column.is_none()
            && self.email_column.is_none()
            && self.phone_column.is_none()
            && self.student_id_column.is_none()
            && self.categorical_columns.is_empty()
            && self.time_date_columns.is_empty()
            && self.semester_columns.is_empty()
            && self.integer_columns.is_empty()
            && self.float_columns.is_empty()
    }
}
