pub mod config;
pub mod table;

pub use config::DeidConfig;
pub use table::{CellValue, Dataset};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_full_toml() {
        let toml = r#"
            id_column = "id"
            first_name_column = "first_name"
            last_name_column = "last_name"
            email_column = "email"
            phone_column = "phone"
            student_id_column = "student_id"
            categorical_columns = ["cohort"]
            time_date_columns = ["enrolled_on"]
            semester_columns = ["term"]
            integer_columns = ["score"]
            float_columns = ["gpa"]
            shift_years = 2
        "#;
        let config: DeidConfig = toml::from_str(toml).expect("parse config");
        assert_eq!(config.id_column.as_deref(), Some("id"));
        assert_eq!(config.categorical_columns, vec!["cohort".to_string()]);
        assert_eq!(config.shift_years, 2);
        assert!(!config.is_empty());
    }

    #[test]
    fn config_defaults_are_empty() {
        let config: DeidConfig = toml::from_str("").expect("parse empty config");
        assert!(config.id_column.is_none());
        assert!(config.categorical_columns.is_empty());
        assert_eq!(config.shift_years, 0);
        assert!(config.is_empty());
    }

    #[test]
    fn config_rejects_unknown_keys() {
        let result: Result<DeidConfig, _> = toml::from_str("id_colum = \"id\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn shift_years_alone_is_still_empty() {
        let config: DeidConfig = toml::from_str("shift_years = 3\n").expect("parse config");
        assert!(config.is_empty());
    }
}
