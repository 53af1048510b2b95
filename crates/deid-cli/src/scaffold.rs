//! Starter files written by `deid init`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

/// Starter column policy configuration. Every key matches a column in the
/// sample dataset.
const STARTER_CONFIG: &str = r#"# Column policy configuration for `deid run`.
# Every key is optional: leave a role out and its pass is skipped.

# Primary identifier, replaced with a stable 12-digit pseudonym. Also keys
# the generated personas for the name, email, and phone columns.
id_column = "id"

# Overwritten with generated names (requires id_column).
first_name_column = "first_name"
last_name_column = "last_name"

# Replaced with generated contact details.
email_column = "email"
phone_column = "phone"

# Secondary identifier, hashed like id_column.
student_id_column = "student_id"

# Each distinct value becomes CATEGORY01, CATEGORY02, ... in order of first
# appearance.
categorical_columns = ["cohort"]

# YYYY-MM-DD dates move back by shift_years.
time_date_columns = ["enrolled_on"]

# YYYYSS semester codes move forward by shift_years.
semester_columns = ["term"]

# Jittered by -1, 0, or +1.
integer_columns = ["score"]

# Jittered by up to +/-0.25.
float_columns = ["gpa"]

shift_years = 2
"#;

/// Sample dataset matching the starter configuration.
const SAMPLE_CSV: &str = "\
id,first_name,last_name,email,phone,student_id,cohort,enrolled_on,term,score,gpa
1,Ada,Lovelace,ada.lovelace@campus.edu,555-0100,S-1001,alpha,2024-09-02,202401,87,3.62
2,Grace,Hopper,grace.hopper@campus.edu,555-0101,S-1002,beta,2024-09-03,202401,91,3.88
3,Alan,Turing,alan.turing@campus.edu,555-0102,S-1003,alpha,2023-09-04,202302,78,3.41
";

/// Paths written by [`scaffold_workspace`].
#[derive(Debug)]
pub struct ScaffoldPaths {
    pub config_path: PathBuf,
    pub sample_path: PathBuf,
}

/// Writes a starter `deid.toml` and a sample dataset under `dir`.
///
/// Existing files are never overwritten unless `force` is set; the check runs
/// before anything is written, so a refused scaffold leaves no partial state.
pub fn scaffold_workspace(dir: &Path, force: bool) -> Result<ScaffoldPaths> {
    let config_path = dir.join("deid.toml");
    let data_dir = dir.join("data");
    let sample_path = data_dir.join("students.csv");

    if !force {
        for path in [&config_path, &sample_path] {
            if path.exists() {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
        }
    }

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("create directory {}", data_dir.display()))?;
    std::fs::write(&config_path, STARTER_CONFIG)
        .with_context(|| format!("write {}", config_path.display()))?;
    std::fs::write(&sample_path, SAMPLE_CSV)
        .with_context(|| format!("write {}", sample_path.display()))?;

    info!(dir = %dir.display(), "scaffold written");
    Ok(ScaffoldPaths {
        config_path,
        sample_path,
    })
}
