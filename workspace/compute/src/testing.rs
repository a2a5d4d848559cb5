//! CSV fixtures shared by the compute tests. Fixtures go through the loader so
//! tests exercise the same path production does.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use tempfile::TempDir;

use crate::loader;

/// Eight visit records across three departments, three outcomes and three
/// months. Department ties (ICU and Cardiology, two rows each) pin down the
/// first-appearance tie-break.
pub const VISITS_CSV: &str = "\
department,symptom_score,outcome,diagnosis,age,visit_date
ER,7.5,Admitted,Flu,34,2024-01-05
ER,3.0,Discharged,Flu,8,2024-01-17
ICU,9.2,Admitted,Pneumonia,71,2024-02-02
ER,5.5,Discharged,Covid-19,45,2024-02-11
Cardiology,6.1,Admitted,Arrhythmia,63,2024-02-20
ER,2.0,Discharged,Migraine,29,2024-03-03
ICU,8.8,Deceased,Pneumonia,80,2024-03-09
Cardiology,4.4,Discharged,Arrhythmia,52,2024-03-21
";

/// Header-only variant of the visits table.
pub const EMPTY_VISITS_CSV: &str =
    "department,symptom_score,outcome,diagnosis,age,visit_date\n";

pub const FORECAST_CSV: &str = "\
ds,yhat,yhat_lower,yhat_upper
2024-04-01,120.0,100.0,140.0
2024-04-02,124.5,103.0,146.0
2024-04-03,118.25,99.5,137.75
2024-04-04,130.0,108.0,152.0
";

/// Writes `contents` to a temp file; the returned `TempDir` keeps it alive.
pub fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("table.csv");
    std::fs::write(&path, contents).expect("failed to write fixture");
    (dir, path)
}

pub fn visits_df() -> DataFrame {
    let (_dir, path) = write_csv(VISITS_CSV);
    loader::load_visits(&path).expect("fixture visits should load")
}

pub fn empty_visits_df() -> DataFrame {
    let (_dir, path) = write_csv(EMPTY_VISITS_CSV);
    loader::load_visits(&path).expect("empty fixture should load")
}

pub fn forecast_df() -> DataFrame {
    let (_dir, path) = write_csv(FORECAST_CSV);
    loader::load_forecast(&path).expect("fixture forecast should load")
}
