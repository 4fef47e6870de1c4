//! Small in-memory tables shared by the unit tests.

use std::sync::Arc;

use super::model::{BaseTable, Feature, RawRecord};

/// Build a raw row with the given sex sign, target and BMI; other features are zero.
pub(crate) fn raw(sex: f64, target: f64, bmi: f64) -> RawRecord {
    let mut features = [0.0; 10];
    features[Feature::Sex.index()] = sex;
    features[Feature::Bmi.index()] = bmi;
    RawRecord { features, target }
}

/// Targets `{25, 50, 75, 100}` with sex signs `{+, -, +, -}`.
pub(crate) fn scenario_table() -> Arc<BaseTable> {
    Arc::new(BaseTable::from_raw(vec![
        raw(0.05, 25.0, 0.01),
        raw(-0.04, 50.0, 0.02),
        raw(0.05, 75.0, 0.03),
        raw(-0.04, 100.0, 0.04),
    ]))
}
