use super::TagDef;

/// Publication periods. Triggers are empty: time is derived from the year only.
pub static PERIODS: &[TagDef] = &[
    TagDef::new("T1", "400 BCE to 1859", &[]),
    TagDef::new("T2", "1860 to 1949", &[]),
    TagDef::new("T3", "1950 to 1989", &[]),
    TagDef::new("T4", "1990 to 2010", &[]),
    TagDef::new("T5", "2011 to present", &[]),
];

/// Inclusive year range of a publication period. `None` bounds are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub code: &'static str,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

impl PeriodRange {
    pub fn contains(&self, year: i32) -> bool {
        self.first_year.map_or(true, |first| year >= first)
            && self.last_year.map_or(true, |last| year <= last)
    }
}

/// Ordered, contiguous, non-overlapping. T1 absorbs everything before 1860
/// (nominally from 400 BCE) and T5 is open-ended.
pub static PERIOD_RANGES: [PeriodRange; 5] = [
    PeriodRange { code: "T1", first_year: None, last_year: Some(1859) },
    PeriodRange { code: "T2", first_year: Some(1860), last_year: Some(1949) },
    PeriodRange { code: "T3", first_year: Some(1950), last_year: Some(1989) },
    PeriodRange { code: "T4", first_year: Some(1990), last_year: Some(2010) },
    PeriodRange { code: "T5", first_year: Some(2011), last_year: None },
];
