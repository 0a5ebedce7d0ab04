//! Static per-country education statistics.
//!
//! Fixed reference data behind the world-map view. Pure lookups only;
//! names not in the table fall back to a global-average record.

/// Education indicators for one country.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryStats {
    /// Adult literacy rate, percent.
    pub literacy_rate: u8,
    /// Primary/secondary school enrollment, percent.
    pub school_enrollment: u8,
    pub avg_years_schooling: f32,
    /// Pupils per teacher.
    pub pupil_teacher_ratio: u8,
    /// Public education spending, percent of GDP.
    pub education_spending: f32,
    /// Gross tertiary enrollment ratio, percent (can exceed 100).
    pub tertiary_enrollment: u8,
    /// Children out of school, millions.
    pub out_of_school: f32,
}

/// Choropleth tier derived from the literacy rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteracyBand {
    /// 95% and above.
    VeryHigh,
    /// 85% to 94%.
    High,
    /// 70% to 84%.
    Medium,
    /// Below 70%.
    Low,
}

impl LiteracyBand {
    pub fn hex_color(self) -> &'static str {
        match self {
            LiteracyBand::VeryHigh => "#4dabf7",
            LiteracyBand::High => "#51cf66",
            LiteracyBand::Medium => "#ffd43b",
            LiteracyBand::Low => "#ff6b6b",
        }
    }
}

impl CountryStats {
    pub fn literacy_band(&self) -> LiteracyBand {
        match self.literacy_rate {
            95..=u8::MAX => LiteracyBand::VeryHigh,
            85..=94 => LiteracyBand::High,
            70..=84 => LiteracyBand::Medium,
            _ => LiteracyBand::Low,
        }
    }
}

/// Record returned for countries not in the table.
pub const DEFAULT_STATS: CountryStats = CountryStats {
    literacy_rate: 85,
    school_enrollment: 85,
    avg_years_schooling: 8.0,
    pupil_teacher_ratio: 25,
    education_spending: 4.0,
    tertiary_enrollment: 35,
    out_of_school: 10.0,
};

#[rustfmt::skip]
const TABLE: &[(&str, CountryStats)] = &[
    ("United States of America", CountryStats { literacy_rate: 99,  school_enrollment: 97,  avg_years_schooling: 13.4, pupil_teacher_ratio: 14, education_spending: 5.0, tertiary_enrollment: 88,  out_of_school: 2.1 }),
    ("United Kingdom",           CountryStats { literacy_rate: 99,  school_enrollment: 99,  avg_years_schooling: 13.2, pupil_teacher_ratio: 16, education_spending: 5.5, tertiary_enrollment: 61,  out_of_school: 1.8 }),
    ("Canada",                   CountryStats { literacy_rate: 99,  school_enrollment: 99,  avg_years_schooling: 13.3, pupil_teacher_ratio: 15, education_spending: 5.3, tertiary_enrollment: 67,  out_of_school: 1.5 }),
    ("Australia",                CountryStats { literacy_rate: 99,  school_enrollment: 98,  avg_years_schooling: 12.7, pupil_teacher_ratio: 13, education_spending: 5.2, tertiary_enrollment: 113, out_of_school: 2.0 }),
    ("Germany",                  CountryStats { literacy_rate: 99,  school_enrollment: 98,  avg_years_schooling: 14.1, pupil_teacher_ratio: 12, education_spending: 4.9, tertiary_enrollment: 69,  out_of_school: 1.7 }),
    ("France",                   CountryStats { literacy_rate: 99,  school_enrollment: 99,  avg_years_schooling: 11.6, pupil_teacher_ratio: 19, education_spending: 5.4, tertiary_enrollment: 64,  out_of_school: 1.9 }),
    ("Japan",                    CountryStats { literacy_rate: 99,  school_enrollment: 100, avg_years_schooling: 12.8, pupil_teacher_ratio: 14, education_spending: 3.2, tertiary_enrollment: 63,  out_of_school: 0.5 }),
    ("China",                    CountryStats { literacy_rate: 97,  school_enrollment: 95,  avg_years_schooling: 7.8,  pupil_teacher_ratio: 16, education_spending: 4.1, tertiary_enrollment: 51,  out_of_school: 8.5 }),
    ("India",                    CountryStats { literacy_rate: 74,  school_enrollment: 88,  avg_years_schooling: 6.5,  pupil_teacher_ratio: 24, education_spending: 3.8, tertiary_enrollment: 28,  out_of_school: 32.0 }),
    ("Brazil",                   CountryStats { literacy_rate: 93,  school_enrollment: 97,  avg_years_schooling: 8.0,  pupil_teacher_ratio: 21, education_spending: 6.2, tertiary_enrollment: 51,  out_of_school: 5.8 }),
    ("Nigeria",                  CountryStats { literacy_rate: 62,  school_enrollment: 61,  avg_years_schooling: 6.2,  pupil_teacher_ratio: 37, education_spending: 2.7, tertiary_enrollment: 10,  out_of_school: 42.0 }),
    ("South Africa",             CountryStats { literacy_rate: 87,  school_enrollment: 95,  avg_years_schooling: 10.1, pupil_teacher_ratio: 32, education_spending: 6.5, tertiary_enrollment: 21,  out_of_school: 8.3 }),
    ("Egypt",                    CountryStats { literacy_rate: 71,  school_enrollment: 91,  avg_years_schooling: 7.2,  pupil_teacher_ratio: 26, education_spending: 3.5, tertiary_enrollment: 36,  out_of_school: 12.5 }),
    ("Kenya",                    CountryStats { literacy_rate: 82,  school_enrollment: 83,  avg_years_schooling: 6.5,  pupil_teacher_ratio: 40, education_spending: 5.3, tertiary_enrollment: 11,  out_of_school: 18.0 }),
    ("Mexico",                   CountryStats { literacy_rate: 95,  school_enrollment: 96,  avg_years_schooling: 8.8,  pupil_teacher_ratio: 26, education_spending: 4.9, tertiary_enrollment: 40,  out_of_school: 6.2 }),
    ("Argentina",                CountryStats { literacy_rate: 99,  school_enrollment: 99,  avg_years_schooling: 10.9, pupil_teacher_ratio: 15, education_spending: 5.5, tertiary_enrollment: 88,  out_of_school: 2.3 }),
    ("Russia",                   CountryStats { literacy_rate: 100, school_enrollment: 98,  avg_years_schooling: 12.2, pupil_teacher_ratio: 19, education_spending: 3.7, tertiary_enrollment: 82,  out_of_school: 2.8 }),
    ("South Korea",              CountryStats { literacy_rate: 98,  school_enrollment: 98,  avg_years_schooling: 12.2, pupil_teacher_ratio: 16, education_spending: 4.6, tertiary_enrollment: 95,  out_of_school: 1.2 }),
    ("Saudi Arabia",             CountryStats { literacy_rate: 95,  school_enrollment: 96,  avg_years_schooling: 10.2, pupil_teacher_ratio: 12, education_spending: 5.1, tertiary_enrollment: 68,  out_of_school: 4.5 }),
    ("Turkey",                   CountryStats { literacy_rate: 96,  school_enrollment: 93,  avg_years_schooling: 8.2,  pupil_teacher_ratio: 17, education_spending: 4.3, tertiary_enrollment: 94,  out_of_school: 7.8 }),
];

/// Stats for `name`, or [`DEFAULT_STATS`] for anything not in the table.
pub fn lookup(name: &str) -> &'static CountryStats {
    TABLE
        .iter()
        .find(|(country, _)| *country == name)
        .map(|(_, stats)| stats)
        .unwrap_or(&DEFAULT_STATS)
}

/// All country names in the table, for listings and completion.
pub fn country_names() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(name, _)| *name)
}
