//! Country postal-code format registry.
//!
//! One regular expression per country, tuned to that country's official
//! postal grammar. The table is static input data loaded once per process;
//! lookups are pure. Countries without an entry validate leniently: the
//! wizard must not block a submission merely because we do not know the
//! local postal grammar.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Country code (ISO 3166-1 alpha-2) → anchored postal pattern source.
/// Patterns are matched case-insensitively where the country's convention
/// allows letters (UK, NL, CA, ...).
const POSTAL_PATTERNS: &[(&str, &str)] = &[
    ("AD", r"^AD\d{3}$"),
    ("AF", r"^\d{4}$"),
    ("AL", r"^\d{4}$"),
    ("AM", r"^\d{4}$"),
    ("AR", r"^[A-Z]?\d{4}(?:[A-Z]{3})?$"),
    ("AT", r"^\d{4}$"),
    ("AU", r"^\d{4}$"),
    ("AX", r"^22\d{3}$"),
    ("AZ", r"^AZ ?\d{4}$"),
    ("BA", r"^\d{5}$"),
    ("BB", r"^BB\d{5}$"),
    ("BD", r"^\d{4}$"),
    ("BE", r"^\d{4}$"),
    ("BG", r"^\d{4}$"),
    ("BH", r"^\d{3,4}$"),
    ("BM", r"^[A-Z]{2} ?\d{2}$"),
    ("BN", r"^[A-Z]{2}\d{4}$"),
    ("BR", r"^\d{5}-?\d{3}$"),
    ("BT", r"^\d{5}$"),
    ("BY", r"^\d{6}$"),
    ("CA", r"^[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d$"),
    ("CH", r"^\d{4}$"),
    ("CL", r"^\d{7}$"),
    ("CN", r"^\d{6}$"),
    ("CO", r"^\d{6}$"),
    ("CR", r"^\d{5}$"),
    ("CU", r"^\d{5}$"),
    ("CV", r"^\d{4}$"),
    ("CY", r"^\d{4}$"),
    ("CZ", r"^\d{3} ?\d{2}$"),
    ("DE", r"^\d{5}$"),
    ("DK", r"^\d{4}$"),
    ("DO", r"^\d{5}$"),
    ("DZ", r"^\d{5}$"),
    ("EC", r"^\d{6}$"),
    ("EE", r"^\d{5}$"),
    ("EG", r"^\d{5}$"),
    ("ES", r"^\d{5}$"),
    ("ET", r"^\d{4}$"),
    ("FI", r"^\d{5}$"),
    ("FO", r"^\d{3}$"),
    ("FR", r"^\d{5}$"),
    ("GB", r"^[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}$"),
    ("GE", r"^\d{4}$"),
    ("GG", r"^GY\d[\dA-Z]? ?\d[A-Z]{2}$"),
    ("GL", r"^39\d{2}$"),
    ("GR", r"^\d{3} ?\d{2}$"),
    ("GT", r"^\d{5}$"),
    ("HR", r"^\d{5}$"),
    ("HT", r"^\d{4}$"),
    ("HU", r"^\d{4}$"),
    ("ID", r"^\d{5}$"),
    ("IE", r"^[A-Z]\d{2} ?[A-Z\d]{4}$"),
    ("IL", r"^\d{5}(?:\d{2})?$"),
    ("IM", r"^IM\d[\dA-Z]? ?\d[A-Z]{2}$"),
    ("IN", r"^\d{6}$"),
    ("IQ", r"^\d{5}$"),
    ("IR", r"^\d{5}-?\d{5}$"),
    ("IS", r"^\d{3}$"),
    ("IT", r"^\d{5}$"),
    ("JE", r"^JE\d[\dA-Z]? ?\d[A-Z]{2}$"),
    ("JO", r"^\d{5}$"),
    ("JP", r"^\d{3}-?\d{4}$"),
    ("KE", r"^\d{5}$"),
    ("KG", r"^\d{6}$"),
    ("KH", r"^\d{5,6}$"),
    ("KR", r"^\d{5}$"),
    ("KW", r"^\d{5}$"),
    ("KZ", r"^\d{6}$"),
    ("LA", r"^\d{5}$"),
    ("LB", r"^\d{4}(?: ?\d{4})?$"),
    ("LI", r"^94\d{2}$"),
    ("LK", r"^\d{5}$"),
    ("LT", r"^LT-\d{5}$"),
    ("LU", r"^\d{4}$"),
    ("LV", r"^LV-\d{4}$"),
    ("MA", r"^\d{5}$"),
    ("MC", r"^980\d{2}$"),
    ("MD", r"^MD-?\d{4}$"),
    ("ME", r"^8\d{4}$"),
    ("MG", r"^\d{3}$"),
    ("MK", r"^\d{4}$"),
    ("MM", r"^\d{5}$"),
    ("MN", r"^\d{5}$"),
    ("MT", r"^[A-Z]{3} ?\d{4}$"),
    ("MV", r"^\d{5}$"),
    ("MX", r"^\d{5}$"),
    ("MY", r"^\d{5}$"),
    ("MZ", r"^\d{4}$"),
    ("NC", r"^988\d{2}$"),
    ("NE", r"^\d{4}$"),
    ("NG", r"^\d{6}$"),
    ("NI", r"^\d{5}$"),
    ("NL", r"^\d{4} ?[A-Z]{2}$"),
    ("NO", r"^\d{4}$"),
    ("NP", r"^\d{5}$"),
    ("NZ", r"^\d{4}$"),
    ("OM", r"^\d{3}$"),
    ("PA", r"^\d{4}$"),
    ("PE", r"^\d{5}$"),
    ("PH", r"^\d{4}$"),
    ("PK", r"^\d{5}$"),
    ("PL", r"^\d{2}-?\d{3}$"),
    ("PT", r"^\d{4}-?\d{3}$"),
    ("PY", r"^\d{4}$"),
    ("RO", r"^\d{6}$"),
    ("RS", r"^\d{5,6}$"),
    ("RU", r"^\d{6}$"),
    ("SA", r"^\d{5}(?:-\d{4})?$"),
    ("SE", r"^\d{3} ?\d{2}$"),
    ("SG", r"^\d{6}$"),
    ("SI", r"^\d{4}$"),
    ("SK", r"^\d{3} ?\d{2}$"),
    ("SM", r"^4789\d$"),
    ("SN", r"^\d{5}$"),
    ("SV", r"^\d{4}$"),
    ("TH", r"^\d{5}$"),
    ("TJ", r"^\d{6}$"),
    ("TM", r"^\d{6}$"),
    ("TN", r"^\d{4}$"),
    ("TR", r"^\d{5}$"),
    ("TW", r"^\d{3}(?:\d{2})?$"),
    ("TZ", r"^\d{5}$"),
    ("UA", r"^\d{5}$"),
    ("US", r"^\d{5}(?:-\d{4})?$"),
    ("UY", r"^\d{5}$"),
    ("UZ", r"^\d{6}$"),
    ("VE", r"^\d{4}$"),
    ("VN", r"^\d{6}$"),
    ("ZA", r"^\d{4}$"),
    ("ZM", r"^\d{5}$"),
];

static REGISTRY: Lazy<BTreeMap<&'static str, Regex>> = Lazy::new(|| {
    POSTAL_PATTERNS
        .iter()
        .map(|(country, source)| {
            let regex = RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|err| {
                    panic!("postal pattern for {country} failed to compile: {err}")
                });
            (*country, regex)
        })
        .collect()
});

/// True when `value` matches the postal grammar of `country_code`.
///
/// Unknown country codes always match: the caller gates emptiness via
/// requiredness, so this function assumes a non-empty value.
pub fn matches(country_code: &str, value: &str) -> bool {
    let code = country_code.trim().to_ascii_uppercase();
    match REGISTRY.get(code.as_str()) {
        Some(regex) => regex.is_match(value.trim()),
        None => true,
    }
}

/// Table contents for the shared-schema export.
pub fn pattern_sources() -> impl Iterator<Item = (&'static str, &'static str)> {
    POSTAL_PATTERNS.iter().copied()
}
