//! Dial-code region resolution and phone format validation.
//!
//! The metadata (which regions share a calling code, what a national number
//! looks like per region) is compiled-in table data consumed as a black box;
//! a deployment wanting full libphonenumber coverage swaps the tables, not
//! the resolution algorithm. Malformed user input is a `false` verdict,
//! never an error escaping to the caller.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Calling code → regions sharing it. Order matters: the first region is the
/// canonical primary one, returned for shared codes such as `+1` and `+44`.
const DIAL_CODE_REGIONS: &[(&str, &[&str])] = &[
    ("1", &["US", "CA", "BS", "BB", "JM", "TT"]),
    ("7", &["RU", "KZ"]),
    ("20", &["EG"]),
    ("27", &["ZA"]),
    ("30", &["GR"]),
    ("31", &["NL"]),
    ("32", &["BE"]),
    ("33", &["FR"]),
    ("34", &["ES"]),
    ("36", &["HU"]),
    ("39", &["IT"]),
    ("40", &["RO"]),
    ("41", &["CH"]),
    ("43", &["AT"]),
    ("44", &["GB", "GG", "IM", "JE"]),
    ("45", &["DK"]),
    ("46", &["SE"]),
    ("47", &["NO"]),
    ("48", &["PL"]),
    ("49", &["DE"]),
    ("51", &["PE"]),
    ("52", &["MX"]),
    ("54", &["AR"]),
    ("55", &["BR"]),
    ("56", &["CL"]),
    ("61", &["AU"]),
    ("62", &["ID"]),
    ("63", &["PH"]),
    ("64", &["NZ"]),
    ("65", &["SG"]),
    ("66", &["TH"]),
    ("81", &["JP"]),
    ("82", &["KR"]),
    ("84", &["VN"]),
    ("86", &["CN"]),
    ("90", &["TR"]),
    ("91", &["IN"]),
    ("92", &["PK"]),
    ("351", &["PT"]),
    ("352", &["LU"]),
    ("353", &["IE"]),
    ("358", &["FI", "AX"]),
    ("370", &["LT"]),
    ("371", &["LV"]),
    ("372", &["EE"]),
    ("385", &["HR"]),
    ("386", &["SI"]),
    ("420", &["CZ"]),
    ("421", &["SK"]),
];

/// Region → (calling code, national significant number grammar). The grammar
/// applies after the calling code and any trunk `0` have been stripped.
const REGION_PLANS: &[(&str, &str, &str)] = &[
    ("US", "1", r"^[2-9]\d{2}[2-9]\d{6}$"),
    ("CA", "1", r"^[2-9]\d{2}[2-9]\d{6}$"),
    ("GB", "44", r"^[1-9]\d{8,9}$"),
    ("IE", "353", r"^[1-9]\d{6,8}$"),
    ("NL", "31", r"^[1-9]\d{8}$"),
    ("BE", "32", r"^[1-9]\d{7,8}$"),
    ("FR", "33", r"^[1-9]\d{8}$"),
    ("ES", "34", r"^[6-9]\d{8}$"),
    ("DE", "49", r"^[1-9]\d{6,10}$"),
    ("AT", "43", r"^[1-9]\d{6,10}$"),
    ("CH", "41", r"^[1-9]\d{8}$"),
    ("IT", "39", r"^\d{6,11}$"),
    ("PT", "351", r"^[1-9]\d{8}$"),
    ("LU", "352", r"^[1-9]\d{5,10}$"),
    ("DK", "45", r"^[1-9]\d{7}$"),
    ("SE", "46", r"^[1-9]\d{6,9}$"),
    ("NO", "47", r"^[1-9]\d{7}$"),
    ("FI", "358", r"^[1-9]\d{5,10}$"),
    ("PL", "48", r"^[1-9]\d{8}$"),
    ("CZ", "420", r"^[1-9]\d{8}$"),
    ("SK", "421", r"^[1-9]\d{8}$"),
    ("HU", "36", r"^[1-9]\d{7,8}$"),
    ("RO", "40", r"^[1-9]\d{8}$"),
    ("GR", "30", r"^[1-9]\d{9}$"),
    ("HR", "385", r"^[1-9]\d{7,8}$"),
    ("SI", "386", r"^[1-9]\d{7}$"),
    ("LT", "370", r"^[1-9]\d{7}$"),
    ("LV", "371", r"^[2-9]\d{7}$"),
    ("EE", "372", r"^[3-9]\d{6,7}$"),
    ("RU", "7", r"^[3-9]\d{9}$"),
    ("TR", "90", r"^[1-9]\d{9}$"),
    ("AU", "61", r"^[1-9]\d{8}$"),
    ("NZ", "64", r"^[1-9]\d{7,9}$"),
    ("JP", "81", r"^[1-9]\d{8,9}$"),
    ("IN", "91", r"^[1-9]\d{9}$"),
    ("SG", "65", r"^[3689]\d{7}$"),
    ("BR", "55", r"^[1-9]\d{9,10}$"),
    ("MX", "52", r"^[1-9]\d{9}$"),
    ("ZA", "27", r"^[1-9]\d{8}$"),
];

static DIAL_INDEX: Lazy<BTreeMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| DIAL_CODE_REGIONS.iter().copied().collect());

static PLAN_INDEX: Lazy<BTreeMap<&'static str, (&'static str, Regex)>> = Lazy::new(|| {
    REGION_PLANS
        .iter()
        .map(|(region, dial, source)| {
            let regex = Regex::new(source).unwrap_or_else(|err| {
                panic!("numbering plan for {region} failed to compile: {err}")
            });
            (*region, (*dial, regex))
        })
        .collect()
});

/// Resolve the region a dial code implies.
///
/// No dial code returns `default_region` unchanged. A known code returns its
/// canonical primary region, a deliberate tie-break for codes shared by
/// multiple countries (`+1` resolves to `US`, never `CA`). Unknown codes
/// fall back to the default region rather than failing.
pub fn resolve_region(dial_code: Option<&str>, default_region: &str) -> String {
    let Some(raw) = dial_code else {
        return default_region.to_string();
    };

    let digits = normalize_dial_code(raw);
    if digits.is_empty() {
        return default_region.to_string();
    }

    match DIAL_INDEX.get(digits.as_str()) {
        Some(regions) => regions
            .first()
            .map(|region| region.to_string())
            .unwrap_or_else(|| default_region.to_string()),
        None => default_region.to_string(),
    }
}

/// Validate `number` (dial code plus raw digits, in any common user spelling)
/// against `region`'s numbering plan.
///
/// Unparsable input is invalid, not an error. Regions without a compiled-in
/// plan validate leniently, mirroring the unknown-country postal policy.
pub fn is_valid(number: &str, region: &str) -> bool {
    let region = region.trim().to_ascii_uppercase();
    let Some((dial, plan)) = PLAN_INDEX.get(region.as_str()) else {
        return true;
    };

    let Some(digits) = extract_digits(number) else {
        return false;
    };
    if digits.is_empty() {
        return false;
    }

    let national = strip_prefixes(&digits, dial);
    !national.is_empty() && plan.is_match(national)
}

/// Table contents for the shared-schema export.
pub fn dial_code_table() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    DIAL_CODE_REGIONS.iter().copied()
}

fn normalize_dial_code(raw: &str) -> String {
    let trimmed = trim_dial_prefix(raw.trim());
    trimmed.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn trim_dial_prefix(value: &str) -> &str {
    if let Some(rest) = value.strip_prefix('+') {
        rest
    } else if let Some(rest) = value.strip_prefix("00") {
        rest
    } else {
        value
    }
}

/// Digits of a user-entered number, tolerating the usual separators.
/// Any other character makes the number unparsable.
fn extract_digits(number: &str) -> Option<String> {
    let body = trim_dial_prefix(number.trim());
    let mut digits = String::new();
    for c in body.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !matches!(c, ' ' | '-' | '.' | '(' | ')') {
            return None;
        }
    }
    Some(digits)
}

fn strip_prefixes<'a>(digits: &'a str, dial: &str) -> &'a str {
    let without_dial = digits.strip_prefix(dial).unwrap_or(digits);
    // Trunk zero is not part of the national significant number.
    without_dial.strip_prefix('0').unwrap_or(without_dial)
}
