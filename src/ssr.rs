// IATA Special Service Request (SSR) codes and their validation
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{AccessibilityError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SsrCode {
    Wchr,
    Wchs,
    Stcr,
    Deaf,
    Blnd,
    Prmk,
}

impl SsrCode {
    pub const ALL: [SsrCode; 6] = [
        SsrCode::Wchr,
        SsrCode::Wchs,
        SsrCode::Stcr,
        SsrCode::Deaf,
        SsrCode::Blnd,
        SsrCode::Prmk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SsrCode::Wchr => "WCHR",
            SsrCode::Wchs => "WCHS",
            SsrCode::Stcr => "STCR",
            SsrCode::Deaf => "DEAF",
            SsrCode::Blnd => "BLND",
            SsrCode::Prmk => "PRMK",
        }
    }

    // These strings are shared with the airline side and must not drift
    pub fn description(&self) -> &'static str {
        match self {
            SsrCode::Wchr => "Wheelchair assistance (passenger provides own wheelchair)",
            SsrCode::Wchs => "Wheelchair with stowage (wheelchair stowed in cargo hold)",
            SsrCode::Stcr => "Stretcher case (medical requirement for stretcher accommodation)",
            SsrCode::Deaf => "Deaf passenger (visual alerts, no audio announcements)",
            SsrCode::Blnd => "Blind passenger (audio assistance, guide dog accommodation)",
            SsrCode::Prmk => {
                "Passenger with mobility disability (priority seating, extra assistance)"
            }
        }
    }
}

impl fmt::Display for SsrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SsrCode {
    type Err = AccessibilityError;

    // Case-insensitive; the error keeps the code as the caller wrote it
    fn from_str(code: &str) -> Result<Self> {
        let code_upper = code.to_uppercase();
        SsrCode::ALL
            .into_iter()
            .find(|ssr| ssr.as_str() == code_upper)
            .ok_or_else(|| {
                debug!(code, "Rejected unknown SSR code");
                AccessibilityError::unknown_code(code)
            })
    }
}

// Built once, read-only afterwards
static SSR_CODE_DESCRIPTIONS: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        SsrCode::ALL
            .into_iter()
            .map(|ssr| (ssr.as_str(), ssr.description()))
            .collect()
    });

// Valid SSR codes in alphabetical order
pub fn valid_ssr_codes() -> impl Iterator<Item = &'static str> {
    SSR_CODE_DESCRIPTIONS.keys().copied()
}

// None passes through untouched; codes come back uppercased in input order
// and the first unknown code fails the whole list
pub fn validate_ssr_codes<S: AsRef<str>>(codes: Option<&[S]>) -> Result<Option<Vec<String>>> {
    let Some(codes) = codes else {
        return Ok(None);
    };

    let validated = codes
        .iter()
        .map(|code| code.as_ref().parse::<SsrCode>().map(|ssr| ssr.as_str().to_string()))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = validated.len(), "Validated SSR codes");
    Ok(Some(validated))
}

// SSR codes straight from a JSON payload. A missing value or null passes through,
// anything other than an array of strings is InvalidInput
pub fn validate_ssr_codes_value(codes: Option<&Value>) -> Result<Option<Vec<String>>> {
    let items = match codes {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(AccessibilityError::invalid_input(format!(
                "SSR codes must be a list, got {}",
                json_type_name(other)
            )))
        }
    };

    // One element at a time, so the first bad element decides the error
    let validated = items
        .iter()
        .map(|item| {
            let code = item.as_str().ok_or_else(|| {
                AccessibilityError::invalid_input(format!(
                    "SSR code must be string, got {}",
                    json_type_name(item)
                ))
            })?;
            code.parse::<SsrCode>().map(|ssr| ssr.as_str().to_string())
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = validated.len(), "Validated SSR codes");
    Ok(Some(validated))
}

// Lookup is case-insensitive
pub fn get_ssr_code_description(code: &str) -> Result<&'static str> {
    code.parse::<SsrCode>().map(|ssr| ssr.description())
}

// Copy of the full code to description table
pub fn get_all_ssr_codes() -> BTreeMap<&'static str, &'static str> {
    SSR_CODE_DESCRIPTIONS.clone()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_validate_all_valid_codes() {
        let codes = ["WCHR", "WCHS", "STCR", "DEAF", "BLND", "PRMK"];
        let validated = validate_ssr_codes(Some(&codes[..])).unwrap();
        assert_eq!(validated, Some(codes.iter().map(|c| c.to_string()).collect()));
    }

    #[test]
    fn test_validate_uppercases_and_keeps_order() {
        let validated = validate_ssr_codes(Some(&["wchr", "STCR", "Deaf"][..])).unwrap();
        assert_eq!(
            validated,
            Some(vec![
                "WCHR".to_string(),
                "STCR".to_string(),
                "DEAF".to_string()
            ])
        );
    }

    #[test]
    fn test_validate_none_and_empty() {
        assert_eq!(validate_ssr_codes::<&str>(None).unwrap(), None);
        let empty: [&str; 0] = [];
        assert_eq!(validate_ssr_codes(Some(&empty[..])).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_validate_unknown_code_message() {
        let err = validate_ssr_codes(Some(&["WCHR", "XYZ"][..])).unwrap_err();
        assert_eq!(
            err,
            AccessibilityError::UnknownCode {
                code: "XYZ".to_string(),
                valid_codes: ["BLND", "DEAF", "PRMK", "STCR", "WCHR", "WCHS"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid SSR code 'XYZ'. Valid codes: BLND, DEAF, PRMK, STCR, WCHR, WCHS"
        );
    }

    #[test_case(json!("WCHR"); "#1 bare string")]
    #[test_case(json!({"code": "WCHR"}); "#2 object")]
    #[test_case(json!(42); "#3 number")]
    #[test_case(json!([123]); "#4 non-string element")]
    #[test_case(json!(["WCHR", null]); "#5 null element")]
    fn test_validate_value_invalid_input(input: Value) {
        let result = validate_ssr_codes_value(Some(&input));
        assert!(
            matches!(result, Err(AccessibilityError::InvalidInput { .. })),
            "expected InvalidInput, got {:?}",
            result
        );
    }

    #[test_case(json!(["XYZ", 5]), true; "#1 unknown code before non-string")]
    #[test_case(json!([5, "XYZ"]), false; "#2 non-string before unknown code")]
    #[test_case(json!(["wchr", "XYZ", null]), true; "#3 valid then unknown then null")]
    fn test_validate_value_first_bad_element_wins(input: Value, expect_unknown: bool) {
        let result = validate_ssr_codes_value(Some(&input));
        if expect_unknown {
            assert_eq!(result, Err(AccessibilityError::unknown_code("XYZ")));
        } else {
            assert!(
                matches!(result, Err(AccessibilityError::InvalidInput { .. })),
                "expected InvalidInput, got {:?}",
                result
            );
        }
    }

    #[test]
    fn test_validate_value_pass_through() {
        assert_eq!(validate_ssr_codes_value(None).unwrap(), None);
        assert_eq!(validate_ssr_codes_value(Some(&Value::Null)).unwrap(), None);
        assert_eq!(
            validate_ssr_codes_value(Some(&json!(["blnd", "prmk"]))).unwrap(),
            Some(vec!["BLND".to_string(), "PRMK".to_string()])
        );
        assert!(matches!(
            validate_ssr_codes_value(Some(&json!(["INVALID"]))),
            Err(AccessibilityError::UnknownCode { .. })
        ));
    }

    #[test_case("WCHR", &["wheelchair", "assistance"]; "#1 wheelchair")]
    #[test_case("DEAF", &["deaf", "visual"]; "#2 deaf")]
    #[test_case("BLND", &["blind", "audio"]; "#3 blind")]
    #[test_case("STCR", &["stretcher"]; "#4 stretcher")]
    #[test_case("prmk", &["mobility"]; "#5 lowercase lookup")]
    fn test_description_mentions(code: &str, words: &[&str]) {
        let description = get_ssr_code_description(code).unwrap().to_lowercase();
        for word in words {
            assert!(description.contains(word), "{} missing from {}", word, description);
        }
    }

    #[test]
    fn test_description_case_insensitive() {
        assert_eq!(
            get_ssr_code_description("wchr").unwrap(),
            get_ssr_code_description("WCHR").unwrap()
        );
        assert_eq!(
            get_ssr_code_description("wChS").unwrap(),
            "Wheelchair with stowage (wheelchair stowed in cargo hold)"
        );
    }

    #[test_case("INVALID"; "#1 unknown")]
    #[test_case(""; "#2 empty")]
    #[test_case("WCH"; "#3 prefix")]
    fn test_description_unknown_code(code: &str) {
        match get_ssr_code_description(code) {
            Err(AccessibilityError::UnknownCode { code: reported, valid_codes }) => {
                assert_eq!(reported, code);
                assert_eq!(valid_codes.len(), 6);
            }
            other => panic!("expected UnknownCode, got {:?}", other),
        }
    }

    #[test]
    fn test_all_ssr_codes() {
        let table = get_all_ssr_codes();
        assert_eq!(table.len(), 6);
        assert_eq!(
            table.keys().copied().collect::<Vec<_>>(),
            vec!["BLND", "DEAF", "PRMK", "STCR", "WCHR", "WCHS"]
        );
        for ssr in SsrCode::ALL {
            assert_eq!(table[ssr.as_str()], ssr.description());
        }
    }

    #[test]
    fn test_ssr_code_parse_and_serde() {
        assert_eq!("blnd".parse::<SsrCode>().unwrap(), SsrCode::Blnd);
        assert_eq!(SsrCode::Stcr.to_string(), "STCR");
        assert_eq!(serde_json::to_value(SsrCode::Wchs).unwrap(), json!("WCHS"));
        assert_eq!(
            serde_json::from_value::<SsrCode>(json!("PRMK")).unwrap(),
            SsrCode::Prmk
        );
    }
}
