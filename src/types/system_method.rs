//! Classification of catalog default-value expressions

use serde::Serialize;

/// A system-generated default: the engine computes the value at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SystemMethod {
    NewGuid,
    NewSequentialId,
    CurrentDateTime,
    CurrentDateTimeOffset,
    CurrentUTCDateTime,
    CurrentUser,
}

/// The six default expressions the catalog emits for system-generated values.
/// Matching is against the whole expression, case-insensitively; no attempt
/// is made to parse arbitrary SQL.
const SYSTEM_DEFAULTS: [(&str, SystemMethod); 6] = [
    ("(newid())", SystemMethod::NewGuid),
    ("(newsequentialid())", SystemMethod::NewSequentialId),
    ("(getdate())", SystemMethod::CurrentDateTime),
    ("(sysdatetimeoffset())", SystemMethod::CurrentDateTimeOffset),
    ("(getutcdate())", SystemMethod::CurrentUTCDateTime),
    ("(user_name())", SystemMethod::CurrentUser),
];

/// Outcome of classifying a raw default-value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// A fixed literal, carried verbatim (surrounding parentheses included).
    Literal(String),
    /// One of the recognized system-generated idioms.
    Method(SystemMethod),
    /// No default declared.
    Absent,
}

impl DefaultValue {
    /// Classify a raw default expression as reported by the catalog.
    pub fn classify(raw: Option<&str>) -> DefaultValue {
        let Some(expression) = raw else {
            return DefaultValue::Absent;
        };

        for (idiom, method) in SYSTEM_DEFAULTS {
            if expression.eq_ignore_ascii_case(idiom) {
                return DefaultValue::Method(method);
            }
        }

        DefaultValue::Literal(expression.to_string())
    }
}
