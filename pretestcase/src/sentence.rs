//! Rendering values and keywords inside step sentences.

use scenaria_core::{symbols, KeywordDictionary, NodeType, Value};

/// A value as written in a sentence: strings, dates and times between
/// double quotes, numbers and booleans bare.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!(
            "{}{}{}",
            symbols::VALUE_WRAPPER,
            s.replace(symbols::VALUE_WRAPPER, "\\\""),
            symbols::VALUE_WRAPPER
        ),
        other => other.to_string(),
    }
}

/// A UI literal between its delimiters, e.g. `<userName>`.
pub fn ui_literal(literal: &str) -> String {
    format!("{}{}{}", symbols::UI_LITERAL_PREFIX, literal, symbols::UI_LITERAL_SUFFIX)
}

/// Replaces the leading "otherwise" keyword of a sentence by the "then"
/// keyword. A sentence without it just gets "then" in front.
pub fn otherwise_as_then(content: &str, dict: &KeywordDictionary) -> String {
    let rest = dict
        .step_otherwise
        .iter()
        .filter(|keyword| !keyword.is_empty())
        .filter(|keyword| {
            content
                .get(..keyword.len())
                .map(|start| start.to_lowercase() == keyword.to_lowercase())
                .unwrap_or(false)
        })
        .max_by_key(|keyword| keyword.len())
        .and_then(|keyword| content.get(keyword.len()..))
        .unwrap_or(content)
        .trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    format!("{} {}", dict.keyword_for(NodeType::Then), rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&Value::from("ip!")), "\"ip!\"");
        assert_eq!(format_value(&Value::from("say \"hi\"")), "\"say \\\"hi\\\"\"");
        assert_eq!(format_value(&Value::from(i64::MIN)), "-9223372036854775808");
        assert_eq!(format_value(&Value::from(3.14)), "3.14");
        let time = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(format_value(&Value::from(time)), "\"23:59:59\"");
    }

    #[test]
    fn test_otherwise_as_then() {
        let dict = KeywordDictionary::english();
        assert_eq!(
            otherwise_as_then("Otherwise, I must see the message \"bar\"", &dict),
            "Then I must see the message \"bar\""
        );
        assert_eq!(otherwise_as_then("I see an error", &dict), "Then I see an error");
    }
}
