use serde::de::DeserializeOwned;

/// Parse an enum name using serde, accepting `kebab-case` and `snake_case`
/// spellings besides the camelCase wire name.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let value = serde_json::Value::String(camel_case(raw.trim()));
    serde_json::from_value(value).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// `follow-up-suggestion` / `follow_up_suggestion` -> `followUpSuggestion`.
fn camel_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = false;
    for ch in raw.chars() {
        if ch == '-' || ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Parse every entry of a repeated flag.
pub fn parse_all<T>(raws: &[String], field: &str) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
{
    raws.iter().map(|raw| parse_enum(raw, field)).collect()
}
