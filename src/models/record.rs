use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One raw checklist submission row as returned by the reporting API.
///
/// The upstream schema gives no guarantees: any field may be missing, null,
/// or a non-string scalar. Every field degrades to a trimmed string on
/// deserialization so the rest of the pipeline never has to re-check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChecklistRecord {
    #[serde(rename = "shiftDate", deserialize_with = "loose_string")]
    pub shift_date: String,
    #[serde(deserialize_with = "loose_string")]
    pub shift: String,
    #[serde(deserialize_with = "loose_string")]
    pub station: String,
    #[serde(deserialize_with = "loose_string")]
    pub donetime: String,
    #[serde(deserialize_with = "loose_string")]
    pub itemname: String,
    #[serde(deserialize_with = "loose_string")]
    pub itemresult: String,
    #[serde(deserialize_with = "loose_string")]
    pub operator: String,
    #[serde(rename = "productproduced", deserialize_with = "loose_string")]
    pub product_produced: String,
    #[serde(rename = "productionOrder", deserialize_with = "loose_string")]
    pub production_order: String,
    #[serde(rename = "factoryName", deserialize_with = "loose_string")]
    pub factory_name: String,
}

/// Accept any JSON scalar and turn it into a trimmed string.
/// null → "", numbers and booleans → their display form.
fn loose_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}
