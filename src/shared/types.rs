use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One day of the imsakiyah table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    #[serde(default, deserialize_with = "string_or_number")]
    pub tanggal: String,
    #[serde(default)]
    pub imsak: String,
    #[serde(default)]
    pub subuh: String,
    #[serde(default)]
    pub terbit: String,
    #[serde(default)]
    pub dhuha: String,
    #[serde(default)]
    pub dzuhur: String,
    #[serde(default)]
    pub ashar: String,
    #[serde(default)]
    pub maghrib: String,
    #[serde(default)]
    pub isya: String,
}

/// Schedule rows keyed by ISO date (yyyy-mm-dd).
pub type ScheduleTable = BTreeMap<String, DailySchedule>;

// The upstream sends `tanggal` either as a label or as a day number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}
