use crate::shared::types::{DailySchedule, ScheduleTable};

/// The eight times shown for a day, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrayerTime {
    Imsak,
    Subuh,
    Terbit,
    Dhuha,
    Dzuhur,
    Ashar,
    Maghrib,
    Isya,
}

impl PrayerTime {
    pub const ALL: [PrayerTime; 8] = [
        PrayerTime::Imsak,
        PrayerTime::Subuh,
        PrayerTime::Terbit,
        PrayerTime::Dhuha,
        PrayerTime::Dzuhur,
        PrayerTime::Ashar,
        PrayerTime::Maghrib,
        PrayerTime::Isya,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrayerTime::Imsak => "Imsak",
            PrayerTime::Subuh => "Subuh",
            PrayerTime::Terbit => "Terbit",
            PrayerTime::Dhuha => "Dhuha",
            PrayerTime::Dzuhur => "Dzuhur",
            PrayerTime::Ashar => "Ashar",
            PrayerTime::Maghrib => "Maghrib",
            PrayerTime::Isya => "Isya",
        }
    }
}

impl DailySchedule {
    pub fn time(&self, prayer: PrayerTime) -> &str {
        match prayer {
            PrayerTime::Imsak => &self.imsak,
            PrayerTime::Subuh => &self.subuh,
            PrayerTime::Terbit => &self.terbit,
            PrayerTime::Dhuha => &self.dhuha,
            PrayerTime::Dzuhur => &self.dzuhur,
            PrayerTime::Ashar => &self.ashar,
            PrayerTime::Maghrib => &self.maghrib,
            PrayerTime::Isya => &self.isya,
        }
    }
}

/// Row for `date_key`, if the table has one.
pub fn entry_for(table: &ScheduleTable, date_key: &str) -> Option<DailySchedule> {
    table.get(date_key).cloned()
}

/// Label and value of each card; values are blank when there is no entry.
pub fn cards(entry: Option<&DailySchedule>) -> [(&'static str, String); 8] {
    PrayerTime::ALL.map(|p| {
        let value = entry.map(|e| e.time(p).to_string()).unwrap_or_default();
        (p.label(), value)
    })
}
