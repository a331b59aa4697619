//! State behind the schedule page.
//!
//! Every user action returns the fetches it needs as [`Effect`]s; the caller
//! runs them and hands the results back through the `apply_*` methods. Each
//! slot hands out a [`Ticket`] per request and only accepts the answer to the
//! latest one, so an old province's cities can never overwrite a newer list.

use dioxus::logger::tracing::{debug, warn};

use crate::shared::error::FetchError;
use crate::shared::schedule::entry_for;
use crate::shared::types::{DailySchedule, ScheduleTable};

pub const DEFAULT_PROVINCE: &str = "Banten";
pub const DEFAULT_CITY: &str = "Kab. Tangerang";

/// Generation number of one request for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

/// A fetched value plus the bookkeeping needed to drop stale answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
    value: T,
    status: LoadStatus,
    issued: u64,
}

impl<T> Slot<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            status: LoadStatus::Idle,
            issued: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn failed(&self) -> Option<&FetchError> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.status = LoadStatus::Loading;
        Ticket(self.issued)
    }

    /// Store `result` if `ticket` is the latest one issued. The old value is
    /// kept on failure.
    fn settle(&mut self, ticket: Ticket, result: Result<T, FetchError>) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        match result {
            Ok(value) => {
                self.value = value;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => self.status = LoadStatus::Failed(e),
        }
        true
    }
}

/// Fetch requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadProvinces {
        ticket: Ticket,
    },
    LoadCities {
        province: String,
        ticket: Ticket,
    },
    LoadSchedule {
        province: String,
        city: String,
        ticket: Ticket,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    provinces: Slot<Vec<String>>,
    selected_province: String,
    cities: Slot<Vec<String>>,
    selected_city: String,
    schedule: Slot<Option<DailySchedule>>,
    // region of the latest schedule request
    schedule_for: Option<(String, String)>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PROVINCE, DEFAULT_CITY)
    }
}

impl ViewState {
    pub fn new(province: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            provinces: Slot::new(Vec::new()),
            selected_province: province.into(),
            cities: Slot::new(Vec::new()),
            selected_city: city.into(),
            schedule: Slot::new(None),
            schedule_for: None,
        }
    }

    pub fn provinces(&self) -> &Slot<Vec<String>> {
        &self.provinces
    }

    pub fn cities(&self) -> &Slot<Vec<String>> {
        &self.cities
    }

    pub fn schedule(&self) -> &Slot<Option<DailySchedule>> {
        &self.schedule
    }

    pub fn selected_province(&self) -> &str {
        &self.selected_province
    }

    pub fn selected_city(&self) -> &str {
        &self.selected_city
    }

    /// Today's entry, if the last schedule answer had one.
    pub fn today(&self) -> Option<&DailySchedule> {
        self.schedule.value().as_ref()
    }

    /// Initial loads when the page appears.
    pub fn mount(&mut self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::LoadProvinces {
                ticket: self.provinces.begin(),
            },
            self.request_cities(),
        ];
        effects.extend(self.request_schedule());
        effects
    }

    pub fn select_province(&mut self, province: impl Into<String>) -> Vec<Effect> {
        let province = province.into();
        if province == self.selected_province {
            return Vec::new();
        }
        self.selected_province = province;
        // anything in flight belongs to the old region
        self.schedule.begin();
        self.schedule_for = None;
        vec![self.request_cities()]
    }

    pub fn select_city(&mut self, city: impl Into<String>) -> Vec<Effect> {
        let city = city.into();
        if city == self.selected_city {
            return Vec::new();
        }
        self.selected_city = city;
        self.request_schedule().into_iter().collect()
    }

    pub fn apply_provinces(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<String>, FetchError>,
    ) -> bool {
        if let Err(e) = &result {
            warn!("[view] province list failed: {e}");
        }
        let applied = self.provinces.settle(ticket, result);
        if !applied {
            debug!("[view] dropped stale province list");
        }
        applied
    }

    /// Store a city list. When it lands, the selected city is reconciled
    /// against it and the schedule is requested if the region changed.
    pub fn apply_cities(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<String>, FetchError>,
    ) -> Vec<Effect> {
        if let Err(e) = &result {
            warn!(
                "[view] city list for {} failed: {e}",
                self.selected_province
            );
        }
        let loaded = result.is_ok();
        if !self.cities.settle(ticket, result) {
            debug!("[view] dropped stale city list");
            return Vec::new();
        }
        if !loaded {
            return Vec::new();
        }
        let cities = self.cities.value();
        let Some(first) = cities.first() else {
            // no city to pair with this province; nothing to schedule
            self.selected_city.clear();
            return Vec::new();
        };
        if !cities.contains(&self.selected_city) {
            self.selected_city = first.clone();
        }
        self.request_schedule().into_iter().collect()
    }

    /// Store the schedule answer, keeping only the row for `today_key`.
    pub fn apply_schedule(
        &mut self,
        ticket: Ticket,
        result: Result<ScheduleTable, FetchError>,
        today_key: &str,
    ) -> bool {
        if let Err(e) = &result {
            warn!(
                "[view] schedule for {} / {} failed: {e}",
                self.selected_province, self.selected_city
            );
        }
        let result = result.map(|table| {
            let entry = entry_for(&table, today_key);
            if entry.is_none() {
                debug!("[view] schedule has no row for {today_key}");
            }
            entry
        });
        let applied = self.schedule.settle(ticket, result);
        if !applied {
            debug!("[view] dropped stale schedule");
        }
        applied
    }

    /// Re-issue every slot whose last request failed.
    pub fn retry_failed(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.provinces.failed().is_some() {
            effects.push(Effect::LoadProvinces {
                ticket: self.provinces.begin(),
            });
        }
        if self.cities.failed().is_some() {
            if self.schedule.failed().is_some() {
                // re-requested once the city list lands
                self.schedule_for = None;
            }
            effects.push(self.request_cities());
        } else if self.schedule.failed().is_some() {
            self.schedule_for = None;
            effects.extend(self.request_schedule());
        }
        effects
    }

    fn request_cities(&mut self) -> Effect {
        Effect::LoadCities {
            province: self.selected_province.clone(),
            ticket: self.cities.begin(),
        }
    }

    fn request_schedule(&mut self) -> Option<Effect> {
        let region = (self.selected_province.clone(), self.selected_city.clone());
        if self.schedule_for.as_ref() == Some(&region) {
            return None;
        }
        self.schedule_for = Some(region.clone());
        Some(Effect::LoadSchedule {
            province: region.0,
            city: region.1,
            ticket: self.schedule.begin(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn day(subuh: &str) -> DailySchedule {
        DailySchedule {
            tanggal: "Jumat, 16/10/2026".into(),
            subuh: subuh.into(),
            ..Default::default()
        }
    }

    fn table(key: &str, subuh: &str) -> ScheduleTable {
        let mut t = ScheduleTable::new();
        t.insert(key.into(), day(subuh));
        t
    }

    fn cities_ticket(effects: &[Effect]) -> Ticket {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::LoadCities { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .unwrap()
    }

    fn schedule_effect(effects: &[Effect]) -> (String, String, Ticket) {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::LoadSchedule {
                    province,
                    city,
                    ticket,
                } => Some((province.clone(), city.clone(), *ticket)),
                _ => None,
            })
            .unwrap()
    }

    fn upstream_500() -> FetchError {
        FetchError::Upstream("GET provinsi failed with status 500".into())
    }

    #[test]
    fn mount_loads_everything_for_the_defaults() {
        let mut state = ViewState::default();
        let effects = state.mount();
        assert_eq!(effects.len(), 3);
        assert!(matches!(effects[0], Effect::LoadProvinces { .. }));
        assert!(matches!(
            &effects[1],
            Effect::LoadCities { province, .. } if province == "Banten"
        ));
        let (p, c, _) = schedule_effect(&effects);
        assert_eq!((p.as_str(), c.as_str()), ("Banten", "Kab. Tangerang"));
    }

    #[test]
    fn cities_containing_current_city_do_not_refetch_schedule() {
        let mut state = ViewState::default();
        let effects = state.mount();
        let next = state.apply_cities(
            cities_ticket(&effects),
            Ok(names(&["Kab. Serang", "Kab. Tangerang"])),
        );
        assert!(next.is_empty());
        assert_eq!(state.selected_city(), "Kab. Tangerang");
    }

    #[test]
    fn each_province_selection_fetches_its_cities_once() {
        let mut state = ViewState::default();
        state.mount();
        for province in ["Aceh", "Bali", "Jawa Barat"] {
            let effects = state.select_province(province);
            let loads: Vec<_> = effects
                .iter()
                .filter(|e| matches!(e, Effect::LoadCities { .. }))
                .collect();
            assert_eq!(loads.len(), 1);
            assert!(matches!(
                loads[0],
                Effect::LoadCities { province: p, .. } if p == province
            ));
        }
    }

    #[test]
    fn reselecting_the_same_province_is_a_no_op() {
        let mut state = ViewState::default();
        assert!(state.select_province("Banten").is_empty());
        assert!(state.select_city("Kab. Tangerang").is_empty());
    }

    #[test]
    fn province_change_reconciles_city_then_loads_schedule_once() {
        let mut state = ViewState::default();
        state.mount();
        let effects = state.select_province("Bali");
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::LoadSchedule { .. })));

        let next = state.apply_cities(
            cities_ticket(&effects),
            Ok(names(&["Kab. Badung", "Kota Denpasar"])),
        );
        assert_eq!(state.selected_city(), "Kab. Badung");
        assert_eq!(next.len(), 1);
        let (p, c, _) = schedule_effect(&next);
        assert_eq!((p.as_str(), c.as_str()), ("Bali", "Kab. Badung"));
    }

    #[test]
    fn late_city_list_from_an_older_province_is_dropped() {
        let mut state = ViewState::default();
        state.mount();
        let first = state.select_province("Aceh");
        let second = state.select_province("Bali");

        let next = state.apply_cities(cities_ticket(&second), Ok(names(&["Kab. Badung"])));
        assert_eq!(next.len(), 1);

        // Aceh answers last
        let stale = state.apply_cities(cities_ticket(&first), Ok(names(&["Kab. Aceh Besar"])));
        assert!(stale.is_empty());
        assert_eq!(state.cities().value(), &names(&["Kab. Badung"]));
        assert_eq!(state.selected_city(), "Kab. Badung");
    }

    #[test]
    fn city_picked_before_new_cities_land_ends_consistent_with_province() {
        let mut state = ViewState::default();
        let mount = state.mount();
        state.apply_cities(
            cities_ticket(&mount),
            Ok(names(&["Kab. Serang", "Kab. Tangerang"])),
        );

        let province_fx = state.select_province("Bali");
        // user picks from the still-displayed Banten list
        let city_fx = state.select_city("Kab. Serang");
        let (_, _, early_ticket) = schedule_effect(&city_fx);

        let next = state.apply_cities(
            cities_ticket(&province_fx),
            Ok(names(&["Kab. Badung", "Kota Denpasar"])),
        );
        assert_eq!(state.cities().value(), &names(&["Kab. Badung", "Kota Denpasar"]));
        assert!(state.cities().value().contains(&state.selected_city().to_string()));

        let (p, c, ticket) = schedule_effect(&next);
        assert_eq!((p.as_str(), c.as_str()), ("Bali", "Kab. Badung"));
        assert!(!state.apply_schedule(early_ticket, Ok(table("2026-10-16", "04:01")), "2026-10-16"));
        assert!(state.apply_schedule(ticket, Ok(table("2026-10-16", "04:12")), "2026-10-16"));
        assert_eq!(state.today().map(|d| d.subuh.as_str()), Some("04:12"));
    }

    #[test]
    fn schedule_keeps_only_todays_row() {
        let mut state = ViewState::default();
        let effects = state.mount();
        let (_, _, ticket) = schedule_effect(&effects);
        assert!(state.apply_schedule(ticket, Ok(table("2026-10-16", "04:30")), "2026-10-16"));
        assert_eq!(state.today().map(|d| d.subuh.as_str()), Some("04:30"));
        assert_eq!(state.schedule().status(), &LoadStatus::Loaded);
    }

    #[test]
    fn schedule_without_today_is_loaded_but_empty() {
        let mut state = ViewState::default();
        let effects = state.mount();
        let (_, _, ticket) = schedule_effect(&effects);
        state.apply_schedule(ticket, Ok(table("2026-10-15", "04:30")), "2026-10-16");
        assert!(state.today().is_none());
        assert_eq!(state.schedule().status(), &LoadStatus::Loaded);
    }

    #[test]
    fn failed_province_load_leaves_list_empty_and_records_error() {
        let mut state = ViewState::default();
        let effects = state.mount();
        let Effect::LoadProvinces { ticket } = effects[0] else {
            panic!("first effect loads provinces");
        };
        assert!(state.apply_provinces(ticket, Err(upstream_500())));
        assert!(state.provinces().value().is_empty());
        assert_eq!(state.provinces().failed(), Some(&upstream_500()));
    }

    #[test]
    fn failure_keeps_previous_value() {
        let mut state = ViewState::default();
        let mount = state.mount();
        state.apply_cities(cities_ticket(&mount), Ok(names(&["Kab. Tangerang"])));

        let again = state.select_province("Aceh");
        let next = state.apply_cities(cities_ticket(&again), Err(upstream_500()));
        assert!(next.is_empty());
        assert_eq!(state.cities().value(), &names(&["Kab. Tangerang"]));
        assert!(state.cities().failed().is_some());
    }

    #[test]
    fn retry_reissues_only_failed_slots() {
        let mut state = ViewState::default();
        let effects = state.mount();
        let Effect::LoadProvinces { ticket } = effects[0] else {
            panic!("first effect loads provinces");
        };
        state.apply_provinces(ticket, Err(upstream_500()));
        state.apply_cities(cities_ticket(&effects), Ok(names(&["Kab. Tangerang"])));

        let retry = state.retry_failed();
        assert_eq!(retry.len(), 1);
        let Effect::LoadProvinces { ticket } = retry[0] else {
            panic!("retry loads provinces");
        };
        assert!(state.apply_provinces(ticket, Ok(names(&["Banten"]))));
        assert!(state.retry_failed().is_empty());
    }

    #[test]
    fn retry_after_cities_and_schedule_failed_refetches_both() {
        let mut state = ViewState::default();
        let effects = state.mount();
        let (_, _, ticket) = schedule_effect(&effects);
        state.apply_cities(cities_ticket(&effects), Err(upstream_500()));
        state.apply_schedule(ticket, Err(upstream_500()), "2026-10-16");

        let retry = state.retry_failed();
        assert_eq!(retry.len(), 1);
        let next = state.apply_cities(cities_ticket(&retry), Ok(names(&["Kab. Tangerang"])));
        let (p, c, ticket) = schedule_effect(&next);
        assert_eq!((p.as_str(), c.as_str()), ("Banten", "Kab. Tangerang"));
        assert!(state.apply_schedule(ticket, Ok(table("2026-10-16", "04:30")), "2026-10-16"));
        assert_eq!(state.schedule().status(), &LoadStatus::Loaded);
    }

    #[test]
    fn empty_city_list_clears_city_and_skips_schedule() {
        let mut state = ViewState::default();
        state.mount();
        let effects = state.select_province("Bali");
        let next = state.apply_cities(cities_ticket(&effects), Ok(Vec::new()));
        assert!(next.is_empty());
        assert_eq!(state.selected_city(), "");
        assert!(state.cities().value().is_empty());
    }

    #[test]
    fn retry_refetches_a_failed_schedule() {
        let mut state = ViewState::default();
        let effects = state.mount();
        let (_, _, ticket) = schedule_effect(&effects);
        state.apply_schedule(ticket, Err(upstream_500()), "2026-10-16");

        let retry = state.retry_failed();
        let (p, c, _) = schedule_effect(&retry);
        assert_eq!((p.as_str(), c.as_str()), ("Banten", "Kab. Tangerang"));
    }
}
