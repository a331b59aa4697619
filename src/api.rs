use dioxus::prelude::*;

use crate::shared::types::ScheduleTable;

#[server(GetProvinces)]
pub async fn get_provinces() -> Result<Vec<String>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::warn;

        let client = crate::backend::client().map_err(|e| {
            warn!("get_provinces: client unavailable: {e:#}");
            ServerFnError::new(format!("{e:#}"))
        })?;
        client.provinces().await.map_err(|e| {
            warn!("get_provinces: {e}");
            ServerFnError::new(e.to_string())
        })
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(vec![])
    }
}

#[server(GetCities)]
pub async fn get_cities(province: String) -> Result<Vec<String>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::warn;

        let client = crate::backend::client().map_err(|e| {
            warn!("get_cities: client unavailable: {e:#}");
            ServerFnError::new(format!("{e:#}"))
        })?;
        client.cities(&province).await.map_err(|e| {
            warn!("get_cities({province}): {e}");
            ServerFnError::new(e.to_string())
        })
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = province;
        Ok(vec![])
    }
}

#[server(GetSchedule)]
pub async fn get_schedule(province: String, city: String) -> Result<ScheduleTable, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::warn;

        let client = crate::backend::client().map_err(|e| {
            warn!("get_schedule: client unavailable: {e:#}");
            ServerFnError::new(format!("{e:#}"))
        })?;
        client.schedule(&province, &city).await.map_err(|e| {
            warn!("get_schedule({province}, {city}): {e}");
            ServerFnError::new(e.to_string())
        })
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = (province, city);
        Ok(ScheduleTable::new())
    }
}
