pub mod clock;
pub mod prayer_card;
pub mod region_select;
pub mod schedule_view;
pub mod theme_toggle;

pub use clock::Clock;
pub use prayer_card::PrayerCard;
pub use region_select::RegionSelect;
pub use schedule_view::{FailurePolicy, ScheduleView};
pub use theme_toggle::{use_theme_provider, ThemeToggle};
