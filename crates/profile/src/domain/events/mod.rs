mod profile_events;

pub use profile_events::ProfileEvent;
