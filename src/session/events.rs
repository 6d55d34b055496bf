//! Session events and derived view state.

use std::path::PathBuf;
use std::sync::Arc;

use crate::geoip::LocationRecord;

/// Something a view may want to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A lookup finished; carries the new current record
    LookupSucceeded(LocationRecord),
    /// A lookup failed; carries the user-facing message
    LookupFailed(String),
    /// A report was written
    ReportSaved(PathBuf),
    /// Writing a report failed
    ReportFailed(String),
    /// A map document was written
    MapRendered(PathBuf),
    /// Settings were persisted
    SettingsSaved(PathBuf),
    /// A wireless scan finished with this many networks
    WifiScanned(usize),
}

/// Callback registered with [`super::Session::subscribe`].
pub type EventListener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

/// Which result actions a view should offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Showing the map is possible
    pub map_enabled: bool,
    /// Saving a report is possible
    pub report_enabled: bool,
    /// Exporting the map is offered (it reports itself unavailable)
    pub export_enabled: bool,
}

impl ViewState {
    pub(crate) fn with_location(has_location: bool) -> Self {
        Self {
            map_enabled: has_location,
            report_enabled: has_location,
            export_enabled: has_location,
        }
    }
}
