//! The currently selected stop.
//!
//! The host owns a `StopSelection` and hands it to the overlay on every
//! redraw; nothing here is global.

use std::sync::Arc;

use crate::identifiers::StopIdentifier;
use crate::models::{traits::*, types::*};

#[derive(Clone, Default)]
pub struct StopSelection {
    selected: Option<Arc<dyn Stop>>,
}

impl StopSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, stop: Arc<dyn Stop>) {
        self.selected = Some(stop);
    }

    /// Select a stop by id, leaving the current selection alone if the id is unknown
    pub fn select_by_id(
        &mut self,
        provider: &dyn TransitProvider,
        id: &StopIdentifier,
    ) -> Result<()> {
        let stop = provider
            .get_stop(id)
            .ok_or_else(|| TransitError::StopNotFound(id.clone()))?;
        self.selected = Some(stop);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Arc<dyn Stop>> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::RouteNumber;
    use crate::provider::{RouteImpl, StaticTransitProvider, StopRecord};

    fn provider() -> StaticTransitProvider {
        let records = ["50001", "50002"]
            .iter()
            .map(|id| StopRecord {
                id: StopIdentifier::new(id),
                name: "Stop".into(),
                location: LatLon::new(49.26, -123.25),
                route_numbers: vec![RouteNumber::new("99")],
            })
            .collect();
        let route = RouteImpl {
            number: RouteNumber::new("99"),
            name: "UBC/Commercial-Broadway".into(),
            patterns: vec![],
        };

        StaticTransitProvider::from_data(records, vec![route]).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        assert!(StopSelection::new().selected().is_none());
    }

    #[test]
    fn test_select_and_clear() {
        let provider = provider();
        let mut selection = StopSelection::new();

        selection
            .select_by_id(&provider, &StopIdentifier::new("50001"))
            .unwrap();
        assert_eq!(selection.selected().unwrap().id().as_str(), "50001");

        selection.clear();
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_unknown_id_keeps_previous_selection() {
        let provider = provider();
        let mut selection = StopSelection::new();
        selection
            .select_by_id(&provider, &StopIdentifier::new("50002"))
            .unwrap();

        let err = selection
            .select_by_id(&provider, &StopIdentifier::new("99999"))
            .unwrap_err();

        assert!(matches!(err, TransitError::StopNotFound(ref id) if id.as_str() == "99999"));
        assert_eq!(selection.selected().unwrap().id().as_str(), "50002");
    }
}
