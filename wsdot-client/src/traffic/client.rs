//! Traveler Information API HTTP client.
//!
//! Each endpoint is a plain GET returning JSON. Alerts and commercial
//! vehicle restrictions can optionally be enriched with route geometry
//! from the ELC.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::LineSegment;
use crate::elc::{ElcClient, ElcConfig};
use crate::error::ClientError;
use crate::fetch::fetch_json;
use crate::transport::Transport;

use super::types::{
    Alert, BorderCrossing, Camera, CvRestriction, FlowData, PassCondition, TravelTimeRoute,
};

/// Default root URL for the Traveler Information API.
const DEFAULT_BASE_URL: &str = "http://www.wsdot.wa.gov/Traffic/api";

/// Configuration for the Traffic client.
#[derive(Debug, Clone)]
pub struct TrafficConfig {
    /// Traveler Information API access code
    pub access_code: String,
    /// Root URL for the API (only changes if the API moves)
    pub base_url: String,
}

impl TrafficConfig {
    /// Create a new config with the given access code.
    pub fn new(access_code: impl Into<String>) -> Self {
        Self {
            access_code: access_code.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the WSDOT Traveler Information API.
#[derive(Clone)]
pub struct TrafficClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    access_code: String,
    elc: ElcClient,
}

impl TrafficClient {
    /// Create a client that locates line segments with the default ELC.
    pub fn new(config: TrafficConfig, transport: Arc<dyn Transport>) -> Self {
        let elc = ElcClient::new(ElcConfig::default(), transport.clone());
        Self {
            transport,
            base_url: config.base_url,
            access_code: config.access_code,
            elc,
        }
    }

    /// Use a different ELC client for enrichment.
    pub fn with_elc(mut self, elc: ElcClient) -> Self {
        self.elc = elc;
        self
    }

    /// Build `<root>/<service path>?AccessCode=<code>[&<name>=<value>]`.
    fn url(&self, path: &str, id: Option<(&str, i32)>) -> String {
        let mut url = format!("{}/{}?AccessCode={}", self.base_url, path, self.access_code);
        if let Some((name, value)) = id {
            url.push_str(&format!("&{name}={value}"));
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        debug!(%url, "querying traffic API");
        fetch_json(self.transport.as_ref(), url).await
    }

    async fn get_line_segments<T: LineSegment + DeserializeOwned>(
        &self,
        url: &str,
        enrich: bool,
    ) -> Result<Vec<T>, ClientError> {
        let mut segments: Vec<T> = self.get(url).await?;
        if enrich {
            self.elc.enrich(&mut segments).await?;
        }
        Ok(segments)
    }

    /// Current wait times at the border crossings into Canada.
    pub async fn get_border_crossings(&self) -> Result<Vec<BorderCrossing>, ClientError> {
        let url = self.url(
            "BorderCrossings/BorderCrossingsREST.svc/GetBorderCrossingsAsJson",
            None,
        );
        self.get(&url).await
    }

    /// All current commercial vehicle restrictions on state highways.
    ///
    /// With `enrich`, each restriction's route location is resolved by the ELC.
    pub async fn get_commercial_vehicle_restrictions(
        &self,
        enrich: bool,
    ) -> Result<Vec<CvRestriction>, ClientError> {
        let url = self.url(
            "CVRestrictions/CVRestrictionsREST.svc/GetCommercialVehicleRestrictionsAsJson",
            None,
        );
        self.get_line_segments(&url, enrich).await
    }

    /// All currently active highway alerts.
    ///
    /// With `enrich`, each alert's route location is resolved by the ELC.
    pub async fn get_alerts(&self, enrich: bool) -> Result<Vec<Alert>, ClientError> {
        let url = self.url("HighwayAlerts/HighwayAlertsREST.svc/GetAlertsAsJson", None);
        self.get_line_segments(&url, enrich).await
    }

    /// A single highway alert.
    pub async fn get_alert(&self, alert_id: i32) -> Result<Alert, ClientError> {
        let url = self.url(
            "HighwayAlerts/HighwayAlertsREST.svc/GetAlertAsJson",
            Some(("AlertID", alert_id)),
        );
        self.get(&url).await
    }

    /// Valid event categories for alert searches.
    ///
    /// This endpoint takes no access code.
    pub async fn get_alert_event_categories(&self) -> Result<Vec<String>, ClientError> {
        let url = format!(
            "{}/HighwayAlerts/HighwayAlertsREST.svc/GetEventCategoriesAsJson",
            self.base_url
        );
        self.get(&url).await
    }

    /// All traffic cameras.
    pub async fn get_cameras(&self) -> Result<Vec<Camera>, ClientError> {
        let url = self.url("HighwayCameras/HighwayCamerasREST.svc/GetCamerasAsJson", None);
        self.get(&url).await
    }

    /// A single traffic camera.
    pub async fn get_camera(&self, camera_id: i32) -> Result<Camera, ClientError> {
        let url = self.url(
            "HighwayCameras/HighwayCamerasREST.svc/GetCameraAsJson",
            Some(("CameraID", camera_id)),
        );
        self.get(&url).await
    }

    /// Conditions for every monitored mountain pass.
    pub async fn get_mountain_pass_conditions(&self) -> Result<Vec<PassCondition>, ClientError> {
        let url = self.url(
            "MountainPassConditions/MountainPassConditionsREST.svc/GetMountainPassConditionsAsJson",
            None,
        );
        self.get(&url).await
    }

    /// Conditions for a single mountain pass.
    pub async fn get_mountain_pass_condition(
        &self,
        pass_condition_id: i32,
    ) -> Result<PassCondition, ClientError> {
        // "AsJon" is the upstream spelling
        let url = self.url(
            "MountainPassConditions/MountainPassConditionsREST.svc/GetMountainPassConditionAsJon",
            Some(("PassConditionID", pass_condition_id)),
        );
        self.get(&url).await
    }

    /// Readings from every traffic flow station.
    pub async fn get_traffic_flows(&self) -> Result<Vec<FlowData>, ClientError> {
        let url = self.url("TrafficFlow/TrafficFlowREST.svc/GetTrafficFlowsAsJson", None);
        self.get(&url).await
    }

    /// The current reading from one traffic flow station.
    pub async fn get_traffic_flow(&self, flow_data_id: i32) -> Result<FlowData, ClientError> {
        let url = self.url(
            "TrafficFlow/TrafficFlowREST.svc/GetTrafficFlowAsJson",
            Some(("FlowDataID", flow_data_id)),
        );
        self.get(&url).await
    }

    /// Current travel times for all monitored routes.
    pub async fn get_travel_times(&self) -> Result<Vec<TravelTimeRoute>, ClientError> {
        let url = self.url("TravelTimes/TravelTimesREST.svc/GetTravelTimesAsJson", None);
        self.get(&url).await
    }

    /// Current travel time for one route.
    pub async fn get_travel_time(
        &self,
        travel_time_id: i32,
    ) -> Result<TravelTimeRoute, ClientError> {
        let url = self.url(
            "TravelTimes/TravelTimesREST.svc/GetTravelTimeAsJson",
            Some(("TravelTimeID", travel_time_id)),
        );
        self.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpResponse, MockTransport, RecordedRequest};

    const ROOT: &str = "http://traffic.test/api";
    const ELC_URL: &str = "http://elc.test/find";
    const ALERTS: &str = "http://traffic.test/api/HighwayAlerts/HighwayAlertsREST.svc/GetAlertsAsJson";

    fn client(mock: &MockTransport) -> TrafficClient {
        let transport: Arc<dyn Transport> = Arc::new(mock.clone());
        let elc = ElcClient::new(ElcConfig::default().with_url(ELC_URL), transport.clone());
        TrafficClient::new(TrafficConfig::new("secret").with_base_url(ROOT), transport)
            .with_elc(elc)
    }

    const TWO_ALERTS: &str = r#"[
        {
            "AlertID": 1,
            "StartRoadwayLocation": {"RoadName": "5", "MilePost": 1.0},
            "EndRoadwayLocation": {"RoadName": "5", "MilePost": 2.0}
        },
        {
            "AlertID": 2,
            "StartRoadwayLocation": {"RoadName": "5", "MilePost": 1.0}
        }
    ]"#;

    #[test]
    fn config_defaults() {
        let config = TrafficConfig::new("secret");
        assert_eq!(config.access_code, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn urls_follow_service_templates() {
        let client = client(&MockTransport::new());
        assert_eq!(
            client.url("HighwayAlerts/HighwayAlertsREST.svc/GetAlertsAsJson", None),
            "http://traffic.test/api/HighwayAlerts/HighwayAlertsREST.svc/GetAlertsAsJson?AccessCode=secret"
        );
        assert_eq!(
            client.url(
                "HighwayAlerts/HighwayAlertsREST.svc/GetAlertAsJson",
                Some(("AlertID", 42))
            ),
            "http://traffic.test/api/HighwayAlerts/HighwayAlertsREST.svc/GetAlertAsJson?AccessCode=secret&AlertID=42"
        );
    }

    #[tokio::test]
    async fn get_alerts_without_enrichment_skips_elc() {
        let mock = MockTransport::new();
        mock.respond_json(ALERTS, TWO_ALERTS);

        let alerts = client(&mock).get_alerts(false).await.unwrap();
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.route_location.is_none()));
        assert_eq!(mock.request_count(ELC_URL), 0);
    }

    #[tokio::test]
    async fn get_alerts_with_enrichment() {
        let mock = MockTransport::new();
        mock.respond_json(ALERTS, TWO_ALERTS);
        mock.respond_json(
            ELC_URL,
            r#"[{"Id": 0, "Route": "005", "RouteGeometry": {"paths": [[[-122.0, 47.0], [-122.1, 47.1]]]}}]"#,
        );

        let alerts = client(&mock).get_alerts(true).await.unwrap();
        assert_eq!(alerts.len(), 2);

        let paths = alerts[0]
            .route_location
            .as_ref()
            .and_then(|r| r.route_geometry.as_ref())
            .and_then(|g| g.paths.clone());
        assert_eq!(paths, Some(vec![vec![vec![-122.0, 47.0], vec![-122.1, 47.1]]]));
        assert!(alerts[1].route_location.is_none());

        assert_eq!(mock.request_count(ELC_URL), 1);
        assert!(matches!(
            &mock.requests()[0],
            RecordedRequest::Get { url } if url.ends_with("GetAlertsAsJson?AccessCode=secret")
        ));
    }

    #[tokio::test]
    async fn enrichment_failure_still_returns_alerts() {
        let mock = MockTransport::new();
        mock.respond_json(ALERTS, TWO_ALERTS);
        mock.respond(
            ELC_URL,
            HttpResponse {
                status: 502,
                body: "bad gateway".into(),
            },
        );

        let alerts = client(&mock).get_alerts(true).await.unwrap();
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.route_location.is_none()));
    }

    #[tokio::test]
    async fn get_alert_by_id() {
        let mock = MockTransport::new();
        mock.respond_json(
            "http://traffic.test/api/HighwayAlerts/HighwayAlertsREST.svc/GetAlertAsJson",
            r#"{"AlertID": 42, "HeadlineDescription": "Lane closed"}"#,
        );

        let alert = client(&mock).get_alert(42).await.unwrap();
        assert_eq!(alert.alert_id, 42);
        assert_eq!(mock.requests()[0].url(), "http://traffic.test/api/HighwayAlerts/HighwayAlertsREST.svc/GetAlertAsJson?AccessCode=secret&AlertID=42");
    }

    #[tokio::test]
    async fn event_categories_omit_access_code() {
        let mock = MockTransport::new();
        mock.respond_json(
            "http://traffic.test/api/HighwayAlerts/HighwayAlertsREST.svc/GetEventCategoriesAsJson",
            r#"["Collision", "Construction"]"#,
        );

        let categories = client(&mock).get_alert_event_categories().await.unwrap();
        assert_eq!(categories, vec!["Collision", "Construction"]);
        assert!(!mock.requests()[0].url().contains("AccessCode"));
    }

    #[tokio::test]
    async fn mountain_pass_condition_keeps_upstream_spelling() {
        let mock = MockTransport::new();
        mock.respond_json(
            "http://traffic.test/api/MountainPassConditions/MountainPassConditionsREST.svc/GetMountainPassConditionAsJon",
            r#"{"MountainPassId": 11, "MountainPassName": "Snoqualmie Pass I-90"}"#,
        );

        let pass = client(&mock).get_mountain_pass_condition(11).await.unwrap();
        assert_eq!(pass.mountain_pass_id, 11);
    }

    #[tokio::test]
    async fn upstream_error_propagates() {
        let mock = MockTransport::new();
        mock.respond(
            "http://traffic.test/api/TravelTimes/TravelTimesREST.svc/GetTravelTimesAsJson",
            HttpResponse {
                status: 401,
                body: "invalid access code".into(),
            },
        );

        let err = client(&mock).get_travel_times().await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed { status: 401, .. }));
    }

    #[tokio::test]
    async fn cv_restrictions_with_enrichment() {
        let mock = MockTransport::new();
        mock.respond_json(
            "http://traffic.test/api/CVRestrictions/CVRestrictionsREST.svc/GetCommercialVehicleRestrictionsAsJson",
            r#"[{
                "StateRouteID": "002",
                "StartRoadwayLocation": {"RoadName": "US 2", "MilePost": 10.0},
                "EndRoadwayLocation": {"RoadName": "US 2", "MilePost": 10.5}
            }]"#,
        );
        mock.respond_json(ELC_URL, r#"[{"Id": 0, "Route": "002"}]"#);

        let restrictions = client(&mock)
            .get_commercial_vehicle_restrictions(true)
            .await
            .unwrap();
        assert_eq!(
            restrictions[0]
                .route_location
                .as_ref()
                .and_then(|r| r.route.as_deref()),
            Some("002")
        );
    }
}
