//! Integration tests for RemoteFetcher using wiremock.
//!
//! Every failure mode must come back as `None`, never as a panic or error.

use sorairo_weather::{
    CardSession, Condition, FetchError, Region, RemoteFetcher, WeatherSource,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OBSERVATION_PATH: &str = "/api/v1/observation";

fn tokyo() -> Region {
    Region::from_name("東京都").unwrap()
}

fn fetcher(server: &MockServer, api_key: Option<&str>) -> RemoteFetcher {
    RemoteFetcher::new(
        format!("{}{}", server.uri(), OBSERVATION_PATH),
        api_key.map(str::to_string),
    )
    .unwrap()
}

async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(OBSERVATION_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_success_maps_payload() {
    let mock_server = MockServer::start().await;
    let coords = tokyo().coordinates();

    Mock::given(method("GET"))
        .and(path(OBSERVATION_PATH))
        .and(query_param("lat", coords.latitude.to_string()))
        .and(query_param("lon", coords.longitude.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "temperature": 26.4,
            "humidity": 72,
            "wind_speed": 5.56,
            "weather_code": 201,
            "sunshine_duration": 0.4
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let profile = fetcher(&mock_server, None)
        .fetch(coords, tokyo())
        .await
        .expect("profile");

    assert_eq!(profile.temperature, 26);
    assert_eq!(profile.humidity, 72);
    assert_eq!(profile.wind_speed, 5.6);
    assert_eq!(profile.condition, Condition::Cloudy);
    assert_eq!(profile.sunshine_ratio, 0.4);
    assert_eq!(profile.region, tokyo());
    assert!(profile.hour_of_day < 24);
}

#[tokio::test]
async fn test_api_key_sent_as_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(OBSERVATION_PATH))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "temp": 3,
            "wx_code": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let profile = fetcher(&mock_server, Some("test-key"))
        .fetch(tokyo().coordinates(), tokyo())
        .await
        .expect("profile");

    assert_eq!(profile.temperature, 3);
    assert_eq!(profile.condition, Condition::Sunny);
}

#[tokio::test]
async fn test_auth_failures_return_none() {
    for status in [401, 403] {
        let mock_server = MockServer::start().await;
        mount_status(&mock_server, status).await;

        let remote = fetcher(&mock_server, Some("bad-key"));
        assert!(remote.fetch(tokyo().coordinates(), tokyo()).await.is_none());

        let err = remote
            .try_fetch(tokyo().coordinates(), tokyo())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Unauthorized(s) if s == status));
        assert_eq!(err.category(), "auth");
    }
}

#[tokio::test]
async fn test_not_found_returns_none() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 404).await;

    let remote = fetcher(&mock_server, None);
    assert!(remote.fetch(tokyo().coordinates(), tokyo()).await.is_none());
    let err = remote
        .try_fetch(tokyo().coordinates(), tokyo())
        .await
        .unwrap_err();
    assert_eq!(err.category(), "not_found");
}

#[tokio::test]
async fn test_server_error_returns_none() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 500).await;

    let remote = fetcher(&mock_server, None);
    assert!(remote.fetch(tokyo().coordinates(), tokyo()).await.is_none());
    let err = remote
        .try_fetch(tokyo().coordinates(), tokyo())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
}

#[tokio::test]
async fn test_garbage_body_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(OBSERVATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let remote = fetcher(&mock_server, None);
    assert!(remote.fetch(tokyo().coordinates(), tokyo()).await.is_none());
    let err = remote
        .try_fetch(tokyo().coordinates(), tokyo())
        .await
        .unwrap_err();
    assert_eq!(err.category(), "malformed");
}

#[tokio::test]
async fn test_json_array_body_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(OBSERVATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2])))
        .mount(&mock_server)
        .await;

    assert!(fetcher(&mock_server, None)
        .fetch(tokyo().coordinates(), tokyo())
        .await
        .is_none());
}

#[tokio::test]
async fn test_unreachable_host_returns_none() {
    // Nothing listens on the discard port.
    let remote = RemoteFetcher::new("http://127.0.0.1:9/observation", None).unwrap();
    let err = remote
        .try_fetch(tokyo().coordinates(), tokyo())
        .await
        .unwrap_err();
    assert_eq!(err.category(), "transport");
    assert!(remote.fetch(tokyo().coordinates(), tokyo()).await.is_none());
}

#[tokio::test]
async fn test_remote_source_queries_region_capital() {
    let mock_server = MockServer::start().await;
    let sapporo = Region::from_name("北海道").unwrap().coordinates();

    Mock::given(method("GET"))
        .and(path(OBSERVATION_PATH))
        .and(query_param("lat", sapporo.latitude.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "temperature": -4,
            "weather_code": 400
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = WeatherSource::Remote(fetcher(&mock_server, None));
    let mut session = CardSession::new(source, tokyo());
    let region = session.search("札幌").await;

    assert_eq!(region.name(), "北海道");
    assert_eq!(session.profile().temperature, -4);
    assert_eq!(session.profile().condition, Condition::Rainy);
    assert_eq!(session.theme().icon, "CloudRain");
}

#[tokio::test]
async fn test_session_falls_back_to_synthetic_when_remote_fails() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 503).await;

    let source = WeatherSource::Remote(fetcher(&mock_server, None));
    let mut session = CardSession::new(source, tokyo());
    let region = session.search("那覇").await;

    assert_eq!(region.name(), "沖縄県");
    assert_eq!(session.profile(), &sorairo_weather::generate(region));
}
