//! App check, credential, monitor input and raw event tests.

mod common;

use common::*;
use sst_client::provision::{
    CredentialOutcome, InputOutcome, change_credential, check_app_installed, create_monitor_input,
    post_raw_event,
};
use sst_client::{ProvisionError, RawEventMeta};

#[tokio::test]
async fn test_installed_app_is_found() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;

    Mock::given(method("GET"))
        .and(path("/services/apps/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries(json!([
            {"name": "search", "content": {}},
            {"name": APP, "content": {"version": "1.2.0"}}
        ]))))
        .mount(&server)
        .await;

    let app = check_app_installed(&mut client, APP).await.unwrap();
    assert_eq!(app.version.as_deref(), Some("1.2.0"));
}

#[tokio::test]
async fn test_missing_app_is_reported() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;

    Mock::given(method("GET"))
        .and(path("/services/apps/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries(json!([
            {"name": "search", "content": {}}
        ]))))
        .mount(&server)
        .await;

    let err = check_app_installed(&mut client, "TA-electricity-carbon-intensity")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProvisionError::MissingDependencyApp { ref app } if app == "TA-electricity-carbon-intensity"
    ));
}

#[tokio::test]
async fn test_new_credential_is_created() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;

    Mock::given(method("GET"))
        .and(path(ns("storage/passwords/electricitymaps:api:")))
        .respond_with(not_found())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ns("storage/passwords")))
        .and(body_string_contains("name=api"))
        .and(body_string_contains("realm=electricitymaps"))
        .and(body_string_contains("password=tok"))
        .respond_with(created())
        .expect(1)
        .mount(&server)
        .await;

    let token = SecretString::new("tok".to_string().into());
    let outcome = change_credential(&mut client, "api", "electricitymaps", &token)
        .await
        .unwrap();
    assert_eq!(outcome, CredentialOutcome::Created);
}

#[tokio::test]
async fn test_existing_credential_is_updated() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;

    Mock::given(method("GET"))
        .and(path(ns("storage/passwords/electricitymaps:api:")))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries(json!([{
            "name": "electricitymaps:api:",
            "content": {"username": "api", "realm": "electricitymaps"}
        }]))))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ns("storage/passwords/electricitymaps:api:")))
        .and(body_string_contains("password=new"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let token = SecretString::new("new".to_string().into());
    let outcome = change_credential(&mut client, "api", "electricitymaps", &token)
        .await
        .unwrap();
    assert_eq!(outcome, CredentialOutcome::Updated);
}

#[tokio::test]
async fn test_monitor_input_created_once() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;

    Mock::given(method("GET"))
        .and(path(ns("data/inputs/monitor/%2Fvar%2Flog%2Fpower.csv")))
        .respond_with(not_found())
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ns("data/inputs/monitor/%2Fvar%2Flog%2Fpower.csv")))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries(json!([{
            "name": "/var/log/power.csv",
            "content": {"index": "otel", "sourcetype": "csv"}
        }]))))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ns("data/inputs/monitor")))
        .and(body_string_contains("index=otel"))
        .respond_with(created())
        .expect(1)
        .mount(&server)
        .await;

    let first = create_monitor_input(&mut client, "/var/log/power.csv", "otel", "csv")
        .await
        .unwrap();
    let second = create_monitor_input(&mut client, "/var/log/power.csv", "otel", "csv")
        .await
        .unwrap();
    assert_eq!(first, InputOutcome::Created);
    assert_eq!(second, InputOutcome::AlreadyExists);
}

#[tokio::test]
async fn test_raw_event_carries_metadata_in_query() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;

    Mock::given(method("POST"))
        .and(path("/services/receivers/simple"))
        .and(query_param("index", "electricity_carbon_intensity"))
        .and(query_param("sourcetype", "electricity_carbon_intensity:json"))
        .and(query_param("source", "sample_data"))
        .and(body_string_contains("\"zone\":\"DE\""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let meta = RawEventMeta {
        source: "sample_data",
        sourcetype: "electricity_carbon_intensity:json",
        index: "electricity_carbon_intensity",
    };
    post_raw_event(&mut client, r#"{"zone":"DE","carbonIntensity":300}"#, meta)
        .await
        .unwrap();
}
