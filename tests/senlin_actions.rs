use openstack_rs::{ActionListOptions, ActionStatus, Error, SenlinClient};

mod common;
use common::MockApi;

const JSON_ACTIONS: &str = "/senlin/v1/actions.json";
const JSON_ACTION: &str = "/senlin/v1/action.json";

fn client(api: &MockApi) -> SenlinClient {
    SenlinClient::builder(api.url("/v1"))
        .expect("builder")
        .build()
        .expect("build")
}

#[test]
fn list_actions() {
    let api = MockApi::start();
    api.respond_with_fixture(JSON_ACTIONS);

    let actions = client(&api)
        .get_action_list(&ActionListOptions::default())
        .expect("list");
    assert_eq!(actions.len(), 4);
    assert_eq!(actions[0].id, "1ac0a47b-06de-44cd-a014-79981f1dec19");
    assert_eq!(actions[0].status, ActionStatus::Succeeded);
    assert_eq!(actions[0].action.as_deref(), Some("NODE_CREATE"));

    let req = api.take_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/v1/actions");
    assert!(req.query.is_empty());
}

#[test]
fn list_actions_with_options_sets_query() {
    let api = MockApi::start();
    api.respond_with_fixture(JSON_ACTIONS);

    let mut options = ActionListOptions::default();
    options.limit = Some(2);
    options.status = Some("SUCCEEDED".to_string());
    client(&api).get_action_list(&options).expect("list");

    let req = api.take_request();
    assert_eq!(req.query_value("limit"), Some("2"));
    assert_eq!(req.query_value("status"), Some("SUCCEEDED"));
}

#[test]
fn get_action() {
    let api = MockApi::start();
    api.respond_with_fixture(JSON_ACTION);

    let action_id = "ffbb9175-d510-4bc1-b676-c6aba2a4ca81";
    let action = client(&api).get_action(action_id).expect("action");
    assert_eq!(action.id, action_id);
    assert_eq!(action.target.as_deref(), Some("0df0931b-e251-4f2e-8719-4ebfda3627ba"));

    let req = api.take_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/v1/actions/ffbb9175-d510-4bc1-b676-c6aba2a4ca81");
}

#[test]
fn action_error_envelope_maps_to_fault() {
    let api = MockApi::start();
    let body = r#"{"error": {"code": 404, "message": "The action (boom) could not be found.", "type": "ResourceNotFound"}}"#;
    api.respond_with(404, body);

    let err = client(&api).get_action("boom").expect_err("fault expected");
    match err {
        Error::Api(fault) => {
            assert_eq!(fault.code, 404);
            assert_eq!(fault.message, "The action (boom) could not be found.");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn auth_token_header_is_sent() {
    let api = MockApi::start();
    api.respond_with_fixture(JSON_ACTIONS);

    let client = SenlinClient::builder(api.url("/v1"))
        .expect("builder")
        .auth_token("gAAAAABmokeNmock")
        .disable_redirect(true)
        .build()
        .expect("build");
    client
        .get_action_list(&ActionListOptions::default())
        .expect("list");

    let req = api.take_request();
    assert_eq!(req.header_value("X-Auth-Token"), Some("gAAAAABmokeNmock"));
}
