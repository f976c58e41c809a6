//! Panel tests: the fetch, render, report-link and navigation flow against
//! an in-memory host.

use std::collections::VecDeque;

use serde_json::{json, Value};
use support_data::{
    panel::{Channel, Message},
    report::wrap_details,
    BufferSurface, DisplaySurface, Error, Messaging, RedactionProfile, Result, SupportPanel,
    REPORT_QUERY_PARAM,
};
use url::Url;

#[derive(Default)]
struct ScriptedHost {
    replies: VecDeque<Result<Value>>,
    requests: Vec<(Channel, Message)>,
    posted: Vec<(Channel, Message)>,
}

impl ScriptedHost {
    fn replying(reply: Value) -> Self {
        Self {
            replies: VecDeque::from([Ok(reply)]),
            ..Self::default()
        }
    }
}

impl Messaging for ScriptedHost {
    fn request(&mut self, channel: Channel, message: &Message) -> Result<Value> {
        self.requests.push((channel, message.clone()));
        self.replies
            .pop_front()
            .unwrap_or_else(|| Err(Error::Messaging("backend went away".into())))
    }

    fn post(&mut self, channel: Channel, message: &Message) {
        self.posted.push((channel, message.clone()));
    }
}

const FILTER_REPORT: &str = "https://reports.example/new?template=filter.yml";
const BUG_REPORT: &str = "https://issues.example/new";

fn support_data() -> Value {
    json!({
        "filterset": ["a", "b", "c"],
        "trustedset": {"added": []},
        "modifiedHiddenSettings": {
            "benchmarkDatasetURL": "https://bench.example/data.json",
            "userResourcesLocation": "https://res.example/r.js"
        }
    })
}

fn panel() -> SupportPanel<ScriptedHost, BufferSurface> {
    SupportPanel::new(
        ScriptedHost::replying(support_data()),
        BufferSurface::new(),
        RedactionProfile::default(),
    )
    .with_link("filterReport", FILTER_REPORT)
    .with_link("bugReport", BUG_REPORT)
    .with_link("wiki", "https://wiki.example/")
}

fn configuration(url: &str) -> Option<String> {
    Url::parse(url)
        .unwrap()
        .query_pairs()
        .find(|(key, _)| key == REPORT_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[test]
fn test_load_requests_support_data_on_dashboard_channel() {
    let mut panel = panel();
    panel.load().unwrap();

    assert_eq!(
        panel.messaging().requests,
        [(Channel::Dashboard, Message::GetSupportData)]
    );
}

#[test]
fn test_load_prunes_benchmark_url_from_pristine_snapshot() {
    let mut panel = panel();
    panel.load().unwrap();

    let snapshot = panel.snapshot().unwrap();
    assert_eq!(
        snapshot.get(&"modifiedHiddenSettings.benchmarkDatasetURL".into()),
        None
    );
    assert!(!panel.surface().value().contains("benchmarkDatasetURL"));
}

#[test]
fn test_report_links_embed_current_text() {
    let mut panel = panel();
    panel.load().unwrap();

    let shown = panel.surface().value().to_owned();
    for id in ["filterReport", "bugReport"] {
        let link = panel.link(id).unwrap();
        assert_eq!(configuration(link), Some(wrap_details(&shown)), "{id}");
    }
    assert_eq!(panel.link("wiki"), Some("https://wiki.example/"));

    let filter = Url::parse(panel.link("filterReport").unwrap()).unwrap();
    assert!(filter
        .query_pairs()
        .any(|(key, value)| key == "template" && value == "filter.yml"));
}

#[test]
fn test_redact_updates_surface_and_links() {
    let mut panel = panel();
    panel.load().unwrap();
    panel.redact();

    let shown = panel.surface().value().to_owned();
    assert_eq!(
        shown,
        "filterset: [array of 3 redacted]\n\
         trustedset:\n  added: [empty]\n\
         modifiedHiddenSettings:\n  userResourcesLocation: [redacted]\n"
    );
    assert_eq!(
        configuration(panel.link("bugReport").unwrap()),
        Some(wrap_details(&shown))
    );
}

#[test]
fn test_unredact_restores_pristine_text() {
    let mut panel = panel();
    panel.load().unwrap();
    let pristine = panel.surface().value().to_owned();

    panel.redact();
    panel.unredact();
    panel.redact();
    panel.unredact();

    assert_eq!(panel.surface().value(), pristine);
    assert_eq!(
        configuration(panel.link("filterReport").unwrap()),
        Some(wrap_details(&pristine))
    );
}

#[test]
fn test_activate_report_link_opens_current_url() {
    let mut panel = panel();
    panel.load().unwrap();
    panel.redact();

    assert!(panel.activate_link("bugReport"));
    let expected = panel.link("bugReport").unwrap().to_owned();
    assert_eq!(
        panel.messaging().posted,
        [(Channel::Default, Message::goto_url(expected))]
    );
}

#[test]
fn test_non_object_reply_is_rejected() {
    let host = ScriptedHost::replying(json!("not a snapshot"));
    let mut panel = SupportPanel::new(host, BufferSurface::new(), RedactionProfile::default());

    let err = panel.load().unwrap_err();
    assert!(matches!(err, Error::InvalidSnapshot { found: "string" }));
    assert_eq!(panel.surface().value(), "");
}

#[test]
fn test_invalid_report_base_is_left_unchanged() {
    let mut panel = SupportPanel::new(
        ScriptedHost::replying(json!({"a": 1})),
        BufferSurface::new(),
        RedactionProfile::default(),
    )
    .with_link("bugReport", "not a url");

    panel.load().unwrap();
    assert_eq!(panel.link("bugReport"), Some("not a url"));
    assert_eq!(panel.surface().value(), "a: 1\n");
}

#[test]
fn test_custom_report_links() {
    let mut panel = SupportPanel::new(
        ScriptedHost::replying(json!({"a": 1})),
        BufferSurface::new(),
        RedactionProfile::default(),
    )
    .with_link("bugReport", BUG_REPORT)
    .with_link("forum", "https://forum.example/post")
    .with_report_links(["forum"]);

    panel.load().unwrap();
    assert_eq!(panel.link("bugReport"), Some(BUG_REPORT));
    assert_eq!(
        configuration(panel.link("forum").unwrap()),
        Some(wrap_details("a: 1\n"))
    );
}
