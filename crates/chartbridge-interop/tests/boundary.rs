//! Setup and update calls against an in-process foreign side

use anyhow::anyhow;
use chartbridge_core::{FieldPath, HostRef, NamingStrategy, Node};
use chartbridge_interop::{BoundaryInvoker, InProcessRuntime, InteropConfig, entry_points, string_rep_handler};
use chartbridge_models::{
    BaseOptions, ChartConfig, ChartData, ChartType, Legend, LegendClickHandler, Position, Title,
};
use rstest::rstest;
use std::sync::{Arc, Mutex};

type Config = ChartConfig<BaseOptions, ChartData>;

struct ChartPage;

/// Runtime whose `entry_point` records each payload and answers `answer`
async fn recording_runtime(entry_point: &str, answer: Node) -> (Arc<InProcessRuntime>, Arc<Mutex<Vec<Node>>>) {
    let runtime = Arc::new(InProcessRuntime::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    runtime
        .register(entry_point, move |payload| {
            sink.lock().unwrap().push(payload);
            Ok(answer.clone())
        })
        .await;
    (runtime, seen)
}

fn chart_with_click(click: LegendClickHandler) -> Config {
    Config::new(ChartType::Bar)
        .with_canvas_id("sales-chart")
        .with_options(BaseOptions {
            title: Some(Title {
                text: Some("Sales".into()),
                ..Default::default()
            }),
            legend: Some(Legend {
                position: Some(Position::Bottom),
                on_click: Some(click),
                ..Default::default()
            }),
            ..Default::default()
        })
}

fn on_click_path() -> FieldPath {
    "options.legend.onClick".parse().unwrap()
}

#[tokio::test]
async fn test_setup_sends_canonical_tree_with_live_reference() {
    let (runtime, seen) = recording_runtime(entry_points::SETUP, Node::from(true)).await;
    let click = LegendClickHandler::instance(ChartPage, "OnLegendClick");
    let handle = click.host_ref().cloned().unwrap();
    let invoker = BoundaryInvoker::new(runtime);

    assert!(invoker.setup(&chart_with_click(click)).await);

    let payloads = seen.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    let tree = &payloads[0];
    assert_eq!(tree.get("type"), Some(&Node::from("bar")));
    assert_eq!(tree.get("canvasId"), Some(&Node::from("sales-chart")));

    let options = tree.get("options").unwrap();
    assert!(options.get("responsive").is_none());
    assert_eq!(options.get("title").and_then(|t| t.get("text")), Some(&Node::from("Sales")));

    let restored = tree.get_path(&on_click_path()).and_then(Node::as_reference).unwrap();
    assert!(HostRef::ptr_eq(restored, &handle));
    assert_eq!(restored.method_name(), "OnLegendClick");
}

#[tokio::test]
async fn test_failing_foreign_side_reports_false() {
    let runtime = Arc::new(InProcessRuntime::new());
    runtime
        .register(entry_points::SETUP, |_| Err(anyhow!("chart library not loaded")))
        .await;
    let invoker = BoundaryInvoker::new(runtime);

    let config = Config::new(ChartType::Line);
    assert!(!invoker.setup(&config).await);
    assert!(!invoker.invoke(Node::empty_map()).await);
}

#[tokio::test]
async fn test_panicking_foreign_side_reports_false() {
    let runtime = Arc::new(InProcessRuntime::new());
    runtime
        .register(entry_points::SETUP, |_| panic!("chart library crashed"))
        .await;
    let invoker = BoundaryInvoker::new(runtime);

    assert!(!invoker.setup(&Config::new(ChartType::Line)).await);
    assert!(!invoker.invoke(Node::empty_map()).await);
}

#[tokio::test]
async fn test_missing_entry_point_reports_false() {
    let invoker = BoundaryInvoker::new(Arc::new(InProcessRuntime::new()));
    assert!(!invoker.setup(&Config::new(ChartType::Pie)).await);
    assert!(!invoker.update(&Config::new(ChartType::Pie)).await);
}

#[rstest]
#[case::text(Node::from("ok"))]
#[case::number(Node::from(1_i64))]
#[case::map(Node::empty_map())]
#[case::null(Node::null())]
#[tokio::test]
async fn test_non_boolean_answer_reports_false(#[case] answer: Node) {
    let (runtime, seen) = recording_runtime(entry_points::SETUP, answer).await;
    let invoker = BoundaryInvoker::new(runtime);

    assert!(!invoker.setup(&Config::new(ChartType::Radar)).await);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_keeps_nulls_without_reinjection() {
    let (runtime, seen) = recording_runtime(entry_points::UPDATE, Node::from(true)).await;
    let click = LegendClickHandler::instance(ChartPage, "OnLegendClick");
    let invoker = BoundaryInvoker::new(runtime);

    let mut config = chart_with_click(click);
    config.canvas_id = None;
    assert!(invoker.update(&config).await);

    let payloads = seen.lock().unwrap();
    let tree = &payloads[0];
    assert_eq!(tree.get("canvasId"), Some(&Node::null()));
    assert_eq!(tree.get("options").and_then(|o| o.get("responsive")), Some(&Node::null()));

    let on_click = tree.get_path(&on_click_path()).unwrap();
    assert!(on_click.as_reference().is_none());
    assert_eq!(on_click.get("methodName"), Some(&Node::from("OnLegendClick")));
}

#[tokio::test]
async fn test_configured_entry_points_and_naming() {
    let (runtime, seen) = recording_runtime("Charts.Init", Node::from(true)).await;
    let mut config = InteropConfig::default();
    config.entry_points.setup = "Charts.Init".into();
    config.serializer.naming = NamingStrategy::Preserve;
    let invoker = BoundaryInvoker::new(runtime).with_config(config);

    assert!(invoker.setup(&Config::new(ChartType::Line).with_canvas_id("c")).await);

    let payloads = seen.lock().unwrap();
    assert_eq!(payloads[0].get("canvas_id"), Some(&Node::from("c")));
    assert!(payloads[0].get("canvasId").is_none());
}

#[tokio::test]
async fn test_preserve_naming_restores_reference_at_declared_key() {
    let (runtime, seen) = recording_runtime(entry_points::SETUP, Node::from(true)).await;
    let mut config = InteropConfig::default();
    config.serializer.naming = NamingStrategy::Preserve;
    let invoker = BoundaryInvoker::new(runtime).with_config(config);

    let click = LegendClickHandler::instance(ChartPage, "OnLegendClick");
    let handle = click.host_ref().cloned().unwrap();
    assert!(invoker.setup(&chart_with_click(click)).await);

    let payloads = seen.lock().unwrap();
    let legend = payloads[0].get("options").and_then(|o| o.get("legend")).unwrap();
    let keys: Vec<&str> = legend.as_map().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["position", "on_click"]);
    let restored = legend.get("on_click").and_then(Node::as_reference).unwrap();
    assert!(HostRef::ptr_eq(restored, &handle));
}

#[tokio::test]
async fn test_payload_tracing_uses_diagnostic_entry_point() {
    let (runtime, _) = recording_runtime(entry_points::SETUP, Node::from(true)).await;
    let traced = Arc::new(Mutex::new(Vec::new()));
    let sink = traced.clone();
    runtime
        .register(entry_points::STRING_REP, move |payload| {
            let text = string_rep_handler(payload)?;
            sink.lock().unwrap().push(text.as_str().unwrap_or_default().to_string());
            Ok(text)
        })
        .await;

    let mut config = InteropConfig::default();
    config.diagnostics.trace_payloads = true;
    let invoker = BoundaryInvoker::new(runtime).with_config(config);

    let click = LegendClickHandler::instance(ChartPage, "OnLegendClick");
    let id = click.host_ref().unwrap().id();
    assert!(invoker.setup(&chart_with_click(click)).await);

    let traced = traced.lock().unwrap();
    assert_eq!(traced.len(), 2);
    // Direct graph: nulls kept, handler in its lossy form.
    assert!(traced[0].contains(r#""responsive":null"#));
    assert!(!traced[0].contains("__hostRef"));
    // Final payload: nulls gone, handler marshalled.
    assert!(!traced[1].contains("null"));
    assert!(traced[1].contains(&format!(r#""__hostRef":{}"#, id)));
}

#[tokio::test]
async fn test_failing_diagnostics_do_not_fail_setup() {
    let (runtime, seen) = recording_runtime(entry_points::SETUP, Node::from(true)).await;
    runtime
        .register(entry_points::STRING_REP, |_| Err(anyhow!("console unavailable")))
        .await;

    let mut config = InteropConfig::default();
    config.diagnostics.trace_payloads = true;
    let invoker = BoundaryInvoker::new(runtime).with_config(config);

    assert!(invoker.setup(&Config::new(ChartType::Doughnut)).await);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_setups_share_one_invoker() {
    let (runtime, seen) = recording_runtime(entry_points::SETUP, Node::from(true)).await;
    let invoker = BoundaryInvoker::new(runtime);

    let first = Config::new(ChartType::Line).with_canvas_id("one");
    let second = Config::new(ChartType::Bar).with_canvas_id("two");
    let (a, b) = tokio::join!(invoker.setup(&first), invoker.setup(&second));

    assert!(a && b);
    let payloads = seen.lock().unwrap();
    let mut canvases: Vec<&str> = payloads
        .iter()
        .filter_map(|p| p.get("canvasId").and_then(Node::as_str))
        .collect();
    canvases.sort();
    assert_eq!(canvases, vec!["one", "two"]);
}
