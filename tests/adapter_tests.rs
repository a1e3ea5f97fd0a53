use realtime_line_chart::api::{ChartAdapter, ChartConfig, RedrawPolicy};
use realtime_line_chart::core::ManualClock;
use realtime_line_chart::error::ChartError;
use realtime_line_chart::render::NullRenderer;

fn build_adapter(config: ChartConfig) -> (ChartAdapter<NullRenderer>, ManualClock) {
    let clock = ManualClock::at(1_700_000_000_000);
    let adapter = ChartAdapter::with_config_and_clock(NullRenderer::default(), config, clock.clone())
        .expect("adapter init");
    (adapter, clock)
}

#[test]
fn new_adapter_starts_empty() {
    let adapter = ChartAdapter::new(NullRenderer::default());
    assert!(adapter.series().is_empty());
    assert!(adapter.axis_labels().is_empty());
    assert!(!adapter.is_destroyed());
    assert!(!adapter.has_pending_redraw());
}

#[test]
fn same_label_reuses_series() {
    let (mut adapter, _) = build_adapter(ChartConfig::default());
    adapter.add_point("a", "cpu", 1.0, None, None).expect("add");
    adapter.add_point("b", "cpu", 2.0, None, None).expect("add");

    assert_eq!(adapter.series().len(), 1);
    assert_eq!(adapter.series_by_label("cpu").expect("series").points().len(), 2);
}

#[test]
fn colors_are_fixed_on_first_use() {
    let (mut adapter, _) = build_adapter(ChartConfig::default());
    adapter
        .add_point("a", "A", 1.0, Some("red"), Some("darkred"))
        .expect("add");
    adapter
        .add_point("b", "A", 2.0, Some("blue"), Some("darkblue"))
        .expect("add");

    let series = adapter.series_by_label("A").expect("series");
    assert_eq!(series.fill_color(), "red");
    assert_eq!(series.border_color(), "darkred");
}

#[test]
fn label_matching_is_exact() {
    let (mut adapter, _) = build_adapter(ChartConfig::default());
    for label in ["cpu", "CPU", "cpu ", "cpu"] {
        adapter.add_point("t", label, 1.0, None, None).expect("add");
    }
    let labels: Vec<&str> = adapter.series().iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["cpu", "CPU", "cpu "]);
}

#[test]
fn points_keep_call_order_and_clock_time() {
    let (mut adapter, clock) = build_adapter(ChartConfig::default());
    adapter.add_point("t0", "cpu", 42.0, None, None).expect("add");
    clock.advance(1_000);
    adapter.add_point("t1", "mem", 7.0, None, None).expect("add");
    clock.advance(1_000);
    adapter.add_point("t2", "cpu", 55.0, None, None).expect("add");

    let cpu = adapter.series_by_label("cpu").expect("series");
    let samples: Vec<(i64, f64)> = cpu
        .points()
        .iter()
        .map(|p| (p.timestamp_ms, p.value))
        .collect();
    assert_eq!(
        samples,
        vec![(1_700_000_000_000, 42.0), (1_700_000_002_000, 55.0)]
    );
}

#[test]
fn clock_stepping_backwards_keeps_timestamps_non_decreasing() {
    let (mut adapter, clock) = build_adapter(ChartConfig::default());
    adapter.add_point("a", "cpu", 1.0, None, None).expect("add");
    clock.advance(-5_000);
    let point = adapter.add_point("b", "cpu", 2.0, None, None).expect("add");
    assert_eq!(point.timestamp_ms, 1_700_000_000_000);
}

#[test]
fn scenario_single_series_with_explicit_then_omitted_colors() {
    let (mut adapter, _) = build_adapter(ChartConfig::default());
    adapter
        .add_point("10:00", "cpu", 42.0, Some("red"), Some("darkred"))
        .expect("add");
    adapter.add_point("10:01", "cpu", 55.0, None, None).expect("add");

    assert_eq!(adapter.series().len(), 1);
    let cpu = adapter.series_by_label("cpu").expect("series");
    let values: Vec<f64> = cpu.points().iter().map(|p| p.value).collect();
    assert_eq!(values, vec![42.0, 55.0]);
    assert!(cpu.points()[0].timestamp_ms <= cpu.points()[1].timestamp_ms);
    assert_eq!((cpu.fill_color(), cpu.border_color()), ("red", "darkred"));
    assert_eq!(adapter.axis_labels(), ["10:00", "10:01"]);
}

#[test]
fn scenario_two_series_share_label_track() {
    let (mut adapter, _) = build_adapter(ChartConfig::default());
    adapter.add_point("10:00", "cpu", 1.0, None, None).expect("add");
    adapter.add_point("10:00", "mem", 2.0, None, None).expect("add");

    let labels: Vec<&str> = adapter.series().iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["cpu", "mem"]);
    for series in adapter.series().iter() {
        assert_eq!(series.points().len(), 1);
    }
    assert_eq!(adapter.axis_labels(), ["10:00", "10:00"]);
}

#[test]
fn non_finite_values_pass_through() {
    let (mut adapter, _) = build_adapter(ChartConfig::default());
    let point = adapter
        .add_point("t", "cpu", f64::NAN, None, None)
        .expect("nan is stored");
    assert!(point.value.is_nan());
    assert_eq!(adapter.renderer().expect("renderer").render_count, 1);
}

#[test]
fn destroyed_adapter_rejects_points_without_mutation() {
    let (mut adapter, _) = build_adapter(ChartConfig::default());
    adapter.add_point("t", "cpu", 1.0, None, None).expect("add");
    adapter.destroy();
    assert!(adapter.is_destroyed());
    assert!(adapter.renderer().is_none());

    let err = adapter
        .add_point("u", "mem", 2.0, None, None)
        .expect_err("destroyed");
    assert!(matches!(err, ChartError::Destroyed));
    assert_eq!(adapter.series().len(), 1);
    assert_eq!(adapter.axis_labels(), ["t"]);

    adapter.destroy();
    assert!(adapter.is_destroyed());
}

#[test]
fn deferred_policy_batches_redraws() {
    let config = ChartConfig::default().with_redraw_policy(RedrawPolicy::Deferred);
    let (mut adapter, _) = build_adapter(config);

    for i in 0..5 {
        adapter
            .add_point("t", "cpu", f64::from(i), None, None)
            .expect("add");
    }
    assert!(adapter.has_pending_redraw());
    assert_eq!(adapter.renderer().expect("renderer").render_count, 0);

    assert!(adapter.render_if_invalidated().expect("flush"));
    assert!(!adapter.render_if_invalidated().expect("flush"));

    let renderer = adapter.renderer().expect("renderer");
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_point_count, 5);
    assert_eq!(renderer.last_label_count, 5);
}
