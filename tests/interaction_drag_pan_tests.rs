use chart_kit::api::{ChartStyle, LineChart, LineChartData, XAxisLabels, XAxisSection};
use chart_kit::core::{DataPoint, LineDataSet, Viewport};
use chart_kit::interaction::{DragPanState, InteractionMode};

#[test]
fn drag_applies_half_the_translation_while_active() {
    let mut pan = DragPanState::default();
    assert_eq!(pan.mode(), InteractionMode::Idle);

    pan.on_drag_changed(40.0).expect("drag");
    assert_eq!(pan.mode(), InteractionMode::Dragging);
    assert_eq!(pan.offset(), 20.0);
    assert_eq!(pan.committed_offset(), 0.0);

    pan.on_drag_changed(100.0).expect("drag");
    assert_eq!(pan.offset(), 50.0);
}

#[test]
fn releasing_a_drag_commits_the_offset() {
    let mut pan = DragPanState::default();
    pan.on_drag_changed(60.0).expect("drag");
    pan.on_drag_ended(100.0).expect("release");

    assert_eq!(pan.mode(), InteractionMode::Idle);
    assert_eq!(pan.offset(), 50.0);
    assert_eq!(pan.committed_offset(), 50.0);

    pan.on_drag_changed(-40.0).expect("second drag");
    assert_eq!(pan.offset(), 30.0);
    pan.on_drag_ended(-40.0).expect("second release");
    assert_eq!(pan.committed_offset(), 30.0);
}

#[test]
fn cancelling_restores_the_committed_offset() {
    let mut pan = DragPanState::default();
    pan.on_drag_ended(20.0).expect("release");
    pan.on_drag_changed(200.0).expect("drag");
    assert_eq!(pan.offset(), 110.0);

    pan.on_drag_cancelled();
    assert_eq!(pan.mode(), InteractionMode::Idle);
    assert_eq!(pan.offset(), 10.0);

    pan.reset();
    assert_eq!(pan, DragPanState::default());
}

#[test]
fn non_finite_translation_is_rejected_without_state_change() {
    let mut pan = DragPanState::default();
    pan.on_drag_ended(10.0).expect("release");

    assert!(pan.on_drag_changed(f64::INFINITY).is_err());
    assert!(pan.on_drag_ended(f64::NAN).is_err());
    assert_eq!(pan.offset(), 5.0);
    assert_eq!(pan.mode(), InteractionMode::Idle);
}

#[test]
fn modifier_offsets_every_section_by_the_pan() {
    let points = (0..6)
        .map(|i| DataPoint::new(f64::from(i)).with_label(format!("p{i}")))
        .collect();
    let mut data = LineChartData::new(LineDataSet::new(points), ChartStyle::default());
    let mut modifier = XAxisLabels::attach(&mut data);
    let viewport = Viewport::new(500, 200);

    modifier.drag_changed(-80.0).expect("drag");
    let layout = modifier.layout(&data, viewport).expect("layout");
    assert_eq!(layout.offset_x, -40.0);
    for (_, rect) in &layout.sections {
        assert_eq!(rect.x, -40.0);
    }

    modifier.drag_ended(-80.0).expect("release");
    let frame = modifier
        .render(&LineChart::new(&data), &data, viewport)
        .expect("render");
    assert_eq!(frame.texts[0].x, -40.0);
    assert_eq!(
        modifier
            .layout(&data, viewport)
            .expect("layout")
            .section(XAxisSection::Labels)
            .map(|rect| rect.x),
        Some(-40.0)
    );
}

#[test]
fn drag_marks_modifier_for_rerender() {
    let points = vec![DataPoint::new(1.0), DataPoint::new(2.0), DataPoint::new(3.0)];
    let mut data = LineChartData::new(LineDataSet::new(points), ChartStyle::default());
    let mut modifier = XAxisLabels::attach(&mut data);
    modifier
        .render(&LineChart::new(&data), &data, Viewport::new(300, 150))
        .expect("render");
    assert!(!modifier.needs_render());

    modifier.drag_changed(12.0).expect("drag");
    assert!(modifier.needs_render());
    assert_eq!(modifier.pan().offset(), 6.0);
}
