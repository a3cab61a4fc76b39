use chart_kit::ChartError;
use chart_kit::core::{
    BarDataSet, BarStyle, ChartDataPoint, ChartDataSet, DataFunctions, DataPoint, LineDataSet,
    LineStyle, PointStyle, RangedBarDataSet, RangedDataPoint,
};
use rust_decimal::Decimal;

fn labeled_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(1.0).with_label("Mon"),
        DataPoint::new(4.0).with_label("Tue"),
        DataPoint::new(2.5).with_label("Wed"),
    ]
}

#[test]
fn line_data_set_defaults_match_constructor_contract() {
    let set = LineDataSet::new(labeled_points());

    assert_eq!(set.len(), 3);
    assert_eq!(set.legend_title(), "");
    assert_eq!(set.point_style(), PointStyle::default());
    assert_eq!(set.style(), LineStyle::default());
    assert!(!set.relative_x_axis());
    assert_eq!(set.view_window(), None);
}

#[test]
fn data_set_construction_copies_input_points() {
    let mut points = labeled_points();
    let set = LineDataSet::new(points.clone());

    points.push(DataPoint::new(99.0));
    points[0] = DataPoint::new(-1.0);

    assert_eq!(set.len(), 3);
    assert_eq!(set.data_points()[0].value(), 1.0);
    assert_eq!(set.data_points()[0].label(), Some("Mon"));
}

#[test]
fn equal_inputs_give_equal_content_but_distinct_identity() {
    let points = labeled_points();
    let first = LineDataSet::new(points.clone()).with_legend_title("Steps");
    let second = LineDataSet::new(points).with_legend_title("Steps");

    assert!(first.content_eq(&second));
    assert_ne!(first.id(), second.id());
    assert_ne!(first, second);

    let renamed = second.clone().with_legend_title("Calories");
    assert!(!first.content_eq(&renamed));
}

#[test]
fn cloned_point_keeps_identity() {
    let point = DataPoint::new(3.0).with_description("peak");
    let copy = point.clone();
    let twin = DataPoint::new(3.0).with_description("peak");

    assert_eq!(point.id(), copy.id());
    assert_eq!(point, copy);
    assert!(point.content_eq(&twin));
    assert_ne!(point.id(), twin.id());
}

#[test]
fn data_sets_accept_empty_points_and_any_window() {
    let empty = RangedBarDataSet::new(Vec::new()).with_view_window(-3);
    assert!(empty.is_empty());
    assert_eq!(empty.view_window(), Some(-3));
    assert_eq!(empty.max_value(), None);
    assert_eq!(empty.range(), None);

    let bars = BarDataSet::new(Vec::new()).with_style(BarStyle::default());
    assert!(bars.is_empty());
    assert_eq!(bars.average(), None);
}

#[test]
fn ranged_point_rejects_inverted_bounds() {
    let err = RangedDataPoint::new(10.0, 5.0).expect_err("lower > upper must fail");
    assert!(matches!(
        err,
        ChartError::InvalidRange {
            lower,
            upper
        } if lower == 10.0 && upper == 5.0
    ));

    let err = RangedDataPoint::new(f64::NAN, 5.0).expect_err("non-finite must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let flat = RangedDataPoint::new(4.0, 4.0).expect("equal bounds are a valid range");
    assert_eq!(flat.mid_point(), 4.0);
}

#[test]
fn decimal_constructors_convert_values() {
    let point = DataPoint::from_decimal(Decimal::new(1234, 2)).expect("decimal point");
    assert!((point.value() - 12.34).abs() <= 1e-12);

    let ranged = RangedDataPoint::from_decimal(Decimal::new(15, 1), Decimal::new(30, 1))
        .expect("decimal range");
    assert_eq!(ranged.lower_bound(), 1.5);
    assert_eq!(ranged.upper_bound(), 3.0);

    let inverted = RangedDataPoint::from_decimal(Decimal::new(30, 1), Decimal::new(15, 1));
    assert!(inverted.is_err());
}

#[test]
fn data_functions_summarize_values() {
    let line = LineDataSet::new(labeled_points());
    assert_eq!(line.max_value(), Some(4.0));
    assert_eq!(line.min_value(), Some(1.0));
    assert_eq!(line.range(), Some(3.0));
    assert_eq!(line.average(), Some(2.5));

    let ranged = RangedBarDataSet::new(vec![
        RangedDataPoint::new(2.0, 8.0).expect("range"),
        RangedDataPoint::new(-1.0, 3.0).expect("range"),
    ]);
    assert_eq!(ranged.max_value(), Some(8.0));
    assert_eq!(ranged.min_value(), Some(-1.0));
    assert_eq!(ranged.range(), Some(9.0));
    assert_eq!(ranged.average(), Some(3.0));
}

#[test]
fn point_labels_follow_data_point_order() {
    let set = BarDataSet::new(vec![
        DataPoint::new(1.0).with_label("a"),
        DataPoint::new(2.0),
        DataPoint::new(3.0).with_label("c"),
    ]);

    assert_eq!(set.point_labels(), vec![Some("a"), None, Some("c")]);
}

#[test]
fn ranged_point_deserialization_enforces_bounds() {
    let valid = RangedDataPoint::new(1.0, 2.0)
        .expect("range")
        .with_label("Q1");
    let json = serde_json::to_string(&valid).expect("serialize");
    let parsed: RangedDataPoint = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, valid);

    let inverted = r#"{
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "lower_bound": 5.0,
        "upper_bound": 1.0
    }"#;
    assert!(serde_json::from_str::<RangedDataPoint>(inverted).is_err());
}
