use chart_kit::ChartError;
use chart_kit::api::{ChartStyle, XAxisLabelPosition, XAxisLabelSource};
use chart_kit::core::{BarStyle, Color, LineStyle, LineType, PointShape, PointStyle, PointType};

#[test]
fn partial_style_document_fills_defaults() {
    let style = ChartStyle::from_json_str(
        r#"{ "x_axis_label_position": "Top", "x_axis_title": "Month" }"#,
    )
    .expect("parse style");

    assert_eq!(style.x_axis_label_position, XAxisLabelPosition::Top);
    assert_eq!(style.x_axis_title.as_deref(), Some("Month"));
    assert_eq!(style.x_axis_labels_from, XAxisLabelSource::DataPoint);
    assert_eq!(style.x_axis_label_padding_px, 2.0);
    assert_eq!(style.x_axis_label_color, Color::BLACK);
}

#[test]
fn empty_document_equals_default_style() {
    let style = ChartStyle::from_json_str("{}").expect("parse style");
    assert_eq!(style, ChartStyle::default());
}

#[test]
fn style_round_trips_through_json() {
    let style = ChartStyle::default()
        .with_x_axis_title("Hour")
        .with_x_axis_label_position(XAxisLabelPosition::Top)
        .with_x_axis_labels_from(XAxisLabelSource::ChartData);

    let json = style.to_json_pretty().expect("serialize");
    let parsed = ChartStyle::from_json_str(&json).expect("parse");
    assert_eq!(parsed, style);
}

#[test]
fn invalid_style_values_are_rejected() {
    let err = ChartStyle::from_json_str(r#"{ "x_axis_label_font_size_px": 0.0 }"#)
        .expect_err("zero font size");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ChartStyle::from_json_str(r#"{ "x_axis_label_row_height_px": -1.0 }"#)
        .expect_err("negative row height");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ChartStyle::from_json_str(
        r#"{ "x_axis_title_color": { "red": 2.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 } }"#,
    )
    .expect_err("out of range color");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ChartStyle::from_json_str("not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn series_styles_load_with_defaults() {
    let point: PointStyle =
        serde_json::from_str(r#"{ "point_shape": "Square", "point_type": "Outline" }"#)
            .expect("point style");
    assert_eq!(point.point_shape, PointShape::Square);
    assert_eq!(point.point_type, PointType::Outline);
    assert_eq!(point.point_size, PointStyle::default().point_size);

    let line: LineStyle =
        serde_json::from_str(r#"{ "line_type": "Line", "ignore_zero": true }"#).expect("line");
    assert_eq!(line.line_type, LineType::Line);
    assert!(line.ignore_zero);
    assert_eq!(line.stroke_width, 1.5);

    let bar: BarStyle = serde_json::from_str(r#"{ "bar_width": 0.5 }"#).expect("bar");
    assert_eq!(bar.bar_width, 0.5);
    assert_eq!(bar.corner_radius, 5.0);
}

#[test]
fn series_style_validation_checks_ranges() {
    assert!(LineStyle::default().validate().is_ok());
    let thin = LineStyle {
        stroke_width: 0.0,
        ..LineStyle::default()
    };
    assert!(thin.validate().is_err());

    assert!(BarStyle::default().validate().is_ok());
    let wide = BarStyle {
        bar_width: 1.5,
        ..BarStyle::default()
    };
    assert!(matches!(wide.validate(), Err(ChartError::InvalidConfig(_))));

    assert!(PointStyle::default().validate().is_ok());
    let borderless: PointStyle =
        serde_json::from_str(r#"{ "line_width": 0.0 }"#).expect("point style");
    assert!(matches!(
        borderless.validate(),
        Err(ChartError::InvalidConfig(_))
    ));
    let filled_only = PointStyle {
        point_type: PointType::Filled,
        ..borderless
    };
    assert!(filled_only.validate().is_ok());
    let negative = PointStyle {
        point_size: -1.0,
        ..PointStyle::default()
    };
    assert!(matches!(negative.validate(), Err(ChartError::InvalidConfig(_))));
    let bad_border = PointStyle {
        border_color: Color::rgb(0.0, 0.0, 3.0),
        ..PointStyle::default()
    };
    assert!(matches!(bad_border.validate(), Err(ChartError::InvalidData(_))));
    let hidden_bad_border = PointStyle {
        point_type: PointType::Filled,
        ..bad_border
    };
    assert!(hidden_bad_border.validate().is_ok());
}
