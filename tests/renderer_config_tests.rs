use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use spline_chart_rs::api::SplineRendererConfigJsonContractV1;
use spline_chart_rs::core::{
    DEFAULT_PRECISION, DataPoint, FillType, GradientPaintTransformer, LegendShape, Rect,
};
use spline_chart_rs::{ChartError, SplineRendererConfig};

fn hash_of(config: &SplineRendererConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

fn assert_same(a: &SplineRendererConfig, b: &SplineRendererConfig) {
    assert_eq!(a, b);
    assert_eq!(hash_of(a), hash_of(b));
}

#[test]
fn defaults_match_documented_values() {
    let config = SplineRendererConfig::default();
    assert_eq!(config.precision(), DEFAULT_PRECISION);
    assert_eq!(config.fill_type(), FillType::None);
    assert_eq!(
        config.gradient_transformer(),
        Some(GradientPaintTransformer::Vertical)
    );
    assert_eq!(
        config.legend_shape(),
        Some(&LegendShape::Line {
            x1: -7.0,
            y1: 0.0,
            x2: 7.0,
            y2: 0.0,
        })
    );
}

#[test]
fn explicit_precision_is_kept() {
    let config = SplineRendererConfig::new(15).expect("config");
    assert_eq!(config.precision(), 15);
}

#[test]
fn zero_precision_is_rejected_everywhere() {
    assert!(matches!(
        SplineRendererConfig::new(0),
        Err(ChartError::InvalidPrecision { precision: 0 })
    ));

    let mut config = SplineRendererConfig::default();
    let err = config.set_precision(0).expect_err("zero precision");
    assert!(err.is_invalid_input());
    assert_eq!(config.precision(), DEFAULT_PRECISION);
}

#[test]
fn equality_tracks_every_field() {
    let mut a = SplineRendererConfig::default();
    let mut b = SplineRendererConfig::default();
    assert_same(&a, &b);

    a.set_precision(9).expect("precision");
    assert_ne!(a, b);
    b.set_precision(9).expect("precision");
    assert_same(&a, &b);

    a.set_fill_type(FillType::ToZero);
    assert_ne!(a, b);
    b.set_fill_type(FillType::ToZero);
    assert_same(&a, &b);

    a.set_gradient_transformer(None);
    assert_ne!(a, b);
    b.set_gradient_transformer(None);
    assert_same(&a, &b);

    a.set_gradient_transformer(Some(GradientPaintTransformer::Horizontal));
    assert_ne!(a, b);
    b.set_gradient_transformer(Some(GradientPaintTransformer::Horizontal));
    assert_same(&a, &b);

    a.set_legend_shape(Some(LegendShape::Rectangle(Rect::new(1.0, 2.0, 3.0, 4.0))))
        .expect("legend shape");
    assert_ne!(a, b);
    b.set_legend_shape(Some(LegendShape::Rectangle(Rect::new(1.0, 2.0, 3.0, 4.0))))
        .expect("legend shape");
    assert_same(&a, &b);

    a.set_legend_shape(None).expect("legend shape");
    assert_ne!(a, b);
}

#[test]
fn clone_is_a_deep_copy() {
    let original = SplineRendererConfig::default()
        .with_legend_shape(Some(LegendShape::Rectangle(Rect::new(1.0, 2.0, 3.0, 4.0))))
        .expect("legend shape");
    let mut copy = original.clone();
    assert_same(&original, &copy);

    copy.legend_shape_mut()
        .expect("legend shape present")
        .translate(1.0, 1.0);
    assert_ne!(original, copy);
    assert_eq!(
        original.legend_shape(),
        Some(&LegendShape::Rectangle(Rect::new(1.0, 2.0, 3.0, 4.0)))
    );
}

#[test]
fn polygon_legend_clones_own_their_vertices() {
    let triangle = LegendShape::Polygon {
        vertices: vec![
            DataPoint::new(0.0, 0.0),
            DataPoint::new(4.0, 0.0),
            DataPoint::new(2.0, 3.0),
        ],
    };
    let original = SplineRendererConfig::default()
        .with_legend_shape(Some(triangle.clone()))
        .expect("legend shape");
    let mut copy = original.clone();
    if let Some(LegendShape::Polygon { vertices }) = copy.legend_shape_mut() {
        vertices[2].y = 9.0;
    }
    assert_eq!(original.legend_shape(), Some(&triangle));
    assert_ne!(original, copy);
}

#[test]
fn invalid_legend_shapes_are_rejected() {
    let mut config = SplineRendererConfig::default();
    let degenerate = LegendShape::Polygon {
        vertices: vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)],
    };
    assert!(matches!(
        config.set_legend_shape(Some(degenerate)),
        Err(ChartError::InvalidInput(_))
    ));
    let negative = LegendShape::Ellipse(Rect::new(0.0, 0.0, -1.0, 2.0));
    assert!(config.set_legend_shape(Some(negative)).is_err());
    assert_eq!(config, SplineRendererConfig::default());
}

#[test]
fn json_contract_round_trip_preserves_equality() {
    let config = SplineRendererConfig::new(12)
        .expect("config")
        .with_fill_type(FillType::ToDomainBounds)
        .with_gradient_transformer(Some(GradientPaintTransformer::CenterHorizontal))
        .with_legend_shape(Some(LegendShape::Ellipse(Rect::new(-3.0, -3.0, 6.0, 6.0))))
        .expect("legend shape");

    let contract = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(contract.contains("\"schema_version\": 1"));
    let restored = SplineRendererConfig::from_json_compat_str(&contract).expect("restore");
    assert_same(&config, &restored);

    let bare = config.to_json_pretty().expect("serialize");
    let restored = SplineRendererConfig::from_json_compat_str(&bare).expect("restore");
    assert_same(&config, &restored);
}

#[test]
fn missing_optional_fields_take_defaults() {
    let restored =
        SplineRendererConfig::from_json_compat_str(r#"{ "precision": 5 }"#).expect("restore");
    assert_same(&restored, &SplineRendererConfig::default());
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let payload = r#"{ "schema_version": 2, "config": { "precision": 5 } }"#;
    let result = SplineRendererConfig::from_json_compat_str(payload);
    assert!(matches!(result, Err(ChartError::Persistence(_))));
}

#[test]
fn restored_payload_is_validated() {
    let result = SplineRendererConfig::from_json_compat_str(r#"{ "precision": 0 }"#);
    assert!(matches!(
        result,
        Err(ChartError::InvalidPrecision { precision: 0 })
    ));

    let garbage = SplineRendererConfig::from_json_compat_str("not json");
    assert!(matches!(garbage, Err(ChartError::Persistence(_))));
}

#[test]
fn direct_deserialization_validates_the_config() {
    let zero = serde_json::from_str::<SplineRendererConfig>(r#"{ "precision": 0 }"#);
    let err = zero.expect_err("zero precision");
    assert!(err.to_string().contains("invalid precision"));

    let polygon = r#"{
        "precision": 5,
        "legend_shape": { "kind": "polygon", "vertices": [{ "x": 0.0, "y": 0.0 }] }
    }"#;
    assert!(serde_json::from_str::<SplineRendererConfig>(polygon).is_err());

    let contract = r#"{ "schema_version": 1, "config": { "precision": 0 } }"#;
    assert!(serde_json::from_str::<SplineRendererConfigJsonContractV1>(contract).is_err());

    let valid: SplineRendererConfig =
        serde_json::from_str(r#"{ "precision": 7, "fill_type": "ToZero" }"#).expect("valid");
    assert_eq!(valid.precision(), 7);
    assert_eq!(valid.fill_type(), FillType::ToZero);
}

#[test]
fn contract_with_invalid_settings_reports_the_validation_error() {
    let contract = r#"{ "schema_version": 1, "config": { "precision": 0 } }"#;
    assert!(matches!(
        SplineRendererConfig::from_json_compat_str(contract),
        Err(ChartError::InvalidPrecision { precision: 0 })
    ));
}
