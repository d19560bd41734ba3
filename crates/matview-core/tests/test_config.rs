//! Traversal configuration: builder, per-view overrides and persistence.

use matview_core::{
    config::{ExhaustionPolicy, ViewConfig, ViewConfigBuilder},
    error::ViewError,
    layout::MatrixLayout,
    view::{Traverse, ViewExt},
};

#[test]
fn test_builder_overrides_policy() {
    let config = ViewConfigBuilder::new()
        .exhaustion(ExhaustionPolicy::Wrap)
        .build();
    assert_eq!(config.exhaustion, ExhaustionPolicy::Wrap);

    let config = ViewConfigBuilder::default()
        .exhaustion(ExhaustionPolicy::Fail)
        .build();
    assert_eq!(config, ViewConfig::default());
}

#[test]
fn test_override_is_per_view() {
    let m = MatrixLayout::new(2, 2);
    let wrap = ViewConfig {
        exhaustion: ExhaustionPolicy::Wrap,
    };
    let mut cyclic = m.diag(0).unwrap().with_config(wrap);
    let mut strict = m.diag(0).unwrap().with_config(ViewConfig::default());
    assert_eq!(cyclic.config().exhaustion, ExhaustionPolicy::Wrap);

    cyclic.reset();
    strict.reset();
    for _ in 0..2 {
        assert_eq!(cyclic.next(), strict.next());
    }
    assert_eq!(cyclic.next(), Ok(0));
    assert_eq!(strict.next(), Err(ViewError::ProtocolMisuse { n_elem: 2 }));
}

#[test]
fn test_clones_carry_configuration_and_own_cursor() {
    let m = MatrixLayout::new(3, 2);
    let wrap = ViewConfig {
        exhaustion: ExhaustionPolicy::Wrap,
    };
    let mut a = m.col_at(1).unwrap().with_config(wrap);
    a.reset();
    assert_eq!(a.next(), Ok(3));

    let mut b = a.clone();
    assert_eq!(b.config(), a.config());
    assert_eq!(b.next(), Ok(4));
    assert_eq!(a.next(), Ok(4));
    assert_eq!(a.next(), Ok(5));
    assert_eq!(a.next(), Ok(3));
    assert_eq!(b.remaining(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn test_config_serialization() {
    let config = ViewConfig {
        exhaustion: ExhaustionPolicy::Wrap,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"exhaustion":"Wrap"}"#);
    let back: ViewConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let shape = matview_core::types::Shape::matrix(4, 3);
    let json = serde_json::to_string(&shape).unwrap();
    let back: matview_core::types::Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);

    let layout = MatrixLayout::new(2, 5);
    let json = serde_json::to_string(&layout).unwrap();
    let back: MatrixLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(back, layout);
}
