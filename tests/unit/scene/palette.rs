use super::*;

#[test]
fn names_round_trip_through_from_str() {
    for kind in BackgroundKind::ALL {
        assert_eq!(kind.name().parse::<BackgroundKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!(" Fog ".parse::<BackgroundKind>().unwrap(), BackgroundKind::Fog);
}

#[test]
fn unknown_name_is_validation_error() {
    let err = "aurora".parse::<BackgroundKind>().unwrap_err();
    assert!(matches!(err, ForestError::Validation(_)));
    assert!(err.to_string().contains("misty"));
}

#[test]
fn default_is_misty_and_gradients_are_opaque() {
    assert_eq!(BackgroundKind::default(), BackgroundKind::Misty);
    for kind in BackgroundKind::ALL {
        let (top, bottom) = kind.gradient();
        assert_eq!(top.a, 255);
        assert_eq!(bottom.a, 255);
    }
    let (top, bottom) = BackgroundKind::Sunrise.gradient();
    assert_eq!(top.to_array(), [11, 18, 32, 255]);
    assert_eq!(bottom.to_array(), [27, 111, 138, 255]);
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&BackgroundKind::Twilight).unwrap();
    assert_eq!(json, "\"twilight\"");
    let k: BackgroundKind = serde_json::from_str("\"night\"").unwrap();
    assert_eq!(k, BackgroundKind::Night);
}
