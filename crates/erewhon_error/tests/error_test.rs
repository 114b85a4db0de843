use erewhon_error::{
    AcquisitionError, AcquisitionErrorKind, ClassificationError, ClassificationErrorKind,
    ConfigError, ErewhonError, ErewhonErrorKind, GenerationError, GenerationErrorKind, PublishError,
};

#[test]
fn test_error_records_caller_location() {
    let err = PublishError::new("rejected");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_conversion_into_top_level_error() {
    let err: ErewhonError = AcquisitionError::new(AcquisitionErrorKind::NoTopics).into();
    assert!(matches!(err.kind(), ErewhonErrorKind::Acquisition(_)));
    assert!(!err.is_per_item());
    assert!(format!("{}", err).starts_with("Erewhon Error"));
}

#[test]
fn test_classification_errors_are_per_item() {
    let err: ErewhonError =
        ClassificationError::new(ClassificationErrorKind::MissingText("c7".to_string())).into();
    assert!(err.is_per_item());
    assert!(format!("{}", err).contains("c7"));
}

#[test]
fn test_generation_error_display() {
    let err = GenerationError::new(GenerationErrorKind::ModificationFailed {
        content_id: "abc".to_string(),
        reason: "backend offline".to_string(),
    });
    let text = format!("{}", err);
    assert!(text.contains("abc"));
    assert!(text.contains("backend offline"));
}

#[test]
fn test_out_of_range_config_names_field_and_value() {
    let err = ConfigError::out_of_range("general_confidence", -0.1);
    assert!(err.file.ends_with("error_test.rs"));
    let err: ErewhonError = err.into();
    assert!(matches!(err.kind(), ErewhonErrorKind::Config(_)));
    assert!(
        err.to_string()
            .contains("general_confidence must be within [0, 1], got -0.1")
    );
}
