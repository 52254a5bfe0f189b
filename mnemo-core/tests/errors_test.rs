use mnemo_core::errors::*;

#[test]
fn vocabulary_mismatch_carries_details() {
    let err = StoreError::VocabularyMismatch {
        details: "concept/CTTrauma classifier has 118 features, vocabulary has 120".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("120"));
    assert!(msg.contains("118"));
    assert!(msg.contains("CTTrauma"));
}

#[test]
fn batch_too_large_carries_size_and_limit() {
    let err = MnemoError::BatchTooLarge {
        size: 1500,
        limit: 1000,
    };
    let msg = err.to_string();
    assert!(msg.contains("1500"));
    assert!(msg.contains("1000"));
}

#[test]
fn sub_errors_convert_into_mnemo_error() {
    let err: MnemoError = FeatureError::AbsentField {
        field: "abstract".into(),
    }
    .into();
    assert!(matches!(err, MnemoError::FeatureError(_)));
    assert!(err.to_string().contains("abstract"));

    let err: MnemoError = StoreError::Corruption {
        details: "bad magic".into(),
    }
    .into();
    assert!(err.to_string().contains("bad magic"));
}

#[test]
fn data_quality_errors_are_not_fatal() {
    let feature: MnemoError = FeatureError::MalformedField {
        field: "title".into(),
        reason: "control characters".into(),
    }
    .into();
    assert!(!feature.is_fatal());

    let insufficient: MnemoError = TrainingError::InsufficientTrainingData {
        category: "concept".into(),
        reason: "CTTrauma has 1 example".into(),
    }
    .into();
    assert!(!insufficient.is_fatal());
}

#[test]
fn structural_errors_are_fatal() {
    let corruption: MnemoError = StoreError::Corruption {
        details: "checksum".into(),
    }
    .into();
    assert!(corruption.is_fatal());
    assert!(MnemoError::from(TrainingError::EmptyCorpus).is_fatal());
}
