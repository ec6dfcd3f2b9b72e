use review_sense::{
    model::{
        bayes::MultinomialNb,
        store::{self, ArtifactError},
        vectorizer::TfidfVectorizer,
        SMOOTHING_ALPHA, VOCABULARY_CANDIDATES,
    },
    nlp::normalize,
};
use tempfile::TempDir;

fn labelled_reviews() -> (Vec<String>, Vec<u8>) {
    let rows: &[(&str, u8)] = &[
        ("The food was absolutely delicious and amazing", 1),
        ("Delicious meals and a wonderful friendly staff", 1),
        ("The staff was wonderful and the service was great", 1),
        ("Great tasty food and a lovely atmosphere", 1),
        ("We waited an hour for cold food", 0),
        ("The service was slow and the food was cold", 0),
        ("Terrible bland food and a rude host", 0),
        ("Slow service and we waited over an hour", 0),
    ];
    let corpus = rows.iter().map(|(text, _)| normalize(text)).collect();
    let labels = rows.iter().map(|(_, label)| *label).collect();
    (corpus, labels)
}

#[test]
fn roundtrip_reproduces_output_for_every_candidate_cap() {
    let (corpus, labels) = labelled_reviews();
    let tmp = TempDir::new().unwrap();
    let probe = normalize("The staff was wonderful but the food was cold");

    for &cap in VOCABULARY_CANDIDATES {
        let vectorizer = TfidfVectorizer::fit(&corpus, cap);
        let features = vectorizer.transform_batch(&corpus);
        let classifier = MultinomialNb::fit(&features, &labels, SMOOTHING_ALPHA).unwrap();

        let v_path = tmp.path().join(format!("vec-{cap:?}.json"));
        let c_path = tmp.path().join(format!("clf-{cap:?}.json"));
        store::save_artifacts(&vectorizer, &classifier, &v_path, &c_path).unwrap();
        let (loaded_vec, loaded_clf) = store::load_artifacts(&v_path, &c_path).unwrap();

        let direct = vectorizer.transform(&probe);
        let restored = loaded_vec.transform(&probe);
        assert_eq!(direct, restored, "cap: {cap:?}");
        assert_eq!(
            classifier.predict_proba(direct.view()),
            loaded_clf.predict_proba(restored.view()),
            "cap: {cap:?}"
        );
    }
}

#[test]
fn loading_reports_which_artifact_is_missing() {
    let (corpus, labels) = labelled_reviews();
    let tmp = TempDir::new().unwrap();
    let v_path = tmp.path().join("vectorizer.json");
    let c_path = tmp.path().join("classifier.json");

    let err = store::load_artifacts(&v_path, &c_path).unwrap_err();
    assert!(matches!(err, ArtifactError::Missing(_)));

    // With only the vectorizer present, the classifier is the missing half.
    let vectorizer = TfidfVectorizer::fit(&corpus, None);
    let features = vectorizer.transform_batch(&corpus);
    let classifier = MultinomialNb::fit(&features, &labels, SMOOTHING_ALPHA).unwrap();
    store::save_artifacts(&vectorizer, &classifier, &v_path, &c_path).unwrap();
    std::fs::remove_file(&c_path).unwrap();
    match store::load_artifacts(&v_path, &c_path).unwrap_err() {
        ArtifactError::Missing(path) => assert!(path.contains("classifier.json")),
        other => panic!("expected Missing, got {other:?}"),
    }
}

#[test]
fn corrupt_artifacts_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let v_path = tmp.path().join("vectorizer.json");
    let c_path = tmp.path().join("classifier.json");
    std::fs::write(&v_path, b"not json at all").unwrap();
    std::fs::write(&c_path, b"{}").unwrap();

    let err = store::load_artifacts(&v_path, &c_path).unwrap_err();
    assert!(matches!(err, ArtifactError::Corrupt { .. }));
}

#[test]
fn mismatched_pairs_are_rejected_at_load_time() {
    let (corpus, labels) = labelled_reviews();
    let tmp = TempDir::new().unwrap();
    let v_path = tmp.path().join("vectorizer.json");
    let c_path = tmp.path().join("classifier.json");

    // Classifier trained on the full vocabulary, vectorizer capped to 2:
    // different feature spaces must not silently pair up.
    let wide = TfidfVectorizer::fit(&corpus, None);
    let features = wide.transform_batch(&corpus);
    let classifier = MultinomialNb::fit(&features, &labels, SMOOTHING_ALPHA).unwrap();
    let narrow = TfidfVectorizer::fit(&corpus, Some(2));
    store::save_artifacts(&narrow, &classifier, &v_path, &c_path).unwrap();

    let err = store::load_artifacts(&v_path, &c_path).unwrap_err();
    assert!(matches!(err, ArtifactError::Mismatched { .. }));
}
