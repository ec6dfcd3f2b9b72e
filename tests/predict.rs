use review_sense::{
    model::{
        bayes::MultinomialNb,
        predictor::{NaiveBayesPredictor, PredictError, SentimentPredictor},
        respond,
        vectorizer::TfidfVectorizer,
        SMOOTHING_ALPHA,
    },
    nlp::normalize,
};

fn trained_predictor() -> NaiveBayesPredictor {
    let rows: &[(&str, u8)] = &[
        ("The food was absolutely delicious and amazing", 1),
        ("Delicious meals and a wonderful friendly staff", 1),
        ("The staff was wonderful and the service was great", 1),
        ("Great tasty food and a lovely atmosphere", 1),
        ("Absolutely wonderful dinner with delicious dessert", 1),
        ("The waiter was friendly and the food was tasty", 1),
        ("Lovely place with great atmosphere and friendly staff", 1),
        ("Amazing service and absolutely delicious pasta", 1),
        ("We waited an hour for cold food", 0),
        ("The service was slow and the food was cold", 0),
        ("Terrible bland food and a rude host", 0),
        ("We waited forever and the meal arrived cold", 0),
        ("Awful dinner the food was cold and bland", 0),
        ("Slow service and we waited over an hour", 0),
        ("The soup was cold and the rice was awful", 0),
        ("Horrible taste and terribly slow service", 0),
    ];
    let corpus: Vec<String> = rows.iter().map(|(text, _)| normalize(text)).collect();
    let labels: Vec<u8> = rows.iter().map(|(_, label)| *label).collect();
    let vectorizer = TfidfVectorizer::fit(&corpus, None);
    let features = vectorizer.transform_batch(&corpus);
    let classifier = MultinomialNb::fit(&features, &labels, SMOOTHING_ALPHA).unwrap();
    NaiveBayesPredictor::new(vectorizer, classifier)
}

#[test]
fn positive_review_hits_the_delicious_branch() {
    let predictor = trained_predictor();
    let result = predictor
        .predict("The food was absolutely delicious and the staff was wonderful")
        .unwrap();
    assert_eq!(result.label, 1);
    assert!(result.confidence > 50.0);
    assert!(result.confidence <= 100.0);
    assert_eq!(
        result.custom_msg,
        "Chef's Kiss! 👩‍🍳💋 We're framing this review!"
    );
}

#[test]
fn negative_review_wait_branch_beats_cold_branch() {
    let predictor = trained_predictor();
    let result = predictor
        .predict("We waited over an hour and the food was cold")
        .unwrap();
    assert_eq!(result.label, 0);
    // "wait" and "hour" match the first rule even though "cold" also matches
    // the second, because rules are evaluated in order.
    assert_eq!(
        result.custom_msg,
        "Yikes! 🐌 Our snails move faster than that service. Message received!"
    );
}

#[test]
fn whitespace_only_input_is_rejected_before_the_model_runs() {
    let predictor = trained_predictor();
    let err = predictor.predict("   ").unwrap_err();
    assert!(matches!(err, PredictError::EmptyInput));
    let err = predictor.predict("").unwrap_err();
    assert!(matches!(err, PredictError::EmptyInput));
}

#[test]
fn confidence_stays_within_percentage_bounds() {
    let predictor = trained_predictor();
    for text in [
        "delicious",
        "cold",
        "completely unseen vocabulary here",
        "the staff waited",
    ] {
        let result = predictor.predict(text).unwrap();
        assert!(
            (0.0..=100.0).contains(&result.confidence),
            "text: {text:?}, confidence: {}",
            result.confidence
        );
    }
}

#[test]
fn canned_rules_fall_back_to_generic_messages() {
    assert_eq!(
        respond::custom_message(0, "Just a bad evening overall"),
        "We messed up. Thanks for the honest reality check."
    );
    assert_eq!(
        respond::custom_message(1, "Loved it"),
        "You just made our day! 😊"
    );
}

#[test]
fn canned_rules_match_in_priority_order() {
    assert_eq!(
        respond::custom_message(0, "Too expensive for what you get"),
        "Ouch, that hurts the wallet and the feelings. 💸"
    );
    // "staff" (second rule) wins over "atmosphere" (third rule).
    assert_eq!(
        respond::custom_message(1, "Great staff and atmosphere"),
        "Give that staff member a raise! 🏆"
    );
    assert_eq!(
        respond::custom_message(1, "What an atmosphere"),
        "Vibes: Immaculate. ✨"
    );
    // Matching is on the lowercased raw text.
    assert_eq!(
        respond::custom_message(0, "SO SALTY"),
        "Did the chef fall asleep? 🧂 We're sending this feedback to the kitchen!"
    );
}
