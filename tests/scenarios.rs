use std::fs;
use std::path::Path;
use std::sync::Arc;
use tc_core::batch::{run_test, write_predictions};
use tc_core::core::stemmer::IdentityStemmer;
use tc_core::core::stopwords::StopWords;
use tc_core::evaluate::{evaluate, read_gold};
use tc_core::manifest::{read_testing, read_training, TrainingEntry};
use tc_core::{Classifier, Normalizer, Trainer};

fn write(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.display().to_string()
}

fn identity(stop: &[&str]) -> Normalizer {
    Normalizer::new(StopWords::from_words(stop.iter().copied()), Arc::new(IdentityStemmer))
}

#[test]
fn single_word_documents() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = vec![
        TrainingEntry::new(write(dir.path(), "p", "good"), "pos"),
        TrainingEntry::new(write(dir.path(), "n", "bad"), "neg"),
    ];
    let normalizer = identity(&[]);
    let model = Trainer::new(&normalizer).train(&manifest);

    let mut vocabulary: Vec<_> = model.vocabulary().collect();
    vocabulary.sort_unstable();
    assert_eq!(vocabulary, ["bad", "good"]);
    assert_eq!(model.total_labels(), 2);
    assert_eq!(model.document_count(), 2);

    let doc = write(dir.path(), "q", "good");
    let classifier = Classifier::new(&model, &normalizer);
    assert_eq!(classifier.classify_document(&doc).unwrap(), "pos");
}

#[test]
fn stop_word_document_uses_priors_only() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = vec![
        TrainingEntry::new(write(dir.path(), "1", "of the goal"), "sport"),
        TrainingEntry::new(write(dir.path(), "2", "a the paint"), "art"),
        TrainingEntry::new(write(dir.path(), "3", "the painting"), "art"),
    ];
    let normalizer = identity(&["the", "of", "a"]);
    let model = Trainer::new(&normalizer).train(&manifest);
    let classifier = Classifier::new(&model, &normalizer);

    let empty = classifier.likelihoods(Vec::<String>::new());
    let doc = write(dir.path(), "q", "The OF a, the...");
    let mut streamed = Vec::new();
    tc_core::manifest::for_each_term(&doc, &normalizer, |t| streamed.push(t)).unwrap();
    assert!(streamed.is_empty());
    assert_eq!(classifier.likelihoods(&streamed), empty);

    // art has 2 of 3 documents
    assert_eq!(classifier.classify_document(&doc).unwrap(), "art");
}

#[test]
fn missing_training_document_does_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = vec![
        TrainingEntry::new(write(dir.path(), "1", "alpha beta"), "x"),
        TrainingEntry::new(dir.path().join("missing.txt").display().to_string(), "y"),
        TrainingEntry::new(write(dir.path(), "3", "gamma"), "y"),
    ];
    let normalizer = identity(&[]);
    let model = Trainer::new(&normalizer).train(&manifest);
    assert_eq!(model.document_count(), manifest.len() as u64 - 1);
    assert_eq!(model.class_stats("y").unwrap().document_count, 2);
}

#[test]
fn unseen_term_shifts_every_class_by_its_denominator() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = vec![
        TrainingEntry::new(write(dir.path(), "1", "good good"), "pos"),
        TrainingEntry::new(write(dir.path(), "2", "bad"), "neg"),
    ];
    let normalizer = identity(&[]);
    let model = Trainer::new(&normalizer).train(&manifest);
    let classifier = Classifier::new(&model, &normalizer);

    let without = classifier.likelihoods(["good"]);
    let with = classifier.likelihoods(["good", "zebra"]);
    for (label, stats) in model.classes() {
        let shift = with.get(stats.index).unwrap() - without.get(stats.index).unwrap();
        let expected = (model.total_terms() as f64 + stats.token_count as f64).log10();
        assert!(shift > 0.0, "{label}");
        assert!((shift - expected).abs() < 1e-12, "{label}");
    }
}

#[test]
fn smoothing_and_token_counts_hold() {
    let dir = tempfile::tempdir().unwrap();
    let bodies = [("a", "one two two"), ("b", "two three"), ("a", "four, (one)!"), ("c", "--- ...")];
    let manifest: Vec<_> = bodies
        .iter()
        .enumerate()
        .map(|(i, (label, body))| TrainingEntry::new(write(dir.path(), &i.to_string(), body), *label))
        .collect();
    let normalizer = identity(&[]);
    let model = Trainer::new(&normalizer).train(&manifest);

    for term in model.vocabulary() {
        let counts = model.term_counts(term).unwrap();
        assert_eq!(counts.len(), model.total_labels());
        assert!(counts.iter().all(|&c| c >= 1));
    }
    assert_eq!(model.class_stats("a").unwrap().token_count, 5);
    assert_eq!(model.class_stats("b").unwrap().token_count, 2);
    assert_eq!(model.class_stats("c").unwrap().token_count, 0);
    assert_eq!(model.term_counts("two"), Some(&[3, 2, 1][..]));
}

#[test]
fn full_pipeline_writes_predictions_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut training = String::new();
    for (i, (label, body)) in [
        ("spam", "win money now"),
        ("spam", "free money offer"),
        ("ham", "meeting notes attached"),
        ("ham", "lunch meeting tomorrow"),
    ]
    .iter()
    .enumerate()
    {
        let doc = write(dir.path(), &format!("train{i}.txt"), body);
        training.push_str(&format!("{doc} {label}\n"));
    }
    let training_path = write(dir.path(), "train.labels", &training);

    let t1 = write(dir.path(), "t1.txt", "Free MONEY!!");
    let t2 = write(dir.path(), "t2.txt", "notes from the meeting");
    let gone = dir.path().join("gone.txt").display().to_string();
    let testing_path = write(dir.path(), "test.list", &format!("{t1}\n\n{gone}\n{t2}\n"));
    let gold_path = write(dir.path(), "test.labels", &format!("{t1} spam\n{t2} ham\n"));

    let normalizer = identity(&["the", "from"]);
    let model = Trainer::new(&normalizer).train(&read_training(&training_path).unwrap());
    let classifier = Classifier::new(&model, &normalizer);
    let predictions = run_test(&classifier, &read_testing(&testing_path).unwrap(), false);

    let out = dir.path().join("predictions.labels");
    write_predictions(&predictions, &out).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), format!("{t1} spam\n{t2} ham\n"));

    let report = evaluate(&predictions, &read_gold(&gold_path).unwrap());
    assert_eq!((report.judged, report.correct), (2, 2));
}

#[test]
fn classification_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = vec![
        TrainingEntry::new(write(dir.path(), "1", "red green"), "warm"),
        TrainingEntry::new(write(dir.path(), "2", "blue green"), "cool"),
    ];
    let normalizer = Normalizer::english(StopWords::empty());
    let first = Trainer::new(&normalizer).train(&manifest);
    let second = Trainer::new(&normalizer).train(&manifest);
    assert_eq!(first, second);

    let doc = write(dir.path(), "q", "green greens blue");
    let classifier = Classifier::new(&first, &normalizer);
    let label = classifier.classify_document(&doc).unwrap();
    assert_eq!(classifier.classify_document(&doc).unwrap(), label);
}
