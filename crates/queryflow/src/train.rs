// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline trainer for the classifier artifact.
//!
//! Fits a multinomial naive-Bayes model with add-one smoothing over a small
//! hard-coded labelled dataset and writes the versioned artifact consumed by
//! the model classifier. The pipeline itself never sees this code, only the
//! artifact it produces.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use queryflow_classifier::artifact::{ARTIFACT_VERSION, ClassifierArtifact, tokenize};
use queryflow_core::QueryflowError;

/// Labelled training queries. Labels must be valid category labels.
fn training_data() -> Vec<(&'static str, &'static str)> {
    vec![
        // technical
        ("How do I implement a binary search tree in Python?", "technical"),
        ("Please explain the steps to build a Flask application.", "technical"),
        ("How do I develop a REST API in Django?", "technical"),
        ("Can you detail the process of writing unit tests in Java?", "technical"),
        ("Steps to implement concurrency in Go?", "technical"),
        // troubleshooting
        ("I'm getting an error when installing Node.js", "troubleshooting"),
        ("How do I troubleshoot a 404 not found issue?", "troubleshooting"),
        ("My program crashes with a segmentation fault, how do I fix it?", "troubleshooting"),
        ("Why am I seeing a 'connection refused' error on my server?", "troubleshooting"),
        ("Printer is not working, any troubleshooting steps?", "troubleshooting"),
        // general
        ("What is the capital of France?", "general"),
        ("Who is the President of the United States?", "general"),
        ("When did World War II end?", "general"),
        ("Where is the tallest building in the world?", "general"),
        ("Could you define photosynthesis?", "general"),
        // unknown / misc
        ("Bananas on Mars - is it feasible?", "unknown"),
        ("Explain the meaning of the color purple in dreams?", "unknown"),
        ("Random query about cats and dancing cheese.", "unknown"),
        ("Hello, are you an AI or a human?", "unknown"),
        ("What's your favorite movie?", "unknown"),
    ]
}

/// Fit a naive-Bayes artifact on the built-in dataset.
pub fn train_artifact() -> ClassifierArtifact {
    let data = training_data();

    // Labels in first-seen order; ties at prediction time resolve to the
    // earliest label, so declaration order matters.
    let mut labels: Vec<String> = Vec::new();
    let mut label_index: HashMap<&str, usize> = HashMap::new();
    for (_, label) in &data {
        if !label_index.contains_key(label) {
            label_index.insert(label, labels.len());
            labels.push((*label).to_string());
        }
    }

    let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
    for (query, _) in &data {
        for token in tokenize(query) {
            let next = vocabulary.len();
            vocabulary.entry(token.to_string()).or_insert(next);
        }
    }
    let vocab_size = vocabulary.len();

    let mut doc_counts = vec![0usize; labels.len()];
    let mut token_counts = vec![vec![0usize; vocab_size]; labels.len()];
    let mut total_tokens = vec![0usize; labels.len()];

    for (query, label) in &data {
        let li = label_index[label];
        doc_counts[li] += 1;
        for token in tokenize(query) {
            token_counts[li][vocabulary[token]] += 1;
            total_tokens[li] += 1;
        }
    }

    let total_docs = data.len() as f64;
    let log_priors = doc_counts
        .iter()
        .map(|&c| (c as f64 / total_docs).ln())
        .collect();

    // Add-one smoothing, with one extra slot reserved for OOV tokens.
    let mut log_likelihoods = Vec::with_capacity(labels.len());
    let mut oov_log_likelihoods = Vec::with_capacity(labels.len());
    for li in 0..labels.len() {
        let denom = (total_tokens[li] + vocab_size + 1) as f64;
        log_likelihoods.push(
            token_counts[li]
                .iter()
                .map(|&c| ((c + 1) as f64 / denom).ln())
                .collect::<Vec<f64>>(),
        );
        oov_log_likelihoods.push((1.0 / denom).ln());
    }

    ClassifierArtifact {
        version: ARTIFACT_VERSION,
        vocabulary,
        labels,
        log_priors,
        log_likelihoods,
        oov_log_likelihoods,
    }
}

/// Train and write the artifact, printing a short report.
pub fn run_train(output: &Path) -> Result<(), QueryflowError> {
    let artifact = train_artifact();
    println!(
        "trained naive-Bayes classifier: {} labels, {} vocabulary tokens",
        artifact.labels.len(),
        artifact.vocabulary.len()
    );

    let samples = [
        "How do I fix an error when installing Docker?",
        "What is the population of Canada?",
        "Are unicorns real or imaginary?",
        "How to code a tictactoe game?",
    ];
    for query in samples {
        println!("  {:<50} -> {}", query, artifact.predict(query));
    }

    artifact.save(output)?;
    println!("saved classifier artifact to {}", output.display());
    Ok(())
}
