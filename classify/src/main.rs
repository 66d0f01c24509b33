use std::collections::BTreeMap;
use std::io::{stdout, Write};

use ngram_bayes::Classifier;
use tracing_subscriber::EnvFilter;

const GOOD: &[&str] = &[
    "eu te adoro",
    "eu te amo",
    "eu amo batatas fritas",
    "eu amo bolo",
    "voce é demais",
    "bolo que é demais",
];

const BAD: &[&str] = &[
    "peixe é ruim",
    "eu te odeio",
    "eu quero ver queimar",
    "eu quero é que se exploda",
    "eu acho que isso é muito ruim",
    "odeio ficar parado",
];

const QUERY: &str = "nao achei o filme ruim";

fn build_classifier() -> Result<Classifier, Box<dyn std::error::Error>> {
    let mut classifier = Classifier::new(1)?;
    classifier.train_batch("bom", GOOD);
    classifier.train_batch("ruim", BAD);
    Ok(classifier)
}

fn pick_label(scores: &BTreeMap<String, f64>) -> &'static str {
    let score = |label: &str| scores.get(label).copied().unwrap_or(0.0);
    if score("bom") > score("ruim") {
        "bom"
    } else {
        "ruim"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let classifier = build_classifier()?;
    let scores = classifier.classify(QUERY)?;
    tracing::info!(?scores, "classified {QUERY:?}");

    let mut out = stdout().lock();
    write!(out, "{}", pick_label(&scores))?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_query() {
        let classifier = build_classifier().unwrap();
        let scores = classifier.classify(QUERY).unwrap();
        assert_eq!("ruim", pick_label(&scores));
    }

    #[test]
    fn test_pick_label_tie() {
        let scores = BTreeMap::from([("bom".to_string(), 0.25), ("ruim".to_string(), 0.25)]);
        assert_eq!("ruim", pick_label(&scores));
    }

    #[test]
    fn test_pick_label_bom() {
        let classifier = build_classifier().unwrap();
        let scores = classifier.classify("eu gosto de bolo pra caramba").unwrap();
        assert_eq!("bom", pick_label(&scores));
    }
}
