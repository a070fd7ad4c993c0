//! Property-based tests for embedding and ranking invariants
//!
//! 1. Determinism: same input → bit-identical output
//! 2. Normalization: ||embed(text)|| = 1.0
//! 3. Cosine distance symmetry and bounds: distance ∈ [0, 2]
//! 4. Search results are ordered, limited and year-filtered

use letter_rag::domain::models::{
    cosine_distance, l2_norm, parse_vector_literal, to_vector_literal, DocumentChunk, DocumentMetadata,
};
use letter_rag::infrastructure::vector::DeterministicEmbedder;
use proptest::prelude::*;

mod common;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?;:'\"-]{0,400}").expect("Valid regex")
}

fn passage_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            prop::string::string_regex("[a-z ]{1,80}").expect("Valid regex"),
            prop::sample::select(vec!["2021".to_string(), "2022".to_string(), "2023".to_string()]),
        ),
        0..20,
    )
}

proptest! {
    #[test]
    fn proptest_embedding_determinism(text in text_strategy()) {
        let embedder = DeterministicEmbedder::new(128);
        prop_assert_eq!(embedder.generate(&text), embedder.generate(&text));
    }

    #[test]
    fn proptest_l2_normalization(text in "\\PC{0,200}", dims in 1usize..512) {
        let embedding = DeterministicEmbedder::new(dims).generate(&text);
        prop_assert_eq!(embedding.len(), dims);
        prop_assert!((l2_norm(&embedding) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn proptest_cosine_distance_symmetric_and_bounded(a in text_strategy(), b in text_strategy()) {
        let embedder = DeterministicEmbedder::new(64);
        let (ea, eb) = (embedder.generate(&a), embedder.generate(&b));

        let ab = cosine_distance(&ea, &eb).expect("unit vectors are comparable");
        let ba = cosine_distance(&eb, &ea).expect("unit vectors are comparable");
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((-1e-12..=2.0 + 1e-12).contains(&ab));
        prop_assert!(cosine_distance(&ea, &ea).expect("comparable").abs() < 1e-9);
    }

    #[test]
    fn proptest_vector_literal_preserves_values(text in text_strategy()) {
        let embedding = DeterministicEmbedder::new(32).generate(&text);
        prop_assert_eq!(parse_vector_literal(&to_vector_literal(&embedding)).unwrap(), embedding);
    }

    #[test]
    fn proptest_search_ordered_limited_filtered(
        passages in passage_strategy(),
        query in "[a-z ]{1,40}",
        limit in 0usize..8,
        year in prop::option::of(prop::sample::select(vec!["2021".to_string(), "2022".to_string()])),
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let results = runtime.block_on(async {
            let retrieval = common::memory_retrieval();
            for (index, (content, passage_year)) in passages.iter().enumerate() {
                let chunk = DocumentChunk::new(
                    content.clone(),
                    DocumentMetadata::new(format!("letter-{passage_year}.txt"), passage_year.clone(), index),
                );
                retrieval.insert_document(&chunk).await.unwrap();
            }
            retrieval.search_similar(&query, Some(limit), year.as_deref()).await
        });

        let eligible = passages
            .iter()
            .filter(|(_, y)| year.as_ref().is_none_or(|wanted| wanted == y))
            .count();
        prop_assert_eq!(results.len(), eligible.min(limit));
        for pair in results.windows(2) {
            prop_assert!(pair[0].similarity_score >= pair[1].similarity_score);
        }
        if let Some(wanted) = &year {
            prop_assert!(results.iter().all(|r| &r.metadata.year == wanted));
        }
    }
}
