use rand::{seq::SliceRandom, Rng};

use crate::{
    models::{ContentId, RecommendationEntry, RecommendationList, SourceKind},
    services::ingestion::IngestedData,
};

/// Sample articles served when the real exports cannot be ingested
pub const SAMPLE_CATALOGUE: [(&str, [&str; 5]); 3] = [
    (
        "-9.19255E+18",
        [
            "Elastic Stack 5.0.0 Released",
            "Microsoft lança Teams, nova plataforma de chat concorrente do Slack",
            "Hello, a nova rede social do Orkut, está liberada no Brasil",
            "A Googler analyzed a billion files to settle the programming dispute",
            "You SHOULD Learn Vanilla JavaScript Before JS Frameworks",
        ],
    ),
    (
        "-9.18966E+18",
        [
            "Clean Coder Blog",
            "Pull request first - Practical Blend",
            "Beyond Progressive Web Apps Part 1",
            "Eat, sleep, code, repeat is such bullshit",
            "Most Interesting APIs in 2016: Cognitive Computing",
        ],
    ),
    (
        "-9.17614E+18",
        [
            "Top 10 Insurtech Trends for 2017",
            "Governo brasileiro cria manual para contratação de cloud",
            "The barbell effect of machine learning",
            "Microsoft's Open Source Love Affair Reaches New Heights",
            "Facebook Workplace officially launches on the web and iOS",
        ],
    ),
];

fn ranked<'a, I>(titles: I, kind: SourceKind) -> RecommendationList
where
    I: IntoIterator<Item = &'a str>,
{
    titles
        .into_iter()
        .enumerate()
        .filter_map(|(index, title)| {
            kind.score_for(index + 1)
                .map(|score| RecommendationEntry::new(title, score))
        })
        .collect()
}

/// Builds the synthetic dataset
///
/// Collaborative lists keep the catalogue order. Content-based lists hold the same titles
/// shuffled with `rng` and are scored by their shuffled position.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> IngestedData {
    let mut data = IngestedData::default();

    for (id, titles) in SAMPLE_CATALOGUE.iter() {
        let content_id = ContentId::from(*id);

        let mut shuffled = *titles;
        shuffled.shuffle(rng);

        data.collaborative.insert(
            content_id.clone(),
            ranked(titles.iter().copied(), SourceKind::Collaborative),
        );
        data.content_based
            .insert(content_id.clone(), ranked(shuffled, SourceKind::ContentBased));
        data.registry.extend([content_id]);
    }

    tracing::info!(
        content_ids = data.registry.len(),
        "Generated fallback recommendations"
    );

    data
}

/// Same as [`generate`] with an unseeded thread-local generator
pub fn generate_unseeded() -> IngestedData {
    generate(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::BTreeSet;

    fn titles(list: &RecommendationList) -> BTreeSet<&str> {
        list.iter().map(|e| e.content_id.as_str()).collect()
    }

    #[test]
    fn test_three_identifiers() {
        let data = generate(&mut StdRng::seed_from_u64(7));

        assert_eq!(data.registry.len(), 3);
        assert_eq!(data.collaborative.len(), 3);
        assert_eq!(data.content_based.len(), 3);
        for (id, _) in SAMPLE_CATALOGUE.iter() {
            assert!(data.registry.contains(id));
        }
    }

    #[test]
    fn test_collaborative_lists_keep_catalogue_order() {
        let data = generate(&mut StdRng::seed_from_u64(7));

        for (id, expected) in SAMPLE_CATALOGUE.iter() {
            let list = &data.collaborative[*id];
            let got: Vec<&str> = list.iter().map(|e| e.content_id.as_str()).collect();
            let scores: Vec<f64> = list.iter().map(|e| e.score).collect();

            assert_eq!(got, expected.to_vec());
            assert_eq!(scores, vec![5.0, 4.8, 4.6, 4.4, 4.2]);
        }
    }

    #[test]
    fn test_content_based_lists_are_permutations() {
        for seed in 0..20 {
            let data = generate(&mut StdRng::seed_from_u64(seed));

            for (id, _) in SAMPLE_CATALOGUE.iter() {
                let collaborative = &data.collaborative[*id];
                let content_based = &data.content_based[*id];
                let scores: Vec<f64> = content_based.iter().map(|e| e.score).collect();

                assert_eq!(content_based.len(), 5);
                assert_eq!(titles(collaborative), titles(content_based));
                assert_eq!(scores, vec![0.95, 0.90, 0.85, 0.80, 0.75]);
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = generate(&mut StdRng::seed_from_u64(42));
        let second = generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(first.content_based, second.content_based);
    }

    #[test]
    fn test_unseeded_generation_shape() {
        let data = generate_unseeded();
        assert_eq!(data.registry.len(), 3);
        assert!(data.content_based.values().all(|list| list.len() == 5));
    }
}
