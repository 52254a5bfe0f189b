use mnemo_classify::{CategoryModel, FamilyWeights, TagEnsemble};
use mnemo_core::config::{ClassifierConfig, FeatureConfig};
use mnemo_core::{Category, Paper};
use mnemo_features::FeatureExtractor;
use proptest::prelude::*;

fn papers() -> Vec<Paper> {
    vec![
        Paper::new("a", "Trauma and testimony").with_abstract("Survivor testimony and trauma."),
        Paper::new("b", "Traumatic pasts").with_abstract("Trauma in post-war testimony."),
        Paper::new("c", "Museum exhibitions").with_abstract("Curating heritage in museums."),
        Paper::new("d", "Heritage sites").with_abstract("World heritage and tourism."),
    ]
}

#[test]
fn ensemble_ranks_related_text_above_unrelated() {
    let papers = papers();
    let extractor = FeatureExtractor::fit(&papers, &FeatureConfig::default());
    let xs: Vec<_> = papers.iter().map(|p| extractor.extract(p)).collect();
    let ys = [true, true, false, false];
    let ensemble = TagEnsemble::fit(&xs, &ys, &ClassifierConfig::default(), 42);

    let positive = extractor.extract(&Paper::new("p", "trauma testimony"));
    let negative = extractor.extract(&Paper::new("n", "heritage museums"));
    let w = FamilyWeights::UNIFORM;
    assert!(
        ensemble.predict(&positive).aggregate(&w) > ensemble.predict(&negative).aggregate(&w)
    );
    assert!(ensemble.predict(&positive).aggregate(&w) > 0.5);
}

#[test]
fn category_model_is_deterministic() {
    let papers = papers();
    let extractor = FeatureExtractor::fit(&papers, &FeatureConfig::default());
    let xs: Vec<_> = papers.iter().map(|p| extractor.extract(p)).collect();
    let labels = [
        vec!["CTTrauma".to_string()],
        vec!["CTTrauma".to_string()],
        vec!["CTHeritage".to_string()],
        vec!["CTHeritage".to_string()],
    ];
    let refs: Vec<&[String]> = labels.iter().map(Vec::as_slice).collect();
    let fit = || {
        CategoryModel::fit(
            Category::Concept,
            &xs,
            &refs,
            FamilyWeights::UNIFORM,
            &ClassifierConfig::default(),
            extractor.dimension(),
        )
    };
    assert_eq!(fit(), fit());
}

#[test]
fn fitted_models_survive_json() {
    let papers = papers();
    let extractor = FeatureExtractor::fit(&papers, &FeatureConfig::default());
    let xs: Vec<_> = papers.iter().map(|p| extractor.extract(p)).collect();
    let labels = [
        vec!["CTTrauma".to_string()],
        vec!["CTTrauma".to_string()],
        vec![],
        vec![],
    ];
    let refs: Vec<&[String]> = labels.iter().map(Vec::as_slice).collect();
    let model = CategoryModel::fit(
        Category::Concept,
        &xs,
        &refs,
        FamilyWeights::UNIFORM,
        &ClassifierConfig::default(),
        extractor.dimension(),
    );
    let back: CategoryModel =
        serde_json::from_str(&serde_json::to_string(&model).unwrap()).unwrap();
    assert_eq!(back.predict(&xs[0]), model.predict(&xs[0]));

    let constant = serde_json::to_value(TagEnsemble::Constant { probability: 1.0 }).unwrap();
    assert_eq!(constant["kind"], "constant");
}

proptest! {
    #[test]
    fn aggregate_stays_in_unit_interval(
        f in 0.0f64..=1.0, b in 0.0f64..=1.0, l in 0.0f64..=1.0, pick in 0usize..4
    ) {
        let p = mnemo_classify::FamilyProbabilities { forest: f, bayes: b, linear: l };
        let agg = p.aggregate(&FamilyWeights::candidates()[pick]);
        prop_assert!((0.0..=1.0).contains(&agg));
        prop_assert!(agg >= f.min(b).min(l) - 1e-12 && agg <= f.max(b).max(l) + 1e-12);
        prop_assert!(p.spread() <= 0.5 + 1e-12);
    }
}
