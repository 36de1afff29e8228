use ndarray::Array2;
use stratified_baseline::config::{ModelConfig, ModelType};
use stratified_baseline::models::factory;
use stratified_baseline::models::BaselineClassifier;

#[test]
fn test_factory_builds_and_predicts() {
    // tiny dataset; features are never looked at
    let x = Array2::from_shape_vec(
        (6, 2),
        vec![
            1.0f32, 0.0, // class 1
            0.0, 1.0, // class -1
            1.0, 0.1, // class 1
            0.0, 0.9, // class -1
            1.1, 0.0, // class 1
            0.0, 1.2, // class -1
        ],
    )
    .expect("failed to create feature matrix");

    let y = vec![1i32, -1, 1, -1, 1, -1];

    let params = ModelConfig {
        seed: Some(42),
        model_type: ModelType::Stratified,
    };

    let mut model = factory::build_model::<i32>(params);
    model.fit(&x, &y).unwrap();

    let preds = model.predict(&x).unwrap();
    assert_eq!(preds.len(), x.nrows());
    assert!(preds.iter().all(|p| *p == 1 || *p == -1));

    let probs = model.predict_proba(&x).unwrap();
    assert_eq!(probs.len(), x.nrows());
    assert_eq!(probs[0], vec![0.5, 0.5]);

    assert!(model.get_params(true).is_empty());
    assert_eq!(model.name(), "stratified_baseline");
}

#[test]
fn test_factory_seed_matches_direct_construction() {
    let y = vec!["a", "b", "b", "c", "c", "c"];
    let x = vec![(); 200];

    let mut boxed = factory::build_model::<&str>(ModelConfig::seeded(11));
    boxed.fit(&y, &y).unwrap();

    let mut direct = BaselineClassifier::with_seed(11);
    direct.fit(&y, &y).unwrap();

    assert_eq!(boxed.predict(&x).unwrap(), direct.predict(&x).unwrap());
}

#[test]
fn test_unseeded_factory_model_is_usable() {
    let mut model = factory::build_model::<u8>(ModelConfig::default());
    assert!(model.predict(&vec![0; 3]).is_err());
    model.fit(&vec![0; 3], &[7, 7, 7]).unwrap();
    assert_eq!(model.predict(&vec![0; 3]).unwrap(), vec![7, 7, 7]);
}
