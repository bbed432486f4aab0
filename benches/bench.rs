// Criterion benchmarks for Cardio Predict

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cardio_predict::core::{
    classifier::{Kernel, LinearModel, Model, ModelArtifact},
    encoder::encode,
    importance::rank_importance,
    inference::InferenceService,
};
use cardio_predict::models::{PatientRecord, FEATURE_COUNT};

fn create_record() -> PatientRecord {
    PatientRecord {
        age: 55,
        sex: "Male".to_string(),
        chest_pain_type: "Asymptomatic".to_string(),
        resting_bp: 140,
        cholesterol: 250,
        fasting_blood_sugar: "No".to_string(),
        resting_ecg: "Normal".to_string(),
        max_heart_rate: 150,
        exercise_angina: "No".to_string(),
        oldpeak: 1.5,
        slope: "Flat".to_string(),
        major_vessels: 1,
        thalassemia: "Fixed Defect".to_string(),
    }
}

fn create_rbf_model(support_vectors: usize) -> Model {
    let artifact = ModelArtifact::Kernel {
        kernel: Kernel::Rbf { gamma: 0.01 },
        support_vectors: (0..support_vectors)
            .map(|i| vec![(i % 7) as f64; FEATURE_COUNT])
            .collect(),
        dual_coefficients: (0..support_vectors)
            .map(|i| if i % 2 == 0 { 0.5 } else { -0.5 })
            .collect(),
        intercept: 0.1,
        classes: [0, 1],
    };
    Model::try_from(artifact).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let record = create_record();
    c.bench_function("encode_patient_record", |b| {
        b.iter(|| encode(black_box(&record)))
    });
}

fn bench_linear_assess(c: &mut Criterion) {
    let service = InferenceService::new(Model::Linear(LinearModel::new(
        [0.1; FEATURE_COUNT],
        -1.0,
        [0, 1],
    )));
    let record = create_record();

    c.bench_function("linear_assess_with_importance", |b| {
        b.iter(|| service.assess(black_box(&record), true))
    });
}

fn bench_rbf_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbf_predict");
    let features = encode(&create_record()).unwrap();

    for size in [10, 100, 1000].iter() {
        let service = InferenceService::new(create_rbf_model(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| service.predict(black_box(&features)))
        });
    }

    group.finish();
}

fn bench_importance(c: &mut Criterion) {
    let model = Model::Linear(LinearModel::new([0.3; FEATURE_COUNT], 0.0, [0, 1]));
    c.bench_function("rank_importance", |b| {
        b.iter(|| rank_importance(black_box(&model)))
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_linear_assess,
    bench_rbf_predict,
    bench_importance
);
criterion_main!(benches);
