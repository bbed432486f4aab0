use crate::core::classifier::Model;
use crate::models::{Importance, ImportanceEntry, FEATURE_COUNT, FEATURE_NAMES};

/// Rank features by absolute coefficient, largest first
///
/// Ties keep feature order.
pub fn rank_coefficients(coefficients: &[f64; FEATURE_COUNT]) -> Vec<ImportanceEntry> {
    let max = coefficients.iter().fold(0.0f64, |acc, c| acc.max(c.abs()));

    let mut ranking: Vec<ImportanceEntry> = FEATURE_NAMES
        .iter()
        .zip(coefficients)
        .map(|(name, coefficient)| {
            let magnitude = coefficient.abs();
            ImportanceEntry {
                feature: name.to_string(),
                magnitude,
                relative: if max > 0.0 { magnitude / max } else { 0.0 },
            }
        })
        .collect();

    ranking.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    ranking
}

/// Importance ranking for a loaded model
///
/// Models without coefficients report `Unavailable`; that is an expected
/// state, not an error.
pub fn rank_importance(model: &Model) -> Importance {
    match model.coefficients() {
        Some(coefficients) => Importance::Available {
            ranking: rank_coefficients(coefficients),
        },
        None => Importance::Unavailable {
            reason: format!(
                "feature importance is not available for the {} kernel",
                model.kernel_name()
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::{Kernel, LinearModel, ModelArtifact};

    #[test]
    fn test_ranking_sorted_by_magnitude() {
        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients[1] = -2.0; // sex
        coefficients[12] = 1.0; // thal
        coefficients[0] = 0.5; // age

        let ranking = rank_coefficients(&coefficients);

        assert_eq!(ranking.len(), FEATURE_COUNT);
        assert_eq!(ranking[0].feature, "sex");
        assert_eq!(ranking[0].magnitude, 2.0);
        assert_eq!(ranking[0].relative, 1.0);
        assert_eq!(ranking[1].feature, "thal");
        assert_eq!(ranking[1].relative, 0.5);
        assert_eq!(ranking[2].feature, "age");
        assert!(ranking.windows(2).all(|w| w[0].magnitude >= w[1].magnitude));
    }

    #[test]
    fn test_ties_keep_feature_order() {
        let ranking = rank_coefficients(&[1.0; FEATURE_COUNT]);
        let names: Vec<&str> = ranking.iter().map(|e| e.feature.as_str()).collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
    }

    #[test]
    fn test_all_zero_coefficients() {
        let ranking = rank_coefficients(&[0.0; FEATURE_COUNT]);
        assert!(ranking.iter().all(|e| e.relative == 0.0));
    }

    #[test]
    fn test_linear_model_available() {
        let model = Model::Linear(LinearModel::new([0.3; FEATURE_COUNT], 0.0, [0, 1]));
        assert!(rank_importance(&model).is_available());
    }

    #[test]
    fn test_kernel_model_unavailable() {
        let artifact = ModelArtifact::Kernel {
            kernel: Kernel::Rbf { gamma: 0.1 },
            support_vectors: vec![vec![0.0; FEATURE_COUNT]],
            dual_coefficients: vec![1.0],
            intercept: 0.0,
            classes: [0, 1],
        };
        let model = Model::try_from(artifact).unwrap();

        match rank_importance(&model) {
            Importance::Unavailable { reason } => assert!(reason.contains("rbf")),
            other => panic!("expected unavailable, got {:?}", other),
        }
    }
}
