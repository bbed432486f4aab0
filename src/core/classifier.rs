use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::{FeatureVector, FEATURE_COUNT};

/// Errors found while turning an artifact into a usable model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{what} has {actual} values, expected {expected}")]
    WrongFeatureCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{support_vectors} support vectors but {dual_coefficients} dual coefficients")]
    SupportVectorMismatch {
        support_vectors: usize,
        dual_coefficients: usize,
    },

    #[error("kernel model has no support vectors")]
    NoSupportVectors,

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("invalid kernel parameter: {0}")]
    InvalidKernel(String),
}

/// Kernel function of a support vector classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Kernel {
    Linear,
    Rbf {
        gamma: f64,
    },
    Poly {
        degree: u32,
        gamma: f64,
        #[serde(default)]
        coef0: f64,
    },
    Sigmoid {
        gamma: f64,
        #[serde(default)]
        coef0: f64,
    },
}

impl Kernel {
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Linear => "linear",
            Kernel::Rbf { .. } => "rbf",
            Kernel::Poly { .. } => "poly",
            Kernel::Sigmoid { .. } => "sigmoid",
        }
    }

    #[inline]
    fn apply(&self, a: &[f64], b: &[f64]) -> f64 {
        match *self {
            Kernel::Linear => dot(a, b),
            Kernel::Rbf { gamma } => {
                let sq_dist: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
                (-gamma * sq_dist).exp()
            }
            Kernel::Poly { degree, gamma, coef0 } => {
                // check() rejects degrees that do not fit in i32
                let exponent = i32::try_from(degree).unwrap_or(i32::MAX);
                (gamma * dot(a, b) + coef0).powi(exponent)
            }
            Kernel::Sigmoid { gamma, coef0 } => (gamma * dot(a, b) + coef0).tanh(),
        }
    }

    fn check(&self) -> Result<(), ModelError> {
        let gamma = match *self {
            Kernel::Linear => return Ok(()),
            Kernel::Rbf { gamma } => gamma,
            Kernel::Poly { degree, gamma, coef0 } => {
                if degree == 0 {
                    return Err(ModelError::InvalidKernel("poly degree must be at least 1".to_string()));
                }
                if i32::try_from(degree).is_err() {
                    return Err(ModelError::InvalidKernel(format!(
                        "poly degree {} exceeds {}",
                        degree,
                        i32::MAX
                    )));
                }
                if !coef0.is_finite() {
                    return Err(ModelError::NonFinite("coef0"));
                }
                gamma
            }
            Kernel::Sigmoid { gamma, coef0 } => {
                if !coef0.is_finite() {
                    return Err(ModelError::NonFinite("coef0"));
                }
                gamma
            }
        };

        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(ModelError::InvalidKernel(format!(
                "{} gamma must be positive, got {}",
                self.name(),
                gamma
            )));
        }
        Ok(())
    }
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn default_classes() -> [i64; 2] {
    [0, 1]
}

/// Serialized classifier as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelArtifact {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_classes")]
        classes: [i64; 2],
    },
    Kernel {
        kernel: Kernel,
        support_vectors: Vec<Vec<f64>>,
        dual_coefficients: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_classes")]
        classes: [i64; 2],
    },
}

/// Classifier capability, fixed when the model is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
    Kernel,
}

/// Linear decision function `w·x + b`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    classes: [i64; 2],
}

impl LinearModel {
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64, classes: [i64; 2]) -> Self {
        Self { coefficients, intercept, classes }
    }

    pub fn coefficients(&self) -> &[f64; FEATURE_COUNT] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    fn decision_function(&self, x: &[f64]) -> f64 {
        dot(&self.coefficients, x) + self.intercept
    }
}

/// Kernel decision function `Σ αᵢ K(svᵢ, x) + b`
#[derive(Debug, Clone, PartialEq)]
pub struct KernelModel {
    kernel: Kernel,
    support_vectors: Vec<[f64; FEATURE_COUNT]>,
    dual_coefficients: Vec<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl KernelModel {
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    pub fn support_vector_count(&self) -> usize {
        self.support_vectors.len()
    }

    fn decision_function(&self, x: &[f64]) -> f64 {
        self.support_vectors
            .iter()
            .zip(&self.dual_coefficients)
            .map(|(sv, alpha)| alpha * self.kernel.apply(sv, x))
            .sum::<f64>()
            + self.intercept
    }

    /// Collapse a linear-kernel model into its primal weights
    fn primal_weights(&self) -> [f64; FEATURE_COUNT] {
        let mut weights = [0.0; FEATURE_COUNT];
        for (sv, alpha) in self.support_vectors.iter().zip(&self.dual_coefficients) {
            for (w, x) in weights.iter_mut().zip(sv) {
                *w += alpha * x;
            }
        }
        weights
    }
}

/// A loaded, immutable binary classifier
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    /// Exposes coefficients
    Linear(LinearModel),
    /// Prediction only
    Kernel(KernelModel),
}

impl Model {
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Linear(_) => ModelKind::Linear,
            Model::Kernel(_) => ModelKind::Kernel,
        }
    }

    pub fn kernel_name(&self) -> &'static str {
        match self {
            Model::Linear(_) => Kernel::Linear.name(),
            Model::Kernel(m) => m.kernel.name(),
        }
    }

    /// Signed distance from the decision boundary
    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        match self {
            Model::Linear(m) => m.decision_function(features.as_slice()),
            Model::Kernel(m) => m.decision_function(features.as_slice()),
        }
    }

    /// Predicted class label: `classes[1]` on the positive side, `classes[0]` otherwise
    pub fn predict(&self, features: &FeatureVector) -> i64 {
        let classes = match self {
            Model::Linear(m) => m.classes,
            Model::Kernel(m) => m.classes,
        };
        if self.decision_function(features) > 0.0 {
            classes[1]
        } else {
            classes[0]
        }
    }

    pub fn coefficients(&self) -> Option<&[f64; FEATURE_COUNT]> {
        match self {
            Model::Linear(m) => Some(m.coefficients()),
            Model::Kernel(_) => None,
        }
    }
}

fn to_features(what: &'static str, values: &[f64]) -> Result<[f64; FEATURE_COUNT], ModelError> {
    let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| ModelError::WrongFeatureCount {
        what,
        expected: FEATURE_COUNT,
        actual: values.len(),
    })?;
    if array.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::NonFinite(what));
    }
    Ok(array)
}

fn check_finite(what: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::NonFinite(what))
    }
}

impl TryFrom<ModelArtifact> for Model {
    type Error = ModelError;

    fn try_from(artifact: ModelArtifact) -> Result<Self, Self::Error> {
        match artifact {
            ModelArtifact::Linear { coefficients, intercept, classes } => {
                let coefficients = to_features("coefficients", &coefficients)?;
                check_finite("intercept", intercept)?;
                Ok(Model::Linear(LinearModel::new(coefficients, intercept, classes)))
            }
            ModelArtifact::Kernel {
                kernel,
                support_vectors,
                dual_coefficients,
                intercept,
                classes,
            } => {
                kernel.check()?;
                check_finite("intercept", intercept)?;

                if support_vectors.is_empty() {
                    return Err(ModelError::NoSupportVectors);
                }
                if support_vectors.len() != dual_coefficients.len() {
                    return Err(ModelError::SupportVectorMismatch {
                        support_vectors: support_vectors.len(),
                        dual_coefficients: dual_coefficients.len(),
                    });
                }
                if dual_coefficients.iter().any(|a| !a.is_finite()) {
                    return Err(ModelError::NonFinite("dual_coefficients"));
                }

                let support_vectors = support_vectors
                    .iter()
                    .map(|sv| to_features("support vector", sv))
                    .collect::<Result<Vec<_>, _>>()?;

                let model = KernelModel {
                    kernel,
                    support_vectors,
                    dual_coefficients,
                    intercept,
                    classes,
                };

                // A linear kernel has exact primal weights, so it keeps its coefficients
                if kernel == Kernel::Linear {
                    return Ok(Model::Linear(LinearModel::new(
                        model.primal_weights(),
                        intercept,
                        classes,
                    )));
                }

                Ok(Model::Kernel(model))
            }
        }
    }
}
