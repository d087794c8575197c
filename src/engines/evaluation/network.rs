use crate::error::XorGaError;
use crate::types::NUM_WEIGHTS;

/// Standard logistic activation.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Decoded parameters of the 2-2-1 network.
///
/// Gene order is `[w1, w2, w3, w4, w5, w6, b1, b2]`. Both hidden units read
/// the same hidden bias `b1`, so the network has one fewer degree of freedom
/// than a textbook 2-2-1 layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub w: [f64; 6],
    pub b1: f64,
    pub b2: f64,
}

impl Weights {
    pub fn decode(genes: &[f64]) -> Result<Self, XorGaError> {
        if genes.len() != NUM_WEIGHTS {
            return Err(XorGaError::GenomeLength {
                expected: NUM_WEIGHTS,
                actual: genes.len(),
            });
        }

        let mut w = [0.0; 6];
        w.copy_from_slice(&genes[..6]);

        Ok(Self {
            w,
            b1: genes[6],
            b2: genes[7],
        })
    }

    pub fn forward(&self, x1: f64, x2: f64) -> f64 {
        let [w1, w2, w3, w4, w5, w6] = self.w;

        let h1 = sigmoid(w1 * x1 + w3 * x2 + self.b1);
        let h2 = sigmoid(w2 * x1 + w4 * x2 + self.b1);

        sigmoid(h1 * w5 + h2 * w6 + self.b2)
    }
}

/// Run one input pair through the network encoded by `genes`.
pub fn feedforward(x1: f64, x2: f64, genes: &[f64]) -> Result<f64, XorGaError> {
    Ok(Weights::decode(genes)?.forward(x1, x2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_midpoint() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn test_sigmoid_monotonic_and_bounded() {
        let mut last = 0.0;
        for i in -200..=200 {
            let y = sigmoid(i as f64 * 0.1);
            assert!(y > 0.0 && y < 1.0);
            assert!(y > last, "sigmoid must be strictly increasing");
            last = y;
        }
    }

    #[test]
    fn test_decode_rejects_short_genome() {
        let err = Weights::decode(&[0.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            XorGaError::GenomeLength { expected: 8, actual: 7 }
        ));
    }

    #[test]
    fn test_zero_weights_output_half() {
        // Hidden units sit at 0.5 but with w5 = w6 = 0 they do not reach the output
        let y = feedforward(1.0, 0.0, &[0.0; 8]).unwrap();
        assert_eq!(y, 0.5);
    }

    #[test]
    fn test_shared_hidden_bias() {
        let genes = [0.0, 0.0, 0.0, 0.0, 1.0, -1.0, 3.0, 0.0];
        // Both hidden units see the same bias, so their contributions cancel
        let y = feedforward(0.0, 0.0, &genes).unwrap();
        assert!((y - 0.5).abs() < 1e-12);
    }
}
