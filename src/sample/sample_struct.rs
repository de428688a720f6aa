use super::feature_struct::Feature;


/// Struct `Sample` holds a batch sample of categorical data.
/// The attribute values are stored column-wise as [`Feature`]s;
/// the target is a vector of class labels,
/// one per example.
/// A `Sample` is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<i64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from row-major attribute values
    /// and the corresponding target labels.
    /// Features are named `x0, x1, ...` in column order.
    ///
    /// This method panics if the rows have unequal lengths
    /// or `rows` and `target` have different lengths.
    pub fn from_rows(rows: Vec<Vec<i64>>, target: Vec<i64>) -> Self {
        let n_sample = rows.len();
        assert_eq!(
            n_sample,
            target.len(),
            "The number of rows is not equal to the number of labels",
        );

        let n_feature = rows.first().map(Vec::len).unwrap_or(0);
        assert!(
            rows.iter().all(|row| row.len() == n_feature),
            "All rows must have the same number of attributes",
        );

        let features = (0..n_feature).map(|j| {
                let column = rows.iter()
                    .map(|row| row[j])
                    .collect::<Vec<_>>();
                Feature::from_values(format!("x{j}"), column)
            })
            .collect::<Vec<_>>();

        Self { features, target, n_sample, n_feature, }
    }


    /// Construct a `Sample` directly from its columns.
    pub(crate) fn from_columns(features: Vec<Feature>, target: Vec<i64>)
        -> Self
    {
        let n_sample = target.len();
        let n_feature = features.len();
        Self { features, target, n_sample, n_feature, }
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature (column) of the given attribute index.
    pub fn feature(&self, attribute: usize) -> &Feature {
        &self.features[attribute]
    }


    /// Returns a slice over the target labels.
    pub fn target(&self) -> &[i64] {
        &self.target[..]
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<i64>, i64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<_>>();
        let y = self.target[idx];

        (x, y)
    }
}
