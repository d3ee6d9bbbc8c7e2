//! # Cluster Models

use core::fmt::Debug;

use crate::text::math::euclidean_distance;
use crate::types::Vector;

/// A trained clustering model.
pub trait ClusterModel: Debug + Send + Sync {
    /// The id of the cluster nearest to `vector`, if any.
    fn nearest(
        &self,
        vector: &[f32],
    ) -> Option<usize>;
}

/// A clustering model defined by its centroids.
///
/// Cluster ids are centroid indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CentroidModel {
    centroids: Vec<Vector>,
}

impl CentroidModel {
    /// Create a model from trained centroids.
    pub fn new(centroids: Vec<Vector>) -> Self {
        Self { centroids }
    }

    /// The centroids.
    pub fn centroids(&self) -> &[Vector] {
        &self.centroids
    }
}

impl ClusterModel for CentroidModel {
    fn nearest(
        &self,
        vector: &[f32],
    ) -> Option<usize> {
        self.centroids
            .iter()
            .map(|c| euclidean_distance(c, vector))
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_centroid() {
        let model = CentroidModel::new(vec![vec![0.0, 0.0], vec![10.0, 10.0], vec![0.0, 10.0]]);
        assert_eq!(model.nearest(&[1.0, 1.0]), Some(0));
        assert_eq!(model.nearest(&[9.0, 8.0]), Some(1));
        assert_eq!(model.nearest(&[-1.0, 12.0]), Some(2));
        assert_eq!(model.centroids().len(), 3);
    }

    #[test]
    fn test_empty_model() {
        assert_eq!(CentroidModel::default().nearest(&[1.0]), None);
    }
}
