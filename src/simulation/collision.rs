use crate::config::{MAX_CLUSTER_DISTANCE, MIN_CLUSTER_SIZE};
use crate::simulation::stepper::BirthEvent;

/// A cluster of simultaneous births, read as moving patterns running into each other
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Collision {
    /// Rounded centroid of the cluster
    pub x: usize,
    pub y: usize,
    /// Number of births in the cluster
    pub intensity: usize,
}

/// Cluster births with the default thresholds
pub fn detect_collisions(births: &[BirthEvent]) -> Vec<Collision> {
    detect_collisions_with(births, MIN_CLUSTER_SIZE, MAX_CLUSTER_DISTANCE)
}

/// Greedy single-pass clustering in input order.
///
/// Each unassigned birth seeds a cluster and absorbs the later unassigned births
/// within `max_distance` of the seed itself. Membership is not transitive.
pub fn detect_collisions_with(
    births: &[BirthEvent],
    min_cluster_size: usize,
    max_distance: f64,
) -> Vec<Collision> {
    if births.len() < min_cluster_size {
        return Vec::new();
    }

    let mut collisions = Vec::new();
    let mut assigned = vec![false; births.len()];

    for (i, seed) in births.iter().enumerate() {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;

        let mut members = vec![*seed];
        for (j, other) in births.iter().enumerate().skip(i + 1) {
            if assigned[j] {
                continue;
            }
            if distance(seed, other) <= max_distance {
                members.push(*other);
                assigned[j] = true;
            }
        }

        if members.len() >= min_cluster_size {
            collisions.push(centroid(&members));
        }
    }

    if !collisions.is_empty() {
        log::trace!("{} collisions from {} births", collisions.len(), births.len());
    }

    collisions
}

fn distance(a: &BirthEvent, b: &BirthEvent) -> f64 {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    (dx * dx + dy * dy).sqrt()
}

fn centroid(members: &[BirthEvent]) -> Collision {
    let count = members.len() as f64;
    let sum_x: f64 = members.iter().map(|b| b.x as f64).sum();
    let sum_y: f64 = members.iter().map(|b| b.y as f64).sum();

    // Coordinates are non-negative, so round() matches round-half-up
    Collision {
        x: (sum_x / count).round() as usize,
        y: (sum_y / count).round() as usize,
        intensity: members.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn births(coords: &[(usize, usize)]) -> Vec<BirthEvent> {
        coords.iter().map(|&(x, y)| BirthEvent { x, y }).collect()
    }

    #[test]
    fn test_single_cluster_and_outlier() {
        let found = detect_collisions(&births(&[(0, 0), (1, 0), (2, 0), (50, 50)]));
        assert_eq!(found, vec![Collision { x: 1, y: 0, intensity: 3 }]);
    }

    #[test]
    fn test_too_few_births() {
        assert!(detect_collisions(&births(&[(0, 0), (1, 0)])).is_empty());
        assert!(detect_collisions(&[]).is_empty());
    }

    #[test]
    fn test_distance_is_measured_from_seed() {
        // (8, 0) is within 5 of (4, 0) but not of the seed (0, 0)
        let found = detect_collisions(&births(&[(0, 0), (4, 0), (8, 0)]));
        assert!(found.is_empty());
    }

    #[test]
    fn test_distance_bound_is_inclusive() {
        let found = detect_collisions(&births(&[(0, 0), (3, 4), (0, 5)]));
        assert_eq!(found, vec![Collision { x: 1, y: 3, intensity: 3 }]);
    }

    #[test]
    fn test_centroid_rounds_half_up() {
        let found = detect_collisions(&births(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
        assert_eq!(found, vec![Collision { x: 1, y: 1, intensity: 4 }]);
    }

    #[test]
    fn test_two_clusters_in_input_order() {
        let found = detect_collisions(&births(&[
            (20, 20),
            (0, 0),
            (21, 20),
            (1, 0),
            (22, 20),
            (2, 0),
        ]));
        assert_eq!(
            found,
            vec![
                Collision { x: 21, y: 20, intensity: 3 },
                Collision { x: 1, y: 0, intensity: 3 },
            ]
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let input = births(&[(0, 0), (2, 0)]);
        assert!(detect_collisions_with(&input, 2, 1.0).is_empty());
        assert_eq!(
            detect_collisions_with(&input, 2, 2.0),
            vec![Collision { x: 1, y: 0, intensity: 2 }]
        );
    }
}
