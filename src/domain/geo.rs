//! Great-circle distance and nearest-neighbor ranking.
//!
//! Distances use the spherical law of cosines in nautical miles (one minute of
//! arc = one nautical mile), matching the ranking the map front-end displays.

use crate::domain::sighting::NearestSighting;
use sqlx::FromRow;
use std::cmp::Ordering;

/// One de-duplicated coordinate group (min-id representative) as read from the
/// store.
#[derive(Debug, Clone, FromRow)]
pub struct CoordinateGroup {
    pub sighting_id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

/// Great-circle distance between two coordinates in nautical miles, rounded to
/// 2 decimals.
///
/// The acos argument is clamped to [-1, 1]: for identical or antipodal points
/// the intermediate cosine can overshoot the domain by a few ulps, which must
/// not turn into NaN.
pub fn distance_nm(ref_lat: f64, ref_lon: f64, lat: f64, lon: f64) -> f64 {
    let phi1 = ref_lat.to_radians();
    let phi2 = lat.to_radians();
    let delta_lambda = (ref_lon - lon).to_radians();

    let cos_central =
        phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();
    let central_angle = cos_central.clamp(-1.0, 1.0).acos();

    round2(central_angle.to_degrees() * 60.0)
}

/// Annotates every coordinate group with its distance from the reference
/// point, sorts ascending (ties broken by ascending sighting id so results are
/// deterministic), and truncates to `limit`.
pub fn rank_by_distance(
    groups: Vec<CoordinateGroup>,
    ref_lat: f64,
    ref_lon: f64,
    limit: usize,
) -> Vec<NearestSighting> {
    let mut ranked: Vec<NearestSighting> = groups
        .into_iter()
        .map(|group| NearestSighting {
            distance: distance_nm(ref_lat, ref_lon, group.latitude, group.longitude),
            sighting_id: group.sighting_id,
            latitude: group.latitude,
            longitude: group.longitude,
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then(a.sighting_id.cmp(&b.sighting_id))
    });
    ranked.truncate(limit);
    ranked
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: i32, lat: f64, lon: f64) -> CoordinateGroup {
        CoordinateGroup {
            sighting_id: id,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_nm(27.0, -80.0, 27.0, -80.0), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_sixty_nautical_miles() {
        let d = distance_nm(0.0, 0.0, 1.0, 0.0);
        assert!((d - 60.0).abs() < 0.01, "got {d}");
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let d = distance_nm(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        // Half the circumference: 180 degrees of arc.
        assert_eq!(d, 10800.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = distance_nm(27.0, -80.0, 25.76, -80.19);
        let ba = distance_nm(25.76, -80.19, 27.0, -80.0);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn distance_is_rounded_to_two_decimals() {
        let d = distance_nm(26.7153, -80.0534, 26.9006, -80.0812);
        assert_eq!(d, (d * 100.0).round() / 100.0);
    }

    #[test]
    fn ranking_is_ascending_and_truncated() {
        let groups = vec![
            group(1, 28.0, -80.0),
            group(2, 27.0, -80.0),
            group(3, 27.1, -80.0),
            group(4, 30.0, -80.0),
        ];
        let ranked = rank_by_distance(groups, 27.0, -80.0, 3);
        assert_eq!(ranked.len(), 3);
        let ids: Vec<i32> = ranked.iter().map(|s| s.sighting_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn reference_point_on_a_sighting_ranks_first_with_zero_distance() {
        let groups = vec![group(9, 26.0, -81.0), group(5, 27.0, -80.0)];
        let ranked = rank_by_distance(groups, 27.0, -80.0, 5);
        assert_eq!(ranked[0].sighting_id, 5);
        assert_eq!(ranked[0].distance, 0.0);
    }

    #[test]
    fn equidistant_groups_tie_break_on_ascending_id() {
        // Mirror points east and west of the reference are equidistant.
        let groups = vec![group(8, 27.0, -79.0), group(2, 27.0, -81.0)];
        let ranked = rank_by_distance(groups, 27.0, -80.0, 5);
        assert_eq!(ranked[0].distance, ranked[1].distance);
        assert_eq!(ranked[0].sighting_id, 2);
        assert_eq!(ranked[1].sighting_id, 8);
    }

    #[test]
    fn empty_input_ranks_to_empty_output() {
        assert!(rank_by_distance(Vec::new(), 27.0, -80.0, 10).is_empty());
    }
}
