use nalgebra::{Point3, Vector3};

pub fn calculate_centroid(coords: &[Point3<f64>]) -> Option<Point3<f64>> {
    if coords.is_empty() {
        return None;
    }
    let sum: Vector3<f64> = coords.iter().map(|p| p.coords).sum();
    Some(Point3::from(sum / coords.len() as f64))
}

/// Root-mean-square distance of the coordinates from their centroid.
pub fn calculate_radius_of_gyration(coords: &[Point3<f64>]) -> Option<f64> {
    let centroid = calculate_centroid(coords)?;
    let n = coords.len() as f64;
    let squared_dist_sum: f64 = coords.iter().map(|p| (p - centroid).norm_squared()).sum();
    Some((squared_dist_sum / n).sqrt())
}

pub fn calculate_end_to_end_distance(coords: &[Point3<f64>]) -> Option<f64> {
    match (coords.first(), coords.last()) {
        (Some(first), Some(last)) => Some((last - first).norm()),
        _ => None,
    }
}
