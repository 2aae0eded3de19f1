//! Distance traveled since the last tread measurement.

/// Resolve the distance traveled per row.
///
/// The cumulative distance wins when positive. Otherwise, if an initial odometer
/// column exists, the observation reading minus the initial odometer is used.
/// Non-positive results are discarded.
pub fn resolve_distance_traveled(
    cumulative: &[Option<f64>],
    observation_km: &[Option<f64>],
    initial_odometer: Option<&[Option<f64>]>,
) -> Vec<Option<f64>> {
    cumulative
        .iter()
        .enumerate()
        .map(|(idx, direct)| {
            let resolved = match (*direct, initial_odometer) {
                (Some(value), _) if value > 0.0 => Some(value),
                (_, Some(initial)) => {
                    let observed = observation_km.get(idx).copied().flatten();
                    let start = initial.get(idx).copied().flatten();
                    observed.zip(start).map(|(end, start)| end - start)
                }
                (other, None) => other,
            };
            resolved.filter(|value| *value > 0.0)
        })
        .collect()
}
