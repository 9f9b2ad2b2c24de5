pub const FULL_TURN: f64 = 360.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= FULL_TURN {
        0.0
    } else {
        a
    }
}

/// Rotates a table-local offset into east/north meters.
///
/// Local `x` runs along the row, local `y` toward the facing direction.
/// With azimuth 0 the table faces north, so `x` is east and `y` is north;
/// the rotation is clockwise, matching compass bearings.
pub fn rotate_to_east_north(x: f64, y: f64, azimuth_deg: f64) -> (f64, f64) {
    let (sin_az, cos_az) = deg_to_rad(azimuth_deg).sin_cos();
    (x * cos_az + y * sin_az, -x * sin_az + y * cos_az)
}

/// Inverse of [`rotate_to_east_north`].
pub fn rotate_from_east_north(east: f64, north: f64, azimuth_deg: f64) -> (f64, f64) {
    let (sin_az, cos_az) = deg_to_rad(azimuth_deg).sin_cos();
    (east * cos_az - north * sin_az, east * sin_az + north * cos_az)
}
