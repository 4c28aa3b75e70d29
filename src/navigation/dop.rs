use nalgebra::{Matrix3, Matrix4};

#[cfg(feature = "serde")]
use serde::Serialize;

/// [DilutionOfPrecision] of a navigation solution
#[derive(Debug, Clone, Default, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DilutionOfPrecision {
    /// Geometric DOP
    pub gdop: f64,

    /// Position DOP
    pub pdop: f64,

    /// Horizontal DOP
    pub hdop: f64,

    /// Vertical DOP
    pub vdop: f64,

    /// Temporal DOP
    pub tdop: f64,
}

impl DilutionOfPrecision {
    /// Rotates the position block of Q to local East North Up frame.
    fn q_enu(q: &Matrix4<f64>, lat_rad: f64, lon_rad: f64) -> Matrix3<f64> {
        let (sin_lat, cos_lat) = lat_rad.sin_cos();
        let (sin_lon, cos_lon) = lon_rad.sin_cos();

        #[rustfmt::skip]
        let r = Matrix3::<f64>::new(
            -sin_lon, cos_lon, 0.0,
            -sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat,
            cos_lat * cos_lon, cos_lat * sin_lon, sin_lat,
        );

        let q_3 = q.fixed_view::<3, 3>(0, 0).into_owned();
        r * q_3 * r.transpose()
    }

    /// Creates new [DilutionOfPrecision].
    ///
    /// ## Input
    /// - q: (Hᵀ.H)⁻¹ matrix
    /// - lat_rad, lon_rad: receiver location
    pub(crate) fn new(q: &Matrix4<f64>, lat_rad: f64, lon_rad: f64) -> Self {
        let q_enu = Self::q_enu(q, lat_rad, lon_rad);
        Self {
            gdop: q.trace().sqrt(),
            pdop: (q[(0, 0)] + q[(1, 1)] + q[(2, 2)]).sqrt(),
            tdop: q[(3, 3)].sqrt(),
            hdop: (q_enu[(0, 0)] + q_enu[(1, 1)]).sqrt(),
            vdop: q_enu[(2, 2)].sqrt(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::DilutionOfPrecision;
    use nalgebra::Matrix4;

    #[test]
    fn identity_covariance() {
        let dop = DilutionOfPrecision::new(&Matrix4::identity(), 0.5, 1.2);
        assert!((dop.gdop - 2.0).abs() < 1.0E-12);
        assert!((dop.pdop - 3.0_f64.sqrt()).abs() < 1.0E-12);
        assert!((dop.tdop - 1.0).abs() < 1.0E-12);
        // rotation preserves the isotropic position block
        assert!((dop.hdop - 2.0_f64.sqrt()).abs() < 1.0E-9);
        assert!((dop.vdop - 1.0).abs() < 1.0E-9);
    }
}
