//! Volume shares of a two-liquid blend.

use crate::types::BlendError;

/// Check that `value` lies in the open interval (0, 1).
///
/// # Errors
///
/// Returns [`BlendError::InvalidShare`] naming `label` otherwise.
pub fn validate_share(label: &str, value: f64) -> Result<(), BlendError> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(BlendError::invalid_share(label, value))
    }
}

/// Validated pair of volume shares.
///
/// Each share lies in (0, 1). Shares built with [`from_volumes`](Self::from_volumes)
/// sum to 1; shares built with [`new`](Self::new) are taken as given.
///
/// # Example
///
/// ```
/// use blend_core::distillation::VolumeShares;
///
/// let shares = VolumeShares::from_volumes(300.0, 100.0).unwrap();
/// assert_eq!(shares.a(), 0.75);
/// assert_eq!(shares.b(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeShares {
    a: f64,
    b: f64,
}

impl VolumeShares {
    /// Validate two shares.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::InvalidShare`] if either share is outside (0, 1).
    pub fn new(a: f64, b: f64) -> Result<Self, BlendError> {
        validate_share("share_a", a)?;
        validate_share("share_b", b)?;
        Ok(Self { a, b })
    }

    /// Shares proportional to two raw volumes.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::InvalidShare`] if either volume is not a
    /// positive finite number.
    pub fn from_volumes(volume_a: f64, volume_b: f64) -> Result<Self, BlendError> {
        for (label, volume) in [("volume_a", volume_a), ("volume_b", volume_b)] {
            if !volume.is_finite() || volume <= 0.0 {
                return Err(BlendError::invalid_share(label, volume));
            }
        }
        let total = volume_a + volume_b;
        Self::new(volume_a / total, volume_b / total)
    }

    /// Share of the first liquid.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Share of the second liquid.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The same blend seen from the other liquid.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_validate_share_bounds() {
        assert!(validate_share("s", 0.5).is_ok());
        assert!(validate_share("s", 1e-9).is_ok());
        assert!(validate_share("s", 0.0).is_err());
        assert!(validate_share("s", 1.0).is_err());
        assert!(validate_share("s", -0.2).is_err());
        assert!(validate_share("s", f64::NAN).is_err());
    }

    #[test]
    fn test_new_reports_offending_share() {
        let err = VolumeShares::new(0.4, 1.2).unwrap_err();
        assert_eq!(err, BlendError::invalid_share("share_b", 1.2));
    }

    #[test]
    fn test_from_volumes_normalises() {
        let shares = VolumeShares::from_volumes(1.0, 3.0).unwrap();
        assert_relative_eq!(shares.a(), 0.25);
        assert_relative_eq!(shares.b(), 0.75);
        assert_relative_eq!(shares.a() + shares.b(), 1.0);
    }

    #[test]
    fn test_from_volumes_rejects_non_positive() {
        assert!(matches!(
            VolumeShares::from_volumes(0.0, 10.0),
            Err(BlendError::InvalidShare { .. })
        ));
        assert!(matches!(
            VolumeShares::from_volumes(10.0, -1.0),
            Err(BlendError::InvalidShare { .. })
        ));
        assert!(VolumeShares::from_volumes(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_swapped() {
        let shares = VolumeShares::new(0.3, 0.7).unwrap();
        assert_eq!(shares.swapped(), VolumeShares::new(0.7, 0.3).unwrap());
    }
}
