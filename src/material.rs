//! Material properties for stress-life fatigue analysis

use serde::{Deserialize, Serialize};

use crate::error::{FatigueError, FatigueResult};

/// Mechanical constants of a material
///
/// Instances only exist in a validated state: every required constant is
/// positive and finite. Values are read through accessors, the record is
/// immutable once built. Stresses and moduli share one unit system (e.g. MPa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MaterialRecord")]
pub struct MaterialProperties {
    name: String,
    ultimate_tensile_strength: f64,
    yield_strength: f64,
    elastic_modulus: f64,
    poisson_ratio: f64,
    fatigue_strength_coefficient: Option<f64>,
    shear_modulus: f64,
}

/// Unvalidated form used for deserialization
#[derive(Debug, Deserialize)]
struct MaterialRecord {
    name: String,
    ultimate_tensile_strength: f64,
    yield_strength: f64,
    elastic_modulus: f64,
    poisson_ratio: f64,
    #[serde(default)]
    fatigue_strength_coefficient: Option<f64>,
    #[serde(default)]
    shear_modulus: Option<f64>,
}

impl TryFrom<MaterialRecord> for MaterialProperties {
    type Error = FatigueError;

    fn try_from(record: MaterialRecord) -> FatigueResult<Self> {
        let mut material = Self::new(
            &record.name,
            record.ultimate_tensile_strength,
            record.yield_strength,
            record.elastic_modulus,
            record.poisson_ratio,
        )?;
        if let Some(sf) = record.fatigue_strength_coefficient {
            material = material.with_fatigue_strength_coefficient(sf)?;
        }
        if let Some(g) = record.shear_modulus {
            material = material.with_shear_modulus(g)?;
        }
        Ok(material)
    }
}

fn positive(field: &'static str, value: f64) -> FatigueResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FatigueError::InvalidMaterial { field, value })
    }
}

impl MaterialProperties {
    /// Create a material, validating every required constant
    ///
    /// The shear modulus is derived as `E / (2 * (1 + nu))`; use
    /// [`with_shear_modulus`](Self::with_shear_modulus) to override it.
    pub fn new(
        name: &str,
        ultimate_tensile_strength: f64,
        yield_strength: f64,
        elastic_modulus: f64,
        poisson_ratio: f64,
    ) -> FatigueResult<Self> {
        let ultimate_tensile_strength =
            positive("ultimate_tensile_strength", ultimate_tensile_strength)?;
        let yield_strength = positive("yield_strength", yield_strength)?;
        let elastic_modulus = positive("elastic_modulus", elastic_modulus)?;
        let poisson_ratio = positive("poisson_ratio", poisson_ratio)?;

        Ok(Self {
            name: name.to_string(),
            ultimate_tensile_strength,
            yield_strength,
            elastic_modulus,
            poisson_ratio,
            fatigue_strength_coefficient: None,
            shear_modulus: elastic_modulus / (2.0 * (1.0 + poisson_ratio)),
        })
    }

    /// Set the fatigue strength coefficient σf' (needed by the Morrow correction)
    pub fn with_fatigue_strength_coefficient(mut self, sf: f64) -> FatigueResult<Self> {
        self.fatigue_strength_coefficient = Some(positive("fatigue_strength_coefficient", sf)?);
        Ok(self)
    }

    /// Replace the derived shear modulus with a measured value
    pub fn with_shear_modulus(mut self, g: f64) -> FatigueResult<Self> {
        self.shear_modulus = positive("shear_modulus", g)?;
        Ok(self)
    }

    /// Parse and validate a material from a JSON document
    pub fn from_json(json: &str) -> FatigueResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ultimate_tensile_strength(&self) -> f64 {
        self.ultimate_tensile_strength
    }

    pub fn yield_strength(&self) -> f64 {
        self.yield_strength
    }

    pub fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus
    }

    pub fn poisson_ratio(&self) -> f64 {
        self.poisson_ratio
    }

    pub fn fatigue_strength_coefficient(&self) -> Option<f64> {
        self.fatigue_strength_coefficient
    }

    pub fn shear_modulus(&self) -> f64 {
        self.shear_modulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn steel() -> MaterialProperties {
        MaterialProperties::new("Steel", 500.0, 350.0, 210_000.0, 0.3).unwrap()
    }

    #[test]
    fn test_derived_shear_modulus() {
        let mat = steel();
        assert_relative_eq!(mat.shear_modulus(), 210_000.0 / 2.6, epsilon = 1e-9);
        assert!(mat.fatigue_strength_coefficient().is_none());
    }

    #[test]
    fn test_explicit_shear_modulus() {
        let mat = steel().with_shear_modulus(80_000.0).unwrap();
        assert_eq!(mat.shear_modulus(), 80_000.0);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let err = MaterialProperties::new("Bad", 0.0, 350.0, 210_000.0, 0.3).unwrap_err();
        assert!(matches!(
            err,
            FatigueError::InvalidMaterial { field: "ultimate_tensile_strength", .. }
        ));

        assert!(MaterialProperties::new("Bad", 500.0, -1.0, 210_000.0, 0.3).is_err());
        assert!(MaterialProperties::new("Bad", 500.0, 350.0, 0.0, 0.3).is_err());
        assert!(MaterialProperties::new("Bad", 500.0, 350.0, 210_000.0, 0.0).is_err());
        assert!(MaterialProperties::new("Bad", f64::NAN, 350.0, 210_000.0, 0.3).is_err());
        assert!(steel().with_fatigue_strength_coefficient(-900.0).is_err());
    }

    #[test]
    fn test_from_json_validates() {
        let mat = MaterialProperties::from_json(
            r#"{
                "name": "42CrMo4",
                "ultimate_tensile_strength": 1100.0,
                "yield_strength": 900.0,
                "elastic_modulus": 210000.0,
                "poisson_ratio": 0.3,
                "fatigue_strength_coefficient": 1600.0
            }"#,
        )
        .unwrap();
        assert_eq!(mat.name(), "42CrMo4");
        assert_eq!(mat.fatigue_strength_coefficient(), Some(1600.0));

        let err = MaterialProperties::from_json(
            r#"{"name": "Bad", "ultimate_tensile_strength": -1.0, "yield_strength": 1.0,
                "elastic_modulus": 1.0, "poisson_ratio": 0.3}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FatigueError::SerializationError(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_shear_modulus() {
        let mat = steel().with_shear_modulus(81_000.0).unwrap();
        let json = serde_json::to_string(&mat).unwrap();
        assert_eq!(MaterialProperties::from_json(&json).unwrap(), mat);
    }
}
