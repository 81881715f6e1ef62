//! Case file schema definitions.
//!
//! Values are plain SI numbers; property keys follow the `pore.<name>` /
//! `throat.<name>` convention used throughout the workspace.

use std::collections::BTreeMap;

use pf_models::{Dimensionality, RegenMode};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub version: u32,
    pub name: String,
    pub network: NetworkDef,
    #[serde(default)]
    pub phases: Vec<PhaseDef>,
    #[serde(default)]
    pub geometries: Vec<GeometryDef>,
    #[serde(default)]
    pub models: Vec<ModelDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NetworkDef {
    /// Pore names; position is the pore index.
    #[serde(default)]
    pub pores: Vec<String>,
    #[serde(default)]
    pub throats: Vec<ThroatDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThroatDef {
    pub name: String,
    /// Names of the two endpoint pores, `[pore1, pore2]`.
    pub pores: [String; 2],
}

/// A property array, either one value per element or a single value
/// broadcast to every element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldDef {
    Uniform(f64),
    Values(Vec<f64>),
}

impl FieldDef {
    /// Materialize the field for `n` elements.
    pub fn expand(&self, n: usize) -> Vec<f64> {
        match self {
            FieldDef::Uniform(v) => vec![*v; n],
            FieldDef::Values(values) => values.clone(),
        }
    }

    pub fn values(&self) -> &[f64] {
        match self {
            FieldDef::Uniform(v) => std::slice::from_ref(v),
            FieldDef::Values(values) => values,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseDef {
    pub name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, FieldDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub name: String,
    /// Throat names owned by the geometry, in local order; every throat when
    /// omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throats: Option<Vec<String>>,
    /// Leg fields, e.g. `throat.equivalent_area.pore1`.
    #[serde(default)]
    pub properties: BTreeMap<String, FieldDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDef {
    /// Output key, e.g. `throat.hydraulic_conductance`.
    pub propname: String,
    pub phase: String,
    pub geometry: String,
    #[serde(default)]
    pub regen_mode: RegenModeDef,
    pub kind: ModelKindDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ModelKindDef {
    HagenPoiseuille {
        #[serde(default)]
        dimensionality: DimensionalityDef,
    },
    OrdinaryDiffusion {
        #[serde(default = "default_molar_density")]
        molar_density: bool,
    },
}

fn default_molar_density() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DimensionalityDef {
    #[serde(rename = "2d")]
    TwoD,
    #[default]
    #[serde(rename = "3d")]
    ThreeD,
}

impl From<DimensionalityDef> for Dimensionality {
    fn from(def: DimensionalityDef) -> Self {
        match def {
            DimensionalityDef::TwoD => Dimensionality::TwoD,
            DimensionalityDef::ThreeD => Dimensionality::ThreeD,
        }
    }
}

impl From<Dimensionality> for DimensionalityDef {
    fn from(dim: Dimensionality) -> Self {
        match dim {
            Dimensionality::TwoD => DimensionalityDef::TwoD,
            Dimensionality::ThreeD => DimensionalityDef::ThreeD,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegenModeDef {
    #[default]
    Normal,
    Deferred,
    Constant,
    Explicit,
}

impl From<RegenModeDef> for RegenMode {
    fn from(def: RegenModeDef) -> Self {
        match def {
            RegenModeDef::Normal => RegenMode::Normal,
            RegenModeDef::Deferred => RegenMode::Deferred,
            RegenModeDef::Constant => RegenMode::Constant,
            RegenModeDef::Explicit => RegenMode::Explicit,
        }
    }
}
