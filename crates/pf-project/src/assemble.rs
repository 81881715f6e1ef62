//! Turning a validated case into live objects and evaluating its models.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use pf_core::ThroatId;
use pf_models::{
    ConduitModel, ConduitTarget, DiffusiveKeys, HagenPoiseuille, ModelRegistry, OrdinaryDiffusion,
};
use pf_network::{Network, NetworkBuilder, ThroatSubset};
use pf_phase::{Domain, Geometry, Phase, PropKey};
use serde::Serialize;
use tracing::{debug, info};

use crate::schema::{Case, GeometryDef, ModelKindDef, NetworkDef, PhaseDef, RegenModeDef};
use crate::validate::{pore_index, validate_case};
use crate::{ProjectError, ProjectResult};

/// Live objects built from a case.
#[derive(Debug)]
pub struct Assembly {
    pub network: Arc<Network>,
    pub phases: BTreeMap<String, Phase>,
    pub geometries: BTreeMap<String, Geometry>,
}

/// Values produced by one model of the case.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelOutput {
    pub propname: String,
    pub phase: String,
    pub geometry: String,
    /// Throat names, aligned with `values`.
    pub throats: Vec<String>,
    pub values: Vec<f64>,
}

/// Results of every model in a case.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseReport {
    pub case: String,
    pub outputs: Vec<ModelOutput>,
}

pub fn build_network(def: &NetworkDef) -> ProjectResult<Network> {
    let index = pore_index(def);
    let mut builder = NetworkBuilder::new();
    let pores: Vec<_> = def.pores.iter().map(|name| builder.add_pore(name.clone())).collect();
    for throat in &def.throats {
        let [p1, p2] = throat.pores.each_ref().map(|name| index.get(name.as_str()).copied());
        match (p1, p2) {
            (Some(p1), Some(p2)) => {
                builder.add_throat(throat.name.clone(), pores[p1], pores[p2]);
            }
            _ => {
                return Err(ProjectError::Build {
                    what: format!("throat '{}' references an unknown pore", throat.name),
                });
            }
        }
    }
    Ok(builder.build()?)
}

pub fn build_phase(def: &PhaseDef, network: &Arc<Network>) -> ProjectResult<Phase> {
    let mut phase = Phase::new(def.name.clone(), network.clone());
    for (key, field) in &def.properties {
        let n = phase.count(PropKey::parse(key)?.domain);
        phase.set(key, field.expand(n))?;
    }
    Ok(phase)
}

pub fn build_geometry(def: &GeometryDef, network: &Arc<Network>) -> ProjectResult<Geometry> {
    let throats = match &def.throats {
        Some(names) => {
            let by_name: HashMap<&str, ThroatId> = network
                .throats()
                .iter()
                .map(|t| (t.name.as_str(), t.id))
                .collect();
            let ids = names
                .iter()
                .map(|name| {
                    by_name.get(name.as_str()).copied().ok_or_else(|| ProjectError::Build {
                        what: format!("geometry '{}' references unknown throat '{name}'", def.name),
                    })
                })
                .collect::<ProjectResult<Vec<_>>>()?;
            ThroatSubset::from_ids(network, ids)?
        }
        None => ThroatSubset::all(network),
    };

    let mut geometry = Geometry::new(def.name.clone(), network.clone(), throats);
    for (key, field) in &def.properties {
        let n = match PropKey::parse(key)?.domain {
            Domain::Pore => network.num_pores(),
            Domain::Throat => geometry.throats().len(),
        };
        geometry.set(key, field.expand(n))?;
    }
    Ok(geometry)
}

/// Validate `case` and build its network, phases and geometries.
pub fn assemble(case: &Case) -> ProjectResult<Assembly> {
    validate_case(case)?;

    let network = Arc::new(build_network(&case.network)?);
    let phases = case
        .phases
        .iter()
        .map(|def| Ok((def.name.clone(), build_phase(def, &network)?)))
        .collect::<ProjectResult<BTreeMap<_, _>>>()?;
    let geometries = case
        .geometries
        .iter()
        .map(|def| Ok((def.name.clone(), build_geometry(def, &network)?)))
        .collect::<ProjectResult<BTreeMap<_, _>>>()?;

    info!(
        case = %case.name,
        pores = network.num_pores(),
        throats = network.num_throats(),
        phases = phases.len(),
        geometries = geometries.len(),
        "case assembled"
    );

    Ok(Assembly {
        network,
        phases,
        geometries,
    })
}

/// Model instance for a case entry.
pub fn instantiate(kind: &ModelKindDef) -> Box<dyn ConduitModel> {
    match kind {
        ModelKindDef::HagenPoiseuille { dimensionality } => {
            Box::new(HagenPoiseuille::new((*dimensionality).into()))
        }
        ModelKindDef::OrdinaryDiffusion { molar_density } => {
            let mut keys = DiffusiveKeys::default();
            if !molar_density {
                keys.molar_density = None;
            }
            Box::new(OrdinaryDiffusion::new(keys))
        }
    }
}

/// Assemble `case` and evaluate every model it declares.
///
/// Models sharing a phase and geometry go into one registry in declaration
/// order. Registration computes every model except deferred ones, which are
/// then run once by name.
pub fn evaluate(case: &Case) -> ProjectResult<CaseReport> {
    let assembly = assemble(case)?;

    let mut groups: Vec<((&str, &str), Vec<usize>)> = Vec::new();
    for (idx, model) in case.models.iter().enumerate() {
        let slot = (model.phase.as_str(), model.geometry.as_str());
        match groups.iter_mut().find(|(s, _)| *s == slot) {
            Some((_, members)) => members.push(idx),
            None => groups.push((slot, vec![idx])),
        }
    }

    let mut outputs = Vec::with_capacity(case.models.len());
    for ((phase_name, geometry_name), members) in groups {
        let (phase, geometry) = lookup(&assembly, phase_name, geometry_name)?;
        let target = ConduitTarget::new(phase, geometry)?;

        let mut registry = ModelRegistry::new();
        for &idx in &members {
            let def = &case.models[idx];
            registry.add_model(&def.propname, instantiate(&def.kind), def.regen_mode.into(), &target)?;
        }
        // Deferred models are the only ones add_model leaves empty
        let deferred: Vec<&str> = members
            .iter()
            .map(|&idx| &case.models[idx])
            .filter(|def| def.regen_mode == RegenModeDef::Deferred)
            .map(|def| def.propname.as_str())
            .collect();
        if !deferred.is_empty() {
            registry.regenerate_named(&deferred, &target)?;
        }

        let throats: Vec<String> = geometry
            .throats()
            .iter()
            .filter_map(|id| assembly.network.throat(id).map(|t| t.name.clone()))
            .collect();
        for &idx in &members {
            let def = &case.models[idx];
            let values = registry.get(&def.propname).map(<[f64]>::to_vec).unwrap_or_default();
            debug!(propname = %def.propname, phase = phase_name, geometry = geometry_name, "model output collected");
            outputs.push((
                idx,
                ModelOutput {
                    propname: def.propname.clone(),
                    phase: phase_name.to_string(),
                    geometry: geometry_name.to_string(),
                    throats: throats.clone(),
                    values,
                },
            ));
        }
    }
    outputs.sort_by_key(|(idx, _)| *idx);

    Ok(CaseReport {
        case: case.name.clone(),
        outputs: outputs.into_iter().map(|(_, out)| out).collect(),
    })
}

fn lookup<'a>(assembly: &'a Assembly, phase: &str, geometry: &str) -> ProjectResult<(&'a Phase, &'a Geometry)> {
    let phase = assembly.phases.get(phase).ok_or_else(|| ProjectError::Build {
        what: format!("unknown phase '{phase}'"),
    })?;
    let geometry = assembly.geometries.get(geometry).ok_or_else(|| ProjectError::Build {
        what: format!("unknown geometry '{geometry}'"),
    })?;
    Ok((phase, geometry))
}
