//! Case validation logic.

use std::collections::{HashMap, HashSet};

use pf_phase::{Domain, PropKey};

use crate::schema::{Case, FieldDef, GeometryDef, LATEST_VERSION, ModelDef, NetworkDef, PhaseDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    let throat_names = validate_network(&case.network)?;
    let num_pores = case.network.pores.len();
    let num_throats = case.network.throats.len();

    let mut phase_names = HashSet::new();
    for phase in &case.phases {
        if !phase_names.insert(phase.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: phase.name.clone(),
                context: "phases".to_string(),
            });
        }
        validate_phase(phase, num_pores, num_throats)?;
    }

    let mut geometry_names = HashSet::new();
    for geometry in &case.geometries {
        if !geometry_names.insert(geometry.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: geometry.name.clone(),
                context: "geometries".to_string(),
            });
        }
        validate_geometry(geometry, &throat_names, num_pores)?;
    }

    let mut outputs = HashSet::new();
    for model in &case.models {
        validate_model(model, &phase_names, &geometry_names)?;
        let slot = (model.propname.as_str(), model.phase.as_str(), model.geometry.as_str());
        if !outputs.insert(slot) {
            return Err(ValidationError::DuplicateId {
                id: model.propname.clone(),
                context: format!("models of phase '{}' on geometry '{}'", model.phase, model.geometry),
            });
        }
    }

    Ok(())
}

fn validate_network(network: &NetworkDef) -> Result<HashSet<&str>, ValidationError> {
    let mut pore_names = HashSet::new();
    for pore in &network.pores {
        if !pore_names.insert(pore.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: pore.clone(),
                context: "network pores".to_string(),
            });
        }
    }

    let mut throat_names = HashSet::new();
    for throat in &network.throats {
        if !throat_names.insert(throat.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: throat.name.clone(),
                context: "network throats".to_string(),
            });
        }
        for pore in &throat.pores {
            if !pore_names.contains(pore.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: pore.clone(),
                    context: format!("throat '{}' pores", throat.name),
                });
            }
        }
        if throat.pores[0] == throat.pores[1] {
            return Err(ValidationError::InvalidValue {
                field: format!("throat '{}' pores", throat.name),
                value: throat.pores[0].clone(),
                reason: "throat connects a pore to itself".to_string(),
            });
        }
    }

    Ok(throat_names)
}

fn validate_phase(phase: &PhaseDef, num_pores: usize, num_throats: usize) -> Result<(), ValidationError> {
    for (key, field) in &phase.properties {
        let domain = parse_key(key, &phase.name)?;
        let expected = match domain {
            Domain::Pore => num_pores,
            Domain::Throat => num_throats,
        };
        validate_field(key, field, expected)?;
    }
    Ok(())
}

fn validate_geometry(
    geometry: &GeometryDef,
    throat_names: &HashSet<&str>,
    num_pores: usize,
) -> Result<(), ValidationError> {
    let owned = match &geometry.throats {
        Some(throats) => {
            let mut seen = HashSet::new();
            for throat in throats {
                if !throat_names.contains(throat.as_str()) {
                    return Err(ValidationError::MissingReference {
                        id: throat.clone(),
                        context: format!("geometry '{}' throats", geometry.name),
                    });
                }
                if !seen.insert(throat.as_str()) {
                    return Err(ValidationError::DuplicateId {
                        id: throat.clone(),
                        context: format!("geometry '{}' throats", geometry.name),
                    });
                }
            }
            throats.len()
        }
        None => throat_names.len(),
    };

    for (key, field) in &geometry.properties {
        let domain = parse_key(key, &geometry.name)?;
        let expected = match domain {
            Domain::Pore => num_pores,
            Domain::Throat => owned,
        };
        validate_field(key, field, expected)?;
    }
    Ok(())
}

fn validate_model(
    model: &ModelDef,
    phases: &HashSet<&str>,
    geometries: &HashSet<&str>,
) -> Result<(), ValidationError> {
    if parse_key(&model.propname, "models")? != Domain::Throat {
        return Err(ValidationError::InvalidValue {
            field: "model propname".to_string(),
            value: model.propname.clone(),
            reason: "conduit models produce throat properties".to_string(),
        });
    }
    if !phases.contains(model.phase.as_str()) {
        return Err(ValidationError::MissingReference {
            id: model.phase.clone(),
            context: format!("model '{}' phase", model.propname),
        });
    }
    if !geometries.contains(model.geometry.as_str()) {
        return Err(ValidationError::MissingReference {
            id: model.geometry.clone(),
            context: format!("model '{}' geometry", model.propname),
        });
    }
    Ok(())
}

fn parse_key(key: &str, owner: &str) -> Result<Domain, ValidationError> {
    PropKey::parse(key)
        .map(|k| k.domain)
        .map_err(|e| ValidationError::InvalidValue {
            field: format!("property key of '{owner}'"),
            value: key.to_string(),
            reason: e.to_string(),
        })
}

fn validate_field(key: &str, field: &FieldDef, expected: usize) -> Result<(), ValidationError> {
    if let FieldDef::Values(values) = field {
        if values.len() != expected {
            return Err(ValidationError::InvalidValue {
                field: key.to_string(),
                value: format!("{} values", values.len()),
                reason: format!("expected {expected}"),
            });
        }
    }
    if let Some(bad) = field.values().iter().find(|v| !v.is_finite()) {
        return Err(ValidationError::InvalidValue {
            field: key.to_string(),
            value: bad.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

/// Map pore names to indices; assumes a validated network.
pub(crate) fn pore_index(network: &NetworkDef) -> HashMap<&str, usize> {
    network
        .pores
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect()
}
