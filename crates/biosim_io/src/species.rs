//! Species parameter files.

use crate::error::Result;
use crate::params::ParamFile;
use biosim_data::SpeciesParams;
use std::path::Path;

pub const SPECIES_KEYS: &[&str] = &[
    "v_fod",
    "beta",
    "sigma",
    "v_min",
    "a_halv",
    "phi_alder",
    "v_halv_under",
    "phi_under",
    "v_halv_over",
    "phi_over",
    "mu",
    "gamma",
    "zeta",
    "omega",
    "F",
    "DeltaPhiMax",
    "Navn",
];

/// Reads a species file. Missing keys stay `None`; completeness is checked
/// when the species is registered.
pub fn read_species(path: &Path) -> Result<SpeciesParams> {
    let file = ParamFile::read(path, SPECIES_KEYS)?;
    species_from(&file)
}

pub fn parse_species(path: &Path, content: &str) -> Result<SpeciesParams> {
    let file = ParamFile::parse(path, content, SPECIES_KEYS)?;
    species_from(&file)
}

fn species_from(file: &ParamFile) -> Result<SpeciesParams> {
    Ok(SpeciesParams {
        name: file.text("Navn").map(str::to_string),
        birthweight: file.value("v_fod")?,
        beta: file.value("beta")?,
        sigma: file.value("sigma")?,
        min_weight: file.value("v_min")?,
        age_half: file.value("a_halv")?,
        phi_age: file.value("phi_alder")?,
        weight_half_low: file.value("v_halv_under")?,
        phi_under: file.value("phi_under")?,
        weight_half_high: file.value("v_halv_over")?,
        phi_over: file.value("phi_over")?,
        mu: file.value("mu")?,
        gamma: file.value("gamma")?,
        zeta: file.value("zeta")?,
        omega: file.value("omega")?,
        food_desire: file.value("F")?,
        delta_phi_max: file.value("DeltaPhiMax")?,
    })
}
