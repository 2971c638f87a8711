pub mod macros;

use biosim_core::{Grid, TerrainTable, World};
use biosim_data::{GeographyLayout, SpeciesParams};
use std::path::PathBuf;

/// Builds small worlds for integration tests.
#[allow(dead_code)]
pub struct WorldBuilder {
    map: Vec<String>,
    alpha: f64,
    max_food_savannah: f64,
    max_food_jungle: f64,
    species: Vec<SpeciesParams>,
    animals: Vec<(String, u32, f64, usize, usize)>,
    seed: u64,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            map: vec!["HHHHH".into(), "HJJSH".into(), "HSJJH".into(), "HHHHH".into()],
            alpha: 0.3,
            max_food_savannah: 300.0,
            max_food_jungle: 800.0,
            species: Vec::new(),
            animals: Vec::new(),
            seed: 0,
        }
    }

    pub fn with_map(mut self, rows: &[&str]) -> Self {
        self.map = rows.iter().map(|r| (*r).to_string()).collect();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_terrain(mut self, alpha: f64, max_food_savannah: f64, max_food_jungle: f64) -> Self {
        self.alpha = alpha;
        self.max_food_savannah = max_food_savannah;
        self.max_food_jungle = max_food_jungle;
        self
    }

    pub fn with_species(mut self, params: SpeciesParams) -> Self {
        self.species.push(params);
        self
    }

    pub fn with_animal(mut self, species: &str, age: u32, weight: f64, x: usize, y: usize) -> Self {
        self.animals.push((species.to_string(), age, weight, x, y));
        self
    }

    /// Adds `count` animals of the same age and weight on one cell.
    pub fn with_herd(mut self, species: &str, count: usize, age: u32, weight: f64, x: usize, y: usize) -> Self {
        for _ in 0..count {
            self.animals.push((species.to_string(), age, weight, x, y));
        }
        self
    }

    pub fn build(self) -> World {
        let layout = GeographyLayout::from_lines(&self.map);
        let terrain = TerrainTable::builtin(self.alpha, self.max_food_savannah, self.max_food_jungle)
            .expect("valid terrain");
        let grid = Grid::new(&layout, &terrain).expect("valid map");
        let mut world = World::new(grid, self.seed);
        for params in &self.species {
            world.add_species(params).expect("valid species");
        }
        for (species, age, weight, x, y) in &self.animals {
            world
                .insert_animal(species, *age, *weight, *x, *y)
                .expect("animal placed");
        }
        world
    }
}

#[allow(dead_code)]
pub fn herbivore() -> SpeciesParams {
    SpeciesParams {
        name: Some("B".into()),
        birthweight: Some(8.0),
        beta: Some(0.9),
        sigma: Some(0.05),
        min_weight: Some(0.0),
        age_half: Some(40),
        phi_age: Some(0.2),
        weight_half_low: Some(10.0),
        phi_under: Some(0.1),
        weight_half_high: Some(60.0),
        phi_over: Some(0.1),
        mu: Some(0.25),
        gamma: Some(0.8),
        zeta: Some(1.5),
        omega: Some(0.4),
        food_desire: Some(10.0),
        ..SpeciesParams::default()
    }
}

#[allow(dead_code)]
pub fn carnivore() -> SpeciesParams {
    SpeciesParams {
        name: Some("R".into()),
        birthweight: Some(6.0),
        beta: Some(0.75),
        sigma: Some(0.125),
        min_weight: Some(0.0),
        age_half: Some(60),
        phi_age: Some(0.4),
        weight_half_low: Some(4.0),
        phi_under: Some(0.4),
        weight_half_high: Some(60.0),
        phi_over: Some(0.05),
        mu: Some(0.4),
        gamma: Some(0.8),
        zeta: Some(1.5),
        omega: Some(0.9),
        delta_phi_max: Some(10.0),
        ..SpeciesParams::default()
    }
}

/// The same species with wandering, breeding and random death switched off.
#[allow(dead_code)]
pub fn calm(mut params: SpeciesParams) -> SpeciesParams {
    params.mu = Some(0.0);
    params.gamma = Some(0.0);
    params.omega = Some(0.0);
    params
}

#[allow(dead_code)]
pub fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(path)
}

/// Writes a TOML run file for the calm fixture whose output lands in `dir/out`.
#[allow(dead_code)]
pub fn write_toml_run(dir: &std::path::Path, year_end: u32, extra: &str) -> PathBuf {
    let calm = |name: &str| fixture(&format!("calm/{name}")).display().to_string();
    let content = format!(
        "geography = '{}'\n\
         species = ['{}', '{}']\n\
         populations = ['{}']\n\
         year_begin = 0\n\
         year_end = {year_end}\n\
         seed = 7\n\
         output_stem = '{}'\n\
         \n\
         [terrain]\n\
         kind = \"builtin\"\n\
         params = '{}'\n\
         \n\
         {extra}",
        calm("calm.geo"),
        calm("herbivore.par"),
        calm("carnivore.par"),
        calm("start.pop"),
        dir.join("out/calm").display(),
        calm("cells.par"),
    );
    let path = dir.join("calm.toml");
    std::fs::write(&path, content).expect("run file written");
    path
}
