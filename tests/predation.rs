mod common;

use biosim_core::{Species, SpeciesId};
use common::{calm, carnivore, herbivore, WorldBuilder};
use proptest::prelude::*;

fn sharp_carnivore() -> biosim_data::SpeciesParams {
    let mut params = calm(carnivore());
    params.delta_phi_max = Some(0.01);
    params
}

#[test]
fn test_predator_eats_after_herbivores_graze() {
    let mut world = WorldBuilder::new()
        .with_map(&["HHH", "HJH", "HHH"])
        .with_species(calm(herbivore()))
        .with_species(sharp_carnivore())
        .with_herd("B", 3, 50, 2.0, 1, 1)
        .with_animal("R", 5, 40.0, 1, 1)
        .build();

    let summary = world.step();
    assert_eq!(summary.eaten, 3);
    assert_census!(world, 0, 1);

    // Each herbivore grazed its full desire before being eaten.
    let jungle = world.grid().cell_at(1, 1).unwrap();
    assert_close!(world.grid().cell(jungle).graze_available(), 770.0);

    let prey_weight = 2.0 - 0.05 * 2.0 + 0.9 * 10.0;
    let hunter = world.animals().next().unwrap();
    assert_close!(hunter.weight(), 35.0 + 3.0 * 0.75 * prey_weight);
}

#[test]
fn test_predators_leave_their_own_species_alone() {
    let mut world = WorldBuilder::new()
        .with_map(&["J"])
        .with_species(sharp_carnivore())
        .with_animal("R", 5, 60.0, 0, 0)
        .with_animal("R", 80, 5.0, 0, 0)
        .build();

    let summary = world.step();
    assert_eq!(summary.eaten, 0);
    assert_census!(world, 0, 2);
}

#[test]
fn test_weaker_hunter_never_catches() {
    let mut world = WorldBuilder::new()
        .with_map(&["J"])
        .with_species(calm(herbivore()))
        .with_species(calm(carnivore()))
        .with_animal("B", 10, 40.0, 0, 0)
        .with_animal("R", 90, 3.0, 0, 0)
        .build();

    for _ in 0..3 {
        assert_eq!(world.step().eaten, 0);
    }
    assert_census!(world, 1, 1);
}

#[test]
fn test_eaten_prey_is_gone_from_cell() {
    let mut world = WorldBuilder::new()
        .with_map(&["J"])
        .with_species(calm(herbivore()))
        .with_species(sharp_carnivore())
        .with_animal("B", 60, 1.0, 0, 0)
        .with_animal("R", 5, 30.0, 0, 0)
        .build();
    let prey = world.animals().find(|a| !a.is_predator()).unwrap().id();

    world.step();
    assert_animal_gone!(world, prey);
    let cell = world.grid().cell_at(0, 0).unwrap();
    assert!(!world.grid().cell(cell).contains(prey));
    assert_eq!(world.grid().cell(cell).occupants().len(), 1);
}

proptest! {
    #[test]
    fn prop_catch_chance_is_a_probability(hunter in 0.0f64..=1.0, prey in 0.0f64..=1.0) {
        let species = Species::from_params(SpeciesId(1), &carnivore()).unwrap();
        let chance = species.catch_chance(hunter, prey);
        prop_assert!((0.0..=1.0).contains(&chance));
        if hunter <= prey {
            prop_assert_eq!(chance, 0.0);
        }
    }

    #[test]
    fn prop_herbivores_never_catch(hunter in 0.0f64..=1.0, prey in 0.0f64..=1.0) {
        let species = Species::from_params(SpeciesId(0), &herbivore()).unwrap();
        prop_assert_eq!(species.catch_chance(hunter, prey), 0.0);
    }
}
