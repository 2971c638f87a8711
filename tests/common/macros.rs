/// Asserts that two floats agree to within `1e-9` or the given tolerance.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr $(, $tol:expr)?) => {{
        let tol: f64 = 1e-9;
        $(let tol: f64 = $tol;)?
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() <= tol, "{} is not within {} of {}", l, tol, r);
    }};
}

/// Asserts the prey and predator head counts of a world.
#[macro_export]
macro_rules! assert_census {
    ($world:expr, $prey:expr, $predators:expr) => {
        let census = $world.census();
        assert_eq!(
            (census.prey, census.predators),
            ($prey, $predators),
            "census mismatch (prey, predators)"
        );
    };
}

/// Asserts that an animal is no longer alive.
#[macro_export]
macro_rules! assert_animal_gone {
    ($world:expr, $id:expr) => {
        assert!($world.animal($id).is_none(), "animal {} should be gone", $id);
    };
}
