pub type Mass = i64;
pub type Fuel = i64;

/// Fuel needed to lift `mass` on its own: `mass / 3 - 2`.
///
/// Non-positive results mean no fuel is needed; callers decide whether to
/// clamp them.
pub fn direct_fuel(mass: Mass) -> Fuel {
    (mass / 3) - 2
}

/// Fuel needed to lift `mass` plus all the fuel added for it, stopping at
/// the first increment that isn't strictly positive.
pub fn recursive_fuel(mass: Mass) -> Fuel {
    let mut total = 0;
    let mut current = mass;

    loop {
        let fuel = direct_fuel(current);
        if fuel <= 0 {
            return total;
        }

        total += fuel;
        current = fuel;
    }
}
