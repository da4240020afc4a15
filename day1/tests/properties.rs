use proptest::prelude::*;

use day1::fuel::{direct_fuel, recursive_fuel};

proptest! {
    #[test]
    fn light_masses_need_no_recursive_fuel(mass in -1_000_000i64..=8) {
        prop_assert_eq!(recursive_fuel(mass), 0);
    }

    #[test]
    fn recursive_covers_direct(mass in 9i64..10_000_000) {
        let direct = direct_fuel(mass);
        prop_assert!(direct > 0);
        prop_assert!(recursive_fuel(mass) >= direct);
    }

    /// The chain is the direct term plus the chain of that term.
    #[test]
    fn recursive_unrolls_one_step(mass in 9i64..10_000_000) {
        let direct = direct_fuel(mass);
        prop_assert_eq!(recursive_fuel(mass), direct + recursive_fuel(direct));
    }

    #[test]
    fn repeated_calls_agree(mass in any::<i32>()) {
        let mass = i64::from(mass);
        prop_assert_eq!(direct_fuel(mass), direct_fuel(mass));
        prop_assert_eq!(recursive_fuel(mass), recursive_fuel(mass));
    }
}
