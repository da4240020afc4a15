use std::io::{self, Write};

use crate::fuel::{direct_fuel, recursive_fuel, Mass};

/// Wider than `Fuel` so summing many `i64` fuel amounts can't overflow.
pub type Total = i128;

/// Running sums of direct and recursive fuel over every accepted mass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    direct: Total,
    recursive: Total,
}

impl Totals {
    pub fn add(&mut self, mass: Mass) {
        self.direct += Total::from(direct_fuel(mass));
        self.recursive += Total::from(recursive_fuel(mass));
    }

    pub fn direct(&self) -> Total {
        self.direct
    }

    pub fn recursive(&self) -> Total {
        self.recursive
    }

    /// Writes the direct total then the recursive total, one per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.direct)?;
        writeln!(out, "{}", self.recursive)?;
        out.flush()
    }
}
