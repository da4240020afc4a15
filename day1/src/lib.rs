use std::io::{self, BufRead};
use std::path::Path;

pub mod diagnostics;
pub mod fuel;
pub mod input;
pub mod totals;

use crate::diagnostics::Diagnostics;
use crate::input::InputError;
use crate::totals::Totals;

/// Sums direct and recursive fuel over every mass in `source`.
///
/// Malformed lines, including ones that aren't UTF-8, are reported and
/// contribute nothing. A read failure ends the scan and is reported once the
/// loop is done; whatever was summed before it stands.
pub fn calculate<R, D>(source: R, diagnostics: &mut D) -> Totals
where
    R: BufRead,
    D: Diagnostics + ?Sized,
{
    let mut totals = Totals::default();
    let mut read_error = None;

    for (index, line) in source.split(b'\n').enumerate() {
        let line_no = index + 1;
        let bytes = match line {
            Ok(bytes) => bytes,
            Err(err) => {
                read_error = Some(InputError::Read {
                    line: line_no,
                    source: err,
                });
                break;
            }
        };

        let parsed =
            input::decode_line(line_no, bytes).and_then(|text| input::parse_mass(line_no, &text));
        match parsed {
            Ok(Some(mass)) => totals.add(mass),
            Ok(None) => {}
            Err(err) => diagnostics.report(&err),
        }
    }

    if let Some(err) = read_error {
        diagnostics.report(&err);
    }

    totals
}

/// Like [`calculate`], reading from the file at `path`. A file that can't be
/// opened is reported and treated as empty.
pub fn calculate_file<P, D>(path: P, diagnostics: &mut D) -> Totals
where
    P: AsRef<Path>,
    D: Diagnostics + ?Sized,
{
    match input::open_source(path) {
        Ok(source) => calculate(source, diagnostics),
        Err(err) => {
            diagnostics.report(&err);
            calculate(io::empty(), diagnostics)
        }
    }
}
