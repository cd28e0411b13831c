//! Interactive coefficient entry on stdin, lowest-degree term first.
//!
//! Enter one coefficient per prompt, `f` for fractional entry via a
//! numerator/denominator pair, and `/` to finish. Invalid input re-prompts.

use std::io::{self, BufRead, Write};

use itertools::Itertools;
use real_roots::Poly64;

fn main() -> io::Result<()> {
    simple_logger::init_with_level(log::Level::Warn).expect("logger init");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let coefficients = enter_polynomial(&mut lines)?;
    if coefficients.is_empty() {
        println!("No coefficients entered.");
        return Ok(());
    }

    let poly = Poly64::from_vec(coefficients);
    println!("Polynomial: {poly}");

    let roots = poly.roots();
    if roots.is_empty() {
        println!("Roots: No real roots found.");
    } else {
        println!("Roots: {}", roots.iter().join(", "));
    }
    Ok(())
}

/// Collect coefficients from the constant term upward, returning them in the
/// descending-degree order the solver expects.
fn enter_polynomial(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Vec<f64>> {
    let mut ascending: Vec<f64> = Vec::new();
    println!("Enter polynomial, to enter fractional coefficients type f");
    loop {
        let Some(answer) = prompt(&format!("Coefficient of x^{} term: ", ascending.len()), lines)?
        else {
            break;
        };
        match answer.as_str() {
            "/" => break,
            "f" => {
                let Some(numerator) = prompt("Numerator: ", lines)? else {
                    break;
                };
                let Some(denominator) = prompt("Denominator: ", lines)? else {
                    break;
                };
                match (numerator.parse::<f64>(), denominator.parse::<f64>()) {
                    (Ok(num), Ok(denom)) => ascending.push(num / denom),
                    _ => println!("Invalid input. Please enter a valid fraction."),
                }
            }
            "" => println!("Invalid input. Please enter a non-empty number."),
            text => match text.parse::<f64>() {
                Ok(coefficient) => ascending.push(coefficient),
                Err(_) => println!("Invalid input. Please enter a valid number."),
            },
        }
    }
    ascending.reverse();
    Ok(ascending)
}

fn prompt(
    label: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
