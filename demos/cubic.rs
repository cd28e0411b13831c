//! Finds the real roots of (x - 1)(x - 2)(x - 3) from the default guess grid.

use real_roots::Poly64;

fn main() {
    simple_logger::init_with_level(log::Level::Debug).expect("logger init");

    let p = Poly64::from_roots(&[1.0, 2.0, 3.0]);
    println!("Polynomial: {p}");
    for root in p.roots() {
        println!("root: {root}");
    }
}
