use kummer_recurrence::*;

fn main() {
    let series = hyp1f1_series::<f64>;

    // -- Large negative a --
    println!("=== Backward recurrence in a ===");
    for a in [-12.3, -25.6, -40.25] {
        let (b, z) = (4.7, 2.0);
        let m = backward_recurrence_for_negative_a(a, b, z, &series).unwrap();
        println!("M({a}, {b}; {z}) = {m:e}  (small enough: {})", is_a_small_enough(a));
    }

    // -- a and b sharing their fractional part --
    println!("\n=== Re-anchored walk ===");
    let m = backward_recurrence_for_negative_a(-5.5, -2.5, 1.0, &series).unwrap();
    println!("M(-5.5, -2.5; 1) = {m}");

    // -- Large positive a --
    println!("\n=== Forward recurrence in a ===");
    let m = forward_recurrence_for_positive_a(30.4, 2.5, -1.0, &series).unwrap();
    println!("M(30.4, 2.5; -1) = {m:e}");

    // -- Large negative b --
    println!("\n=== Backward recurrence in b ===");
    let m = backward_recurrence_for_negative_b(1.3, -12.4, 2.0, &series).unwrap();
    println!("M(1.3, -12.4; 2) = {m}");

    // -- a and b together --
    println!("\n=== Backward recurrence in a and b ===");
    let m = backward_recurrence_for_negative_a_and_b(-20.25, -20.6, 1.0, &series).unwrap();
    println!("M(-20.25, -20.6; 1) = {m}");

    // -- Custom base evaluator --
    println!("\n=== Counting seed evaluations ===");
    let calls = core::cell::Cell::new(0);
    let counted = |a: f64, b: f64, z: f64| {
        calls.set(calls.get() + 1);
        hyp1f1_series(a, b, z)
    };
    let m = backward_recurrence_for_negative_a(-100.5, 1.5, 0.5, &counted).unwrap();
    println!("M(-100.5, 1.5; 0.5) = {m:e} using {} seed evaluations", calls.get());

    // -- Errors --
    println!("\n=== Errors ===");
    match backward_recurrence_for_negative_a_and_b(-12.3, -11.7, 2.0, &series) {
        Ok(m) => println!("unexpected value {m}"),
        Err(e) => println!("mismatched integer parts: {e}"),
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    let m32 = backward_recurrence_for_negative_a(-12.5_f32, 4.5, 2.0, &hyp1f1_series::<f32>).unwrap();
    println!("M(-12.5, 4.5; 2) = {m32} (f32)");
}
