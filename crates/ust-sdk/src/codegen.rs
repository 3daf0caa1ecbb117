// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Render a [`VerifyingKey`] as Rust source.
//!
//! A new circuit ships as a new `static` table, not a runtime-loaded file.
//! The output compiles inside a module that imports `G1Point`, `G2Point`,
//! `U256` and `VerifyingKey`.

use std::fmt::Write;

use ust_types::{G1Point, G2Point, U256};
use ust_verifier::VerifyingKey;

use crate::error::{SdkError, SdkResult};
use crate::snarkjs::KeyPoints;

/// Emit `pub static {name}: VerifyingKey<N> = ...;` with every coordinate in
/// little-endian limb form.
pub fn render_vk_table<const N: usize>(name: &str, vk: &VerifyingKey<N>) -> String {
    let g2 = [vk.beta2, vk.gamma2, vk.delta2];
    render(name, &vk.alpha1, &g2, &vk.ic0, &vk.ic)
}

/// Same output as [`render_vk_table`] for a key whose input count is only
/// known at runtime, e.g. one just read from `verification_key.json`.
///
/// `vk.ic` must hold at least the constant term.
pub fn render_key_points(name: &str, vk: &KeyPoints) -> SdkResult<String> {
    let (ic0, rest) = vk
        .ic
        .split_first()
        .ok_or_else(|| SdkError::shape("IC", 1, 0))?;
    let g2 = [vk.beta2, vk.gamma2, vk.delta2];
    Ok(render(name, &vk.alpha1, &g2, ic0, rest))
}

fn render(
    name: &str,
    alpha1: &G1Point,
    g2: &[G2Point; 3],
    ic0: &G1Point,
    rest: &[G1Point],
) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_table(&mut out, name, alpha1, g2, ic0, rest);
    out
}

fn write_table(
    out: &mut String,
    name: &str,
    alpha1: &G1Point,
    g2: &[G2Point; 3],
    ic0: &G1Point,
    rest: &[G1Point],
) -> std::fmt::Result {
    let n = rest.len();
    writeln!(out, "pub static {name}: VerifyingKey<{n}> = VerifyingKey {{")?;
    write!(out, "    alpha1: ")?;
    write_g1(out, alpha1, 1)?;
    for (field, point) in ["beta2", "gamma2", "delta2"].iter().zip(g2) {
        write!(out, "    {field}: ")?;
        write_g2(out, point, 1)?;
    }
    write!(out, "    ic0: ")?;
    write_g1(out, ic0, 1)?;
    writeln!(out, "    ic: [")?;
    for p in rest {
        write!(out, "        ")?;
        write_g1(out, p, 2)?;
    }
    writeln!(out, "    ],")?;
    writeln!(out, "}};")
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn word(w: &U256) -> String {
    let [l0, l1, l2, l3] = w.0;
    format!("U256::new([{l0:#018x}, {l1:#018x}, {l2:#018x}, {l3:#018x}])")
}

fn write_g1(out: &mut String, p: &G1Point, depth: usize) -> std::fmt::Result {
    let pad = indent(depth + 1);
    writeln!(out, "G1Point::new(")?;
    writeln!(out, "{pad}{},", word(&p.x))?;
    writeln!(out, "{pad}{},", word(&p.y))?;
    writeln!(out, "{}),", indent(depth))
}

fn write_g2(out: &mut String, p: &G2Point, depth: usize) -> std::fmt::Result {
    let pad = indent(depth + 1);
    let inner = indent(depth + 2);
    writeln!(out, "G2Point::new(")?;
    for coord in [&p.x, &p.y] {
        writeln!(out, "{pad}[")?;
        for w in coord {
            writeln!(out, "{inner}{},", word(w))?;
        }
        writeln!(out, "{pad}],")?;
    }
    writeln!(out, "{}),", indent(depth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ust_verifier::USER_STATE_TRANSITION_VK;

    #[test]
    fn words_are_zero_padded_limbs() {
        assert_eq!(
            word(&U256::from(1u64)),
            "U256::new([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])"
        );
    }

    #[test]
    fn embedded_key_renders_every_point() {
        let src = render_vk_table("USER_STATE_TRANSITION_VK", &USER_STATE_TRANSITION_VK);
        assert!(src.starts_with(
            "pub static USER_STATE_TRANSITION_VK: VerifyingKey<7> = VerifyingKey {\n"
        ));
        assert!(src.ends_with("};\n"));
        // alpha1 + ic0 + 7 ic
        assert_eq!(src.matches("G1Point::new(").count(), 9);
        assert_eq!(src.matches("G2Point::new(").count(), 3);
        assert_eq!(src.matches("U256::new(").count(), 9 * 2 + 3 * 4);
        assert!(src.contains("0x27a3dc95bc93adc4"));
    }

    #[test]
    fn runtime_sized_key_matches_table() {
        use crate::snarkjs::SnarkjsVerifyingKey;
        let vk = &USER_STATE_TRANSITION_VK;
        let points = SnarkjsVerifyingKey::from_table(vk).points().unwrap();
        assert_eq!(
            render_key_points("K", &points).unwrap(),
            render_vk_table("K", vk)
        );
    }

    #[test]
    fn key_without_constant_term_is_refused() {
        use crate::snarkjs::SnarkjsVerifyingKey;
        let mut points = SnarkjsVerifyingKey::from_table(&USER_STATE_TRANSITION_VK)
            .points()
            .unwrap();
        points.ic.clear();
        assert!(matches!(
            render_key_points("K", &points),
            Err(SdkError::Shape { what: "IC", expected: 1, actual: 0 })
        ));
    }

    #[test]
    fn braces_balance() {
        let src = render_vk_table("K", &USER_STATE_TRANSITION_VK);
        for (open, close) in [('(', ')'), ('[', ']'), ('{', '}')] {
            assert_eq!(src.matches(open).count(), src.matches(close).count());
        }
    }
}
