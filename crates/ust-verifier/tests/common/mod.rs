// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Known-good vector for the embedded user-state-transition key.

#![allow(dead_code)]

use ust_verifier::{G1Point, RawProof, U256};

pub fn proof_words() -> RawProof {
    [
        U256::new([0x86a755ccfc152f53, 0x2e93c87bc15b4a39, 0x1932ce7de17ad617, 0x24485d460ca27fd2]),
        U256::new([0x6650a38db1f1428b, 0xd435e8298a62c8cf, 0x0d0611777d762a5d, 0x205cf7f29e6b36f8]),
        U256::new([0x6e91079f03f16260, 0xc9e85f58dd705e79, 0xac0c5f6eabc57f5f, 0x1249a3c2a41b8f76]),
        U256::new([0x9e6f754d80085163, 0x166124b7c540e776, 0x829e92f8691c9ed4, 0x1807a382024deaea]),
        U256::new([0xa62ffc0cc1d54ca8, 0x031f4d0e4fabbc72, 0x86e0885f19bc0128, 0x10985833bfc119e3]),
        U256::new([0x27436af6f487f45c, 0x72118b8311b60fd8, 0x0a39b7ae44529876, 0x239cff4fa52f02c1]),
        U256::new([0x3e6c6f3f1f3ba9a4, 0xfa7c8c46f815afe1, 0x659394c9141087f1, 0x16a3564d40002804]),
        U256::new([0xb3b6224efd757f38, 0x536408c114fdba96, 0x0c8a6ee5edf058d6, 0x1f3f9b165f1db724]),
    ]
}

pub fn public_inputs() -> [U256; 7] {
    [
        U256::new([0xeeb8e813ede2dd58, 0x0501462c3e344255, 0x8cb0f4868b89b2eb, 0x029a2698d3095bd5]),
        U256::new([0xf45deb3317b5a077, 0xd41b62e3617fd4a8, 0x4cc1edd49a1070e1, 0x300143985a931aa6]),
        U256::new([0xbaaaec91b8baff47, 0xf1b82353777ba474, 0x1185ac08a3a76548, 0x2c021338c6a23ad9]),
        U256::new([0xc594c5426889303e, 0x3af80ec91e9b18c1, 0x60988db7ee2d6a00, 0x0478057739145cb5]),
        U256::new([0x69ae692b9917cb4c, 0x733d18af75c72a02, 0x249eb1d1d132c695, 0x2cfdc870d0c3c717]),
        U256::new([0x032a62d1d6c9825a, 0xa8a566eece3b100d, 0x31b1edcc02715fd7, 0x01658e5aacdd72b8]),
        U256::new([0xa61b677a9ef971fe, 0x50cdbea932972d6c, 0x52aa704ecde98cfe, 0x01b5e7f0a7768dc7]),
    ]
}

/// IC[0] + Σ input[i]·IC[i+1] for `public_inputs()`.
pub fn expected_vk_x() -> G1Point {
    G1Point::new(
        U256::new([0x6548874f2d21d772, 0xdf33edd63f803d64, 0x586541fb230a2286, 0x27d15fbeb1875bde]),
        U256::new([0xa330639d572b7b68, 0x8356ed541c96c9b6, 0x03624a850a6180c0, 0x2582ab75f983f4bb]),
    )
}
