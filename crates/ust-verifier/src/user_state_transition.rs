// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifying key for the user-state-transition circuit (7 public inputs).

use ust_types::{G1Point, G2Point, U256};

use crate::key::VerifyingKey;

pub const USER_STATE_TRANSITION_INPUTS: usize = 7;

pub static USER_STATE_TRANSITION_VK: VerifyingKey<USER_STATE_TRANSITION_INPUTS> = VerifyingKey {
    alpha1: G1Point::new(
        U256::new([0x5430495b73194549, 0x3815ce8708f1775b, 0xa5b94fe976f00b1f, 0x27a3dc95bc93adc4]),
        U256::new([0xef8607c064668f7a, 0x65c0c32909e95929, 0xc68cb5ca1ab050ac, 0x2a20559ab10e9bf4]),
    ),
    beta2: G2Point::new(
        [
            U256::new([0xd4bb274801452233, 0x6422a8a64a118eb1, 0x725356473c871931, 0x2c5d0dcb973899ff]),
            U256::new([0xb29a4aeee5821d64, 0x50609f6e069ec023, 0x1052245a1347250e, 0x1fdf16059f5daf2f]),
        ],
        [
            U256::new([0x281c5c0ce8a6bee7, 0xb2429102dc1f6e74, 0x1abbe11c8cfb41f6, 0x0cfeb5b2e8ad2edc]),
            U256::new([0x6bcd1ac546a3517a, 0xafeeaed35b00c3d7, 0x02b0a2b116f1dc98, 0x010b93d0e3caac43]),
        ],
    ),
    gamma2: G2Point::new(
        [
            U256::new([0x590ea426e7d19c2d, 0x1db67b399038cf19, 0x5c9e550cf3f7577f, 0x1f1c4432f83067d8]),
            U256::new([0xf121e09577f18a04, 0xaba60ca99d2ba852, 0x3a7e4a7851e51e83, 0x1f408844c709e2d4]),
        ],
        [
            U256::new([0x5b61786889af4897, 0x757df7e3fbcf6709, 0x22dcbdd5a85fb903, 0x0028dfd133f9fe4e]),
            U256::new([0x26ca9a192e659a07, 0x90e1fa66e3e27fb5, 0x9c2973720087f3e9, 0x16d30fdc30768dc5]),
        ],
    ),
    delta2: G2Point::new(
        [
            U256::new([0x5050dbfb4e66aec9, 0x9c4cc9a00aa65fdd, 0xa6807875e346e55c, 0x0b7994dca2eef64c]),
            U256::new([0x11370253047a406f, 0xef50dd70d45ab8c0, 0x12d1212d1bf3ebf8, 0x22528bd69ae1b200]),
        ],
        [
            U256::new([0xcae9aa38bbcc465b, 0xd1a25be7c6e78722, 0x4d863b81ebb3624b, 0x0d1734e00cc8f74f]),
            U256::new([0xcf6a37eddc032722, 0x4a59a739f0c8f347, 0x38709b9311ceddb3, 0x14a64a1632e01122]),
        ],
    ),
    ic0: G1Point::new(
        U256::new([0xe761e96ebe16e450, 0x202e68c2d22d256b, 0xa0b86cf59ff8dc89, 0x03899b30592ce265]),
        U256::new([0x5a0c33ebcbdfb1a1, 0xf5d60f7cce089c7c, 0xc9e7dfa0b38f0b57, 0x26fbd9d89a8bca9a]),
    ),
    ic: [
        G1Point::new(
            U256::new([0x79f403a76fa2de3c, 0x73163dde30dc712c, 0xb65179d1016df386, 0x2ff0fe46d0d3973c]),
            U256::new([0x3fb51a63ee72ae90, 0x82fb9359da2b5e44, 0x8696d13380eb5912, 0x17fb02bf7edef9ab]),
        ),
        G1Point::new(
            U256::new([0x125bb577558f7a37, 0x086c379b6a915070, 0x94afde8792fa965a, 0x1268d9280d30ea3c]),
            U256::new([0x35ca61288dd03013, 0x54094bdd83bac5aa, 0xfc451288e62a384c, 0x0f5cb6c9c0eadc75]),
        ),
        G1Point::new(
            U256::new([0x282c08197da8af56, 0x048dff9e5d781d07, 0x474a781db306aefc, 0x058cea1fa520b2ae]),
            U256::new([0x450c8d34f6d2cbb1, 0x702444bde37969f0, 0xe3f7bd6c93b84731, 0x295057ab95fddd3d]),
        ),
        G1Point::new(
            U256::new([0xc57cb29cae00de64, 0xf5beaa433472beb1, 0x41894740b829adca, 0x16ebba6e89575afe]),
            U256::new([0xe53945277f1837e4, 0x0fa64d0112f2dce9, 0x66b4eeed52215444, 0x04cb55bb73df36f9]),
        ),
        G1Point::new(
            U256::new([0x95c82e9a6353cd33, 0x75daa18276ed28c3, 0x037789cb833692b9, 0x1e053e4f45af69fb]),
            U256::new([0xc6e67536113d2004, 0x6db463110f0640ce, 0xddf9d433d0483633, 0x0e247c001a32781f]),
        ),
        G1Point::new(
            U256::new([0x419735128d8b95bc, 0xea4dd01f5867efb1, 0x1a705dce21f7e6b0, 0x2c73ba97b3f29280]),
            U256::new([0x98d0258e9adac0c4, 0xdf98d2fa40178888, 0x03b3ca505f518110, 0x241b18a2b133359a]),
        ),
        G1Point::new(
            U256::new([0xe7f7afbf45ad3668, 0x4e299e9ea7df7772, 0x0cf939439a372755, 0x00acd64d5bbf58ce]),
            U256::new([0xde63bf5ace5d8a19, 0xe5d94a9108a7e8e9, 0xfb22b33ccd53b24d, 0x301bbccc0e199bd0]),
        ),
    ],
};
