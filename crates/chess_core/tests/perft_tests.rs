use std::time::Instant;

use rayon::prelude::*;

use chess_core::{perft, Position};

/// (FEN, [(depth, expected nodes)]) from the standard perft suite.
const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    ),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264), (3, 9_467)],
    ),
];

#[test]
fn perft_from_standard_suite() {
    CASES.par_iter().enumerate().for_each(|(idx, (fen, depths))| {
        let case_start = Instant::now();
        let mut total_nodes: u64 = 0;

        for (depth, expected) in depths.iter() {
            let mut pos = Position::from_fen(fen).expect("suite FEN should parse");
            let before = pos.clone();
            let got = perft(&mut pos, *depth);
            assert!(
                got == *expected,
                "Perft mismatch for FEN '{}' at depth {}: expected {}, got {}",
                fen,
                depth,
                expected,
                got
            );
            assert_eq!(pos, before, "perft must leave the position untouched");
            total_nodes += got;
        }

        println!(
            "Case {:03} done: total nodes {}, elapsed {:.3?}",
            idx + 1,
            total_nodes,
            case_start.elapsed()
        );
    });
}
