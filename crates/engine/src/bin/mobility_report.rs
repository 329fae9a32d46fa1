use engine::mobility::*;
use engine::Board;

fn main() {
    println!("\nSTARTING POSITION MOBILITY");
    println!("{}", "=".repeat(60));

    let mut board = Board::new();
    println!("{}\n", board.debug_board());

    let report = analyze(&mut board);
    println!("Pieces that can move: {}", report.sources);
    println!("Legal moves:          {}", report.moves);
    println!("Captures:             {}", report.captures);
    println!("Checking moves:       {}", report.checks);
    println!("Time: {}ms ({} moves/s)", report.time_ms, report.moves_per_second());

    println!("\nPer piece:");
    for (square, count) in divide(&board) {
        let symbol = board.get_piece(square).map_or('?', |piece| piece.symbol());
        println!("  {} {}: {}", symbol, square.to_algebraic(), count);
    }

    println!("\nSCENARIO POSITIONS");
    println!("{}", "=".repeat(60));

    let mut failures = 0;
    for (name, got, expected) in run_mobility_suite() {
        if got == expected {
            println!("PASS {:<28} {} moves", name, got);
        } else {
            failures += 1;
            println!("FAIL {:<28} got {} expected {}", name, got, expected);
        }
    }

    if failures > 0 {
        println!("\n{} scenario(s) disagree with the expected move counts", failures);
        std::process::exit(1);
    }
}
