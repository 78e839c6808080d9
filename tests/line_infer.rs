// vim: set ai et ts=4 sw=4 sts=4:
use std::sync::Once;

use nonogram_line::{CellStatus, Direction::{Horizontal, Vertical}, Error, Line};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("[{}] {}", record.level(), message))
            })
            .level(log::LevelFilter::Debug)
            .chain(std::io::stdout())
            .apply()
            .expect("failed to install logger");
    });
}

#[test]
fn infer_refines_a_line_in_place() {
    init_logging();
    let mut line = Line::from_pattern(Horizontal, 3, vec![3, 2], "______").unwrap();
    assert_eq!(line.infer(), Ok(true));
    assert_eq!(line.to_string(), "clue=[3 2] cells=[***.**]");
    assert_eq!(line.infer(), Ok(false));
}

#[test]
fn unsatisfiable_and_contradiction_are_distinct() {
    init_logging();

    let mut unsat = Line::from_pattern(Vertical, 7, vec![2], "*.___").unwrap();
    let err = unsat.infer().unwrap_err();
    assert_eq!(err, Error::Unsatisfiable(Vertical, 7));
    assert!(err.to_string().contains("Vertical line 7"));

    let mut contradicted = Line::from_pattern(Horizontal, 0, vec![], "__*__").unwrap();
    match contradicted.infer().unwrap_err() {
        Error::Contradiction(change) => {
            assert_eq!(change.index, 2);
            assert_eq!(change.old, CellStatus::Filled);
            assert_eq!(change.new, CellStatus::Empty);
        }
        other => panic!("expected a contradiction, got {:?}", other),
    }
}

#[test]
fn degenerate_lines_are_handled() {
    init_logging();
    let mut zero_length = Line::new(Horizontal, 0, vec![], vec![]).unwrap();
    assert_eq!(zero_length.infer(), Ok(false));

    assert!(Line::new(Horizontal, 0, vec![1], vec![]).is_err());
}

// Plays the role of the out-of-scope orchestrator: runs the engine over every
// row and column of a small grid until nothing changes anymore.
#[test]
fn line_inference_alone_solves_a_plus_shape() {
    init_logging();

    let row_clues: Vec<Vec<usize>> = vec![vec![1], vec![1], vec![5], vec![1], vec![1]];
    let col_clues = row_clues.clone();
    let mut grid = vec![vec![CellStatus::Unknown; 5]; 5];

    for _ in 0..10 {
        let mut anything_changed = false;

        for (y, clue) in row_clues.iter().enumerate() {
            let mut row = Line::new(Horizontal, y, clue.clone(), grid[y].clone()).unwrap();
            anything_changed |= row.infer().unwrap();
            grid[y] = row.cells().to_vec();
        }
        for (x, clue) in col_clues.iter().enumerate() {
            let cells = (0..5).map(|y| grid[y][x]).collect();
            let mut col = Line::new(Vertical, x, clue.clone(), cells).unwrap();
            anything_changed |= col.infer().unwrap();
            for (y, &cell) in col.cells().iter().enumerate() {
                grid[y][x] = cell;
            }
        }

        if !anything_changed {
            break;
        }
    }

    let rendered: Vec<String> = grid.iter()
                                    .map(|row| row.iter().map(|c| c.as_char()).collect())
                                    .collect();
    assert_eq!(rendered, vec![
        "..*..",
        "..*..",
        "*****",
        "..*..",
        "..*..",
    ]);
}
