//! End-to-end tests for the blob analysis pipeline
//!
//! Covers:
//! - Connectivity, coverage and conservation on pseudo-random grids
//! - Center-of-mass bounds and determinism
//! - Full report text for small known grids
//! - Load failures stopping the pipeline

use std::collections::HashMap;
use std::io::Cursor;
use std::path::PathBuf;

use blob_vision::core_modules::grid_loader::Grid;
use blob_vision::pipeline::CellLabel;
use blob_vision::{BlobAnalyzer, BlobError};
use pretty_assertions::assert_eq;

/// Writes `contents` to a uniquely named file in the temp directory.
fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("blob_vision_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("Error writing temp file.");
    path
}

/// Deterministic pseudo-random grid text with roughly `density` percent foreground.
fn random_grid(rows: usize, columns: usize, density: u64, mut seed: u64) -> String {
    let mut text = format!("{rows} {columns}\n");
    for _ in 0..rows {
        for _ in 0..columns {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            text.push(if (seed >> 33) % 100 < density { 'x' } else { ' ' });
        }
        text.push('\n');
    }
    text
}

/// Union-find over foreground cells joined by 4-neighbour edges.
fn reference_components(grid: &Grid) -> Vec<usize> {
    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    let (rows, columns) = (grid.rows(), grid.columns());
    let cells = grid.cells();
    let mut parent: Vec<usize> = (0..cells.len()).collect();
    for row in 0..rows {
        for column in 0..columns {
            let i = row * columns + column;
            if !cells[i].label.is_foreground() {
                continue;
            }
            if column + 1 < columns && cells[i + 1].label.is_foreground() {
                let (a, b) = (find(&mut parent, i), find(&mut parent, i + 1));
                parent[a] = b;
            }
            if row + 1 < rows && cells[i + columns].label.is_foreground() {
                let (a, b) = (find(&mut parent, i), find(&mut parent, i + columns));
                parent[a] = b;
            }
        }
    }
    (0..cells.len()).map(|i| find(&mut parent, i)).collect()
}

#[test]
fn labels_match_four_connectivity() {
    for seed in 1..=8 {
        let text = random_grid(24, 37, 45, seed);
        let grid = Grid::from_reader(Cursor::new(text.as_str())).expect("valid grid");
        let roots = reference_components(&grid);
        let analysis = BlobAnalyzer::analyze("random", grid);
        let cells = analysis.grid().cells();

        let mut root_to_id: HashMap<usize, u32> = HashMap::new();
        let mut id_to_root: HashMap<u32, usize> = HashMap::new();
        for (i, cell) in cells.iter().enumerate() {
            match cell.label {
                CellLabel::Background => continue,
                CellLabel::Undiscovered => panic!("cell {:?} left unlabeled", cell.position),
                CellLabel::Blob(id) => {
                    assert_eq!(*root_to_id.entry(roots[i]).or_insert(id), id);
                    assert_eq!(*id_to_root.entry(id).or_insert(roots[i]), roots[i]);
                }
            }
        }
        assert_eq!(id_to_root.len(), analysis.blobs().len());
    }
}

#[test]
fn background_never_gets_an_id() {
    let text = random_grid(15, 15, 50, 42);
    let before = Grid::from_reader(Cursor::new(text.as_str())).expect("valid grid");
    let analysis = BlobAnalyzer::analyze("random", before.clone());

    for (old, new) in before.cells().iter().zip(analysis.grid().cells()) {
        if old.label == CellLabel::Background {
            assert_eq!(new.label, CellLabel::Background);
        } else {
            assert!(matches!(new.label, CellLabel::Blob(id) if id >= 1));
        }
    }
}

#[test]
fn pixel_counts_add_up_to_foreground() {
    let text = random_grid(30, 30, 55, 7);
    let analysis = BlobAnalyzer::analyze("random", Grid::from_reader(Cursor::new(text.as_str())).expect("valid grid"));

    let total: usize = analysis.blobs().iter().map(|blob| blob.pixel_count).sum();
    assert_eq!(total, analysis.grid().foreground_count());

    let ids: Vec<u32> = analysis.blobs().iter().map(|blob| blob.id).collect();
    let expected: Vec<u32> = (1..=analysis.blobs().len() as u32).collect();
    assert_eq!(ids, expected);
}

#[test]
fn centers_of_mass_stay_inside_the_grid() {
    let text = random_grid(12, 40, 60, 99);
    let analysis = BlobAnalyzer::analyze("random", Grid::from_reader(Cursor::new(text.as_str())).expect("valid grid"));

    for blob in analysis.blobs() {
        let (row, column) = blob.center_of_mass();
        assert!((0.0..=11.0).contains(&row), "row CoM {row} out of bounds");
        assert!((0.0..=39.0).contains(&column), "column CoM {column} out of bounds");
    }
}

#[test]
fn repeated_runs_are_identical() {
    let path = write_temp("determinism.txt", &random_grid(20, 20, 50, 3));
    let analyzer = BlobAnalyzer::new(path.to_string_lossy());

    let first = analyzer.process_file().expect("valid grid");
    let second = analyzer.process_file().expect("valid grid");

    assert_eq!(first.grid(), second.grid());
    assert_eq!(first.blobs(), second.blobs());
    assert_eq!(first.render(), second.render());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn corners_and_center_are_five_separate_blobs() {
    let path = write_temp("corners.txt", "3 3\nx x\n x \nx x\n");
    let name = path.to_string_lossy().into_owned();
    let analysis = BlobAnalyzer::new(name.clone()).process_file().expect("valid grid");

    let expected = format!(
        concat!(
            " {}\n",
            "  012\n",
            " +---+\n",
            "0|x x|0\n",
            "1| x |1\n",
            "2|x x|2\n",
            " +---+\n",
            "  012\n",
            "\n",
            "Blob Properties:\n",
            "+------+------------+---------+------------+\n",
            "| BLOB | NoOfPixels | CoM Row | CoM Column |\n",
            "+------+------------+---------+------------+\n",
            "|    1 |          1 |    0.00 |       0.00 |\n",
            "|    2 |          1 |    0.00 |       2.00 |\n",
            "|    3 |          1 |    1.00 |       1.00 |\n",
            "|    4 |          1 |    2.00 |       0.00 |\n",
            "|    5 |          1 |    2.00 |       2.00 |\n",
            "+------+------------+---------+------------+\n",
        ),
        name
    );
    assert_eq!(analysis.render(), expected);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn plus_shape_is_a_single_centered_blob() {
    let analysis = BlobAnalyzer::analyze("plus", Grid::from_reader(Cursor::new("3 3\n x \nxxx\n x \n")).expect("valid grid"));

    assert_eq!(analysis.blobs().len(), 1);
    assert!(analysis.statistics().contains("|    1 |          5 |    1.00 |       1.00 |\n"));
}

#[test]
fn empty_grid_prints_an_empty_table() {
    let analysis = BlobAnalyzer::analyze("blank", Grid::from_reader(Cursor::new("2 4\n    \n    \n")).expect("valid grid"));

    assert!(analysis.blobs().is_empty());
    assert!(analysis.labeled_image().contains("0|    |0\n1|    |1\n"));
    assert!(analysis.statistics().ends_with(concat!(
        "| BLOB | NoOfPixels | CoM Row | CoM Column |\n",
        "+------+------------+---------+------------+\n",
        "+------+------------+---------+------------+\n",
    )));
}

#[test]
fn isolated_pixel_sits_at_its_own_coordinates() {
    let analysis = BlobAnalyzer::analyze("single", Grid::from_reader(Cursor::new("4 5\n     \n     \n   x \n     \n")).expect("valid grid"));

    assert_eq!(analysis.blobs().len(), 1);
    assert_eq!(analysis.blobs()[0].pixel_count, 1);
    assert_eq!(analysis.blobs()[0].center_of_mass(), (2.0, 3.0));
}

#[test]
fn missing_file_produces_no_analysis() {
    let path = std::env::temp_dir().join("blob_vision_no_such_dir").join("missing.txt");
    let result = BlobAnalyzer::new(path.to_string_lossy()).process_file();

    match result {
        Err(err @ BlobError::OpenFailure { .. }) => assert_eq!(err.to_string(), "File cannot be opened."),
        other => panic!("expected an open failure, got {other:?}"),
    }
}

#[test]
fn truncated_file_is_rejected() {
    let path = write_temp("truncated.txt", "4 3\nxxx\n x \n");
    let result = BlobAnalyzer::new(path.to_string_lossy()).process_file();

    assert!(matches!(result, Err(BlobError::TruncatedInput { expected: 4, found: 2 })));
    let _ = std::fs::remove_file(&path);
}
