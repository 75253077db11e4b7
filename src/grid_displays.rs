use crate::cells::{CellCode, CellCoordinate, GridCoordinate};
use crate::grid::Grid;
use crate::utils::FnvHashSet;

pub const WALL_GLYPH: char = '■';
pub const ROAD_GLYPH: char = ' ';
pub const START_GLYPH: char = 'S';
pub const END_GLYPH: char = 'E';
pub const SOLUTION_GLYPH: char = '*';

/// Markers drawn over the plain grid on export. Start and end win over the solution path.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    start: Option<GridCoordinate>,
    end: Option<GridCoordinate>,
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}

impl Overlay {
    pub fn new(start: Option<CellCoordinate>,
               end: Option<CellCoordinate>,
               solution: Option<&[GridCoordinate]>)
               -> Overlay {
        Overlay {
            start: start.map(|c| c.to_grid()),
            end: end.map(|c| c.to_grid()),
            on_path_coordinates: solution.map_or_else(FnvHashSet::default, |path| path.iter().cloned().collect()),
        }
    }

    /// The export code for one grid position.
    pub fn code_at(&self, grid: &Grid, coord: GridCoordinate) -> CellCode {
        if self.start == Some(coord) {
            CellCode::Start
        } else if self.end == Some(coord) {
            CellCode::End
        } else if self.on_path_coordinates.contains(&coord) {
            CellCode::Solution
        } else {
            grid.get(coord).map_or(CellCode::Wall, CellCode::from)
        }
    }
}

pub fn glyph(code: CellCode) -> char {
    match code {
        CellCode::Road => ROAD_GLYPH,
        CellCode::Wall => WALL_GLYPH,
        CellCode::Start => START_GLYPH,
        CellCode::End => END_GLYPH,
        CellCode::Solution => SOLUTION_GLYPH,
    }
}

/// One row of codes per grid row.
pub fn number_grid(grid: &Grid, overlay: &Overlay) -> Vec<Vec<u8>> {
    (0..grid.rows().0)
        .map(|row| {
            (0..grid.columns().0)
                .map(|col| overlay.code_at(grid, GridCoordinate::new(row, col)).value())
                .collect()
        })
        .collect()
}

/// One line of glyphs per grid row, lines joined by `'\n'` with no trailing newline.
pub fn display_string(grid: &Grid, overlay: &Overlay) -> String {
    let mut output = String::with_capacity(grid.rows().0 * (grid.columns().0 * WALL_GLYPH.len_utf8() + 1));
    for row in 0..grid.rows().0 {
        if row > 0 {
            output.push('\n');
        }
        for col in 0..grid.columns().0 {
            output.push(glyph(overlay.code_at(grid, GridCoordinate::new(row, col))));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::CellState;
    use crate::units::{Height, Width};

    fn corridor() -> Grid {
        // 1x3 logical row, fully open
        let mut g = Grid::new(Width(3), Height(1), CellState::Wall);
        for col in 1..6 {
            g.set(GridCoordinate::new(1, col), CellState::Road);
        }
        g
    }

    #[test]
    fn plain_numbers_and_glyphs() {
        let g = corridor();
        let overlay = Overlay::default();
        assert_eq!(number_grid(&g, &overlay),
                   vec![vec![1; 7], vec![1, 0, 0, 0, 0, 0, 1], vec![1; 7]]);
        assert_eq!(display_string(&g, &overlay), "■■■■■■■\n■     ■\n■■■■■■■");
    }

    #[test]
    fn overlay_order() {
        let g = corridor();
        let path = (1..6).map(|col| GridCoordinate::new(1, col)).collect::<Vec<_>>();
        let overlay = Overlay::new(Some(CellCoordinate::new(0, 0)), Some(CellCoordinate::new(0, 2)), Some(&path));
        assert_eq!(number_grid(&g, &overlay)[1], vec![1, 2, 4, 4, 4, 3, 1]);
        assert_eq!(display_string(&g, &overlay).lines().nth(1), Some("■S***E■"));
    }

    #[test]
    fn rows_are_joined_without_a_trailing_newline() {
        let g = corridor();
        let shown = display_string(&g, &Overlay::default());
        assert!(!shown.ends_with('\n'));
        assert_eq!(shown.matches('\n').count(), g.rows().0 - 1);
        assert_eq!(shown.lines().last(), Some("■■■■■■■"));
    }
}
