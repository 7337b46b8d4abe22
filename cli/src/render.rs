use itertools::Itertools;
use mazebuilder::{Edge, Maze};
use std::iter;

const MARGIN: &str = "     ";

/// Draws `maze` as ASCII art. The entrance is on the left of the top-left
/// cell and the exit on the right of the bottom-right cell.
pub fn render(maze: &Maze) -> String {
    let mut output = format!(
        "{}+{}\n",
        MARGIN,
        iter::repeat("-+").take(maze.width()).join("")
    );

    for row in 0..maze.height() {
        output.push_str(&vertical_walls(maze, row));
        output.push('\n');
        output.push_str(&horizontal_walls(maze, row));
        output.push('\n');
    }

    output
}

fn vertical_walls(maze: &Maze, row: usize) -> String {
    let prefix = if row == 0 {
        "start ".to_string()
    } else {
        format!("{}|", MARGIN)
    };

    let cells = (0..maze.width())
        .map(|col| {
            let cell = row * maze.width() + col;

            if cell + 1 == maze.num_cells() {
                "  finish"
            } else if maze.is_on_right(cell) || maze.has_wall(Edge::new(cell, cell + 1)) {
                " |"
            } else {
                "  "
            }
        })
        .join("");

    prefix + &cells
}

fn horizontal_walls(maze: &Maze, row: usize) -> String {
    let cells = (0..maze.width())
        .map(|col| {
            let cell = row * maze.width() + col;

            if maze.is_on_bottom(cell) || maze.has_wall(Edge::new(cell, cell + maze.width())) {
                "-+"
            } else {
                " +"
            }
        })
        .join("");

    format!("{}+{}", MARGIN, cells)
}

#[cfg(test)]
mod tests {
    use super::render;
    use mazebuilder::{Edge, Maze};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn two_by_two() {
        // Passages 0-1, 0-2 and 2-3; the wall between 1 and 3 stands.
        let maze = Maze::from_walls(2, 2, vec![Edge::new(1, 3)]);

        assert_eq!(
            render(&maze),
            concat!(
                "     +-+-+\n",
                "start    |\n",
                "     + +-+\n",
                "     |    finish\n",
                "     +-+-+\n",
            )
        );
    }

    #[test]
    fn three_by_two() {
        let maze = Maze::from_walls(3, 2, vec![Edge::new(0, 1), Edge::new(1, 4)]);

        assert_eq!(
            render(&maze),
            concat!(
                "     +-+-+-+\n",
                "start  |   |\n",
                "     + +-+ +\n",
                "     |      finish\n",
                "     +-+-+-+\n",
            )
        );
    }

    #[test]
    fn generated_shape() {
        let maze = Maze::generate(6, 4, &mut StdRng::seed_from_u64(11)).unwrap();
        let output = render(&maze);
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 1 + 2 * 4);
        assert!(lines[1].starts_with("start "));
        assert!(lines[7].ends_with("  finish"));
        assert_eq!(lines[8], "     +-+-+-+-+-+-+");

        let width = maze.width();
        let mut walls = 0;

        for row in 0..maze.height() {
            let vertical = lines[1 + 2 * row].as_bytes();
            let horizontal = lines[2 + 2 * row].as_bytes();

            walls += (0..width - 1)
                .filter(|col| vertical[6 + 2 * col + 1] == b'|')
                .count();

            if row + 1 < maze.height() {
                walls += (0..width)
                    .filter(|col| horizontal[6 + 2 * col] == b'-')
                    .count();
            }
        }

        assert_eq!(walls, maze.walls().len());
    }
}
