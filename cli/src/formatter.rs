use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use ferry::{catalog, Crossing, Outcome, Puzzle, SearchStats, Step};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_outcome(&self, name: &str, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Solved(solution) => {
                let mut output = self.format_steps(&solution.steps);
                output.push('\n');
                output.push_str(&format!(
                    "Solved '{}' in {} crossing{}\n",
                    name,
                    solution.crossings(),
                    if solution.crossings() == 1 { "" } else { "s" }
                ));
                output.push_str(&self.format_stats(&solution.stats));
                output
            }
            Outcome::NoSolution { stats } => {
                let mut output = format!("No solution for '{}'\n", name);
                output.push_str(&self.format_stats(stats));
                output
            }
        }
    }

    fn format_steps(&self, steps: &[Step]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("State").set_alignment(CellAlignment::Left),
            Cell::new("Crossing").set_alignment(CellAlignment::Left),
        ]));

        for step in steps {
            let crossing = step
                .crossing
                .as_ref()
                .map(describe_crossing)
                .unwrap_or_else(|| "start".to_string());
            table.add_row(Row::from(vec![
                Cell::new(step.index).set_alignment(CellAlignment::Right),
                Cell::new(&step.fingerprint),
                Cell::new(crossing),
            ]));
        }

        table.to_string()
    }

    fn format_stats(&self, stats: &SearchStats) -> String {
        format!(
            "Expanded {} states, generated {}, skipped {} duplicates, pruned {} ({} without navigator, {} deaths) in {}ms\n",
            stats.expanded,
            stats.generated,
            stats.duplicates,
            stats.pruned_no_navigator + stats.pruned_death,
            stats.pruned_no_navigator,
            stats.pruned_death,
            stats.elapsed_ms
        )
    }

    pub fn format_puzzle(&self, puzzle: &Puzzle) -> String {
        let manifest = puzzle.manifest();
        let boat = puzzle.start.boat();

        let mut title = puzzle.name.clone();
        if let Some(description) = &puzzle.description {
            title.push_str(&format!("\n{}", description));
        }

        let mut header = Table::new();
        header.load_preset(UTF8_FULL);
        header.add_row(Row::from(vec![Cell::new(title)]));
        header.add_row(Row::from(vec![Cell::new(format!(
            "Boat capacity {} at {}{}\nStart {}, goal {}",
            boat.max_weight(),
            boat.side(),
            if boat.empty_on_arrival() {
                ""
            } else {
                ", passengers stay aboard"
            },
            puzzle.start_side(),
            puzzle.goal.boat().side()
        ))]));

        let mut passengers = Table::new();
        passengers.load_preset(UTF8_FULL);
        passengers.set_header(Row::from(vec![
            Cell::new("Passenger"),
            Cell::new("Count").set_alignment(CellAlignment::Right),
            Cell::new("Weight").set_alignment(CellAlignment::Right),
            Cell::new("Navigator"),
            Cell::new("Dies"),
        ]));

        for (species, count) in manifest.species_counts() {
            let Some(first) = manifest.passengers().iter().find(|p| p.species == species) else {
                continue;
            };
            let threats: Vec<String> = first
                .relations
                .iter()
                .map(|relation| manifest.relations().describe_threat(*relation))
                .collect();
            passengers.add_row(Row::from(vec![
                Cell::new(species),
                Cell::new(count).set_alignment(CellAlignment::Right),
                Cell::new(first.weight).set_alignment(CellAlignment::Right),
                Cell::new(if first.navigator { "yes" } else { "" }),
                Cell::new(threats.join("\n")),
            ]));
        }

        format!("{}\n{}\n", header, passengers)
    }

    pub fn format_workspace_summary(&self, file_count: usize, puzzles: &[&Puzzle]) -> String {
        let mut output = format!(
            "Found {} puzzle{} (catalog and {} .river file{})\n\n",
            puzzles.len(),
            if puzzles.len() == 1 { "" } else { "s" },
            file_count,
            if file_count == 1 { "" } else { "s" }
        );

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Puzzle"),
            Cell::new("Source"),
            Cell::new("Passengers").set_alignment(CellAlignment::Right),
            Cell::new("Capacity").set_alignment(CellAlignment::Right),
        ]));

        for puzzle in puzzles {
            let source = if catalog::contains(&puzzle.name) {
                "catalog"
            } else {
                "file"
            };
            table.add_row(Row::from(vec![
                Cell::new(&puzzle.name),
                Cell::new(source),
                Cell::new(puzzle.manifest().len()).set_alignment(CellAlignment::Right),
                Cell::new(puzzle.start.boat().max_weight()).set_alignment(CellAlignment::Right),
            ]));
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }
}

fn describe_crossing(crossing: &Crossing) -> String {
    format!(
        "{} → {}: {}",
        crossing.from,
        crossing.to,
        crossing.passengers.join(", ")
    )
}
