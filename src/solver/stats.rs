use prettytable::{Cell, Row, Table};

use crate::solver::{
    constraint::Constraint,
    engine::{ConstraintId, PerConstraintStats, SearchStats},
    value::Value,
};

/// Renders the per-constraint propagation counters as a text table, most
/// active constraints first. `constraints` must be the problem's
/// post-preprocessing constraint list (the one the stats were collected
/// against).
pub fn render_stats_table<V: Value>(stats: &SearchStats, constraints: &[Constraint<V>]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Checks"),
        Cell::new("Prunings"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();
    sorted_stats.sort_by_key(|(id, per_constraint)| (std::cmp::Reverse(per_constraint.prunings), **id));

    for (constraint_id, per_constraint) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&per_constraint.checks.to_string()),
            Cell::new(&per_constraint.prunings.to_string()),
        ]));
    }

    table.to_string()
}
