use crate::format::format_cost;
use crate::graph::{ExpansionGroup, SearchResult};
use crate::loader::Location;

/// Utilities for records output format
/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the header line for a route query
///
/// Returns an H-line naming the strategy, endpoints and outcome.
pub fn format_route_header(result: &SearchResult) -> String {
    format!(
        "H rota={} records=1 mode=route strategy={} from=\"{}\" to=\"{}\" outcome={}",
        env!("CARGO_PKG_VERSION"),
        result.strategy,
        escape_quotes(&result.origin),
        escape_quotes(&result.goal),
        result.outcome
    )
}

/// Format the body lines of a route query result
///
/// S-line with summary counters, V-lines for visited vertices in visit order,
/// P-lines for path vertices with their hop index.
pub fn format_route_lines(result: &SearchResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.visited.len() + result.path.len() + 1);

    let mut summary = format!(
        "S steps={} visited={} expanded={}",
        result.steps(),
        result.visited.len(),
        result.expanded
    );
    if let Some(cost) = result.cost {
        summary.push_str(&format!(" cost={}", format_cost(cost)));
    }
    if let Some(meeting) = &result.meeting_point {
        summary.push_str(&format!(" meet=\"{}\"", escape_quotes(meeting)));
    }
    lines.push(summary);

    for id in &result.visited {
        lines.push(format!("V \"{}\"", escape_quotes(id)));
    }
    for (hop, id) in result.path.iter().enumerate() {
        lines.push(format!("P {} \"{}\"", hop, escape_quotes(id)));
    }

    lines
}

/// Format one expansion group as a G-line: expanded vertex, then the vertices reached from it
pub fn format_group_line(group: &ExpansionGroup) -> String {
    let mut line = format!("G \"{}\"", escape_quotes(&group.vertex));
    for id in &group.reached {
        line.push_str(&format!(" \"{}\"", escape_quotes(id)));
    }
    line
}

/// Format the header line for a strategy comparison
pub fn format_compare_header(origin: &str, goal: &str, count: usize) -> String {
    format!(
        "H rota={} records={} mode=compare from=\"{}\" to=\"{}\"",
        env!("CARGO_PKG_VERSION"),
        count,
        escape_quotes(origin),
        escape_quotes(goal)
    )
}

/// Format one R-line of a strategy comparison
pub fn format_compare_line(result: &SearchResult) -> String {
    let mut line = format!(
        "R strategy={} outcome={} steps={} visited={} expanded={} rounds={}",
        result.strategy,
        result.outcome,
        result.steps(),
        result.visited.len(),
        result.expanded,
        result.rounds
    );
    if let Some(cost) = result.cost {
        line.push_str(&format!(" cost={}", format_cost(cost)));
    }
    line
}

/// Format the header line for a vertex or adjacency listing
pub fn format_listing_header(mode: &str, count: usize) -> String {
    format!(
        "H rota={} records={} mode={}",
        env!("CARGO_PKG_VERSION"),
        count,
        mode
    )
}

/// Format an X-line describing one vertex
pub fn format_vertex_line(
    id: &str,
    out_degree: usize,
    in_degree: usize,
    location: Option<&Location>,
) -> String {
    let mut line = format!(
        "X \"{}\" out={} in={}",
        escape_quotes(id),
        out_degree,
        in_degree
    );
    if let Some(loc) = location {
        line.push_str(&format!(" x={} y={}", loc.x, loc.y));
    }
    line
}

/// Format an N-line describing one adjacency entry
pub fn format_neighbor_line(origin: &str, neighbor: &str, weight: f64) -> String {
    format!(
        "N \"{}\" \"{}\" weight={}",
        escape_quotes(origin),
        escape_quotes(neighbor),
        format_cost(weight)
    )
}

/// Format an E-line describing one connected vertex pair
pub fn format_edge_line(a: &str, b: &str) -> String {
    format!("E \"{}\" \"{}\"", escape_quotes(a), escape_quotes(b))
}
