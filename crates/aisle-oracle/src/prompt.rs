//! Prompt assembly for the proposal backend

use crate::oracle::ItemDescriptor;
use std::fmt::Write as _;

/// System instruction establishing the task
pub(crate) const SYSTEM: &str = "You are an expert shopping route optimizer for a store \
represented by a 2D grid of aisles and shelves. Travel is only allowed between adjacent \
non-Empty cells, horizontally or vertically. You compute the most efficient sequence of \
key locations for a shopper, starting at Entrance and ending at Checkout.";

/// Render the user prompt from the layout text and cart descriptors
pub(crate) fn render(layout: &str, items: &[ItemDescriptor]) -> String {
    let mut out = String::new();
    out.push_str("Store layout matrix (rows separated by newlines, cells by commas):\n");
    out.push_str(layout.trim());
    out.push_str("\n\nCart items with their locations:\n");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
    out.push_str(
        "\nDetermine the visiting order that starts at \"Entrance\", visits every unique \
item location, and ends at \"Checkout\", minimizing total travel distance on the grid. \
List only the key locations, not every grid step.\n\
Reply with a single JSON array of location id strings and nothing else, for example:\n\
[\"Entrance\", \"A1\", \"C3\", \"Checkout\"]\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_every_item() {
        let items = vec![
            ItemDescriptor::new("Apples", "A1"),
            ItemDescriptor::new("Milk", "A2"),
        ];
        let prompt = render("Entrance,A1\nA2,Checkout", &items);
        assert!(prompt.contains("- Apples (at A1)"));
        assert!(prompt.contains("- Milk (at A2)"));
        assert!(prompt.contains("Entrance,A1"));
        assert!(prompt.contains("JSON array"));
    }
}
